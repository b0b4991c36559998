//! Camera angle stepping and frame timing for the orbit loop.

use std::collections::VecDeque;
use std::time::Duration;

/// Endless sequence of orbit angles in degrees.
///
/// Advances by `step` and restarts at `start` once a full turn is reached.
#[derive(Debug, Clone)]
pub struct OrbitAngles {
    start: f64,
    step: f64,
    current: f64,
}

impl OrbitAngles {
    pub fn new(start: f64, step: f64) -> Self {
        Self {
            start,
            step,
            current: start,
        }
    }
}

impl Iterator for OrbitAngles {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let angle = self.current;
        self.current += self.step;
        if self.current >= 360.0 {
            self.current = self.start;
        }
        Some(angle)
    }
}

/// Number of frames averaged by [`FrameTimer`].
pub const TIMING_WINDOW: usize = 10;

/// Rolling mean of the most recent frame times.
#[derive(Debug, Default)]
pub struct FrameTimer {
    samples: VecDeque<Duration>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(TIMING_WINDOW + 1),
        }
    }

    /// Record a frame time and return the current average.
    pub fn record(&mut self, elapsed: Duration) -> Duration {
        self.samples.push_back(elapsed);
        if self.samples.len() > TIMING_WINDOW {
            self.samples.pop_front();
        }

        let total: Duration = self.samples.iter().sum();
        total / self.samples.len() as u32
    }
}
