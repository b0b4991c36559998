//! Orbit renderer for the lumen demo scene.
//!
//! Renders the scene once per camera angle and writes each frame as a PNG.

mod orbit;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use lumen_tracer::{build_scene, FrameBuffer};
use orbit::{FrameTimer, OrbitAngles};
use settings::Cli;
use std::fs;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let settings = Cli::parse().settings()?;
    log::info!(
        "Rendering {} frames at {}x{} ({})",
        settings.frames,
        settings.width,
        settings.height,
        if settings.parallel { "parallel" } else { "sequential" }
    );

    fs::create_dir_all(&settings.output_dir).with_context(|| {
        format!("Failed to create output directory {}", settings.output_dir.display())
    })?;

    let mut frame = FrameBuffer::new(settings.width, settings.height, settings.format)?;
    let mut timer = FrameTimer::new();
    let angles = OrbitAngles::new(settings.start_angle, settings.angle_step);

    for (index, angle) in angles.take(settings.frames as usize).enumerate() {
        let scene = build_scene(angle);

        let start = Instant::now();
        if settings.parallel {
            frame.render_parallel(&scene)?;
        } else {
            frame.render(&scene)?;
        }
        let average = timer.record(start.elapsed());

        let path = settings.output_dir.join(format!("frame_{:04}.png", index));
        frame
            .to_rgba_image()
            .save(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        log::info!(
            "Frame {} at {:.0} deg: avg {} ms -> {}",
            index,
            angle,
            average.as_millis(),
            path.display()
        );
    }

    Ok(())
}
