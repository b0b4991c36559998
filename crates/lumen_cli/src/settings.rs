//! Render settings: defaults, optional JSON file, then command-line flags.

use anyhow::{ensure, Context, Result};
use clap::Parser;
use lumen_tracer::PixelFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Settings for an orbit render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// First camera angle in degrees
    pub start_angle: f64,
    /// Degrees the camera advances per frame
    pub angle_step: f64,
    pub frames: u32,
    /// Spread scanlines across all cores
    pub parallel: bool,
    pub output_dir: PathBuf,
    pub format: PixelFormat,
}

impl RenderSettings {
    /// The orbit only advances with a positive step, and restarts at
    /// `start_angle` once it passes 360 degrees.
    fn validate(&self) -> Result<()> {
        ensure!(
            self.angle_step > 0.0,
            "angle_step must be positive, got {}",
            self.angle_step
        );
        ensure!(
            (0.0..360.0).contains(&self.start_angle),
            "start_angle must be in [0, 360), got {}",
            self.start_angle
        );
        Ok(())
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            start_angle: 1.0,
            angle_step: 5.0,
            frames: 72,
            parallel: false,
            output_dir: PathBuf::from("frames"),
            format: PixelFormat::Bgr32,
        }
    }
}

/// Render the lumen demo scene as the camera orbits it.
#[derive(Parser, Debug, Default)]
#[command(name = "lumen")]
#[command(about = "Whitted-style ray tracer orbit renderer", long_about = None)]
pub struct Cli {
    /// JSON settings file, applied before the flags below
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    /// First camera angle in degrees
    #[arg(long)]
    pub start_angle: Option<f64>,

    /// Degrees per frame
    #[arg(long)]
    pub angle_step: Option<f64>,

    /// Number of frames to render
    #[arg(long, short = 'n')]
    pub frames: Option<u32>,

    /// Render scanlines in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Directory the PNG frames are written to
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Pixel layout rendered into: bgr24, bgr32, bgra32, rgb24 or rgba32
    #[arg(long, value_parser = parse_format)]
    pub format: Option<PixelFormat>,
}

/// Accept the same lowercase names as the JSON settings file.
fn parse_format(name: &str) -> Result<PixelFormat, String> {
    serde_json::from_value(serde_json::Value::String(name.to_owned()))
        .map_err(|_| format!("unknown pixel format '{name}'"))
}

impl Cli {
    /// Resolve the final settings.
    pub fn settings(&self) -> Result<RenderSettings> {
        let base = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Failed to parse config {}", path.display()))?
            }
            None => RenderSettings::default(),
        };
        let settings = self.apply(base);
        settings.validate()?;
        Ok(settings)
    }

    fn apply(&self, mut settings: RenderSettings) -> RenderSettings {
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(angle) = self.start_angle {
            settings.start_angle = angle;
        }
        if let Some(step) = self.angle_step {
            settings.angle_step = step;
        }
        if let Some(frames) = self.frames {
            settings.frames = frames;
        }
        if let Some(dir) = &self.output_dir {
            settings.output_dir = dir.clone();
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        settings.parallel |= self.parallel;
        settings
    }
}
