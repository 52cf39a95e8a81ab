// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::animation::DEFAULT_SPEED_SCALE;
use crate::app::{AppOptions, DEFAULT_CURVE_RESOLUTION, MIN_CURVE_RESOLUTION};

#[derive(Parser, Debug, Clone)]
#[command(name = "bezier-viewer")]
#[command(about = "Scene viewer with Bezier trajectories", long_about = None)]
pub struct Cli {
    /// Scene description (JSON)
    #[arg(default_value = "assets/scene_config.json")]
    pub scene: PathBuf,

    /// Samples per curve when the scene does not set one (at least 2)
    #[arg(long, default_value_t = DEFAULT_CURVE_RESOLUTION, value_parser = parse_resolution)]
    pub resolution: usize,

    /// Multiplier applied to trajectory speed per second
    #[arg(long = "speed-scale", default_value_t = DEFAULT_SPEED_SCALE)]
    pub speed_scale: f32,

    /// Run the frame loop without opening a window
    #[arg(long, default_value = "false")]
    pub headless: bool,

    /// Number of frames to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    pub frames: u64,
}

/// Curves need both endpoints sampled, so fewer than 2 samples is rejected
fn parse_resolution(value: &str) -> Result<usize, String> {
    let resolution: usize = value
        .parse()
        .map_err(|e| format!("`{value}` is not a sample count: {e}"))?;
    if resolution < MIN_CURVE_RESOLUTION {
        return Err(format!(
            "resolution must be at least {MIN_CURVE_RESOLUTION}, got {resolution}"
        ));
    }
    Ok(resolution)
}

impl Cli {
    pub fn app_options(&self) -> AppOptions {
        AppOptions {
            curve_resolution: self.resolution,
            speed_scale: self.speed_scale,
        }
    }
}
