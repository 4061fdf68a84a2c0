use std::{num::NonZeroUsize, path::PathBuf};

use clap::Parser;
use pcd_exporter::converter::{ConverterConfig, DEFAULT_CONVERTER, DEFAULT_MAX_MEMORY_MB};
use pcd_transformer::TransformConfig;

pub const DEFAULT_INPUT_PATH: &str = "pointcloud.ply";

#[derive(Parser, Debug)]
#[command(
    name = "ply2sog",
    about = "Process PLY point clouds into SOG Gaussian Splats",
    author = "MIERUNE Inc.",
    version = "0.0.1"
)]
pub struct Cli {
    /// Input .ply files; glob patterns are expanded
    #[arg(short, long, num_args = 1.., value_name = "FILE", default_value = DEFAULT_INPUT_PATH)]
    pub input: Vec<String>,

    /// Keep every Nth point (1 = full density, 2 = 50%)
    #[arg(long, value_name = "N", default_value = "1")]
    pub density_step: NonZeroUsize,

    /// Added to the vertical axis so the camera starts away from the cloud
    #[arg(long, value_name = "OFFSET", default_value_t = 200.0, allow_hyphen_values = true)]
    pub y_offset: f32,

    /// Log-space splat scale (-4.0 is tight, -3.0 slightly looser)
    #[arg(long, value_name = "SCALE", default_value_t = -3.0, allow_hyphen_values = true)]
    pub scale: f32,

    /// Base splat opacity
    #[arg(long, value_name = "OPACITY", default_value_t = 20.0, allow_hyphen_values = true)]
    pub opacity: f32,

    /// Heap limit in megabytes for the Node.js converter
    #[arg(long, value_name = "MB", default_value_t = DEFAULT_MAX_MEMORY_MB)]
    pub max_memory: u32,

    /// Converter executable
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_CONVERTER)]
    pub converter: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Immutable settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub inputs: Vec<PathBuf>,
    pub transform: TransformConfig,
    pub converter: ConverterConfig,
}

impl Config {
    pub fn new(inputs: Vec<PathBuf>, cli: &Cli) -> Self {
        Self {
            inputs,
            transform: TransformConfig {
                density_step: cli.density_step,
                y_offset: cli.y_offset,
                gaussian_scale: cli.scale,
                gaussian_opacity: cli.opacity,
            },
            converter: ConverterConfig {
                program: cli.converter.clone(),
                max_memory_mb: cli.max_memory,
            },
        }
    }
}
