// texture-resizer/src/cli.rs
use crate::core::{
    ConfirmMode, ProcessConfig, ResizeAlgorithm, DEFAULT_MAX_SIZE, DEFAULT_SOURCE_DIR,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Shrink a folder of PNG textures so no side exceeds a maximum size.
#[derive(Parser, Debug)]
#[command(name = "texture-resizer", version, about)]
pub struct Cli {
    /// Directory holding the original textures
    #[arg(short, long, default_value = DEFAULT_SOURCE_DIR)]
    pub source: PathBuf,

    /// Where resized files go (defaults to the source, overwriting in place)
    #[arg(short, long)]
    pub target: Option<PathBuf>,

    /// Longest allowed side in pixels
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_SIZE,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub max_size: u32,

    /// Resampling filter used when shrinking
    #[arg(short, long, value_enum, default_value_t = Algorithm::Lanczos3)]
    pub algorithm: Algorithm,

    /// Skip the lossless oxipng pass on written files
    #[arg(long)]
    pub no_optimize: bool,

    /// Don't ask for confirmation when no 4K files are detected
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<Algorithm> for ResizeAlgorithm {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Triangle => ResizeAlgorithm::Triangle,
            Algorithm::CatmullRom => ResizeAlgorithm::CatmullRom,
            Algorithm::Gaussian => ResizeAlgorithm::Gaussian,
            Algorithm::Lanczos3 => ResizeAlgorithm::Lanczos3,
        }
    }
}

impl Cli {
    pub fn to_config(&self) -> ProcessConfig {
        let target_dir = self.target.clone().unwrap_or_else(|| self.source.clone());

        ProcessConfig {
            source_dir: self.source.clone(),
            target_dir,
            max_size: self.max_size,
            algorithm: self.algorithm.into(),
            optimize_png: !self.no_optimize,
            confirm: if self.yes {
                ConfirmMode::AssumeYes
            } else {
                ConfirmMode::Prompt
            },
            ..Default::default()
        }
    }
}
