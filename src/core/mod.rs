// texture-resizer/src/core/mod.rs
pub mod processor;
mod tally;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use processor::ImageProcessor;
pub use tally::{FileOutcome, Tally};

pub const DEFAULT_SOURCE_DIR: &str = "3d-assets/textures";
pub const DEFAULT_MAX_SIZE: u32 = 1024;
pub const DEFAULT_EXTENSION: &str = "png";
/// Either side at or above this counts as a high-resolution original.
pub const HIGH_RES_THRESHOLD: u32 = 2048;
pub const HEURISTIC_SAMPLE_SIZE: usize = 5;

/// Anti-aliased filters only; nearest-neighbour is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeAlgorithm {
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

/// How the run asks for permission when no high-resolution file is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmMode {
    #[default]
    Prompt,
    AssumeYes,
}

#[derive(Debug, Clone)]
pub struct ProcessConfig {
    pub source_dir: PathBuf,
    pub target_dir: PathBuf,
    pub max_size: u32,
    pub extension: String,
    pub algorithm: ResizeAlgorithm,
    pub optimize_png: bool,
    pub confirm: ConfirmMode,
    pub high_res_threshold: u32,
    pub sample_size: usize,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            target_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            max_size: DEFAULT_MAX_SIZE,
            extension: DEFAULT_EXTENSION.to_string(),
            algorithm: ResizeAlgorithm::default(),
            optimize_png: true,
            confirm: ConfirmMode::default(),
            high_res_threshold: HIGH_RES_THRESHOLD,
            sample_size: HEURISTIC_SAMPLE_SIZE,
        }
    }
}

impl ProcessConfig {
    /// Config that resizes `dir` in place, everything else at defaults.
    pub fn in_place(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            source_dir: dir.clone(),
            target_dir: dir,
            ..Default::default()
        }
    }

    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_confirm(mut self, confirm: ConfirmMode) -> Self {
        self.confirm = confirm;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(ImageToolError::InvalidParameter(
                "Maximum size must be at least 1 pixel".to_string(),
            ));
        }

        if self.extension.trim_start_matches('.').is_empty() {
            return Err(ImageToolError::InvalidParameter(
                "File extension filter cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn target_path_for(&self, source: &Path) -> Result<PathBuf> {
        let file_name = source.file_name().ok_or_else(|| {
            ImageToolError::InvalidParameter(format!("Invalid file name: {}", source.display()))
        })?;
        Ok(self.target_dir.join(file_name))
    }

    pub fn is_in_place(&self) -> bool {
        self.source_dir == self.target_dir
    }
}

#[derive(Error, Debug)]
pub enum ImageToolError {
    #[error("Source directory '{}' not found", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("No {} files found in {}", .extension.to_uppercase(), .dir.display())]
    NoFilesFound { dir: PathBuf, extension: String },

    #[error("cannot decode {file}: {source}")]
    Decode {
        file: String,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot write {file}: {reason}")]
    Encode { file: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Processing error: {0}")]
    ProcessingError(String),
}

impl ImageToolError {
    pub fn remediation_hint(&self) -> Option<&'static str> {
        match self {
            Self::DirectoryNotFound(_) => Some(
                "Please point --source at the directory holding your original high-resolution textures",
            ),
            Self::NoFilesFound { .. } => {
                Some("Check that --source is the texture folder and not one of its parents")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ImageToolError>;
