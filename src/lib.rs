mod cli;
mod core;
mod processors;
mod utils;

pub use crate::cli::{Algorithm, Cli};
pub use crate::core::{
    ConfirmMode, FileOutcome, ImageProcessor, ImageToolError, ProcessConfig, ResizeAlgorithm,
    Result, Tally, DEFAULT_EXTENSION, DEFAULT_MAX_SIZE, DEFAULT_SOURCE_DIR, HEURISTIC_SAMPLE_SIZE,
    HIGH_RES_THRESHOLD,
};
pub use crate::processors::{
    BatchProcessor, Compressor, HighResSample, Loader, ResolutionProbe, Resizer, RunOutcome,
};
pub use crate::utils::{confirm_continue, format_dimensions, has_extension, is_cancel_answer};

pub mod prelude {
    pub use crate::{
        BatchProcessor, ConfirmMode, FileOutcome, ImageProcessor, ProcessConfig,
        ResizeAlgorithm, RunOutcome, Tally,
    };
}

// Re-export commonly used types
pub use image::DynamicImage;
