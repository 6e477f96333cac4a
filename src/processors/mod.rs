// texture-resizer/src/processors/mod.rs
mod batch;
mod compressor;
mod loader;
mod probe;
mod resizer;

pub use batch::{BatchProcessor, RunOutcome};
pub use compressor::Compressor;
pub use loader::Loader;
pub use probe::{HighResSample, ResolutionProbe};
pub use resizer::Resizer;

