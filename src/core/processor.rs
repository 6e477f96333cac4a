// texture-resizer/src/core/processor.rs
use super::{FileOutcome, ProcessConfig, Result};
use crate::processors::{Compressor, Loader, Resizer};
use std::path::Path;

/// Per-file step: decode, decide, resample, encode.
pub struct ImageProcessor {
    loader: Loader,
    resizer: Resizer,
    compressor: Compressor,
}

impl ImageProcessor {
    pub fn new(config: &ProcessConfig) -> Self {
        Self {
            loader: Loader::new(),
            resizer: Resizer::new(config.algorithm, config.max_size),
            compressor: Compressor::new().with_png_optimization(config.optimize_png),
        }
    }

    pub fn resizer(&self) -> &Resizer {
        &self.resizer
    }

    /// Files already within bounds are never written, so a skip leaves the
    /// target untouched even when it is a different directory.
    pub fn process(&self, input_path: &Path, output_path: &Path) -> Result<FileOutcome> {
        let image = self.loader.load(input_path)?;
        let (width, height) = (image.width(), image.height());

        if !self.resizer.needs_resize(width, height) {
            return Ok(FileOutcome::Skipped { width, height });
        }

        let resized = self.resizer.resize(&image);
        drop(image);

        self.compressor.save_png(&resized, output_path)?;

        Ok(FileOutcome::Resized {
            from: (width, height),
            to: (resized.width(), resized.height()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ImageToolError;
    use image::RgbaImage;

    fn config(max: u32) -> ProcessConfig {
        ProcessConfig {
            max_size: max,
            optimize_png: false,
            ..Default::default()
        }
    }

    #[test]
    fn oversized_file_is_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wall.png");
        RgbaImage::new(96, 48).save(&path).unwrap();

        let outcome = ImageProcessor::new(&config(24)).process(&path, &path).unwrap();
        assert_eq!(
            outcome,
            FileOutcome::Resized {
                from: (96, 48),
                to: (24, 12)
            }
        );
        assert_eq!(image::image_dimensions(&path).unwrap(), (24, 12));
    }

    #[test]
    fn small_file_is_skipped_without_writing_target() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("floor.png");
        let output = dir.path().join("floor_out.png");
        RgbaImage::new(20, 15).save(&input).unwrap();

        let outcome = ImageProcessor::new(&config(24)).process(&input, &output).unwrap();
        assert_eq!(
            outcome,
            FileOutcome::Skipped {
                width: 20,
                height: 15
            }
        );
        assert!(!output.exists());
    }

    #[test]
    fn corrupt_file_fails_with_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nthen garbage").unwrap();

        let err = ImageProcessor::new(&config(24)).process(&path, &path).unwrap_err();
        assert!(matches!(err, ImageToolError::Decode { .. }));
    }
}
