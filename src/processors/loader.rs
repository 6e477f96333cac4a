// texture-resizer/src/processors/loader.rs
use crate::core::{ImageToolError, Result};
use crate::utils::display_name;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::path::Path;

/// Decodes files as a single fixed format.
#[derive(Debug, Clone)]
pub struct Loader {
    format: ImageFormat,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            format: ImageFormat::Png,
        }
    }

    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());

        let image = self
            .reader(path)?
            .decode()
            .map_err(|source| ImageToolError::Decode {
                file: display_name(path),
                source,
            })?;

        let (width, height) = image.dimensions();
        log::debug!(
            "Loaded image: {}x{} pixels, color: {:?}",
            width,
            height,
            image.color()
        );

        Ok(image)
    }

    /// Reads only the header, so sampling large files stays cheap.
    pub fn dimensions(&self, path: &Path) -> Result<(u32, u32)> {
        self.reader(path)?
            .into_dimensions()
            .map_err(|source| ImageToolError::Decode {
                file: display_name(path),
                source,
            })
    }

    fn reader(&self, path: &Path) -> Result<ImageReader<std::io::BufReader<std::fs::File>>> {
        let mut reader = ImageReader::open(path)?;
        reader.set_format(self.format);
        Ok(reader)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
