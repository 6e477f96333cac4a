// texture-resizer/src/processors/compressor.rs
use crate::core::{ImageToolError, Result};
use crate::utils::display_name;
use image::{DynamicImage, ImageFormat};
use oxipng::{optimize_from_memory, Options};
use std::io::{Cursor, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub struct Compressor {
    optimize_png: bool,
}

impl Compressor {
    pub fn new() -> Self {
        Self { optimize_png: true }
    }

    pub fn with_png_optimization(mut self, optimize: bool) -> Self {
        self.optimize_png = optimize;
        self
    }

    /// Encodes in memory, writes a sibling temp file, then renames it over
    /// `path`. An interrupted or failed save leaves the old file intact.
    pub fn save_png(&self, image: &DynamicImage, path: &Path) -> Result<u64> {
        let encode_err = |reason: String| ImageToolError::Encode {
            file: display_name(path),
            reason,
        };

        let data = self.compress_to_bytes(image).map_err(|e| encode_err(e.to_string()))?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir).map_err(|e| encode_err(e.to_string()))?;
        staged
            .write_all(&data)
            .and_then(|_| match replacement_permissions(path) {
                Some(perms) => staged.as_file().set_permissions(perms),
                None => Ok(()),
            })
            .and_then(|_| staged.as_file().sync_all())
            .map_err(|e| encode_err(e.to_string()))?;
        staged
            .persist(path)
            .map_err(|e| encode_err(e.error.to_string()))?;

        log::debug!("Saved image: {} ({} bytes)", path.display(), data.len());
        Ok(data.len() as u64)
    }

    pub fn compress_to_bytes(&self, image: &DynamicImage) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| ImageToolError::ProcessingError(format!("PNG encoding failed: {}", e)))?;

        let encoded = buffer.into_inner();
        if !self.optimize_png {
            return Ok(encoded);
        }

        let optimized = self.optimize_png_bytes(&encoded)?;
        log::debug!(
            "oxipng: {} -> {} bytes",
            encoded.len(),
            optimized.len()
        );
        Ok(optimized)
    }

    fn optimize_png_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        optimize_from_memory(data, &Options::default())
            .map_err(|e| ImageToolError::ProcessingError(format!("PNG optimization failed: {}", e)))
    }
}

/// Temp files are created owner-only; the replacement should look like the
/// file it replaces, or like a normally created file when there is none.
fn replacement_permissions(path: &Path) -> Option<std::fs::Permissions> {
    if let Ok(meta) = std::fs::metadata(path) {
        return Some(meta.permissions());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(std::fs::Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new()
    }
}
