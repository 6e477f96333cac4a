// texture-resizer/src/processors/probe.rs
use super::Loader;
use crate::utils::display_name;
use std::path::{Path, PathBuf};

/// First sampled file at or above the high-resolution threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighResSample {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl HighResSample {
    pub fn name(&self) -> String {
        display_name(&self.path)
    }
}

/// Peeks at the first few candidates to guess whether the folder still holds
/// the original high-resolution textures.
pub struct ResolutionProbe {
    loader: Loader,
    threshold: u32,
    sample_size: usize,
}

impl ResolutionProbe {
    pub fn new(threshold: u32, sample_size: usize) -> Self {
        Self {
            loader: Loader::new(),
            threshold,
            sample_size,
        }
    }

    pub fn find_high_res(&self, paths: &[PathBuf]) -> Option<HighResSample> {
        paths
            .iter()
            .take(self.sample_size)
            .find_map(|path| self.check(path))
    }

    fn check(&self, path: &Path) -> Option<HighResSample> {
        let (width, height) = match self.loader.dimensions(path) {
            Ok(dims) => dims,
            Err(e) => {
                // unreadable samples just don't count
                log::debug!("Resolution probe skipped {}: {}", path.display(), e);
                return None;
            }
        };

        (width >= self.threshold || height >= self.threshold).then(|| HighResSample {
            path: path.to_path_buf(),
            width,
            height,
        })
    }
}
