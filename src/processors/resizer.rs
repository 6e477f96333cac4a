// texture-resizer/src/processors/resizer.rs
use crate::core::ResizeAlgorithm;
use image::{imageops::FilterType, DynamicImage};

pub struct Resizer {
    algorithm: ResizeAlgorithm,
    max_size: u32,
}

impl Resizer {
    pub fn new(algorithm: ResizeAlgorithm, max_size: u32) -> Self {
        Self {
            algorithm,
            max_size,
        }
    }

    pub fn needs_resize(&self, width: u32, height: u32) -> bool {
        width > self.max_size || height > self.max_size
    }

    /// Scales the longer side to `max_size`, the shorter one by the same ratio.
    ///
    /// This is `floor(side * min(max / w, max / h))` evaluated in integers, so
    /// the longer side lands on `max_size` exactly instead of one pixel short
    /// from float error. Neither side drops below one pixel.
    pub fn target_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        if !self.needs_resize(width, height) {
            return (width, height);
        }

        let max = u64::from(self.max_size);
        let (w, h) = (u64::from(width), u64::from(height));

        let (new_w, new_h) = if w >= h {
            (max, h * max / w)
        } else {
            (w * max / h, max)
        };

        (new_w.max(1) as u32, new_h.max(1) as u32)
    }

    pub fn resize(&self, image: &DynamicImage) -> DynamicImage {
        let (width, height) = self.target_dimensions(image.width(), image.height());

        if width == image.width() && height == image.height() {
            log::debug!("Image dimensions unchanged, skipping resize");
            return image.clone();
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{} with {:?}",
            image.width(),
            image.height(),
            width,
            height,
            self.algorithm
        );

        image.resize_exact(width, height, self.filter_type())
    }

    fn filter_type(&self) -> FilterType {
        match self.algorithm {
            ResizeAlgorithm::Triangle => FilterType::Triangle,
            ResizeAlgorithm::CatmullRom => FilterType::CatmullRom,
            ResizeAlgorithm::Gaussian => FilterType::Gaussian,
            ResizeAlgorithm::Lanczos3 => FilterType::Lanczos3,
        }
    }
}
