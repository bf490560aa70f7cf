//! Image preprocessing for OCR.

use image::{DynamicImage, GrayImage, Luma};
use imageproc::contrast::otsu_level;
use imageproc::filter::gaussian_blur_f32;
use tracing::debug;

use crate::models::config::PreprocessConfig;

/// Image preprocessor for the binarized OCR pass.
pub struct ImagePreprocessor {
    /// Gaussian blur sigma; non-positive disables blurring.
    blur_sigma: f32,
}

impl ImagePreprocessor {
    /// Create a new preprocessor with default settings.
    pub fn new() -> Self {
        Self::from_config(&PreprocessConfig::default())
    }

    /// Create a preprocessor from configuration.
    pub fn from_config(config: &PreprocessConfig) -> Self {
        Self {
            blur_sigma: config.blur_sigma,
        }
    }

    /// Set the blur sigma.
    pub fn with_blur_sigma(mut self, sigma: f32) -> Self {
        self.blur_sigma = sigma;
        self
    }

    /// Grayscale, blur and Otsu-threshold an image.
    pub fn binarize(&self, image: &DynamicImage) -> DynamicImage {
        let gray = image.to_luma8();
        if gray.width() == 0 || gray.height() == 0 {
            return DynamicImage::ImageLuma8(gray);
        }

        let blurred = if self.blur_sigma > 0.0 {
            gaussian_blur_f32(&gray, self.blur_sigma)
        } else {
            gray
        };

        let level = otsu_level(&blurred);
        debug!("Otsu threshold level: {}", level);

        DynamicImage::ImageLuma8(threshold(&blurred, level))
    }

    /// Normalize any colorspace to 3-channel RGB.
    ///
    /// Single-channel input is expanded; alpha is dropped.
    pub fn to_rgb(image: &DynamicImage) -> DynamicImage {
        DynamicImage::ImageRgb8(image.to_rgb8())
    }
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Binary threshold: strictly above `level` becomes white.
fn threshold(image: &GrayImage, level: u8) -> GrayImage {
    let mut result = image.clone();
    for pixel in result.pixels_mut() {
        *pixel = Luma([if pixel[0] > level { 255 } else { 0 }]);
    }
    result
}
