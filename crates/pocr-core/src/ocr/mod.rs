//! Text source: image loading, binarization and the external OCR engine.

mod preprocessing;
mod tesseract;

pub use preprocessing::ImagePreprocessor;
pub use tesseract::TesseractEngine;

use std::path::Path;

use image::{DynamicImage, GenericImageView};
use tracing::{debug, warn};

use crate::error::OcrError;

/// Anything that turns an image into unicode text.
pub trait TextSource {
    /// Recognize the text in an image.
    fn extract_text(&self, image: &DynamicImage) -> Result<String, OcrError>;
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn extract_text(&self, image: &DynamicImage) -> Result<String, OcrError> {
        (**self).extract_text(image)
    }
}

/// Decode an image file.
///
/// Unreadable or empty images yield `None` instead of an error.
pub fn load_image(path: &Path) -> Option<DynamicImage> {
    match image::open(path) {
        Ok(image) if image.width() > 0 && image.height() > 0 => {
            let (width, height) = image.dimensions();
            debug!("Loaded {} ({}x{})", path.display(), width, height);
            Some(image)
        }
        Ok(_) => {
            warn!("Image {} has no pixels", path.display());
            None
        }
        Err(e) => {
            warn!("Could not decode image {}: {}", path.display(), e);
            None
        }
    }
}
