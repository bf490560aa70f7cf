//! Passport recognition façade: OCR, extraction and the response envelope.

use std::path::Path;
use std::time::Instant;

use image::DynamicImage;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::config::PocrConfig;
use crate::models::record::Recognition;
use crate::ocr::{ImagePreprocessor, TesseractEngine, TextSource, load_image};
use crate::passport::extract_fields;

/// Runs the two OCR passes and extracts the passport record.
pub struct PassportRecognizer<S: TextSource> {
    source: S,
    preprocessor: ImagePreprocessor,
}

impl PassportRecognizer<TesseractEngine> {
    /// Create a Tesseract-backed recognizer.
    pub fn from_config(config: &PocrConfig) -> Self {
        Self::new(TesseractEngine::new(config.ocr.clone()))
            .with_preprocessor(ImagePreprocessor::from_config(&config.preprocess))
    }
}

impl<S: TextSource> PassportRecognizer<S> {
    /// Create a recognizer over any text source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            preprocessor: ImagePreprocessor::new(),
        }
    }

    /// Set the preprocessor used for the binarized pass.
    pub fn with_preprocessor(mut self, preprocessor: ImagePreprocessor) -> Self {
        self.preprocessor = preprocessor;
        self
    }

    /// OCR the binarized image, then the unprocessed one, and join both outputs.
    pub fn read_text(&self, image: &DynamicImage) -> Result<String> {
        let binary = self.preprocessor.binarize(image);
        let binarized_text = self.source.extract_text(&binary)?;
        let raw_text = self.source.extract_text(image)?;

        Ok(format!("{}\n{}", binarized_text, raw_text))
    }

    /// Recognize a decoded image.
    pub fn recognize_image(&self, image: &DynamicImage) -> Result<Recognition> {
        let start = Instant::now();
        let text = self.read_text(image)?;
        let recognition = self.recognize_text(&text);

        info!(
            "Recognized {} of 23 fields in {}ms",
            recognition.data.filled_count(),
            start.elapsed().as_millis()
        );
        Ok(recognition)
    }

    /// Recognize an image file.
    ///
    /// An unreadable image is treated as empty text, not as an error.
    pub fn recognize_path(&self, path: &Path) -> Result<Recognition> {
        info!("Processing image: {}", path.display());

        match load_image(path) {
            Some(image) => self.recognize_image(&image),
            None => {
                warn!("No image at {}, returning an empty record", path.display());
                Ok(self.recognize_text(""))
            }
        }
    }

    /// Extract the record from already recognized text.
    pub fn recognize_text(&self, text: &str) -> Recognition {
        Recognition::ok(extract_fields(text))
    }
}

/// Recognize a passport image with the resolved default configuration.
pub fn recognize_passport(path: &Path) -> Result<Recognition> {
    let config = PocrConfig::load(None)?;
    PassportRecognizer::from_config(&config).recognize_path(path)
}
