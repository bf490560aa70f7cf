//! Tesseract command-line engine.

use std::io::{Cursor, Write};
use std::process::{Command, Stdio};

use image::{DynamicImage, GenericImageView, ImageFormat};
use tracing::{debug, info, warn};

use crate::error::OcrError;
use crate::models::config::OcrConfig;

use super::{ImagePreprocessor, TextSource};

/// OCR engine that pipes PNG images through the `tesseract` binary.
pub struct TesseractEngine {
    config: OcrConfig,
}

impl TesseractEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }

    /// Engine configuration.
    pub fn config(&self) -> &OcrConfig {
        &self.config
    }

    fn run(&self, png: &[u8], language: Option<&str>) -> Result<String, OcrError> {
        let program = self.config.tesseract_cmd.display().to_string();

        let mut command = Command::new(&self.config.tesseract_cmd);
        command.arg("stdin").arg("stdout");
        if let Some(language) = language {
            command.arg("-l").arg(language);
        }

        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| OcrError::Spawn {
                program: program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A broken pipe here still leaves the exit status to inspect.
            if let Err(e) = stdin.write_all(png) {
                debug!("Failed to pipe image to {}: {}", program, e);
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|e| OcrError::Output(e.to_string()))?;

        if !output.status.success() {
            return Err(OcrError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| OcrError::Output(e.to_string()))
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new(OcrConfig::default())
    }
}

impl TextSource for TesseractEngine {
    fn extract_text(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            warn!("Skipping OCR on empty image");
            return Ok(String::new());
        }

        let rgb = ImagePreprocessor::to_rgb(image);
        let mut png = Vec::new();
        rgb.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| OcrError::Encode(e.to_string()))?;

        info!("Running OCR on {}x{} image", width, height);

        let text = match self.run(&png, Some(&self.config.language)) {
            Ok(text) => text,
            Err(e) => {
                warn!("OCR failed ({}), retrying without language hint", e);
                self.run(&png, None)?
            }
        };

        debug!("OCR returned {} characters", text.len());
        Ok(text)
    }
}
