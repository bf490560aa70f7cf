//! Configuration structures for the recognition pipeline.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PocrError;

/// Environment variable overriding the OCR binary location.
pub const TESSERACT_CMD_ENV: &str = "TESSERACT_CMD";

/// Main configuration for the pocr pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PocrConfig {
    /// OCR engine configuration.
    pub ocr: OcrConfig,

    /// Image preprocessing configuration.
    pub preprocess: PreprocessConfig,
}

/// OCR engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Tesseract executable (name on `PATH` or full path).
    pub tesseract_cmd: PathBuf,

    /// Language hint passed on the first attempt.
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract_cmd: PathBuf::from("tesseract"),
            language: "eng".to_string(),
        }
    }
}

/// Binarization settings for the first OCR pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Gaussian blur sigma (1.1 matches a 5x5 kernel).
    pub blur_sigma: f32,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self { blur_sigma: 1.1 }
    }
}

impl PocrConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, PocrError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| PocrError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), PocrError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| PocrError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default location of the user config file.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pocr")
            .join("config.json")
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist; otherwise the default path is used when
    /// present. `TESSERACT_CMD` is applied last.
    pub fn load(path: Option<&Path>) -> Result<Self, PocrError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::default_path();
                if default_path.exists() {
                    debug!("Loading config from {}", default_path.display());
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env(std::env::var_os(TESSERACT_CMD_ENV).map(PathBuf::from));
        Ok(config)
    }

    /// Apply the OCR binary override, if any.
    pub fn apply_env(&mut self, tesseract_cmd: Option<PathBuf>) {
        if let Some(cmd) = tesseract_cmd.filter(|c| !c.as_os_str().is_empty()) {
            debug!("Using OCR binary override {}", cmd.display());
            self.ocr.tesseract_cmd = cmd;
        }
    }
}
