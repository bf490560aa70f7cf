//! Core library for passport OCR processing.
//!
//! This crate provides:
//! - A Tesseract-backed text source (binarized and raw passes)
//! - TD3 machine-readable zone decoding
//! - Label-based field extraction from free-form OCR text
//! - Reconciliation into a fixed 23-field record wrapped in a status envelope

pub mod error;
pub mod models;
pub mod ocr;
pub mod passport;
pub mod recognition;

pub use error::{ExtractionError, OcrError, PocrError, Result};
pub use models::config::{OcrConfig, PocrConfig, PreprocessConfig};
pub use models::record::{ExtractedRecord, Field, Recognition};
pub use ocr::{ImagePreprocessor, TesseractEngine, TextSource};
pub use passport::{FieldSource, LabelExtractor, MrzPair, MrzParser, PreparedText};
pub use recognition::{PassportRecognizer, recognize_passport};
