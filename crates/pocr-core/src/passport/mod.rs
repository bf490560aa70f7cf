//! Passport field extraction from recognized text.

mod mrz;
mod reconcile;
pub mod rules;

pub use mrz::{FILLER, MrzPair, MrzParser};
pub use reconcile::{derive_nationality, reconcile};
pub use rules::{LabelExtractor, LabelRule, PostProcess};

use tracing::debug;

use crate::models::record::ExtractedRecord;

/// OCR text split into trimmed, non-empty lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreparedText {
    lines: Vec<String>,
    joined: String,
}

impl PreparedText {
    /// Trim every line and drop the empty ones.
    pub fn new(raw: &str) -> Self {
        let lines: Vec<String> = raw
            .split(is_line_break)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        let joined = lines.join("\n");

        Self { lines, joined }
    }

    /// Non-empty trimmed lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines joined back with `\n`.
    pub fn joined(&self) -> &str {
        &self.joined
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Line boundaries recognized in OCR output, including form feeds.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// A source of partial field evidence.
pub trait FieldSource {
    /// Extract the fields this source can determine; all others stay empty.
    fn extract(&self, text: &PreparedText) -> ExtractedRecord;
}

/// Run both evidence sources over raw OCR text and reconcile them.
pub fn extract_fields(raw: &str) -> ExtractedRecord {
    let text = PreparedText::new(raw);
    debug!("Extracting fields from {} non-empty lines", text.lines().len());

    let mrz = MrzParser::new().extract(&text);
    let labels = LabelExtractor::new().extract(&text);

    reconcile(&mrz, &labels)
}
