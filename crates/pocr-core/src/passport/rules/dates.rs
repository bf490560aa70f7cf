//! Date parsing and normalization for passport fields.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::ExtractionError;

/// Canonical output format.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Parse a raw MRZ `YYMMDD` date.
///
/// The century comes from chrono's two-digit year rule; no pivot is applied.
pub fn parse_mrz_date(raw: &str) -> Result<NaiveDate, ExtractionError> {
    if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(raw));
    }
    NaiveDate::parse_from_str(raw, "%y%m%d").map_err(|_| invalid(raw))
}

/// Parse a labeled date in `YYYY-MM-DD`, `DD-MM-YYYY` or `DD/MM/YYYY` form.
pub fn parse_label_date(raw: &str) -> Result<NaiveDate, ExtractionError> {
    let format = if raw.contains('-') {
        if raw.split('-').next().map(str::len) == Some(4) {
            "%Y-%m-%d"
        } else {
            "%d-%m-%Y"
        }
    } else {
        "%d/%m/%Y"
    };

    NaiveDate::parse_from_str(raw, format).map_err(|_| invalid(raw))
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

/// Normalize a labeled date, or `""` when it is not a calendar date.
pub fn normalize_label_date(raw: &str) -> String {
    match parse_label_date(raw) {
        Ok(date) => format_date(date),
        Err(e) => {
            debug!("{}", e);
            String::new()
        }
    }
}

fn invalid(raw: &str) -> ExtractionError {
    ExtractionError::InvalidDate {
        raw: raw.to_string(),
    }
}
