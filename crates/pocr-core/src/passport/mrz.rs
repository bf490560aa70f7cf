//! TD3 machine-readable zone decoding.
//!
//! Line 1 carries the document type, issuing country and the name block;
//! line 2 carries fixed-offset windows:
//!
//! | chars   | content            |
//! |---------|--------------------|
//! | 0..9    | document number    |
//! | 10..13  | nationality code   |
//! | 13..19  | birth date, YYMMDD |
//! | 20      | sex                |
//! | 21..27  | expiry, YYMMDD     |

use tracing::debug;

use crate::error::ExtractionError;
use crate::models::record::{ExtractedRecord, Field};

use super::rules::dates::{format_date, parse_mrz_date};
use super::rules::clean_document_number;
use super::{FieldSource, PreparedText};

/// MRZ filler character.
pub const FILLER: char = '<';

/// Name block separator between surname and given names.
const NAME_SEPARATOR: &str = "<<";

/// Minimum length of a candidate MRZ line.
const MIN_LINE_CHARS: usize = 30;

/// Characters before the surname: document type (2) and issuing state (3).
const NAME_OFFSET: usize = 5;

/// The two MRZ lines of a passport, whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MrzPair {
    line1: Vec<char>,
    line2: Vec<char>,
    /// Indices of the two lines in the source text.
    source_lines: (usize, usize),
}

impl MrzPair {
    /// Select the first two candidate lines.
    ///
    /// A candidate contains the filler and is at least 30 characters long.
    pub fn find(lines: &[String]) -> Option<Self> {
        let mut candidates = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.contains(FILLER) && line.chars().count() >= MIN_LINE_CHARS);

        let (first, line1) = candidates.next()?;
        let (second, line2) = candidates.next()?;

        Some(Self {
            line1: strip_whitespace(line1),
            line2: strip_whitespace(line2),
            source_lines: (first, second),
        })
    }

    pub fn line1(&self) -> String {
        self.line1.iter().collect()
    }

    pub fn line2(&self) -> String {
        self.line2.iter().collect()
    }

    /// Indices of the selected lines in the source text.
    pub fn source_lines(&self) -> (usize, usize) {
        self.source_lines
    }

    /// Whether line 1 declares a passport (`P`) document.
    pub fn is_passport(&self) -> bool {
        self.line1.first() == Some(&'P')
    }

    fn name_segments(&self) -> (String, Option<String>) {
        let line1 = self.line1();
        let mut parts = line1.split(NAME_SEPARATOR);
        let primary = parts.next().unwrap_or_default().to_string();
        let secondary = parts.next().map(str::to_string);
        (primary, secondary)
    }

    /// Surname, with residual filler turned into spaces.
    pub fn surname(&self) -> String {
        let (primary, _) = self.name_segments();
        let surname: String = primary.chars().skip(NAME_OFFSET).collect();
        fillers_to_spaces(&surname)
    }

    /// Given names, with filler turned into single spaces.
    pub fn given_name(&self) -> String {
        let (_, secondary) = self.name_segments();
        secondary.map(|s| fillers_to_spaces(&s)).unwrap_or_default()
    }

    pub fn document_number(&self) -> Result<String, ExtractionError> {
        window(&self.line2, 0, 9, "passport_num").map(|raw| clean_document_number(&raw))
    }

    pub fn country_code(&self) -> Result<String, ExtractionError> {
        window(&self.line2, 10, 13, "country_code")
    }

    pub fn date_of_birth(&self) -> Result<String, ExtractionError> {
        let raw = window(&self.line2, 13, 19, "dob")?;
        parse_mrz_date(&raw).map(format_date)
    }

    /// `MALE`, `FEMALE`, or empty for any other marker.
    pub fn gender(&self) -> Result<&'static str, ExtractionError> {
        match self.line2.get(20) {
            Some('M') => Ok("MALE"),
            Some('F') => Ok("FEMALE"),
            Some(_) => Ok(""),
            None => Err(ExtractionError::MissingWindow { field: "gender" }),
        }
    }

    pub fn date_of_expiry(&self) -> Result<String, ExtractionError> {
        let raw = window(&self.line2, 21, 27, "doe")?;
        parse_mrz_date(&raw).map(format_date)
    }

    /// Write every decodable field into `record`.
    ///
    /// Each field fails on its own; a failure leaves only that field empty.
    pub fn decode_into(&self, record: &mut ExtractedRecord) {
        record.set(Field::Surname, self.surname());
        record.set(Field::GivenName, self.given_name());

        let decoded = [
            (Field::PassportNum, self.document_number()),
            (Field::CountryCode, self.country_code()),
            (Field::Dob, self.date_of_birth()),
            (Field::Gender, self.gender().map(str::to_string)),
            (Field::Doe, self.date_of_expiry()),
        ];

        for (field, value) in decoded {
            match value {
                Ok(value) => record.set(field, value),
                Err(e) => {
                    debug!("MRZ {}: {}", field, e);
                    record.set(field, "");
                }
            }
        }
    }
}

/// MRZ parser producing partial records.
#[derive(Debug, Clone, Copy, Default)]
pub struct MrzParser;

impl MrzParser {
    pub fn new() -> Self {
        Self
    }
}

impl FieldSource for MrzParser {
    fn extract(&self, text: &PreparedText) -> ExtractedRecord {
        let mut record = ExtractedRecord::new();

        let Some(pair) = MrzPair::find(text.lines()) else {
            debug!("No MRZ line pair found");
            return record;
        };

        debug!(
            "MRZ candidates at lines {:?}: {} / {}",
            pair.source_lines(),
            pair.line1(),
            pair.line2()
        );

        record.set(Field::MrzLine1, pair.line1());
        record.set(Field::MrzLine2, pair.line2());

        if pair.is_passport() {
            pair.decode_into(&mut record);
        } else {
            debug!("MRZ line 1 is not a passport document, skipping decode");
        }

        record
    }
}

fn strip_whitespace(line: &str) -> Vec<char> {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

fn fillers_to_spaces(segment: &str) -> String {
    segment.replace(FILLER, " ").trim().to_string()
}

/// Characters `start..end`, clamped to the line end.
fn window(
    line: &[char],
    start: usize,
    end: usize,
    field: &'static str,
) -> Result<String, ExtractionError> {
    if start >= line.len() {
        return Err(ExtractionError::MissingWindow { field });
    }
    Ok(line[start..end.min(line.len())].iter().collect())
}
