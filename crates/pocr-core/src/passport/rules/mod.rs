//! Rule-based label extraction for passport text.

pub mod dates;
pub mod patterns;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::models::record::{ExtractedRecord, Field};

use super::{FieldSource, PreparedText};
use patterns::*;

/// How a captured value is turned into a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// Trim surrounding whitespace.
    Trim,
    /// Drop filler, hyphens and whitespace.
    DocumentNumber,
    /// Normalize to `YYYY-MM-DD`, or empty when invalid.
    Date,
    /// Keep the capture as matched.
    Verbatim,
}

impl PostProcess {
    fn apply(self, raw: &str) -> String {
        match self {
            PostProcess::Trim => raw.trim().to_string(),
            PostProcess::DocumentNumber => clean_document_number(raw),
            PostProcess::Date => dates::normalize_label_date(raw),
            PostProcess::Verbatim => raw.to_string(),
        }
    }
}

/// One label pattern bound to the field it fills.
pub struct LabelRule {
    pub field: Field,
    pub pattern: &'static Regex,
    pub post: PostProcess,
}

impl LabelRule {
    const fn new(field: Field, pattern: &'static Regex, post: PostProcess) -> Self {
        Self {
            field,
            pattern,
            post,
        }
    }

    /// Value of the first match, if the pattern matches at all.
    ///
    /// A match whose value cannot be normalized yields `Some("")`.
    pub fn apply(&self, text: &str) -> Option<String> {
        let caps = self.pattern.captures(text)?;
        let raw = caps.get(1)?.as_str();
        Some(self.post.apply(raw))
    }
}

lazy_static! {
    /// Label rules in evaluation order.
    pub static ref LABEL_RULES: Vec<LabelRule> = vec![
        LabelRule::new(Field::PassportNum, &PASSPORT_NO, PostProcess::DocumentNumber),
        LabelRule::new(Field::OldPassportNum, &OLD_PASSPORT_NO, PostProcess::Trim),
        LabelRule::new(Field::GivenName, &GIVEN_NAME, PostProcess::Trim),
        LabelRule::new(Field::Surname, &SURNAME, PostProcess::Trim),
        LabelRule::new(Field::Father, &FATHER_NAME, PostProcess::Trim),
        LabelRule::new(Field::Mother, &MOTHER_NAME, PostProcess::Trim),
        LabelRule::new(Field::Spouse, &SPOUSE_NAME, PostProcess::Trim),
        LabelRule::new(Field::PlaceOfIssue, &PLACE_OF_ISSUE, PostProcess::Trim),
        LabelRule::new(Field::OldPlaceOfIssue, &OLD_PLACE_OF_ISSUE, PostProcess::Trim),
        LabelRule::new(Field::PlaceOfBirth, &PLACE_OF_BIRTH, PostProcess::Trim),
        LabelRule::new(Field::Nationality, &NATIONALITY, PostProcess::Trim),
        LabelRule::new(Field::Pin, &PIN_LABELED, PostProcess::Verbatim),
        LabelRule::new(Field::Doi, &ISSUE_DATE, PostProcess::Date),
        LabelRule::new(Field::OldDoi, &OLD_ISSUE_DATE, PostProcess::Date),
        LabelRule::new(Field::Dob, &BIRTH_DATE, PostProcess::Date),
        LabelRule::new(Field::Doe, &EXPIRY_DATE, PostProcess::Date),
        LabelRule::new(Field::Address, &ADDRESS, PostProcess::Trim),
        LabelRule::new(Field::FileNum, &FILE_NO, PostProcess::Trim),
        LabelRule::new(Field::ClientId, &CLIENT_ID, PostProcess::Trim),
        // Any bare six-digit token; may pick up unrelated numbers.
        LabelRule::new(Field::Pin, &PIN_STANDALONE, PostProcess::Verbatim),
    ];
}

/// Strip MRZ filler, hyphens and whitespace from a document number.
pub fn clean_document_number(raw: &str) -> String {
    raw.chars()
        .filter(|&c| c != super::FILLER && c != '-' && !c.is_whitespace())
        .collect()
}

/// Label-based extractor over the joined text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelExtractor;

impl LabelExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldSource for LabelExtractor {
    fn extract(&self, text: &PreparedText) -> ExtractedRecord {
        let mut record = ExtractedRecord::new();

        for rule in LABEL_RULES.iter() {
            if record.has(rule.field) {
                continue;
            }
            if let Some(value) = rule.apply(text.joined()) {
                debug!("Label rule for {} matched: {:?}", rule.field, value);
                record.set(rule.field, value);
            }
        }

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(raw: &str) -> ExtractedRecord {
        LabelExtractor::new().extract(&PreparedText::new(raw))
    }

    #[test]
    fn test_every_rule_targets_a_schema_field() {
        for rule in LABEL_RULES.iter() {
            assert_eq!(Field::from_name(rule.field.as_str()), Some(rule.field));
        }
    }

    #[test]
    fn test_passport_number_label() {
        let record = extract("Passport No: K-1234567");
        assert_eq!(record.get(Field::PassportNum), "K1234567");

        let record = extract("passport no z12345<6");
        assert_eq!(record.get(Field::PassportNum), "z123456");

        // Value must directly follow the label separator.
        assert_eq!(extract("PASSPORT NO. Z1234567").get(Field::PassportNum), "");
        assert_eq!(extract("Passport No: K-123 4567").get(Field::PassportNum), "");
    }

    #[test]
    fn test_values_run_across_line_breaks() {
        let record = extract(
            "Surname: SHARMA\n\
             Given Names: PRIYA\n\
             Father's Name: RAJESH KUMAR\n\
             Mother Name: SUNITA\n\
             Spouse's Name: ARJUN",
        );

        assert_eq!(record.get(Field::Surname), "SHARMA\nGiven Names");
        assert_eq!(record.get(Field::GivenName), "PRIYA\nFather");
        assert_eq!(record.get(Field::Father), "RAJESH KUMAR\nMother Name");
        assert_eq!(record.get(Field::Mother), "SUNITA\nSpouse");
        assert_eq!(record.get(Field::Spouse), "ARJUN");
    }

    #[test]
    fn test_single_line_values() {
        assert_eq!(extract("Father's Name: ROBERT SMITH").get(Field::Father), "ROBERT SMITH");
        assert_eq!(extract("Nationality: INDIAN").get(Field::Nationality), "INDIAN");
        assert_eq!(extract("Place of Birth: NEW DELHI, DELHI").get(Field::PlaceOfBirth), "NEW DELHI, DELHI");
        assert_eq!(extract("File No: HY-2019-0042").get(Field::FileNum), "HY-2019-0042");
        assert_eq!(extract("Client ID: cl_88-x").get(Field::ClientId), "cl_88-x");
        assert_eq!(extract("Old Passport No: J8369854").get(Field::OldPassportNum), "J8369854");
        assert_eq!(extract("Address: 12, M.G. ROAD").get(Field::Address), "12, M.G. ROAD");
    }

    #[test]
    fn test_place_of_issue_and_old_place() {
        let record = extract("Old Place of Issue: MUMBAI");
        assert_eq!(record.get(Field::OldPlaceOfIssue), "MUMBAI");
        assert_eq!(record.get(Field::PlaceOfIssue), "MUMBAI");
    }

    #[test]
    fn test_issue_dates() {
        assert_eq!(extract("DOI: 2015-06-21").get(Field::Doi), "2015-06-21");
        assert_eq!(extract("doi 21-06-2015").get(Field::Doi), "2015-06-21");
        assert_eq!(extract("DOI: 21/06/2015").get(Field::Doi), "2015-06-21");
        assert_eq!(extract("DOI: 31/02/2015").get(Field::Doi), "");

        let record = extract("Old DOI: 01/02/2005");
        assert_eq!(record.get(Field::OldDoi), "2005-02-01");
    }

    #[test]
    fn test_birth_and_expiry_labels() {
        let record = extract("Date of Birth: 15/08/1985\nDate of Expiry: 2031-03-09");
        assert_eq!(record.get(Field::Dob), "1985-08-15");
        assert_eq!(record.get(Field::Doe), "2031-03-09");
    }

    #[test]
    fn test_labeled_pin_preferred_over_bare_token() {
        let record = extract("Ref 123456\nPIN: 56001");
        assert_eq!(record.get(Field::Pin), "56001");
    }

    #[test]
    fn test_bare_six_digit_pin_fallback() {
        assert_eq!(extract("MUMBAI 400001 MAHARASHTRA").get(Field::Pin), "400001");
        assert_eq!(extract("serial 1234567").get(Field::Pin), "");
    }

    #[test]
    fn test_clean_document_number() {
        assert_eq!(clean_document_number("A1234567<"), "A1234567");
        assert_eq!(clean_document_number("K-12 34<<"), "K1234");
    }
}
