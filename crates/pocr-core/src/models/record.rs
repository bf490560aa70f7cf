//! The extracted passport record and its response envelope.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One field of the closed passport schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Doe,
    Dob,
    Father,
    GivenName,
    MrzLine1,
    OldPassportNum,
    FileNum,
    ClientId,
    PlaceOfIssue,
    Spouse,
    CountryCode,
    Address,
    Surname,
    MrzLine2,
    PassportNum,
    Doi,
    OldDoi,
    Gender,
    Nationality,
    PlaceOfBirth,
    Mother,
    OldPlaceOfIssue,
    Pin,
}

impl Field {
    /// Number of fields in the schema.
    pub const COUNT: usize = 23;

    /// Every field, in serialization order.
    pub const ALL: [Field; Field::COUNT] = [
        Field::Doe,
        Field::Dob,
        Field::Father,
        Field::GivenName,
        Field::MrzLine1,
        Field::OldPassportNum,
        Field::FileNum,
        Field::ClientId,
        Field::PlaceOfIssue,
        Field::Spouse,
        Field::CountryCode,
        Field::Address,
        Field::Surname,
        Field::MrzLine2,
        Field::PassportNum,
        Field::Doi,
        Field::OldDoi,
        Field::Gender,
        Field::Nationality,
        Field::PlaceOfBirth,
        Field::Mother,
        Field::OldPlaceOfIssue,
        Field::Pin,
    ];

    /// Output key of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Doe => "doe",
            Field::Dob => "dob",
            Field::Father => "father",
            Field::GivenName => "given_name",
            Field::MrzLine1 => "mrz_line_1",
            Field::OldPassportNum => "old_passport_num",
            Field::FileNum => "file_num",
            Field::ClientId => "client_id",
            Field::PlaceOfIssue => "place_of_issue",
            Field::Spouse => "spouse",
            Field::CountryCode => "country_code",
            Field::Address => "address",
            Field::Surname => "surname",
            Field::MrzLine2 => "mrz_line_2",
            Field::PassportNum => "passport_num",
            Field::Doi => "doi",
            Field::OldDoi => "old_doi",
            Field::Gender => "gender",
            Field::Nationality => "nationality",
            Field::PlaceOfBirth => "place_of_birth",
            Field::Mother => "mother",
            Field::OldPlaceOfIssue => "old_place_of_issue",
            Field::Pin => "pin",
        }
    }

    /// Look a field up by its output key.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.as_str() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracted passport fields.
///
/// Every schema field is always present; an empty string means the field
/// was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedRecord {
    values: [String; Field::COUNT],
}

impl ExtractedRecord {
    /// Create a record with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a field (`""` when not found).
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Overwrite a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Whether a field has a non-empty value.
    pub fn has(&self, field: Field) -> bool {
        !self.get(field).is_empty()
    }

    /// Copy every non-empty value of `other` into fields still empty here.
    ///
    /// Values already set are never overwritten.
    pub fn fill_missing(&mut self, other: &ExtractedRecord) {
        for field in Field::ALL {
            if !self.has(field) && other.has(field) {
                self.set(field, other.get(field));
            }
        }
    }

    /// Iterate over `(field, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.iter().map(move |&f| (f, self.get(f)))
    }

    /// Number of non-empty fields.
    pub fn filled_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_empty()).count()
    }
}

impl Serialize for ExtractedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.as_str(), value)?;
        }
        map.end()
    }
}

/// Response envelope around an extracted record.
///
/// The status fields do not reflect extraction quality; callers judge
/// confidence from empty fields in `data`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Recognition {
    pub data: ExtractedRecord,
    pub status_code: u16,
    pub message: String,
    pub success: bool,
}

impl Recognition {
    /// Wrap a record in a successful envelope.
    pub fn ok(data: ExtractedRecord) -> Self {
        Self {
            data,
            status_code: 200,
            message: String::new(),
            success: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_schema_is_closed_and_unique() {
        let mut names: Vec<&str> = Field::ALL.iter().map(|f| f.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Field::COUNT);

        for field in Field::ALL {
            assert_eq!(Field::from_name(field.as_str()), Some(field));
        }
        assert_eq!(Field::from_name("issuing_authority"), None);
    }

    #[test]
    fn test_fill_missing_keeps_existing_values() {
        let mut primary = ExtractedRecord::new();
        primary.set(Field::Surname, "SMITH");

        let mut fallback = ExtractedRecord::new();
        fallback.set(Field::Surname, "JONES");
        fallback.set(Field::Father, "ROBERT SMITH");

        primary.fill_missing(&fallback);

        assert_eq!(primary.get(Field::Surname), "SMITH");
        assert_eq!(primary.get(Field::Father), "ROBERT SMITH");
        assert_eq!(primary.filled_count(), 2);
    }

    #[test]
    fn test_empty_record_serializes_every_field() {
        let value = serde_json::to_value(Recognition::ok(ExtractedRecord::new())).unwrap();

        let data = value["data"].as_object().unwrap();
        assert_eq!(data.len(), 23);
        assert!(data.values().all(|v| v == ""));
        assert_eq!(value["status_code"], 200);
        assert_eq!(value["message"], "");
        assert_eq!(value["success"], true);
    }

    #[test]
    fn test_serialization_follows_schema_order() {
        let json = serde_json::to_string(&ExtractedRecord::new()).unwrap();
        let positions: Vec<usize> = Field::ALL
            .iter()
            .map(|f| json.find(&format!("\"{}\"", f.as_str())).unwrap())
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
