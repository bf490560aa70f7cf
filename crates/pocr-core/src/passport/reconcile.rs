//! Merging MRZ and label evidence into one record.

use tracing::debug;

use crate::models::record::{ExtractedRecord, Field};

/// Merge MRZ fields over an empty record, then fill the gaps from labels.
///
/// MRZ values are never overwritten.
pub fn reconcile(mrz: &ExtractedRecord, labels: &ExtractedRecord) -> ExtractedRecord {
    let mut record = ExtractedRecord::new();
    record.fill_missing(mrz);
    record.fill_missing(labels);
    derive_nationality(&mut record);

    debug!("Reconciled record has {} non-empty fields", record.filled_count());
    record
}

/// Set `INDIAN` nationality for `IND` documents without an explicit one.
pub fn derive_nationality(record: &mut ExtractedRecord) {
    if record.has(Field::Nationality) {
        return;
    }
    if record.get(Field::CountryCode) == "IND" {
        record.set(Field::Nationality, "INDIAN");
    }
}
