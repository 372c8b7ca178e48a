//! Core data models for FundFlow
//!
//! This module contains the data types used throughout the application
//! for representing instrument records and the in-memory instrument catalog.

pub mod csv;
pub mod instruments;
pub mod insights;

pub use csv::{decode, encode, DecodeError, Decoded};
pub use instruments::{FetchError, FetchInstruments, InstrumentsClient};
#[allow(unused_imports)]
pub use insights::{InsightError, InsightsClient};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// A single instrument record: ordered field-name/value pairs
///
/// Field order mirrors the column order of the upstream payload, and all
/// values are kept as strings at this boundary; consumers parse numerics or
/// dates on demand. Keys are unique within one record: inserting an existing
/// key updates its value in place without changing its position.
///
/// Note: This struct only implements `Serialize` (not `Deserialize`) because
/// records are only ever built from decoded upstream payloads; it serializes
/// as a JSON object preserving field order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Creates an empty record
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Creates a record from name/value pairs, applying the duplicate-key rule
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (name, value) in pairs {
            record.insert(name.into(), value.into());
        }
        record
    }

    /// Inserts a field, updating the value in place if the name already exists
    pub fn insert(&mut self, name: String, value: String) {
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Returns the value for a field name, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the value for a field name, or an empty string if absent
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// Iterates over fields in source column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Returns the number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// The full ordered collection of records from one upstream fetch
///
/// Immutable once constructed: a refresh produces a whole new `Dataset` that
/// replaces the previous one, never an in-place edit. Shared between callers
/// behind an [`Arc`] so replacement is a single pointer swap.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Creates a dataset from records, preserving their order
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Creates an empty dataset
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the records as a slice, in upstream order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over records in upstream order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

/// Shared handle to an immutable dataset
pub type SharedDataset = Arc<Dataset>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_insertion_order() {
        let record = Record::from_pairs([
            ("tradingsymbol", "INF174K01LS2"),
            ("name", "Kotak Emerging Equity"),
            ("amc", "KotakMahindraMF"),
        ]);

        let names: Vec<&str> = record.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["tradingsymbol", "name", "amc"]);
    }

    #[test]
    fn test_record_duplicate_key_updates_value_keeps_position() {
        let mut record = Record::new();
        record.insert("a".to_string(), "1".to_string());
        record.insert("b".to_string(), "2".to_string());
        record.insert("a".to_string(), "3".to_string());

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("a"), Some("3"));
        let names: Vec<&str> = record.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_record_get_missing_field() {
        let record = Record::from_pairs([("name", "Fund")]);
        assert_eq!(record.get("absent"), None);
        assert_eq!(record.get_or_empty("absent"), "");
    }

    #[test]
    fn test_record_serializes_as_ordered_object() {
        let record = Record::from_pairs([("z", "first"), ("a", "second")]);

        let json = serde_json::to_string(&record).expect("Failed to serialize Record");
        // Source column order wins over alphabetical order
        assert_eq!(json, r#"{"z":"first","a":"second"}"#);
    }

    #[test]
    fn test_dataset_preserves_record_order() {
        let dataset = Dataset::from_records(vec![
            Record::from_pairs([("name", "A")]),
            Record::from_pairs([("name", "B")]),
            Record::from_pairs([("name", "C")]),
        ]);

        assert_eq!(dataset.len(), 3);
        let names: Vec<&str> = dataset.iter().map(|r| r.get_or_empty("name")).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::empty();
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
    }

    #[test]
    fn test_dataset_serializes_as_array() {
        let dataset = Dataset::from_records(vec![Record::from_pairs([("name", "A")])]);
        let json = serde_json::to_string(&dataset).expect("Failed to serialize Dataset");
        assert_eq!(json, r#"[{"name":"A"}]"#);
    }
}
