use crate::result::RecordTable;
use std::fmt::Display;

/// Key-value store contract - read/write primitives plus read-only
/// enumeration consumed by display and command layers
pub trait InMemoryStore<V> {
    /// Look up the value stored under `key`
    fn get(&self, key: &str) -> Option<&V>;

    /// Insert or overwrite `key`
    fn set(&mut self, key: &str, value: V);

    /// Remove `key`; missing keys are ignored
    fn del(&mut self, key: &str);

    /// All keys, or only those whose value equals `with_value`
    fn keys(&self, with_value: Option<&V>) -> Vec<String>;

    /// All stored values
    fn values(&self) -> Vec<V>;

    /// Number of records, or of records equal to `with_value`
    fn count(&self, with_value: Option<&V>) -> usize;

    /// Up to `max_records` entries sorted by key
    fn show(&self, max_records: usize) -> RecordTable
    where
        V: Display;
}
