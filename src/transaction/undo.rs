// ============================================================================
// Undo Records
// ============================================================================
//
// Command Pattern in reverse: every mutation leaves behind a record that
// knows how to put the map back the way it was. Scope boundaries live in the
// same stream as `Begin` markers.
//
// ============================================================================

use std::collections::HashMap;

/// A single entry of the undo log
#[derive(Debug, Clone, PartialEq)]
pub enum UndoRecord<V> {
    /// Start of one transaction scope
    Begin,

    /// A `set` happened on `key`; `prior` is what it held before, if anything
    Set { key: String, prior: Option<V> },

    /// A `del` removed `key`, which held `prior`
    Del { key: String, prior: V },
}

impl<V> UndoRecord<V> {
    /// Check if this record is a scope boundary
    pub fn is_begin(&self) -> bool {
        matches!(self, UndoRecord::Begin)
    }

    /// Key touched by the logged mutation (`None` for markers)
    pub fn key(&self) -> Option<&str> {
        match self {
            UndoRecord::Begin => None,
            UndoRecord::Set { key, .. } | UndoRecord::Del { key, .. } => Some(key),
        }
    }

    /// Apply the inverse of the logged mutation to `entries`.
    ///
    /// `record_count` moves only when an entry actually appears or disappears,
    /// so it stays equal to `entries.len()`. Markers are a no-op.
    pub fn revert(self, entries: &mut HashMap<String, V>, record_count: &mut usize) {
        match self {
            UndoRecord::Begin => {}
            UndoRecord::Set { key, prior: None } => {
                if entries.remove(&key).is_some() {
                    *record_count -= 1;
                }
            }
            UndoRecord::Set { key, prior: Some(value) }
            | UndoRecord::Del { key, prior: value } => {
                if entries.insert(key, value).is_none() {
                    *record_count += 1;
                }
            }
        }
    }
}

impl<V> std::fmt::Display for UndoRecord<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UndoRecord::Begin => write!(f, "BEGIN"),
            UndoRecord::Set { key, prior: None } => write!(f, "UNDO SET {} (new)", key),
            UndoRecord::Set { key, .. } => write!(f, "UNDO SET {}", key),
            UndoRecord::Del { key, .. } => write!(f, "UNDO DEL {}", key),
        }
    }
}
