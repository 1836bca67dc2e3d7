// ============================================================================
// Transactional Key-Value Store
// ============================================================================
//
// Owns the map, the record count and the undo log. Mutations push their
// undo record first and then touch the map; BEGIN/COMMIT/ROLLBACK work on
// the log alone.
//
// ============================================================================

use super::InMemoryStore;
use crate::config::{CommitMode, StoreConfig};
use crate::result::RecordTable;
use crate::transaction::{UndoLog, UndoRecord};
use log::{debug, trace, warn};
use std::collections::HashMap;
use std::fmt::Display;

/// In-memory key-value store with nested transactions
///
/// # Examples
///
/// ```
/// use memokv::{InMemoryStore, KeyValueStore};
///
/// let mut store = KeyValueStore::new();
/// store.set("a", 1);
///
/// store.begin();
/// store.set("a", 2);
/// store.del("a");
/// store.rollback();
///
/// assert_eq!(store.get("a"), Some(&1));
/// assert_eq!(store.count(None), 1);
/// ```
#[derive(Debug, Clone)]
pub struct KeyValueStore<V> {
    entries: HashMap<String, V>,
    record_count: usize,
    undo_log: UndoLog<V>,
    begin_depth: usize,
    config: StoreConfig,
}

impl<V: Clone + PartialEq> Default for KeyValueStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + PartialEq> KeyValueStore<V> {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            entries: HashMap::new(),
            record_count: 0,
            undo_log: UndoLog::new(),
            begin_depth: 0,
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Open a (possibly nested) transaction scope
    pub fn begin(&mut self) {
        self.undo_log.push(UndoRecord::Begin);
        self.begin_depth += 1;
        debug!("BEGIN: depth={}", self.begin_depth);
    }

    /// Make pending mutations permanent according to the configured `CommitMode`
    pub fn commit(&mut self) {
        match self.config.commit_mode {
            CommitMode::Flatten => {
                // begin_depth is intentionally left as is
                self.undo_log.clear();
            }
            CommitMode::Nested => {
                if self.begin_depth > 0 && self.undo_log.remove_top_begin() {
                    self.begin_depth -= 1;
                }
                if self.begin_depth == 0 {
                    self.undo_log.clear();
                }
            }
        }
        debug!(
            "COMMIT ({}): depth={}, pending={}",
            self.config.commit_mode,
            self.begin_depth,
            self.undo_log.len()
        );
    }

    /// Revert every mutation back to the most recent open `begin`, then close
    /// that scope. No-op outside a transaction.
    pub fn rollback(&mut self) {
        if self.begin_depth == 0 || self.undo_log.is_empty() {
            debug!("ROLLBACK: nothing to roll back");
            return;
        }

        let mut reverted = 0usize;
        loop {
            if self.undo_log.peek_is_begin() {
                self.undo_log.pop();
                self.begin_depth -= 1;
                break;
            }

            let Some(record) = self.undo_log.pop() else {
                warn!(
                    "ROLLBACK: undo log exhausted after {} record(s) without a BEGIN marker (depth={})",
                    reverted, self.begin_depth
                );
                break;
            };

            trace!("ROLLBACK: {}", record);
            record.revert(&mut self.entries, &mut self.record_count);
            reverted += 1;
        }

        debug_assert_eq!(self.record_count, self.entries.len());
        debug!(
            "ROLLBACK: reverted {} record(s), depth={}",
            reverted, self.begin_depth
        );
    }

    /// Number of open transaction scopes
    pub fn begin_depth(&self) -> usize {
        self.begin_depth
    }

    /// True while at least one scope is open
    pub fn in_transaction(&self) -> bool {
        self.begin_depth > 0
    }

    /// Records that a rollback could still revert, markers included
    pub fn pending_undo(&self) -> usize {
        self.undo_log.len()
    }

    pub fn undo_log(&self) -> &UndoLog<V> {
        &self.undo_log
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.record_count
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Read-only view of every entry
    pub fn entries(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V: Clone + PartialEq> InMemoryStore<V> for KeyValueStore<V> {
    fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    fn set(&mut self, key: &str, value: V) {
        let prior = self.entries.get(key).cloned();
        if prior.is_none() {
            self.record_count += 1;
        }
        self.undo_log.push(UndoRecord::Set {
            key: key.to_string(),
            prior,
        });

        self.entries.insert(key.to_string(), value);
    }

    fn del(&mut self, key: &str) {
        let Some(prior) = self.entries.remove(key) else {
            return;
        };

        self.undo_log.push(UndoRecord::Del {
            key: key.to_string(),
            prior,
        });
        self.record_count -= 1;
    }

    fn keys(&self, with_value: Option<&V>) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, v)| with_value.is_none_or(|wanted| *v == wanted))
            .map(|(k, _)| k.clone())
            .collect()
    }

    fn values(&self) -> Vec<V> {
        let mut values = Vec::with_capacity(self.record_count);
        values.extend(self.entries.values().cloned());
        values
    }

    fn count(&self, with_value: Option<&V>) -> usize {
        match with_value {
            None => self.record_count,
            Some(wanted) => self.entries.values().filter(|v| *v == wanted).count(),
        }
    }

    fn show(&self, max_records: usize) -> RecordTable
    where
        V: Display,
    {
        let mut sorted: Vec<(&String, &V)> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let rows = sorted
            .iter()
            .take(max_records)
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>();
        let omitted = sorted.len() - rows.len();

        RecordTable::new(rows, omitted)
    }
}
