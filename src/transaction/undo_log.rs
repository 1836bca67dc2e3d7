// ============================================================================
// Undo Log
// ============================================================================
//
// One flat LIFO stack. `Begin` markers interleave with mutation records in
// the order operations happened; a scope is everything above its marker.
//
// ============================================================================

use super::UndoRecord;

#[derive(Debug, Clone)]
pub struct UndoLog<V> {
    records: Vec<UndoRecord<V>>,
}

impl<V> Default for UndoLog<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> UndoLog<V> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record to the top
    pub fn push(&mut self, record: UndoRecord<V>) {
        self.records.push(record);
    }

    /// True iff the log is non-empty and its top is a scope boundary
    pub fn peek_is_begin(&self) -> bool {
        self.records.last().is_some_and(UndoRecord::is_begin)
    }

    /// Remove and return the top record.
    ///
    /// Callers check `is_empty` first; an empty log yields `None`.
    pub fn pop(&mut self) -> Option<UndoRecord<V>> {
        self.records.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Drop every record, markers included
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Remove the most recent `Begin` marker, leaving the records above it in
    /// place so they join the enclosing scope.
    ///
    /// Returns `false` if the log holds no marker.
    pub fn remove_top_begin(&mut self) -> bool {
        match self.records.iter().rposition(UndoRecord::is_begin) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of `Begin` markers currently in the log
    pub fn marker_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_begin()).count()
    }

    /// Records from top to bottom
    pub fn iter(&self) -> impl Iterator<Item = &UndoRecord<V>> {
        self.records.iter().rev()
    }
}
