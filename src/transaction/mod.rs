// ============================================================================
// Transaction Module
// ============================================================================
//
// Nested transactions over a single undo log:
// - every mutation pushes the record that reverses it
// - BEGIN pushes a marker
// - ROLLBACK pops and reverts up to the nearest marker
// - COMMIT discards undo information (see `CommitMode`)
//
// ============================================================================

pub mod undo_log;
pub mod undo;

pub use undo_log::UndoLog;
pub use undo::UndoRecord;
