use std::fmt;

/// How `commit` treats nested scopes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitMode {
    /// Discard the whole undo log at once, whatever the nesting depth.
    /// Begin depth is left as it was.
    #[default]
    Flatten,

    /// Close only the innermost scope. Its records join the enclosing scope,
    /// so an outer rollback still reverts them.
    Nested,
}

impl fmt::Display for CommitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitMode::Flatten => write!(f, "flatten"),
            CommitMode::Nested => write!(f, "nested"),
        }
    }
}

/// Store configuration
///
/// # Examples
///
/// ```
/// use memokv::{CommitMode, KeyValueStore, StoreConfig};
///
/// let config = StoreConfig::new()
///     .commit_mode(CommitMode::Nested)
///     .show_limit(20);
///
/// let store: KeyValueStore<i64> = KeyValueStore::with_config(config);
/// assert_eq!(store.config().show_limit, 20);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Commit semantics
    pub commit_mode: CommitMode,

    /// Default number of rows rendered by `show`
    pub show_limit: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self {
            commit_mode: CommitMode::Flatten,
            show_limit: 100,
        }
    }

    /// Set the commit mode
    pub fn commit_mode(mut self, mode: CommitMode) -> Self {
        self.commit_mode = mode;
        self
    }

    /// Set the default `show` row limit
    pub fn show_limit(mut self, limit: usize) -> Self {
        self.show_limit = limit;
        self
    }
}
