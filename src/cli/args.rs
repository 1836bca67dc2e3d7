use clap::{Parser, ValueEnum};
use memokv::{CommitMode, StoreConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "memokv")]
#[command(about = "In-memory key-value store with nested transactions")]
pub struct Cli {
    /// How COMMIT treats nested transactions
    #[arg(long, value_enum, default_value_t = CommitModeArg::Flatten)]
    pub commit_mode: CommitModeArg,

    /// Rows printed by SHOW when no limit is given
    #[arg(long, default_value_t = 100)]
    pub show_limit: usize,

    /// Execute commands from a file instead of an interactive prompt
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Keep executing a script after a failed command
    #[arg(long, requires = "script")]
    pub keep_going: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitModeArg {
    /// COMMIT discards all undo information at once
    Flatten,
    /// COMMIT closes only the innermost transaction
    Nested,
}

impl From<CommitModeArg> for CommitMode {
    fn from(arg: CommitModeArg) -> Self {
        match arg {
            CommitModeArg::Flatten => CommitMode::Flatten,
            CommitModeArg::Nested => CommitMode::Nested,
        }
    }
}

impl Cli {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new()
            .commit_mode(self.commit_mode.into())
            .show_limit(self.show_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["memokv"]).unwrap();
        let config = cli.store_config();
        assert_eq!(config.commit_mode, CommitMode::Flatten);
        assert_eq!(config.show_limit, 100);
        assert!(cli.script.is_none());
    }

    #[test]
    fn test_nested_mode_and_script() {
        let cli = Cli::try_parse_from([
            "memokv",
            "--commit-mode",
            "nested",
            "--show-limit",
            "5",
            "--script",
            "cmds.txt",
            "--keep-going",
        ])
        .unwrap();

        assert_eq!(cli.store_config().commit_mode, CommitMode::Nested);
        assert_eq!(cli.store_config().show_limit, 5);
        assert_eq!(cli.script, Some(PathBuf::from("cmds.txt")));
        assert!(cli.keep_going);
    }

    #[test]
    fn test_keep_going_requires_script() {
        assert!(Cli::try_parse_from(["memokv", "--keep-going"]).is_err());
    }
}
