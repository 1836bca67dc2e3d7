use anyhow::{Context, Result};
use memokv::Session;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::warn;

const PROMPT: &str = "memokv> ";

/// Totals for one run over an input stream
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub failed: usize,
    /// 1-based line of the first failed command
    pub first_error_line: Option<usize>,
    pub exited: bool,
}

pub struct App {
    pub session: Session,
    /// Print a prompt before each line and never stop on errors
    pub interactive: bool,
    /// Keep reading after a failed command in non-interactive mode
    pub keep_going: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            interactive: false,
            keep_going: false,
        }
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Execute every command of a script file
    pub fn run_script<W: Write>(&mut self, path: &Path, output: &mut W) -> Result<RunSummary> {
        let file = File::open(path)
            .with_context(|| format!("failed to open script {}", path.display()))?;
        self.run(BufReader::new(file), output)
    }

    /// Read commands line by line until EOF or `EXIT`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let mut lines = input.lines();
        let mut line_no = 0usize;

        loop {
            if self.interactive {
                write!(output, "{}", PROMPT)?;
                output.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("failed to read command")?;
            line_no += 1;

            match self.session.execute(&line) {
                Ok(None) => {}
                Ok(Some(reply)) => {
                    summary.executed += 1;
                    writeln!(output, "{}", reply)?;
                    if reply.is_exit() {
                        summary.exited = true;
                        break;
                    }
                }
                Err(e) => {
                    summary.failed += 1;
                    summary.first_error_line.get_or_insert(line_no);
                    writeln!(output, "ERR {}", e)?;

                    if !self.interactive && !self.keep_going {
                        warn!("stopping at line {}: {}", line_no, e);
                        break;
                    }
                }
            }
        }

        Ok(summary)
    }
}
