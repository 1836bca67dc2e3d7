mod cli;

use crate::cli::app::App;
use crate::cli::args::Cli;
use anyhow::{Result, bail};
use clap::Parser;
use memokv::Session;
use std::io;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.store_config();
    info!(
        "starting memokv (commit mode: {}, show limit: {})",
        config.commit_mode, config.show_limit
    );

    let session = Session::with_config(config);
    let mut stdout = io::stdout().lock();

    match &cli.script {
        Some(path) => {
            let mut app = App::new(session).keep_going(cli.keep_going);
            let summary = app.run_script(path, &mut stdout)?;
            info!(
                "script finished: {} executed, {} failed",
                summary.executed, summary.failed
            );
            if let Some(line) = summary.first_error_line {
                bail!("{} command(s) failed, first at line {}", summary.failed, line);
            }
        }
        None => {
            let mut app = App::new(session).interactive(true);
            app.run(io::stdin().lock(), &mut stdout)?;
        }
    }

    Ok(())
}
