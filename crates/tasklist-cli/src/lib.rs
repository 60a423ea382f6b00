pub mod cli;
pub mod repl;

use std::ffi::OsString;
use std::io;

use anyhow::Context;
use clap::Parser;
use tasklist_core::{AppConfig, TaskFilter, TaskSession};
use tracing::{debug, info};

#[tracing::instrument(skip_all)]
pub fn run(raw_args: Vec<OsString>) -> anyhow::Result<()> {
    let cli = cli::GlobalCli::parse_from(raw_args);

    cli::init_tracing(cli.verbose, cli.quiet)?;

    info!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        "starting tasklist CLI"
    );

    let config = match cli.config.as_deref() {
        Some(path) => AppConfig::load(path)?,
        None => {
            debug!("no config file given, using built-in seed");
            AppConfig::default()
        }
    };

    let mut session = build_session(&config, cli.filter.as_deref(), cli.sequential_ids)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run_session(
        &mut session,
        stdin.lock(),
        &mut stdout.lock(),
        &mut io::stderr(),
    )?;

    info!("done");
    Ok(())
}

pub fn build_session(
    config: &AppConfig,
    filter: Option<&str>,
    sequential_ids: bool,
) -> anyhow::Result<TaskSession> {
    let session = if sequential_ids {
        config.session(config.sequential_ids())
    } else {
        config.session(config.random_ids())
    }
    .context("failed to start task session")?;

    match filter {
        Some(raw) => {
            let filter = TaskFilter::parse_loose(raw).context("invalid --filter")?;
            Ok(session.with_filter(filter))
        }
        None => Ok(session),
    }
}
