use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tasklist",
    version,
    about = "Tasklist: in-memory todo list driven from the terminal"
)]
pub struct GlobalCli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// TOML file with `id_prefix`, `default_filter` and `[[tasks]]`.
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Initial filter: All, Active or Completed.
    #[arg(long = "filter")]
    pub filter: Option<String>,

    /// Number new tasks `todo-3`, `todo-4`, ... instead of random ids.
    #[arg(long = "sequential-ids")]
    pub sequential_ids: bool,
}

pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::GlobalCli;

    #[test]
    fn flags_parse() {
        let cli = GlobalCli::parse_from([
            "tasklist",
            "-vv",
            "--filter",
            "Active",
            "--sequential-ids",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.quiet, 0);
        assert_eq!(cli.filter.as_deref(), Some("Active"));
        assert!(cli.sequential_ids);
        assert!(cli.config.is_none());
    }
}
