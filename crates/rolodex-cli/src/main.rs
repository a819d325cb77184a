mod commands;
mod error;
mod render;
mod shell;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::completions;
use crate::error::{exit_code_for, report_error};
use crate::shell::{Shell, ShellOptions};
use rolodex_config as config;
use rolodex_core::domain::AddressBook;

#[derive(Debug, Parser)]
#[command(name = "rolodex", version, about = "rolodex address book shell")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    /// Reference date for birthday lookups (defaults to the local date)
    #[arg(long, value_name = "YYYY-MM-DD")]
    today: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        today,
        command,
    } = cli;

    if let Some(Command::Completions(args)) = command {
        return completions::emit(args);
    }

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let today = match today {
        Some(raw) => util::parse_reference_date(&raw)?,
        None => util::local_today(),
    };
    debug!(%today, window_days = app_config.birthday_window_days, "reference date");

    let shell = Shell::new(
        &app_config.shell,
        ShellOptions {
            today,
            window_days: app_config.birthday_window_days,
            json,
        },
    );
    let mut book = AddressBook::new();
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    shell
        .run(&mut book, stdin, stdout)
        .with_context(|| "run shell")
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .try_init();
}
