//! Widgetboard CLI.
//!
//! Two modes:
//! - **Shell mode**: `widgetboard [flags] COMMAND`, single command then exit
//! - **Pipe mode**: `cat script | widgetboard`, line-by-line from stdin

mod commands;
mod format;
mod parse;
mod pipe;

use std::path::Path;
use std::process;
use std::sync::Arc;

use tracing::debug;
use tracing_subscriber::EnvFilter;
use widgetboard_executor::{BoardConfig, Error, Executor, WidgetStore};

use commands::build_cli;
use format::{format_error, OutputMode};
use parse::matches_to_command;

fn main() {
    let matches = build_cli().get_matches();

    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            process::exit(1);
        }
    };
    init_tracing(&config.log_filter);
    debug!(?config, "configuration loaded");

    let executor = Executor::new(Arc::new(WidgetStore::with_config(config.store)));

    let exit_code = if matches.subcommand().is_some() {
        run_shell_mode(&matches, &executor, mode)
    } else {
        pipe::run_pipe(&executor, mode)
    };
    process::exit(exit_code);
}

fn load_config(matches: &clap::ArgMatches) -> Result<BoardConfig, Error> {
    match matches.get_one::<String>("config") {
        Some(path) => BoardConfig::from_file(Path::new(path)),
        None => {
            let cwd = std::env::current_dir().map_err(|e| Error::Io {
                reason: format!("failed to resolve working directory: {}", e),
            })?;
            BoardConfig::load_from_dir(&cwd)
        }
    }
}

// RUST_LOG wins over the configured filter.
fn init_tracing(log_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_shell_mode(matches: &clap::ArgMatches, executor: &Executor, mode: OutputMode) -> i32 {
    match matches_to_command(matches) {
        Ok(cmd) => {
            let ok = pipe::run_command(
                executor,
                cmd,
                mode,
                &mut std::io::stdout(),
                &mut std::io::stderr(),
            );
            if ok {
                0
            } else {
                1
            }
        }
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}
