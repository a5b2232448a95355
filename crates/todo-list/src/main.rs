//! CLI entry point for todo-list.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use todo_list_core::ToDoListManager;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use config::ShellConfig;
use shell::Shell;

mod config;
mod shell;

/// Interactive in-memory task list.
#[derive(Parser, Debug)]
#[command(
    name = "todo-list",
    version,
    about = "todo-list: add, complete, delete and view tasks from a prompt"
)]
struct Cli {
    /// Path to a TOML config file (defaults to the per-user config dir).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let Cli { config } = Cli::parse();
    install_tracing();

    let config = ShellConfig::load(config.as_deref())?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), ToDoListManager::new(), config).run()
}

fn install_tracing() {
    // Logs go to stderr so they never interleave with the prompt. RUST_LOG overrides.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}
