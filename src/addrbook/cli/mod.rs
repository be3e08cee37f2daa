//! # CLI Layer
//!
//! The only place that knows about the terminal: flags, log output, the prompt, and
//! reading commands from stdin.
//!
//! - `setup`: clap definitions and logging initialisation
//! - `repl`: the read, execute, print loop
//! - `render`: colors for command messages

mod render;
mod repl;
mod setup;

use addrbook::api::AddressBookApi;
use addrbook::config::{config_dir, BookConfig};
use addrbook::error::Result;
use addrbook::store::fs::FileStore;
use clap::Parser;
use setup::{init_logging, Cli};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

pub const DATA_FILE_ENV: &str = "ADDRBOOK_FILE";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let config = BookConfig::load(config_dir()?)?;
    let data_file = resolve_data_file(cli.file, &config);
    tracing::debug!(path = %data_file.display(), "using data file");

    let api = AddressBookApi::open(FileStore::new(data_file))?
        .with_upcoming_days(config.upcoming_days);

    let stdin = io::stdin();
    repl::run(api, stdin.lock(), io::stdout())?;
    Ok(())
}

/// `--file`, then `$ADDRBOOK_FILE`, then the config file.
fn resolve_data_file(flag: Option<PathBuf>, config: &BookConfig) -> PathBuf {
    flag.or_else(|| std::env::var_os(DATA_FILE_ENV).map(PathBuf::from))
        .unwrap_or_else(|| config.data_file.clone())
}
