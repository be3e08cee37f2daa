use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ADDRBOOK_LOG";

#[derive(Parser, Debug)]
#[command(name = "addrbook")]
#[command(version)]
#[command(about = "Interactive address book with birthday reminders", long_about = None)]
pub struct Cli {
    /// Data file to load and save (defaults to the configured file, addressbook.json)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Logs go to stderr so stdout only carries the conversation.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "addrbook=debug" } else { "warn" };
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
