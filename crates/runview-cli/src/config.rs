//! CLI configuration.

use std::path::PathBuf;

use clap::Parser;

/// RunView CLI - render stored pipeline runs as API responses
#[derive(Debug, Parser)]
#[command(name = "runview")]
#[command(about = "Render stored pipeline runs as API responses", long_about = None)]
pub struct Cli {
    /// JSON file holding one run record or an array of them (stdin if omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Pretty-print the response JSON
    #[arg(short, long)]
    pub pretty: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Record source; `None` reads stdin.
    pub input: Option<PathBuf>,

    /// Pretty-print output.
    pub pretty: bool,

    /// Default log filter directive.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            pretty: false,
            log_level: "warn".to_string(),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            pretty: cli.pretty,
            log_level: cli.log_level,
        }
    }
}
