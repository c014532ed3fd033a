//! RunView CLI - render stored pipeline runs as API responses.

use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod config;
mod error;
mod records;

use config::{Cli, Config};
use error::CliError;

fn main() {
    let config = Config::from(Cli::parse());

    if let Err(e) = run(&config) {
        tracing::error!(error = %e, "runview failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), CliError> {
    init_tracing(&config.log_level)?;

    let text = records::read_input(config.input.as_deref())?;
    let runs = records::parse_records(&text)?;
    let rendered = records::render(runs);
    println!("{}", records::to_json(&rendered, config.pretty)?);

    Ok(())
}

fn init_tracing(default_level: &str) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(|e| CliError::Logging(e.to_string()))
}
