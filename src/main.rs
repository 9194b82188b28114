use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jestsay::{app, quip, Cli, Config, Settings};

/// Environment variable holding the log filter (e.g. `JESTSAY_LOG=debug`).
const LOG_ENV: &str = "JESTSAY_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref());
    let settings = Settings::resolve(&cli, config)?;
    tracing::debug!(?settings, "resolved settings");

    let piped = quip::read_piped_quip()?;
    let mut rendered = app::run(&settings, piped)?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
