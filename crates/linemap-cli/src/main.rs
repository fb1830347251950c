//! linemap: line and offset queries over source files.

mod cli;
mod config;
mod error;
mod output;
mod query;

use clap::Parser;
use cli::Args;
use config::Config;
use miette::Result;
use output::Formatter;

/// Environment variable holding the log filter, e.g. `LINEMAP_LOG=linemap=trace`.
const LOG_ENV: &str = "LINEMAP_LOG";

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = Config::resolve(&args)?;
    let output = query::run(&args.command, &config)?;

    print!("{}", Formatter::new(config.output).format(&output));
    Ok(())
}
