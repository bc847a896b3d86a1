//! gyesan CLI entry point.

use anyhow::Result;
use clap::Parser;
use service_cli::cli::Cli;
use service_cli::commands;
use service_cli::config::CliConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::resolve(cli.config.as_deref())?.with_env_override()?;

    // RUST_LOG wins over the configured level; logs go to stderr so JSON
    // output on stdout stays parseable.
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    config.validate()?;
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let format = cli.format.unwrap_or(config.output_format);
    let report = commands::run(&cli.command, &config)?;
    println!("{}", report.render(format)?);

    Ok(())
}
