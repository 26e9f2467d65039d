//! Swatchmaker - render a labeled colour swatch chart as SVG.
//!
//! Reads a colour scheme and a grid layout (both YAML) and writes an SVG with
//! one labeled swatch per populated layout cell.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swatchmaker::cli::RenderArgs;
use swatchmaker::constants::APP_NAME;
use swatchmaker::SwatchError;

/// Swatchmaker - render a colour scheme as a labeled SVG swatch chart
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    render: RenderArgs,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let summary = cli
        .render
        .execute()
        .with_context(|| format!("{APP_NAME} could not render {}", cli.render.output.display()))?;

    println!(
        "✓ Wrote {} swatch(es) to: {}",
        summary.swatch_count,
        summary.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the result line
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<SwatchError>()
                .map_or(1, SwatchError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
