use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use sysreport::cli::Args;
use sysreport::report::ReportGenerator;
use sysreport::style::Theme;

fn main() -> Result<()> {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    initialize_logging(args.verbose)?;

    info!("Generating system report");

    let theme = Theme::new(!args.no_color);
    let mut generator = ReportGenerator::new(theme);

    // The identity read inside generate is the only fatal step; its error
    // propagates here and sets the non-zero exit status
    let stdout = io::stdout();
    generator
        .generate(&mut stdout.lock())
        .context("Failed to generate system report")?;

    Ok(())
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    // Stdout carries the report, so all diagnostics go to stderr
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}
