mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use tracing::info;
use uptime_calculator::{OutputMode, Report, fallback_notice, resolve_uptimes};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let year = cli.year.unwrap_or_else(|| chrono::Local::now().year());
    info!(year, "computing allowed downtime");

    let resolved = resolve_uptimes(&cli.uptimes);
    if let Some(err) = &resolved.error {
        println!("{}", fallback_notice(err));
    }

    let report = Report::new(year, &resolved.uptimes);
    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("serializing report")?;
        println!("{json}");
    } else {
        let mode = if cli.debug {
            OutputMode::Precise
        } else {
            OutputMode::Rounded
        };
        print!("{}", report.render(mode));
    }

    Ok(())
}
