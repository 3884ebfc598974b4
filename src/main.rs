use crate::checks::*;
use crate::config::Config;
use crate::display::*;
use crate::loaders::{Scenario, export_grades};
use crate::model::Records;
use clap::Parser;
use eyre::{Error, WrapErr};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{Level, info};

mod checks;
mod config;
mod display;
mod error;
mod loaders;
mod model;
mod stats;

const DEFAULT_CONFIG: &str = "unirecords.toml";

#[derive(Parser)]
#[command(author, version, about)]
struct Options {
    #[arg(short, long, value_name = "FILE")]
    /// Use FILE instead of unirecords.toml
    config: Option<PathBuf>,
    #[arg(short, long, value_name = "FILE")]
    /// Export grade records to FILE as CSV
    export: Option<PathBuf>,
    #[arg(short = 'n', long)]
    /// Do not write the export file
    dry_run: bool,
    #[arg(short, action = clap::ArgAction::Count)]
    /// Set verbosity level
    verbose: u8,
    /// Scenario to replay
    scenario: PathBuf,
}

fn load_config(path: Option<&Path>) -> Result<Config, Error> {
    match path {
        Some(path) => Config::load(path),
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load(Path::new(DEFAULT_CONFIG)),
        None => Ok(Config::default()),
    }
}

fn main() -> Result<(), Error> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = load_config(options.config.as_deref())?;
    let scenario = Scenario::load(&options.scenario)?;
    let mut records = Records::new();
    let skipped = scenario.apply(&mut records, config.run.keep_going)?;
    if let Some(path) = &options.export {
        if options.dry_run {
            info!(path = %path.display(), "dry run, not exporting grade records");
        } else {
            let file = File::create(path)
                .wrap_err_with(|| format!("cannot create {}", path.display()))?;
            export_grades(&records, file)?;
            info!(path = %path.display(), "grade records exported");
        }
    }
    let faculties = config.faculties();
    display_roster(&records, &faculties);
    display_averages(&records, &faculties);
    display_honors(&records, &faculties);
    display_available_courses(&records, &faculties, &config.semesters());
    if config.report.distribution {
        display_distribution(&records);
    }
    check_full_courses(&records);
    check_ungraded(&records);
    ensure_no_skipped(skipped)
}
