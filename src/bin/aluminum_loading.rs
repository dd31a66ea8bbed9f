//! Simulate Al2O3 loading and summarise the forecast year

use alumina::report::write_forecast_summary;
use alumina::scenarios::{LoadingScenario, ScenarioConfig};
use alumina::AluminaResult;
use clap::Parser;
use log::error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "aluminum-loading")]
#[command(about = "Forecast the Al2O3 injection and atmospheric burden from satellite reentry")]
struct Args {
    /// Scenario configuration (TOML). Keys that are left out keep the values of the
    /// reference run (25 years from 2024, 20% annual growth, forecast for 2040)
    config: Option<PathBuf>,
}

fn load_scenario(args: &Args) -> AluminaResult<LoadingScenario> {
    let reference = LoadingScenario::reference();
    match &args.config {
        Some(path) => LoadingScenario::overlay_path(&reference, path),
        None => Ok(reference),
    }
}

fn run(args: Args) -> AluminaResult<()> {
    let scenario = load_scenario(&args)?;
    let series = scenario.run()?;
    let point = scenario.forecast(&series)?;
    write_forecast_summary(&mut io::stdout().lock(), &point)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
