//! Print the yearly Al2O3 burden and coupling risk

use alumina::report::write_coupling_table;
use alumina::scenarios::{CouplingScenario, ScenarioConfig};
use alumina::AluminaResult;
use clap::Parser;
use log::error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "accumulation-with-coupling")]
#[command(about = "Simulate Al2O3 accumulation from satellite reentry and tabulate the coupling risk")]
struct Args {
    /// Scenario configuration (TOML). Keys that are left out keep their defaults
    config: Option<PathBuf>,
}

fn run(args: Args) -> AluminaResult<()> {
    let scenario = match args.config {
        Some(path) => CouplingScenario::from_path(path)?,
        None => CouplingScenario::default(),
    };
    let records = scenario.run()?;
    write_coupling_table(&mut io::stdout().lock(), &records)?;
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
