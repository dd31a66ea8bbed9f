//! Console reports for the scenarios

use crate::scenarios::{CouplingRecord, ForecastPoint};
use std::io::{self, Write};

const RULE_WIDTH: usize = 60;

/// Write the yearly coupling table
///
/// ```text
/// Year   | Al Burden (MT)  | Coupling Coeff (χ)   | Risk Level
/// ------------------------------------------------------------
/// 2025   | 15.00           | 0.00                 | Nominal
/// ```
pub fn write_coupling_table<W: Write>(out: &mut W, records: &[CouplingRecord]) -> io::Result<()> {
    writeln!(
        out,
        "{:<6} | {:<15} | {:<20} | {}",
        "Year", "Al Burden (MT)", "Coupling Coeff (χ)", "Risk Level"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for record in records {
        writeln!(
            out,
            "{:<6} | {:<15.2} | {:<20.2} | {}",
            record.year, record.burden, record.coefficient, record.risk
        )?;
    }
    Ok(())
}

pub fn write_forecast_summary<W: Write>(out: &mut W, point: &ForecastPoint) -> io::Result<()> {
    writeln!(
        out,
        "{} Forecasted Annual Al2O3 Injection: {:.2} Metric Tons",
        point.year, point.injection
    )?;
    writeln!(
        out,
        "{} Forecasted Total Atmospheric Burden: {:.2} Metric Tons",
        point.year, point.burden
    )
}
