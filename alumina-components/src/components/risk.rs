//! Risk classification of the coupling coefficient

use alumina_core::timeseries::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk band of a coupling coefficient
///
/// Bands are ordered by severity and include their lower bound:
///
/// | band | χ |
/// |---|---|
/// | Nominal | χ < 0.5 |
/// | Incipient Coupling | 0.5 ≤ χ < 1.5 |
/// | Systemic Fragility | 1.5 ≤ χ < 3.0 |
/// | Cascade Failure | χ ≥ 3.0 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Nominal,
    IncipientCoupling,
    SystemicFragility,
    CascadeFailure,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Nominal,
        RiskLevel::IncipientCoupling,
        RiskLevel::SystemicFragility,
        RiskLevel::CascadeFailure,
    ];

    /// Classify a coupling coefficient
    ///
    /// Every value maps to exactly one band.
    /// NaN fails every comparison and lands in [`RiskLevel::CascadeFailure`].
    pub fn classify(chi: FloatValue) -> Self {
        if chi < RiskLevel::IncipientCoupling.lower_bound() {
            RiskLevel::Nominal
        } else if chi < RiskLevel::SystemicFragility.lower_bound() {
            RiskLevel::IncipientCoupling
        } else if chi < RiskLevel::CascadeFailure.lower_bound() {
            RiskLevel::SystemicFragility
        } else {
            RiskLevel::CascadeFailure
        }
    }

    /// Smallest coefficient in this band
    pub fn lower_bound(&self) -> FloatValue {
        match self {
            RiskLevel::Nominal => FloatValue::NEG_INFINITY,
            RiskLevel::IncipientCoupling => 0.5,
            RiskLevel::SystemicFragility => 1.5,
            RiskLevel::CascadeFailure => 3.0,
        }
    }

    /// Label used in console reports
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Nominal => "Nominal",
            RiskLevel::IncipientCoupling => "Incipient Coupling",
            RiskLevel::SystemicFragility => "Systemic Fragility",
            RiskLevel::CascadeFailure => "CASCADE FAILURE",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
