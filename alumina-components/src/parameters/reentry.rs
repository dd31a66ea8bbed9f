//! Reentry parameters
//!
//! Parameters for the number of satellites reentering each year and the particle mass
//! each one leaves behind.

use alumina_core::timeseries::{FloatValue, Time};
use serde::{Deserialize, Serialize};

pub const KG_PER_METRIC_TON: FloatValue = 1000.0;

/// Parameters for the annual Al2O3 injection.
///
/// The number of reentries grows exponentially from a baseline:
///
/// $$I(y) = \frac{S_0 (1 + g)^y m}{1000}$$
///
/// where $y$ is the number of years since `start_year`.
/// Growth is unbounded; no saturation of the launch market is modelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReentryParameters {
    /// Satellites reentering during the first year ($S_0$)
    /// unit: 1 / yr
    /// default: 500
    pub baseline_reentries: FloatValue,

    /// Fractional annual growth in reentries ($g$)
    /// unit: 1 / yr
    /// default: 0.15
    pub growth_rate: FloatValue,

    /// Al2O3 nanoparticle mass left by each reentering satellite ($m$)
    /// Based on a ~250 kg satellite
    /// unit: kg
    /// default: 30
    pub al2o3_per_satellite: FloatValue,

    /// Calendar year of the first injection (year index 0)
    /// default: 2024
    pub start_year: Time,
}

impl Default for ReentryParameters {
    fn default() -> Self {
        Self {
            baseline_reentries: 500.0,
            growth_rate: 0.15,
            al2o3_per_satellite: 30.0,
            start_year: 2024.0,
        }
    }
}
