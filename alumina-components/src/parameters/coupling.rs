//! Coupling parameters
//!
//! Parameters for the electromagnetic coupling coefficient of the Al2O3 burden.

use alumina_core::timeseries::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the coupling coefficient.
///
/// Below the critical threshold $T$ the coupling factor grows quadratically with the burden
/// $B$. At and above the threshold it enters a logarithmic cascade regime:
///
/// $$f(B) = \begin{cases} (B/T)^2 & B < T \\ 1 + k \log_{10}(B/T + c) & B \ge T \end{cases}$$
///
/// with gain $k$ (`cascade_gain`) and offset $c$ (`cascade_offset`).
/// The coefficient is $\chi = f(B) \cdot s$ for solar activity index $s$.
///
/// With the default offset of 1 the two regimes do not meet at the threshold:
/// the cascade regime starts at $1 + k \log_{10}(2)$.
/// An offset of 0 makes the factor continuous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouplingParameters {
    /// Burden at which the mesospheric conductivity starts to change significantly
    /// unit: t
    /// default: 1000
    pub critical_threshold: FloatValue,

    /// Solar activity multiplier ($s$)
    /// 1.0 is the baseline, 5.0 an extreme solar maximum
    /// unit: dimensionless
    /// default: 1.0
    pub solar_activity_index: FloatValue,

    /// Multiplier on the logarithm in the cascade regime ($k$)
    /// unit: dimensionless
    /// default: 2.0
    pub cascade_gain: FloatValue,

    /// Offset added to the burden ratio inside the logarithm ($c$)
    /// unit: dimensionless
    /// default: 1.0
    pub cascade_offset: FloatValue,
}

impl Default for CouplingParameters {
    fn default() -> Self {
        Self {
            critical_threshold: 1000.0,
            solar_activity_index: 1.0,
            cascade_gain: 2.0,
            cascade_offset: 1.0,
        }
    }
}
