use serde::{Deserialize, Serialize};

/// Parameters for the stratospheric burden.
///
/// Particles injected in a year stay aloft for exactly `residence_time` years
/// and then fall out all at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurdenParameters {
    /// Years a cohort of particles stays in the stratosphere/mesosphere
    /// unit: yr
    /// default: 30
    pub residence_time: usize,
}

impl Default for BurdenParameters {
    fn default() -> Self {
        Self { residence_time: 30 }
    }
}
