//! Reentry Injection Component
//!
//! Computes the number of satellites burning up on reentry each year and the Al2O3
//! particle mass they inject into the upper atmosphere.
//!
//! # Outputs
//!
//! - `Reentries|Satellites` (1 / yr)
//! - `Emissions|Al2O3` (t / yr)

use crate::parameters::{ReentryParameters, KG_PER_METRIC_TON};
use alumina_core::component::{Component, InputState, OutputState, RequirementDefinition};
use alumina_core::errors::{AluminaError, AluminaResult};
use alumina_core::standard_variables::{VAR_AL2O3_INJECTION, VAR_REENTRY_COUNT};
use alumina_core::timeseries::{FloatValue, Time};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Exponentially growing reentry flux
///
/// See [`ReentryParameters`] for the governing equation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReentryInjection {
    parameters: ReentryParameters,
}

impl ReentryInjection {
    pub fn new() -> Self {
        Self::from_parameters(ReentryParameters::default())
    }

    pub fn from_parameters(parameters: ReentryParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &ReentryParameters {
        &self.parameters
    }

    /// Satellites reentering during year `year_index` (0-based)
    pub fn reentries(&self, year_index: u32) -> FloatValue {
        self.parameters.baseline_reentries
            * (1.0 + self.parameters.growth_rate).powf(FloatValue::from(year_index))
    }

    /// Al2O3 mass injected during year `year_index` (0-based)
    /// unit: t
    pub fn annual_injection(&self, year_index: u32) -> FloatValue {
        self.reentries(year_index) * self.parameters.al2o3_per_satellite / KG_PER_METRIC_TON
    }

    /// Number of whole years between `start_year` and `time`
    pub fn year_index(&self, time: Time) -> AluminaResult<u32> {
        let elapsed = (time - self.parameters.start_year).floor();
        if !(0.0..=FloatValue::from(u32::MAX)).contains(&elapsed) {
            return Err(AluminaError::TimeOutOfRange {
                time,
                start: self.parameters.start_year,
                end: FloatValue::INFINITY,
            });
        }
        Ok(elapsed as u32)
    }
}

impl Default for ReentryInjection {
    fn default() -> Self {
        Self::new()
    }
}

#[typetag::serde]
impl Component for ReentryInjection {
    fn definitions(&self) -> Vec<RequirementDefinition> {
        vec![
            RequirementDefinition::scalar_output(VAR_REENTRY_COUNT.name, VAR_REENTRY_COUNT.unit),
            RequirementDefinition::scalar_output(
                VAR_AL2O3_INJECTION.name,
                VAR_AL2O3_INJECTION.unit,
            ),
        ]
    }

    fn solve(
        &mut self,
        t_current: Time,
        _t_next: Time,
        _input_state: &InputState,
    ) -> AluminaResult<OutputState> {
        let year_index = self.year_index(t_current)?;

        Ok(HashMap::from([
            (VAR_REENTRY_COUNT.name.to_string(), self.reentries(year_index)),
            (
                VAR_AL2O3_INJECTION.name.to_string(),
                self.annual_injection(year_index),
            ),
        ]))
    }
}
