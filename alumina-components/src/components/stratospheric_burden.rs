//! Stratospheric Burden Component
//!
//! Tracks the Al2O3 particle mass aloft using a buffer of yearly cohorts.
//!
//! # Inputs
//!
//! - `Emissions|Al2O3` (t / yr) - mass injected during the year
//!
//! # States (tracked between timesteps)
//!
//! - one cohort per year of residence time, held in a [`CohortRing`]
//!
//! # Outputs
//!
//! - `Atmospheric Burden|Al2O3` (t) - mass aloft, including this year's injection
//! - `Fallout|Al2O3` (t / yr) - mass leaving the atmosphere at the end of the year

use crate::parameters::BurdenParameters;
use alumina_core::cohort::CohortRing;
use alumina_core::component::{Component, InputState, OutputState, RequirementDefinition};
use alumina_core::errors::{AluminaError, AluminaResult};
use alumina_core::standard_variables::{VAR_AL2O3_BURDEN, VAR_AL2O3_FALLOUT, VAR_AL2O3_INJECTION};
use alumina_core::timeseries::{FloatValue, Time};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed residence time burden model
///
/// # Algorithm
///
/// For each year:
///
/// 1. Add the year's injection to the youngest cohort
/// 2. Sample the burden as the sum of all cohorts
/// 3. Age the cohorts, discarding the cohort that has been aloft for the full residence time
///
/// The burden in year $n$ is therefore
/// $$B_n = \sum_{k=\max(0, n-R+1)}^{n} I_k$$
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BurdenState")]
pub struct StratosphericBurden {
    parameters: BurdenParameters,
    cohorts: CohortRing,
}

/// Serialised form, checked before it becomes a [`StratosphericBurden`]
#[derive(Deserialize)]
struct BurdenState {
    parameters: BurdenParameters,
    cohorts: CohortRing,
}

impl TryFrom<BurdenState> for StratosphericBurden {
    type Error = AluminaError;

    fn try_from(state: BurdenState) -> Result<Self, Self::Error> {
        if state.cohorts.residence_time() != state.parameters.residence_time {
            return Err(AluminaError::invalid_parameter(
                "cohorts",
                format!(
                    "{} cohorts stored for a residence time of {} years",
                    state.cohorts.residence_time(),
                    state.parameters.residence_time
                ),
            ));
        }
        Ok(Self {
            parameters: state.parameters,
            cohorts: state.cohorts,
        })
    }
}

impl StratosphericBurden {
    pub fn new() -> AluminaResult<Self> {
        Self::from_parameters(BurdenParameters::default())
    }

    /// Create an empty atmosphere
    ///
    /// Fails if the residence time is zero.
    pub fn from_parameters(parameters: BurdenParameters) -> AluminaResult<Self> {
        let cohorts = CohortRing::new(parameters.residence_time)?;
        Ok(Self {
            parameters,
            cohorts,
        })
    }

    pub fn parameters(&self) -> &BurdenParameters {
        &self.parameters
    }

    pub fn cohorts(&self) -> &CohortRing {
        &self.cohorts
    }

    /// Advance the atmosphere by one year
    ///
    /// # Returns
    ///
    /// (burden, fallout)
    pub fn step(&mut self, injection: FloatValue) -> (FloatValue, FloatValue) {
        self.cohorts.inject(injection);
        let burden = self.cohorts.total();
        let fallout = self.cohorts.advance();
        (burden, fallout)
    }
}

#[typetag::serde]
impl Component for StratosphericBurden {
    fn definitions(&self) -> Vec<RequirementDefinition> {
        vec![
            RequirementDefinition::scalar_input(VAR_AL2O3_INJECTION.name, VAR_AL2O3_INJECTION.unit),
            RequirementDefinition::scalar_output(VAR_AL2O3_BURDEN.name, VAR_AL2O3_BURDEN.unit),
            RequirementDefinition::scalar_output(VAR_AL2O3_FALLOUT.name, VAR_AL2O3_FALLOUT.unit),
        ]
    }

    fn solve(
        &mut self,
        t_current: Time,
        _t_next: Time,
        input_state: &InputState,
    ) -> AluminaResult<OutputState> {
        let injection = input_state.get(VAR_AL2O3_INJECTION.name)?;
        let (burden, fallout) = self.step(injection);
        debug!(
            "{}: injected {:.3} t, burden {:.3} t, fallout {:.3} t",
            t_current, injection, burden, fallout
        );

        Ok(HashMap::from([
            (VAR_AL2O3_BURDEN.name.to_string(), burden),
            (VAR_AL2O3_FALLOUT.name.to_string(), fallout),
        ]))
    }
}
