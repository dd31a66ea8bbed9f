//! Coupling Coefficient Component
//!
//! Converts the Al2O3 burden into an electromagnetic coupling coefficient (χ),
//! a proxy for the risk of induced currents and ozone destruction.
//!
//! # Inputs
//!
//! - `Atmospheric Burden|Al2O3` (t)
//!
//! # Outputs
//!
//! - `Coupling Factor` (1) - burden-driven factor before solar scaling
//! - `Coupling Coefficient` (1) - χ, classified with [`RiskLevel`]

use crate::components::risk::RiskLevel;
use crate::parameters::CouplingParameters;
use alumina_core::component::{Component, InputState, OutputState, RequirementDefinition};
use alumina_core::errors::AluminaResult;
use alumina_core::standard_variables::{
    VAR_AL2O3_BURDEN, VAR_COUPLING_COEFFICIENT, VAR_COUPLING_FACTOR,
};
use alumina_core::timeseries::{FloatValue, Time};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Piecewise coupling coefficient
///
/// See [`CouplingParameters`] for the governing equation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouplingCoefficient {
    parameters: CouplingParameters,
}

impl CouplingCoefficient {
    pub fn new() -> Self {
        Self::from_parameters(CouplingParameters::default())
    }

    pub fn from_parameters(parameters: CouplingParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &CouplingParameters {
        &self.parameters
    }

    /// True once the burden has reached the cascade regime
    pub fn is_cascading(&self, burden: FloatValue) -> bool {
        burden >= self.parameters.critical_threshold
    }

    /// Burden-driven coupling factor
    pub fn coupling_factor(&self, burden: FloatValue) -> FloatValue {
        let ratio = burden / self.parameters.critical_threshold;
        if self.is_cascading(burden) {
            1.0 + (ratio + self.parameters.cascade_offset).log10() * self.parameters.cascade_gain
        } else {
            ratio.powi(2)
        }
    }

    /// Coupling coefficient χ
    pub fn coefficient(&self, burden: FloatValue) -> FloatValue {
        self.coupling_factor(burden) * self.parameters.solar_activity_index
    }

    /// Risk band for a burden
    pub fn risk(&self, burden: FloatValue) -> RiskLevel {
        RiskLevel::classify(self.coefficient(burden))
    }
}

impl Default for CouplingCoefficient {
    fn default() -> Self {
        Self::new()
    }
}

#[typetag::serde]
impl Component for CouplingCoefficient {
    fn definitions(&self) -> Vec<RequirementDefinition> {
        vec![
            RequirementDefinition::scalar_input(VAR_AL2O3_BURDEN.name, VAR_AL2O3_BURDEN.unit),
            RequirementDefinition::scalar_output(VAR_COUPLING_FACTOR.name, VAR_COUPLING_FACTOR.unit),
            RequirementDefinition::scalar_output(
                VAR_COUPLING_COEFFICIENT.name,
                VAR_COUPLING_COEFFICIENT.unit,
            ),
        ]
    }

    fn solve(
        &mut self,
        _t_current: Time,
        _t_next: Time,
        input_state: &InputState,
    ) -> AluminaResult<OutputState> {
        let burden = input_state.get(VAR_AL2O3_BURDEN.name)?;
        let factor = self.coupling_factor(burden);

        Ok(HashMap::from([
            (VAR_COUPLING_FACTOR.name.to_string(), factor),
            (
                VAR_COUPLING_COEFFICIENT.name.to_string(),
                factor * self.parameters.solar_activity_index,
            ),
        ]))
    }
}
