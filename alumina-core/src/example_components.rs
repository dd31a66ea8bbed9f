use crate::cohort::CohortRing;
use crate::component::{Component, InputState, OutputState, RequirementDefinition};
use crate::errors::AluminaResult;
use crate::timeseries::{FloatValue, Time};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Emits a constant amount every step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ConstantSource {
    pub output: String,
    pub amount: FloatValue,
}

#[typetag::serde]
impl Component for ConstantSource {
    fn definitions(&self) -> Vec<RequirementDefinition> {
        vec![RequirementDefinition::scalar_output(&self.output, "t / yr")]
    }

    fn solve(
        &mut self,
        _t_current: Time,
        _t_next: Time,
        _input_state: &InputState,
    ) -> AluminaResult<OutputState> {
        Ok(HashMap::from([(self.output.clone(), self.amount)]))
    }
}

/// Scales an input by a constant factor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Scale {
    pub input: String,
    pub output: String,
    pub unit: String,
    pub factor: FloatValue,
}

#[typetag::serde]
impl Component for Scale {
    fn definitions(&self) -> Vec<RequirementDefinition> {
        vec![
            RequirementDefinition::scalar_input(&self.input, &self.unit),
            RequirementDefinition::scalar_output(&self.output, &self.unit),
        ]
    }

    fn solve(
        &mut self,
        _t_current: Time,
        _t_next: Time,
        input_state: &InputState,
    ) -> AluminaResult<OutputState> {
        let value = input_state.get(&self.input)?;
        Ok(HashMap::from([(self.output.clone(), value * self.factor)]))
    }
}

/// Holds its input in a cohort ring and reports the total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Accumulator {
    pub ring: CohortRing,
}

#[typetag::serde]
impl Component for Accumulator {
    fn definitions(&self) -> Vec<RequirementDefinition> {
        vec![
            RequirementDefinition::scalar_input("Emissions|Al2O3", "t / yr"),
            RequirementDefinition::scalar_output("Atmospheric Burden|Al2O3", "t"),
        ]
    }

    fn solve(
        &mut self,
        _t_current: Time,
        _t_next: Time,
        input_state: &InputState,
    ) -> AluminaResult<OutputState> {
        self.ring.inject(input_state.get("Emissions|Al2O3")?);
        let total = self.ring.total();
        self.ring.advance();
        Ok(HashMap::from([(
            "Atmospheric Burden|Al2O3".to_string(),
            total,
        )]))
    }
}
