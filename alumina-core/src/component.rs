use crate::errors::AluminaResult;
use crate::timeseries::Time;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub use crate::state::{InputState, OutputState};

#[derive(Debug, Eq, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum RequirementType {
    Input,
    Output,
    /// Links a component with no dependencies to the root of the component graph
    EmptyLink,
}

/// A variable that a component either consumes or produces
#[derive(Debug, Eq, PartialEq, Clone, Serialize, Deserialize)]
pub struct RequirementDefinition {
    pub name: String,
    pub unit: String,
    pub requirement_type: RequirementType,
}

impl RequirementDefinition {
    pub fn new(name: &str, unit: &str, requirement_type: RequirementType) -> Self {
        Self {
            name: name.to_string(),
            unit: unit.to_string(),
            requirement_type,
        }
    }

    pub fn scalar_input(name: &str, unit: &str) -> Self {
        Self::new(name, unit, RequirementType::Input)
    }

    pub fn scalar_output(name: &str, unit: &str) -> Self {
        Self::new(name, unit, RequirementType::Output)
    }
}

/// Component of a model
///
/// Each component declares the variables it consumes and produces.
/// The model solves every component once per step, in dependency order.
/// Components may carry state between steps (e.g. a buffer of aging cohorts),
/// which is why [`Component::solve`] takes `&mut self`.
#[typetag::serde(tag = "type")]
pub trait Component: Debug + Send + Sync {
    fn definitions(&self) -> Vec<RequirementDefinition>;

    /// Variables that are required to solve this component
    fn inputs(&self) -> Vec<RequirementDefinition> {
        self.definitions()
            .into_iter()
            .filter(|d| d.requirement_type == RequirementType::Input)
            .collect()
    }

    fn input_names(&self) -> Vec<String> {
        self.inputs().into_iter().map(|d| d.name).collect()
    }

    /// Variables that are solved by this component
    fn outputs(&self) -> Vec<RequirementDefinition> {
        self.definitions()
            .into_iter()
            .filter(|d| d.requirement_type == RequirementType::Output)
            .collect()
    }

    fn output_names(&self) -> Vec<String> {
        self.outputs().into_iter().map(|d| d.name).collect()
    }

    /// Solve the component for the step `[t_current, t_next)`
    fn solve(
        &mut self,
        t_current: Time,
        t_next: Time,
        input_state: &InputState,
    ) -> AluminaResult<OutputState>;
}
