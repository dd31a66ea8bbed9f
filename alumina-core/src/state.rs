use crate::errors::{AluminaError, AluminaResult};
use crate::timeseries::{FloatValue, Time};
use crate::timeseries_collection::{TimeseriesItem, VariableType};
use std::collections::HashMap;

/// Input state for a component
///
/// A state is a collection of values
/// that can be used to represent the state of a system at a given time.
///
/// This is very similar to a Hashmap (with likely worse performance),
/// but provides strong type separation.
#[derive(Debug, Clone)]
pub struct InputState<'a> {
    time_index: usize,
    current_time: Time,
    state: Vec<&'a TimeseriesItem>,
}

impl<'a> InputState<'a> {
    pub fn build(values: Vec<&'a TimeseriesItem>, time_index: usize, current_time: Time) -> Self {
        Self {
            time_index,
            current_time,
            state: values,
        }
    }

    pub fn empty() -> Self {
        Self {
            time_index: 0,
            current_time: Time::NAN,
            state: vec![],
        }
    }

    pub fn current_time(&self) -> Time {
        self.current_time
    }

    /// Get the value of a variable for the step being solved
    ///
    /// Exogenous values are looked up by time on their own time axis.
    /// Endogenous values have already been written for this step by the upstream component.
    pub fn get(&self, name: &str) -> AluminaResult<FloatValue> {
        let item = self
            .iter()
            .find(|item| item.name == name)
            .ok_or_else(|| AluminaError::MissingVariable(name.to_string()))?;

        match item.variable_type {
            VariableType::Exogenous => item.timeseries.at_time(self.current_time),
            VariableType::Endogenous => item
                .timeseries
                .at(self.time_index)
                .ok_or_else(|| AluminaError::MissingVariable(name.to_string())),
        }
    }

    /// Test if the state contains a value with the given name
    pub fn has(&self, name: &str) -> bool {
        self.state.iter().any(|x| x.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &&TimeseriesItem> {
        self.state.iter()
    }

    /// Converts the state into an equivalent hashmap
    ///
    /// Variables without a value for the current step are skipped.
    pub fn to_hashmap(&self) -> HashMap<String, FloatValue> {
        self.state
            .iter()
            .filter_map(|item| self.get(&item.name).ok().map(|v| (item.name.clone(), v)))
            .collect()
    }
}

impl<'a> IntoIterator for InputState<'a> {
    type Item = &'a TimeseriesItem;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.state.into_iter()
    }
}

/// Output state from a component
///
/// Maps each output variable name to its value for the step that was solved.
pub type OutputState = HashMap<String, FloatValue>;
