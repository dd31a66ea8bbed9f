use crate::errors::{AluminaError, AluminaResult};
use crate::timeseries::{FloatValue, Timeseries};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialOrd, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum VariableType {
    /// Values that are defined outside of the model
    Exogenous,
    /// Values that are determined within the model
    Endogenous,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeseriesItem {
    pub timeseries: Timeseries,
    pub name: String,
    pub variable_type: VariableType,
}

/// A collection of time series data.
/// Allows for easy access to time series data by name across the whole model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeseriesCollection {
    timeseries: Vec<TimeseriesItem>,
}

impl TimeseriesCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new timeseries to the collection
    ///
    /// Names are unique within a collection.
    pub fn add_timeseries(
        &mut self,
        name: String,
        timeseries: Timeseries,
        variable_type: VariableType,
    ) -> AluminaResult<()> {
        if self.get_by_name(&name).is_some() {
            return Err(AluminaError::Error(format!(
                "timeseries {} already exists",
                name
            )));
        }

        self.timeseries.push(TimeseriesItem {
            timeseries,
            name,
            variable_type,
        });
        Ok(())
    }

    /// Add a timeseries, replacing any existing timeseries with the same name
    pub fn insert_or_replace(
        &mut self,
        name: &str,
        timeseries: Timeseries,
        variable_type: VariableType,
    ) {
        let item = TimeseriesItem {
            timeseries,
            name: name.to_string(),
            variable_type,
        };
        match self.timeseries.iter_mut().find(|x| x.name == name) {
            Some(existing) => *existing = item,
            None => self.timeseries.push(item),
        }
    }

    pub fn get_by_name(&self, name: &str) -> Option<&TimeseriesItem> {
        self.timeseries.iter().find(|x| x.name == name)
    }

    pub fn get_by_name_mut(&mut self, name: &str) -> Option<&mut TimeseriesItem> {
        self.timeseries.iter_mut().find(|x| x.name == name)
    }

    pub fn get_timeseries_by_name(&self, name: &str) -> Option<&Timeseries> {
        self.get_by_name(name).map(|item| &item.timeseries)
    }

    pub fn set_value(&mut self, name: &str, time_index: usize, value: FloatValue) -> AluminaResult<()> {
        self.get_by_name_mut(name)
            .ok_or_else(|| AluminaError::MissingVariable(name.to_string()))?
            .timeseries
            .set(time_index, value)
    }

    pub fn len(&self) -> usize {
        self.timeseries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timeseries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeseriesItem> {
        self.timeseries.iter()
    }
}

impl IntoIterator for TimeseriesCollection {
    type Item = TimeseriesItem;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.timeseries.into_iter()
    }
}
