//! Reference scenarios
//!
//! - [`CouplingScenario`]: burden and coupling risk over 20 years from 2025
//! - [`LoadingScenario`]: injection and burden series for plotting, with a forecast year
//!
//! Both scenarios are plain configuration structs. Every field has a default, so a TOML file
//! only needs to list the values that differ.

mod coupling;
mod loading;

pub use coupling::{CouplingRecord, CouplingScenario};
pub use loading::{ForecastPoint, LoadingScenario, LoadingSeries};

use alumina_core::errors::{AluminaError, AluminaResult};
use alumina_core::model::Model;
use alumina_core::timeseries::FloatValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Loading of scenario configuration from TOML
///
/// Keys missing from a file take the scenario's default, or the value from `base`
/// when one of the `overlay_*` functions is used.
pub trait ScenarioConfig: Serialize + DeserializeOwned {
    fn from_toml_str(content: &str) -> AluminaResult<Self> {
        Ok(toml::from_str(content)?)
    }

    fn from_path<P: AsRef<Path>>(path: P) -> AluminaResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    fn overlay_toml_str(base: &Self, content: &str) -> AluminaResult<Self> {
        let mut merged = match toml::Value::try_from(base) {
            Ok(toml::Value::Table(table)) => table,
            Ok(other) => {
                return Err(AluminaError::Error(format!(
                    "Expected a scenario to serialise to a table, got {}",
                    other.type_str()
                )))
            }
            Err(e) => return Err(AluminaError::Error(e.to_string())),
        };
        let overrides: toml::Table = toml::from_str(content)?;
        for (key, value) in overrides {
            merged.insert(key, value);
        }
        Ok(toml::Value::Table(merged).try_into()?)
    }

    fn overlay_path<P: AsRef<Path>>(base: &Self, path: P) -> AluminaResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::overlay_toml_str(base, &content)
    }
}

impl ScenarioConfig for CouplingScenario {}
impl ScenarioConfig for LoadingScenario {}

/// Values of a solved variable
///
/// Variables that the model doesn't contain produce an empty vector.
fn model_values(model: &Model, name: &str) -> Vec<FloatValue> {
    model
        .timeseries()
        .get_timeseries_by_name(name)
        .map(|ts| ts.values().to_vec())
        .unwrap_or_default()
}

/// Calendar years of the model's time axis
fn model_years(model: &Model) -> Vec<i32> {
    model
        .time_axis()
        .values()
        .iter()
        .map(|&t| t as i32)
        .collect()
}
