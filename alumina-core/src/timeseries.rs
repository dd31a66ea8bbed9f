//! Yearly time axes and the values recorded against them.
//!
//! Values which have not been solved for yet are stored as NaN.
use crate::errors::{AluminaError, AluminaResult};
use ndarray::{Array, Array1};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type FloatValue = f64;
pub type Time = f64;

/// Ordered set of points in time that a model is solved at
///
/// Each point marks the start of a step.
/// The end of the final step is extrapolated using the spacing of the last two points
/// (or a single year if the axis only contains one point).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Time>", into = "Vec<Time>")]
pub struct TimeAxis {
    values: Array1<Time>,
}

impl TimeAxis {
    /// Fails if `values` are not strictly increasing
    pub fn from_values(values: Array1<Time>) -> AluminaResult<Self> {
        if !values.windows(2).into_iter().all(|w| w[0] < w[1]) {
            return Err(AluminaError::Error(
                "Time axis values must be strictly increasing".to_string(),
            ));
        }
        Ok(Self { values })
    }

    /// A time axis containing `n_years` consecutive years starting at `start`
    pub fn yearly(start: Time, n_years: usize) -> Self {
        Self {
            values: Array::range(start, start + n_years as Time, 1.0),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &Array1<Time> {
        &self.values
    }

    pub fn at(&self, index: usize) -> Option<Time> {
        self.values.get(index).copied()
    }

    /// Start and end of the step at `index`
    pub fn at_bounds(&self, index: usize) -> Option<(Time, Time)> {
        let start = self.at(index)?;
        let end = match self.at(index + 1) {
            Some(next) => next,
            None if index > 0 => start + (start - self.values[index - 1]),
            None => start + 1.0,
        };
        Some((start, end))
    }

    /// Index of the step that contains `time`
    ///
    /// Times before the first point or after the end of the final step return `None`.
    pub fn index_of(&self, time: Time) -> Option<usize> {
        let last = self.len().checked_sub(1)?;
        let (_, end) = self.at_bounds(last)?;
        if time < self.values[0] || time >= end {
            return None;
        }
        self.values.iter().rposition(|&t| t <= time)
    }
}

impl TryFrom<Vec<Time>> for TimeAxis {
    type Error = AluminaError;

    fn try_from(values: Vec<Time>) -> Result<Self, Self::Error> {
        Self::from_values(Array1::from_vec(values))
    }
}

impl From<TimeAxis> for Vec<Time> {
    fn from(axis: TimeAxis) -> Self {
        axis.values.to_vec()
    }
}

/// Values of a single variable over a [`TimeAxis`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeseries {
    units: String,
    values: Array1<FloatValue>,
    time_axis: Arc<TimeAxis>,
    /// Index of the last value that was written, if any
    latest: Option<usize>,
}

impl Timeseries {
    pub fn new(
        values: Array1<FloatValue>,
        time_axis: Arc<TimeAxis>,
        units: String,
    ) -> AluminaResult<Self> {
        if values.len() != time_axis.len() {
            return Err(AluminaError::Error(format!(
                "Timeseries has {} values but the time axis has {} points",
                values.len(),
                time_axis.len()
            )));
        }
        let latest = values.iter().rposition(|v| !v.is_nan());

        Ok(Self {
            units,
            values,
            time_axis,
            latest,
        })
    }

    /// Create a timeseries where every value is yet to be solved
    pub fn new_empty(time_axis: Arc<TimeAxis>, units: String) -> Self {
        Self {
            units,
            values: Array1::from_elem(time_axis.len(), FloatValue::NAN),
            time_axis,
            latest: None,
        }
    }

    /// Convenience constructor for a unitless timeseries
    ///
    /// Fails if `time` is not strictly increasing or differs in length from `values`.
    pub fn from_values(values: Array1<FloatValue>, time: Array1<Time>) -> AluminaResult<Self> {
        let time_axis = Arc::new(TimeAxis::from_values(time)?);
        Self::new(values, time_axis, String::new())
    }

    pub fn with_units(mut self, units: &str) -> Self {
        self.units = units.to_string();
        self
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn time_axis(&self) -> &TimeAxis {
        &self.time_axis
    }

    pub fn values(&self) -> &Array1<FloatValue> {
        &self.values
    }

    pub fn at(&self, index: usize) -> Option<FloatValue> {
        self.values.get(index).copied()
    }

    /// Value of the step containing `time`
    pub fn at_time(&self, time: Time) -> AluminaResult<FloatValue> {
        let index = self
            .time_axis
            .index_of(time)
            .ok_or_else(|| AluminaError::TimeOutOfRange {
                time,
                start: self.time_axis.at(0).unwrap_or(FloatValue::NAN),
                end: self
                    .time_axis
                    .at_bounds(self.len().saturating_sub(1))
                    .map(|(_, end)| end)
                    .unwrap_or(FloatValue::NAN),
            })?;
        Ok(self.values[index])
    }

    pub fn set(&mut self, index: usize, value: FloatValue) -> AluminaResult<()> {
        let len = self.len();
        let slot = self.values.get_mut(index).ok_or_else(|| {
            AluminaError::Error(format!(
                "Index {index} is out of bounds for a timeseries of length {len}"
            ))
        })?;
        *slot = value;
        self.latest = Some(self.latest.map_or(index, |latest| latest.max(index)));
        Ok(())
    }

    pub fn latest(&self) -> Option<usize> {
        self.latest
    }

    pub fn latest_value(&self) -> Option<FloatValue> {
        self.latest.map(|index| self.values[index])
    }
}
