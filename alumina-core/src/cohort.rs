//! Fixed-length buffer of yearly particle cohorts.
//!
//! Slot 0 holds the cohort injected during the current year and slot `R - 1` the oldest
//! cohort still aloft. Each year the buffer is used in a fixed order:
//!
//! 1. [`CohortRing::inject`] the year's mass into slot 0
//! 2. sample the burden with [`CohortRing::total`]
//! 3. [`CohortRing::advance`] to age every cohort by one year
//!
//! Advancing discards the oldest cohort (it has "fallen out" after `R` years) and leaves an
//! empty slot 0 for the next year's injection. Injecting after advancing would book the
//! mass against the following year.
use crate::errors::{AluminaError, AluminaResult};
use crate::timeseries::FloatValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FloatValue>", into = "Vec<FloatValue>")]
pub struct CohortRing {
    cohorts: Box<[FloatValue]>,
}

impl CohortRing {
    /// Create an empty buffer holding `residence_time` yearly cohorts
    pub fn new(residence_time: usize) -> AluminaResult<Self> {
        if residence_time == 0 {
            return Err(AluminaError::invalid_parameter(
                "residence_time",
                "must be at least one year",
            ));
        }
        Ok(Self {
            cohorts: vec![0.0; residence_time].into_boxed_slice(),
        })
    }

    /// Number of years a cohort stays in the buffer
    pub fn residence_time(&self) -> usize {
        self.cohorts.len()
    }

    /// Add mass to the current year's cohort
    pub fn inject(&mut self, amount: FloatValue) {
        self.cohorts[0] += amount;
    }

    /// Total mass held across all cohorts
    pub fn total(&self) -> FloatValue {
        self.cohorts.iter().sum()
    }

    /// Age every cohort by one year
    ///
    /// Returns the mass of the discarded cohort.
    pub fn advance(&mut self) -> FloatValue {
        let last = self.cohorts.len() - 1;
        let fallout = self.cohorts[last];
        self.cohorts.rotate_right(1);
        self.cohorts[0] = 0.0;
        fallout
    }

    /// Cohort masses, youngest first
    pub fn cohorts(&self) -> &[FloatValue] {
        &self.cohorts
    }
}

impl TryFrom<Vec<FloatValue>> for CohortRing {
    type Error = AluminaError;

    fn try_from(cohorts: Vec<FloatValue>) -> Result<Self, Self::Error> {
        if cohorts.is_empty() {
            return Err(AluminaError::invalid_parameter(
                "residence_time",
                "must be at least one year",
            ));
        }
        Ok(Self {
            cohorts: cohorts.into_boxed_slice(),
        })
    }
}

impl From<CohortRing> for Vec<FloatValue> {
    fn from(ring: CohortRing) -> Self {
        ring.cohorts.into_vec()
    }
}
