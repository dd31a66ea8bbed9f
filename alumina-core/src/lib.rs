//! Core traits and runtime for coupled models of Al2O3 accumulation in the upper atmosphere.
//!
//! A [`model::Model`] is assembled from [`component::Component`]s which exchange named
//! variables. Variables are stored as [`timeseries::Timeseries`] on a common yearly time axis.
pub mod cohort;
pub mod component;
#[cfg(test)]
mod example_components;
pub mod model;
pub mod standard_variables;
pub mod state;
pub mod timeseries;
pub mod timeseries_collection;

pub mod errors;

pub use ndarray;
