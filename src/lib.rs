//! Scenarios of aluminium oxide accumulation from satellite reentry
//!
//! The physics lives in `alumina-components` and the runtime in `alumina-core`.
//! This crate wires them into the two reference scenarios and formats their results.

pub mod report;
pub mod scenarios;

#[cfg(feature = "python")]
mod python;

pub use alumina_components::components::RiskLevel;
pub use alumina_core::errors::{AluminaError, AluminaResult};
