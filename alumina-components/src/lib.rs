//! Components describing Al2O3 accumulation from satellite reentry
//!
//! # Component chain
//!
//! - [`components::ReentryInjection`]: reentry count and injected Al2O3 mass
//! - [`components::StratosphericBurden`]: mass aloft, aged in yearly cohorts
//! - [`components::CouplingCoefficient`]: electromagnetic coupling coefficient of the burden
//!
//! # Parameters
//!
//! Each component has an associated parameters struct in the `parameters` module
//! with defaults matching the reference scenarios.

pub mod components;
pub mod parameters;
