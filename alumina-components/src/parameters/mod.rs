//! Component parameters
//!
//! Each component has an associated parameter struct with defaults matching the
//! reference scenarios.

mod burden;
mod coupling;
mod reentry;

pub use burden::BurdenParameters;
pub use coupling::CouplingParameters;
pub use reentry::{ReentryParameters, KG_PER_METRIC_TON};
