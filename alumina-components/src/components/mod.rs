mod coupling;
mod reentry_injection;
mod risk;
mod stratospheric_burden;

pub use coupling::CouplingCoefficient;
pub use reentry_injection::ReentryInjection;
pub use risk::RiskLevel;
pub use stratospheric_burden::StratosphericBurden;
