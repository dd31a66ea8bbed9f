use super::{model_values, model_years};
use alumina_components::components::{
    CouplingCoefficient, ReentryInjection, RiskLevel, StratosphericBurden,
};
use alumina_components::parameters::{BurdenParameters, CouplingParameters, ReentryParameters};
use alumina_core::errors::AluminaResult;
use alumina_core::model::{Model, ModelBuilder};
use alumina_core::standard_variables::{
    VAR_AL2O3_BURDEN, VAR_AL2O3_INJECTION, VAR_COUPLING_COEFFICIENT, VAR_COUPLING_FACTOR,
};
use alumina_core::timeseries::{FloatValue, TimeAxis};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Accumulation of Al2O3 with the resulting coupling risk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouplingScenario {
    /// default: 2025
    pub start_year: i32,
    /// default: 20
    pub years_to_run: usize,
    /// default: 500
    pub baseline_reentries: FloatValue,
    /// Fractional annual increase in reentering satellite mass
    /// default: 0.18
    pub growth_rate: FloatValue,
    /// unit: kg
    /// default: 30
    pub al2o3_per_satellite: FloatValue,
    /// unit: yr
    /// default: 30
    pub residence_time: usize,
    /// unit: t
    /// default: 1000
    pub critical_threshold: FloatValue,
    /// Solar cycle 25/26
    /// default: 1.2
    pub solar_activity_index: FloatValue,
    /// default: 2.0
    pub cascade_gain: FloatValue,
    /// default: 1.0
    pub cascade_offset: FloatValue,
}

impl Default for CouplingScenario {
    fn default() -> Self {
        let coupling = CouplingParameters::default();
        Self {
            start_year: 2025,
            years_to_run: 20,
            baseline_reentries: 500.0,
            growth_rate: 0.18,
            al2o3_per_satellite: 30.0,
            residence_time: BurdenParameters::default().residence_time,
            critical_threshold: coupling.critical_threshold,
            solar_activity_index: 1.2,
            cascade_gain: coupling.cascade_gain,
            cascade_offset: coupling.cascade_offset,
        }
    }
}

/// One row of the coupling table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouplingRecord {
    pub year: i32,
    /// unit: t / yr
    pub injection: FloatValue,
    /// unit: t
    pub burden: FloatValue,
    pub coupling_factor: FloatValue,
    /// χ
    pub coefficient: FloatValue,
    pub risk: RiskLevel,
}

impl CouplingScenario {
    pub fn reentry_parameters(&self) -> ReentryParameters {
        ReentryParameters {
            baseline_reentries: self.baseline_reentries,
            growth_rate: self.growth_rate,
            al2o3_per_satellite: self.al2o3_per_satellite,
            start_year: FloatValue::from(self.start_year),
        }
    }

    pub fn burden_parameters(&self) -> BurdenParameters {
        BurdenParameters {
            residence_time: self.residence_time,
        }
    }

    pub fn coupling_parameters(&self) -> CouplingParameters {
        CouplingParameters {
            critical_threshold: self.critical_threshold,
            solar_activity_index: self.solar_activity_index,
            cascade_gain: self.cascade_gain,
            cascade_offset: self.cascade_offset,
        }
    }

    /// Assemble the injection, burden and coupling components into a model
    ///
    /// Fails if the residence time is zero.
    pub fn build_model(&self) -> AluminaResult<Model> {
        ModelBuilder::new()
            .with_time_axis(TimeAxis::yearly(
                FloatValue::from(self.start_year),
                self.years_to_run,
            ))
            .with_component(Box::new(ReentryInjection::from_parameters(
                self.reentry_parameters(),
            )))
            .with_component(Box::new(StratosphericBurden::from_parameters(
                self.burden_parameters(),
            )?))
            .with_component(Box::new(CouplingCoefficient::from_parameters(
                self.coupling_parameters(),
            )))
            .build()
    }

    pub fn run(&self) -> AluminaResult<Vec<CouplingRecord>> {
        info!(
            "Running coupling scenario for {} years from {}",
            self.years_to_run, self.start_year
        );
        let mut model = self.build_model()?;
        model.run()?;

        let years = model_years(&model);
        let injection = model_values(&model, VAR_AL2O3_INJECTION.name);
        let burden = model_values(&model, VAR_AL2O3_BURDEN.name);
        let factor = model_values(&model, VAR_COUPLING_FACTOR.name);
        let chi = model_values(&model, VAR_COUPLING_COEFFICIENT.name);

        let mut records: Vec<CouplingRecord> = Vec::with_capacity(years.len());
        for (i, &year) in years.iter().enumerate() {
            let risk = RiskLevel::classify(chi[i]);
            if let Some(previous) = records.last() {
                if previous.burden < self.critical_threshold && burden[i] >= self.critical_threshold
                {
                    warn!(
                        "{}: burden of {:.2} t crossed the critical threshold of {} t",
                        year, burden[i], self.critical_threshold
                    );
                }
                if risk > previous.risk {
                    warn!("{}: coupling risk rose to {}", year, risk);
                }
            }
            records.push(CouplingRecord {
                year,
                injection: injection[i],
                burden: burden[i],
                coupling_factor: factor[i],
                coefficient: chi[i],
                risk,
            });
        }

        info!("Coupling scenario finished");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_run() {
        let scenario = CouplingScenario::default();
        assert_eq!(scenario.start_year, 2025);
        assert_eq!(scenario.years_to_run, 20);
        assert_eq!(scenario.residence_time, 30);
        assert!((scenario.growth_rate - 0.18).abs() < 1e-12);
        assert!((scenario.solar_activity_index - 1.2).abs() < 1e-12);
        assert_eq!(scenario.coupling_parameters().cascade_offset, 1.0);
    }

    #[test]
    fn test_zero_residence_time_fails() {
        let scenario = CouplingScenario {
            residence_time: 0,
            ..CouplingScenario::default()
        };
        assert!(scenario.run().is_err());
    }

    #[test]
    fn test_zero_years() {
        let scenario = CouplingScenario {
            years_to_run: 0,
            ..CouplingScenario::default()
        };
        assert!(scenario.run().unwrap().is_empty());
    }

    #[test]
    fn test_first_year() {
        let records = CouplingScenario::default().run().unwrap();
        let first = &records[0];
        assert_eq!(first.year, 2025);
        assert_eq!(first.injection, 15.0);
        assert_eq!(first.burden, 15.0);
        assert!((first.coefficient - 0.00027).abs() < 1e-12);
        assert_eq!(first.risk, RiskLevel::Nominal);
    }
}
