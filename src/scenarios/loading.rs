use super::{model_values, model_years};
use alumina_components::components::{ReentryInjection, StratosphericBurden};
use alumina_components::parameters::{BurdenParameters, ReentryParameters};
use alumina_core::errors::{AluminaError, AluminaResult};
use alumina_core::model::{Model, ModelBuilder};
use alumina_core::standard_variables::{VAR_AL2O3_BURDEN, VAR_AL2O3_INJECTION};
use alumina_core::timeseries::{FloatValue, TimeAxis};
use log::info;
use serde::{Deserialize, Serialize};

/// Injection and burden of Al2O3 for plotting
///
/// The defaults are the arguments of the loading simulation,
/// see [`LoadingScenario::reference`] for the published run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingScenario {
    /// default: 2024
    pub start_year: i32,
    /// default: 20
    pub years_to_run: usize,
    /// default: 500
    pub baseline_reentries: FloatValue,
    /// default: 0.15
    pub launch_growth_rate: FloatValue,
    /// unit: kg
    /// default: 30
    pub al2o3_per_satellite: FloatValue,
    /// unit: yr
    /// default: 30
    pub residence_time: usize,
    /// Year summarised in the console report
    /// default: 2040
    pub forecast_year: i32,
}

impl Default for LoadingScenario {
    fn default() -> Self {
        let reentry = ReentryParameters::default();
        Self {
            start_year: reentry.start_year as i32,
            years_to_run: 20,
            baseline_reentries: reentry.baseline_reentries,
            launch_growth_rate: reentry.growth_rate,
            al2o3_per_satellite: reentry.al2o3_per_satellite,
            residence_time: BurdenParameters::default().residence_time,
            forecast_year: 2040,
        }
    }
}

/// Parallel yearly series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadingSeries {
    pub years: Vec<i32>,
    /// unit: t / yr
    pub injection: Vec<FloatValue>,
    /// unit: t
    pub burden: Vec<FloatValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub year: i32,
    pub injection: FloatValue,
    pub burden: FloatValue,
}

impl LoadingSeries {
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn at_year(&self, year: i32) -> Option<ForecastPoint> {
        let index = self.years.iter().position(|&y| y == year)?;
        Some(ForecastPoint {
            year,
            injection: self.injection[index],
            burden: self.burden[index],
        })
    }
}

impl LoadingScenario {
    /// The run used for the published forecast: 25 years with 20% annual growth
    pub fn reference() -> Self {
        Self {
            years_to_run: 25,
            launch_growth_rate: 0.20,
            ..Self::default()
        }
    }

    pub fn reentry_parameters(&self) -> ReentryParameters {
        ReentryParameters {
            baseline_reentries: self.baseline_reentries,
            growth_rate: self.launch_growth_rate,
            al2o3_per_satellite: self.al2o3_per_satellite,
            start_year: FloatValue::from(self.start_year),
        }
    }

    pub fn burden_parameters(&self) -> BurdenParameters {
        BurdenParameters {
            residence_time: self.residence_time,
        }
    }

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
            .build()
    }

    pub fn run(&self) -> AluminaResult<LoadingSeries> {
        info!(
            "Running loading scenario for {} years from {} (growth rate {})",
            self.years_to_run, self.start_year, self.launch_growth_rate
        );
        let mut model = self.build_model()?;
        model.run()?;

        let series = LoadingSeries {
            years: model_years(&model),
            injection: model_values(&model, VAR_AL2O3_INJECTION.name),
            burden: model_values(&model, VAR_AL2O3_BURDEN.name),
        };
        info!("Loading scenario finished");
        Ok(series)
    }

    /// Values at `forecast_year`
    ///
    /// Fails if the forecast year is outside of the simulated years.
    pub fn forecast(&self, series: &LoadingSeries) -> AluminaResult<ForecastPoint> {
        series
            .at_year(self.forecast_year)
            .ok_or(AluminaError::TimeOutOfRange {
                time: FloatValue::from(self.forecast_year),
                start: FloatValue::from(self.start_year),
                end: FloatValue::from(self.start_year) + self.years_to_run as FloatValue - 1.0,
            })
    }
}
