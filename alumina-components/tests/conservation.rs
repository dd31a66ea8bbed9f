//! Conservation tests for the component chain.
//!
//! These tests verify that particle mass is conserved across injection, burden and fallout
//! when the components are coupled in a model.

use alumina_components::components::{CouplingCoefficient, ReentryInjection, StratosphericBurden};
use alumina_components::parameters::{BurdenParameters, CouplingParameters, ReentryParameters};
use alumina_core::model::{Model, ModelBuilder};
use alumina_core::standard_variables::{
    VAR_AL2O3_BURDEN, VAR_AL2O3_FALLOUT, VAR_AL2O3_INJECTION, VAR_COUPLING_COEFFICIENT,
};
use alumina_core::timeseries::TimeAxis;
use approx::assert_relative_eq;

fn run_chain(growth_rate: f64, residence_time: usize, n_years: usize) -> Model {
    let mut model = ModelBuilder::new()
        .with_time_axis(TimeAxis::yearly(2025.0, n_years))
        .with_component(Box::new(CouplingCoefficient::from_parameters(
            CouplingParameters {
                solar_activity_index: 1.2,
                ..CouplingParameters::default()
            },
        )))
        .with_component(Box::new(
            StratosphericBurden::from_parameters(BurdenParameters { residence_time }).unwrap(),
        ))
        .with_component(Box::new(ReentryInjection::from_parameters(
            ReentryParameters {
                growth_rate,
                start_year: 2025.0,
                ..ReentryParameters::default()
            },
        )))
        .build()
        .unwrap();
    model.run().unwrap();
    model
}

fn values(model: &Model, name: &str) -> Vec<f64> {
    model
        .timeseries()
        .get_timeseries_by_name(name)
        .unwrap()
        .values()
        .to_vec()
}

/// Cumulative injection minus the fallout of previous years is the burden.
#[test]
fn test_mass_balance() {
    let model = run_chain(0.18, 30, 60);
    let injection = values(&model, VAR_AL2O3_INJECTION.name);
    let burden = values(&model, VAR_AL2O3_BURDEN.name);
    let fallout = values(&model, VAR_AL2O3_FALLOUT.name);

    let mut injected = 0.0;
    let mut fallen = 0.0;
    for year in 0..injection.len() {
        injected += injection[year];
        assert_relative_eq!(burden[year], injected - fallen, max_relative = 1e-10);
        fallen += fallout[year];
    }
}

/// Cohorts leave the atmosphere exactly one residence time after they were injected.
#[test]
fn test_fallout_matches_old_injection() {
    let residence_time = 10;
    let model = run_chain(0.18, residence_time, 30);
    let injection = values(&model, VAR_AL2O3_INJECTION.name);
    let fallout = values(&model, VAR_AL2O3_FALLOUT.name);

    for year in 0..injection.len() {
        if year + 1 < residence_time {
            assert_eq!(fallout[year], 0.0);
        } else {
            assert_relative_eq!(fallout[year], injection[year + 1 - residence_time]);
        }
    }
}

/// With no growth the burden saturates at R times the annual injection.
#[test]
fn test_steady_state_without_growth() {
    let model = run_chain(0.0, 30, 45);
    let burden = values(&model, VAR_AL2O3_BURDEN.name);

    assert_relative_eq!(burden[0], 15.0);
    assert_relative_eq!(burden[28], 435.0);
    for &b in &burden[29..] {
        assert_relative_eq!(b, 450.0);
    }
}

/// The coupling coefficient follows the burden through the threshold.
#[test]
fn test_coupling_follows_burden() {
    let model = run_chain(0.18, 30, 20);
    let burden = values(&model, VAR_AL2O3_BURDEN.name);
    let chi = values(&model, VAR_COUPLING_COEFFICIENT.name);

    assert!(chi.windows(2).all(|w| w[0] < w[1]));
    // 2039 is the last year below the threshold
    assert!(burden[14] < 1000.0);
    assert!(burden[15] >= 1000.0);
    assert_relative_eq!(chi[14], 1.0035, epsilon = 1e-4);
    assert_relative_eq!(chi[15], 1.9704, epsilon = 1e-4);
}
