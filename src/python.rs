//! Python bindings
//!
//! Compiled into the `alumina._lib` extension module when the `python` feature is enabled.

use crate::scenarios::{CouplingScenario, LoadingScenario};
use alumina_components::components::{CouplingCoefficient, RiskLevel};
use alumina_components::parameters::CouplingParameters;
use alumina_core::errors::AluminaError;
use alumina_core::timeseries::FloatValue;
use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

fn to_py_err(error: AluminaError) -> PyErr {
    PyValueError::new_err(error.to_string())
}

/// Simulate the annual injection and atmospheric burden of Al2O3
///
/// Returns a tuple of numpy arrays: (years, injection [t / yr], burden [t])
#[pyfunction]
#[pyo3(signature = (years_to_run=20, launch_growth_rate=0.15))]
fn simulate_aluminum_accumulation(
    py: Python<'_>,
    years_to_run: usize,
    launch_growth_rate: FloatValue,
) -> PyResult<(
    Bound<'_, PyArray1<i32>>,
    Bound<'_, PyArray1<FloatValue>>,
    Bound<'_, PyArray1<FloatValue>>,
)> {
    let scenario = LoadingScenario {
        years_to_run,
        launch_growth_rate,
        ..LoadingScenario::default()
    };
    let series = scenario.run().map_err(to_py_err)?;
    Ok((
        PyArray1::from_vec_bound(py, series.years),
        PyArray1::from_vec_bound(py, series.injection),
        PyArray1::from_vec_bound(py, series.burden),
    ))
}

#[pyfunction]
#[pyo3(signature = (burden, solar_activity_index=1.0))]
fn coupling_coefficient(burden: FloatValue, solar_activity_index: FloatValue) -> FloatValue {
    CouplingCoefficient::from_parameters(CouplingParameters {
        solar_activity_index,
        ..CouplingParameters::default()
    })
    .coefficient(burden)
}

/// Risk label for a coupling coefficient
#[pyfunction]
fn classify_risk(chi: FloatValue) -> &'static str {
    RiskLevel::classify(chi).label()
}

/// Run the coupling scenario
///
/// Keys missing from `config` keep their defaults.
/// Returns one dict per simulated year.
#[pyfunction]
#[pyo3(signature = (config=None))]
fn run_coupling_scenario(py: Python<'_>, config: Option<Bound<'_, PyDict>>) -> PyResult<PyObject> {
    let scenario: CouplingScenario = match config {
        Some(config) => pythonize::depythonize_bound(config.into_any())?,
        None => CouplingScenario::default(),
    };
    let records = scenario.run().map_err(to_py_err)?;
    Ok(pythonize::pythonize(py, &records)?)
}

#[pymodule]
#[pyo3(name = "_lib")]
fn alumina(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(simulate_aluminum_accumulation, m)?)?;
    m.add_function(wrap_pyfunction!(coupling_coefficient, m)?)?;
    m.add_function(wrap_pyfunction!(classify_risk, m)?)?;
    m.add_function(wrap_pyfunction!(run_coupling_scenario, m)?)?;
    Ok(())
}
