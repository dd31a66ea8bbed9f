use crate::cohort::CohortRing;
use crate::errors::AluminaError;
use crate::example_components::{Accumulator, ConstantSource, Scale};
use crate::model::ModelBuilder;
use crate::timeseries::{TimeAxis, Timeseries};
use crate::timeseries_collection::{TimeseriesCollection, VariableType};
use ndarray::array;

fn accumulator() -> Box<Accumulator> {
    Box::new(Accumulator {
        ring: CohortRing::new(30).unwrap(),
    })
}

fn scale(input: &str, output: &str, unit: &str) -> Box<Scale> {
    Box::new(Scale {
        input: input.to_string(),
        output: output.to_string(),
        unit: unit.to_string(),
        factor: 1.0,
    })
}

#[test]
fn missing_exogenous_variable() {
    let result = ModelBuilder::new()
        .with_time_axis(TimeAxis::yearly(2020.0, 3))
        .with_component(accumulator())
        .build();

    match result {
        Err(AluminaError::MissingExogenousVariable(name)) => assert_eq!(name, "Emissions|Al2O3"),
        other => panic!("Expected a missing exogenous variable, got {:?}", other),
    }
}

#[test]
fn exogenous_variable_drives_component() {
    let emissions = Timeseries::from_values(array![1.0, 2.0, 3.0], array![2020.0, 2021.0, 2022.0]).unwrap()
        .with_units("t / yr");

    let mut model = ModelBuilder::new()
        .with_time_axis(TimeAxis::yearly(2020.0, 3))
        .with_component(accumulator())
        .with_exogenous_variable("Emissions|Al2O3", emissions)
        .build()
        .unwrap();
    model.run().unwrap();

    let burden = model
        .timeseries()
        .get_timeseries_by_name("Atmospheric Burden|Al2O3")
        .unwrap();
    assert_eq!(burden.values(), &array![1.0, 3.0, 6.0]);
}

#[test]
fn exogenous_collection_supplies_required_variables() {
    let mut exogenous = TimeseriesCollection::new();
    exogenous.insert_or_replace(
        "Emissions|Al2O3",
        Timeseries::from_values(array![2.0, 2.0, 2.0], array![2020.0, 2021.0, 2022.0])
            .unwrap()
            .with_units("t / yr"),
        VariableType::Exogenous,
    );
    exogenous.insert_or_replace(
        "Reentries|Satellites",
        Timeseries::from_values(array![500.0, 600.0, 700.0], array![2020.0, 2021.0, 2022.0])
            .unwrap(),
        VariableType::Exogenous,
    );

    let mut model = ModelBuilder::new()
        .with_time_axis(TimeAxis::yearly(2020.0, 3))
        .with_component(accumulator())
        .with_exogenous_collection(exogenous)
        .build()
        .unwrap();
    model.run().unwrap();

    // Unused exogenous variables are not carried into the model
    assert!(model.timeseries().get_by_name("Reentries|Satellites").is_none());
    assert_eq!(
        model
            .timeseries()
            .get_timeseries_by_name("Atmospheric Burden|Al2O3")
            .unwrap()
            .values(),
        &array![2.0, 4.0, 6.0]
    );
}

#[test]
fn exogenous_unit_mismatch() {
    let emissions = Timeseries::from_values(array![1.0, 2.0, 3.0], array![2020.0, 2021.0, 2022.0]).unwrap()
        .with_units("kg / yr");

    let result = ModelBuilder::new()
        .with_time_axis(TimeAxis::yearly(2020.0, 3))
        .with_component(accumulator())
        .with_exogenous_variable("Emissions|Al2O3", emissions)
        .build();

    assert!(matches!(result, Err(AluminaError::WrongUnits { .. })));
}

#[test]
fn component_unit_mismatch() {
    let result = ModelBuilder::new()
        .with_time_axis(TimeAxis::yearly(2020.0, 3))
        .with_component(Box::new(ConstantSource {
            output: "Emissions|Al2O3".to_string(),
            amount: 1.0,
        }))
        .with_component(accumulator())
        .with_component(scale("Atmospheric Burden|Al2O3", "Scaled", "kg"))
        .build();

    match result {
        Err(AluminaError::WrongUnits {
            variable,
            expected,
            found,
        }) => {
            assert_eq!(variable, "Atmospheric Burden|Al2O3");
            assert_eq!(expected, "t");
            assert_eq!(found, "kg");
        }
        other => panic!("Expected a unit mismatch, got {:?}", other),
    }
}

#[test]
fn duplicate_producer() {
    let result = ModelBuilder::new()
        .with_time_axis(TimeAxis::yearly(2020.0, 3))
        .with_component(Box::new(ConstantSource {
            output: "Emissions|Al2O3".to_string(),
            amount: 1.0,
        }))
        .with_component(Box::new(ConstantSource {
            output: "Emissions|Al2O3".to_string(),
            amount: 2.0,
        }))
        .build();

    assert!(matches!(
        result,
        Err(AluminaError::DuplicateProducer { .. })
    ));
}

#[test]
fn cyclic_dependency() {
    let result = ModelBuilder::new()
        .with_time_axis(TimeAxis::yearly(2020.0, 3))
        .with_component(scale("A", "B", "1"))
        .with_component(scale("B", "A", "1"))
        .build();

    assert!(matches!(result, Err(AluminaError::CyclicDependency(_))));
}

#[test]
fn missing_time_axis() {
    let result = ModelBuilder::new().with_component(accumulator()).build();
    assert!(matches!(result, Err(AluminaError::Error(_))));
}
