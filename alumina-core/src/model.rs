/// A model consists of a series of coupled components which are solved together.
/// The model orchestrates the passing of state between different components.
/// Each component is solved for a given time step in an order determined by their
/// dependencies.
/// Once all components are solved, the model moves to the next time step.
/// The values from previous steps are preserved as model output.
///
/// The model also holds all of the exogenous variables required by the model.
/// The required variables are identified when building the model.
/// If a required exogenous variable isn't provided, then the build step will fail.
use crate::component::{Component, InputState, OutputState, RequirementDefinition, RequirementType};
use crate::errors::{AluminaError, AluminaResult};
use crate::timeseries::{Time, TimeAxis, Timeseries};
use crate::timeseries_collection::{TimeseriesCollection, VariableType};
use log::{debug, info};
use petgraph::algo::toposort;
use petgraph::dot::{Config, Dot};
use petgraph::graph::NodeIndex;
use petgraph::Graph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

type C = Box<dyn Component>;
type CGraph = Graph<C, RequirementDefinition>;

/// A null component that does nothing
///
/// Used as the root of the component graph so that every component is connected
#[derive(Debug, Serialize, Deserialize)]
struct NullComponent {}

#[typetag::serde]
impl Component for NullComponent {
    fn definitions(&self) -> Vec<RequirementDefinition> {
        vec![]
    }

    fn solve(
        &mut self,
        _t_current: Time,
        _t_next: Time,
        _input_state: &InputState,
    ) -> AluminaResult<OutputState> {
        Ok(OutputState::new())
    }
}

/// Extract the type name of a component from its `Debug` representation
fn component_name(component: &dyn Component) -> String {
    let name = format!("{:?}", component);
    name.split(['{', ' ', '('])
        .next()
        .unwrap_or("UnknownComponent")
        .to_string()
}

/// Checks that a variable is used with a single unit across the model
fn verify_unit(
    units: &mut HashMap<String, String>,
    definition: &RequirementDefinition,
) -> AluminaResult<()> {
    match units.get(&definition.name) {
        Some(existing) if existing != &definition.unit => Err(AluminaError::WrongUnits {
            variable: definition.name.clone(),
            expected: existing.clone(),
            found: definition.unit.clone(),
        }),
        Some(_) => Ok(()),
        None => {
            units.insert(definition.name.clone(), definition.unit.clone());
            Ok(())
        }
    }
}

/// Build the input state for a component from the model's collection
pub fn extract_state<'a>(
    collection: &'a TimeseriesCollection,
    input_names: &[String],
    time_index: usize,
    current_time: Time,
) -> InputState<'a> {
    let items = input_names
        .iter()
        .filter_map(|name| collection.get_by_name(name))
        .collect();
    InputState::build(items, time_index, current_time)
}

/// Build a new model from a set of components
///
/// The builder generates a graph that defines the inter-component dependencies
/// and determines what variables are endogenous and exogenous to the model.
/// This graph is used by the model to define the order in which components are solved.
#[derive(Default)]
pub struct ModelBuilder {
    components: Vec<C>,
    exogenous_variables: TimeseriesCollection,
    time_axis: Option<Arc<TimeAxis>>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component with the builder
    pub fn with_component(&mut self, component: C) -> &mut Self {
        self.components.push(component);
        self
    }

    /// Supply a timeseries for a variable that no component produces
    pub fn with_exogenous_variable(&mut self, name: &str, timeseries: Timeseries) -> &mut Self {
        self.exogenous_variables
            .insert_or_replace(name, timeseries, VariableType::Exogenous);
        self
    }

    pub fn with_exogenous_collection(&mut self, collection: TimeseriesCollection) -> &mut Self {
        for item in collection {
            self.exogenous_variables.insert_or_replace(
                &item.name,
                item.timeseries,
                VariableType::Exogenous,
            );
        }
        self
    }

    /// Specify the points in time that the model is solved at
    pub fn with_time_axis(&mut self, time_axis: TimeAxis) -> &mut Self {
        self.time_axis = Some(Arc::new(time_axis));
        self
    }

    /// Builds the component graph for the registered components and creates a concrete model
    ///
    /// The registered components are moved into the model.
    /// Returns an error if the component definitions are inconsistent,
    /// if a required exogenous variable is missing or if the components depend on each
    /// other in a cycle.
    pub fn build(&mut self) -> AluminaResult<Model> {
        let time_axis = self
            .time_axis
            .clone()
            .ok_or_else(|| AluminaError::Error("A time axis is required".to_string()))?;

        let mut graph: CGraph = Graph::new();
        let initial_node = graph.add_node(Box::new(NullComponent {}));
        let mut units: HashMap<String, String> = HashMap::new();
        let mut producers: HashMap<String, NodeIndex> = HashMap::new();
        let mut endogenous: Vec<RequirementDefinition> = vec![];
        let mut exogenous: Vec<RequirementDefinition> = vec![];

        let nodes: Vec<NodeIndex> = std::mem::take(&mut self.components)
            .into_iter()
            .map(|component| graph.add_node(component))
            .collect();

        // Register producers first so that registration order doesn't matter
        for &node in &nodes {
            for requirement in graph[node].outputs() {
                verify_unit(&mut units, &requirement)?;
                if let Some(&existing) = producers.get(&requirement.name) {
                    return Err(AluminaError::DuplicateProducer {
                        variable: requirement.name.clone(),
                        first: component_name(graph[existing].as_ref()),
                        second: component_name(graph[node].as_ref()),
                    });
                }
                producers.insert(requirement.name.clone(), node);
                endogenous.push(requirement);
            }
        }

        for &node in &nodes {
            let mut has_dependencies = false;
            for requirement in graph[node].inputs() {
                verify_unit(&mut units, &requirement)?;
                match producers.get(&requirement.name) {
                    Some(&producer) => {
                        graph.add_edge(producer, node, requirement);
                        has_dependencies = true;
                    }
                    None => {
                        if !exogenous.iter().any(|e| e.name == requirement.name) {
                            exogenous.push(requirement);
                        }
                    }
                }
            }

            if !has_dependencies {
                // Link to the initial node so that we have a single connected graph
                graph.add_edge(
                    initial_node,
                    node,
                    RequirementDefinition::new("", "", RequirementType::EmptyLink),
                );
            }
        }

        let order = toposort(&graph, None).map_err(|cycle| {
            AluminaError::CyclicDependency(component_name(graph[cycle.node_id()].as_ref()))
        })?;

        let mut collection = TimeseriesCollection::new();
        for requirement in &exogenous {
            let timeseries = self
                .exogenous_variables
                .get_timeseries_by_name(&requirement.name)
                .ok_or_else(|| AluminaError::MissingExogenousVariable(requirement.name.clone()))?;
            if !timeseries.units().is_empty() && timeseries.units() != requirement.unit {
                return Err(AluminaError::WrongUnits {
                    variable: requirement.name.clone(),
                    expected: requirement.unit.clone(),
                    found: timeseries.units().to_string(),
                });
            }
            debug!("Using exogenous variable {}", requirement.name);
            collection.add_timeseries(
                requirement.name.clone(),
                timeseries.clone(),
                VariableType::Exogenous,
            )?;
        }
        for requirement in &endogenous {
            collection.add_timeseries(
                requirement.name.clone(),
                Timeseries::new_empty(time_axis.clone(), requirement.unit.clone()),
                VariableType::Endogenous,
            )?;
        }

        info!(
            "Built model with {} components, {} endogenous and {} exogenous variables",
            nodes.len(),
            endogenous.len(),
            exogenous.len()
        );

        Ok(Model::new(graph, order, collection, time_axis))
    }
}

/// A coupled set of components that are solved on a common time axis.
///
/// These components are solved over time steps defined by the [`TimeAxis`].
/// Components may pass state between themselves.
/// Each component may require information from other components to be solved (endogenous) or
/// predefined data (exogenous).
///
/// For example, the coupling coefficient requires the Al2O3 burden as input.
/// The component is agnostic about where/how that state is defined.
/// If the model has no component which provides the burden,
/// then a burden timeseries must be defined externally.
/// If the model also contains a burden component,
/// then the coupling component will be solved after it.
///
/// The values written for a step describe that step: the injection during the year,
/// the burden sampled before the year's fallout and so on.
#[derive(Debug, Serialize, Deserialize)]
pub struct Model {
    /// A directed graph with components as nodes and the edges defining the state dependencies
    /// between nodes.
    components: CGraph,
    /// Order in which the components are solved each step
    order: Vec<NodeIndex>,
    /// The model state
    ///
    /// Variable names within the model are unique and these variable names are used by
    /// components to request state.
    collection: TimeseriesCollection,
    time_axis: Arc<TimeAxis>,
    time_index: usize,
}

impl Model {
    pub fn new(
        components: CGraph,
        order: Vec<NodeIndex>,
        collection: TimeseriesCollection,
        time_axis: Arc<TimeAxis>,
    ) -> Self {
        Self {
            components,
            order,
            collection,
            time_axis,
            time_index: 0,
        }
    }

    /// Gets the time value at the current step
    ///
    /// Returns `None` once the model has finished.
    pub fn current_time(&self) -> Option<Time> {
        self.time_axis.at(self.time_index)
    }

    pub fn current_time_bounds(&self) -> Option<(Time, Time)> {
        self.time_axis.at_bounds(self.time_index)
    }

    pub fn time_index(&self) -> usize {
        self.time_index
    }

    pub fn time_axis(&self) -> &TimeAxis {
        &self.time_axis
    }

    /// Solve a single component for the current timestep
    ///
    /// The output state of the component is written into the model's timeseries collection
    /// at the current time index to be used by components later in the order.
    fn step_model_component(&mut self, node: NodeIndex, t_current: Time, t_next: Time) -> AluminaResult<()> {
        let input_names = self.components[node].input_names();
        let input_state = extract_state(
            &self.collection,
            &input_names,
            self.time_index,
            t_current,
        );

        let component = &mut self.components[node];
        debug!("Solving {} for {}", component_name(component.as_ref()), t_current);
        let output_state = component.solve(t_current, t_next, &input_state)?;

        for (key, value) in output_state {
            let item = self
                .collection
                .get_by_name_mut(&key)
                .filter(|item| item.variable_type == VariableType::Endogenous)
                .ok_or_else(|| AluminaError::MissingVariable(key.clone()))?;
            item.timeseries.set(self.time_index, value)?;
        }
        Ok(())
    }

    /// Steps the model forward one time step
    ///
    /// Every component is solved for the current step and then the index is advanced.
    pub fn step(&mut self) -> AluminaResult<()> {
        let (t_current, t_next) = self
            .current_time_bounds()
            .ok_or_else(|| AluminaError::Error("The model has already finished".to_string()))?;

        for i in 0..self.order.len() {
            let node = self.order[i];
            self.step_model_component(node, t_current, t_next)?;
        }

        self.time_index += 1;
        Ok(())
    }

    /// Steps the model until the end of the time axis
    pub fn run(&mut self) -> AluminaResult<()> {
        while !self.finished() {
            self.step()?;
        }
        Ok(())
    }

    /// Create a diagram that represents the component graph
    ///
    /// Useful for debugging
    pub fn as_dot(&self) -> String {
        format!(
            "{:?}",
            Dot::with_attr_getters(
                &self.components,
                &[Config::NodeNoLabel, Config::EdgeNoLabel],
                &|_, er| format!("label = {:?}", er.weight().name),
                &|_, (_, component)| format!("label = \"{}\"", component_name(component.as_ref())),
            )
        )
    }

    /// Names of the components in the order they are solved
    pub fn solve_order(&self) -> Vec<String> {
        self.order
            .iter()
            .map(|&node| component_name(self.components[node].as_ref()))
            .collect()
    }

    /// Returns true if the model has no more time steps to process
    pub fn finished(&self) -> bool {
        self.time_index >= self.time_axis.len()
    }

    pub fn timeseries(&self) -> &TimeseriesCollection {
        &self.collection
    }
}

#[cfg(test)]
mod tests;
