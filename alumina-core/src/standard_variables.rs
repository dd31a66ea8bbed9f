//! Standard variable definitions.
//!
//! Variable names use `|` as a hierarchical separator, e.g. `Emissions|Al2O3`.
//! Components should declare their requirements with these names and units so that
//! producers and consumers line up when a model is built.
//!
//! ```rust
//! use alumina_core::standard_variables::VAR_AL2O3_BURDEN;
//!
//! assert_eq!(VAR_AL2O3_BURDEN.name, "Atmospheric Burden|Al2O3");
//! assert_eq!(VAR_AL2O3_BURDEN.unit, "t");
//! ```

/// Name, unit and description of a variable known at compile time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticVariableDefinition {
    pub name: &'static str,
    pub unit: &'static str,
    pub description: &'static str,
}

impl StaticVariableDefinition {
    pub const fn new(name: &'static str, unit: &'static str, description: &'static str) -> Self {
        Self {
            name,
            unit,
            description,
        }
    }
}

#[macro_export]
macro_rules! define_static_variable {
    (
        $var_name:ident,
        name = $name:expr,
        unit = $unit:expr,
        description = $desc:expr $(,)?
    ) => {
        #[doc = concat!("Static variable definition for ", $name)]
        pub static $var_name: $crate::standard_variables::StaticVariableDefinition =
            $crate::standard_variables::StaticVariableDefinition::new($name, $unit, $desc);
    };
}

// ============================================================================
// Reentry
// ============================================================================

define_static_variable!(
    VAR_REENTRY_COUNT,
    name = "Reentries|Satellites",
    unit = "1 / yr",
    description = "Number of satellites burning up on reentry each year",
);

define_static_variable!(
    VAR_AL2O3_INJECTION,
    name = "Emissions|Al2O3",
    unit = "t / yr",
    description = "Aluminum oxide particle mass injected into the upper atmosphere",
);

// ============================================================================
// Burden
// ============================================================================

define_static_variable!(
    VAR_AL2O3_BURDEN,
    name = "Atmospheric Burden|Al2O3",
    unit = "t",
    description = "Aluminum oxide particle mass currently aloft",
);

define_static_variable!(
    VAR_AL2O3_FALLOUT,
    name = "Fallout|Al2O3",
    unit = "t / yr",
    description = "Aluminum oxide particle mass leaving the upper atmosphere at the end of the year",
);

// ============================================================================
// Coupling
// ============================================================================

define_static_variable!(
    VAR_COUPLING_FACTOR,
    name = "Coupling Factor",
    unit = "1",
    description = "Burden-driven electromagnetic coupling factor",
);

define_static_variable!(
    VAR_COUPLING_COEFFICIENT,
    name = "Coupling Coefficient",
    unit = "1",
    description = "Coupling factor scaled by the solar activity index",
);

/// All standard variables
pub fn all() -> [&'static StaticVariableDefinition; 6] {
    [
        &VAR_REENTRY_COUNT,
        &VAR_AL2O3_INJECTION,
        &VAR_AL2O3_BURDEN,
        &VAR_AL2O3_FALLOUT,
        &VAR_COUPLING_FACTOR,
        &VAR_COUPLING_COEFFICIENT,
    ]
}
