//! Property-based tests for the component formulas.
//!
//! Covers: injection growth, coupling factor regimes, risk classification.

use alumina_components::components::{CouplingCoefficient, ReentryInjection, RiskLevel};
use alumina_components::parameters::{CouplingParameters, ReentryParameters};
use proptest::prelude::*;

proptest! {
    /// Injection strictly increases with any positive growth rate.
    #[test]
    fn injection_increases_with_growth(
        growth_rate in 0.001f64..1.0,
        baseline in 1.0f64..5000.0,
        years in 1u32..60,
    ) {
        let component = ReentryInjection::from_parameters(ReentryParameters {
            growth_rate,
            baseline_reentries: baseline,
            ..ReentryParameters::default()
        });
        for year in 1..years {
            prop_assert!(component.annual_injection(year) > component.annual_injection(year - 1));
        }
    }

    /// Injection is constant without growth.
    #[test]
    fn injection_constant_without_growth(
        baseline in 1.0f64..5000.0,
        year in 0u32..200,
    ) {
        let component = ReentryInjection::from_parameters(ReentryParameters {
            growth_rate: 0.0,
            baseline_reentries: baseline,
            ..ReentryParameters::default()
        });
        prop_assert_eq!(component.annual_injection(year), component.annual_injection(0));
    }

    /// Every non-negative coefficient falls in exactly one band.
    #[test]
    fn classification_is_total(chi in 0.0f64..100.0) {
        let level = RiskLevel::classify(chi);
        let matching = RiskLevel::ALL
            .iter()
            .filter(|band| {
                let upper = RiskLevel::ALL
                    .iter()
                    .find(|next| **next > **band)
                    .map_or(f64::INFINITY, |next| next.lower_bound());
                chi >= band.lower_bound() && chi < upper
            })
            .collect::<Vec<_>>();
        prop_assert_eq!(matching, vec![&level]);
    }

    /// The coupling factor is monotonic within each regime.
    #[test]
    fn coupling_monotonic_within_regime(
        a in 0.0f64..5000.0,
        b in 0.0f64..5000.0,
    ) {
        let component = CouplingCoefficient::from_parameters(CouplingParameters::default());
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        if component.is_cascading(low) == component.is_cascading(high) {
            prop_assert!(component.coupling_factor(low) <= component.coupling_factor(high));
        }
    }

    /// Below the threshold the factor never exceeds one.
    #[test]
    fn sub_threshold_factor_below_one(burden in 0.0f64..1000.0) {
        let component = CouplingCoefficient::from_parameters(CouplingParameters::default());
        prop_assume!(burden < 1000.0);
        prop_assert!(component.coupling_factor(burden) < 1.0);
    }
}
