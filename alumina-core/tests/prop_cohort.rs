//! Property-based tests for the cohort ring.
//!
//! Covers: fallout after the residence time, mass balance between injection,
//! burden and fallout.

use alumina_core::cohort::CohortRing;
use proptest::prelude::*;

proptest! {
    /// The burden in a given year is the sum of the most recent `R` injections.
    #[test]
    fn total_is_sum_of_recent_cohorts(
        residence_time in 1usize..40,
        injections in prop::collection::vec(0.0f64..1.0e4, 0..80),
    ) {
        let mut ring = CohortRing::new(residence_time).unwrap();

        for (year, &amount) in injections.iter().enumerate() {
            ring.inject(amount);

            let first = (year + 1).saturating_sub(residence_time);
            let expected: f64 = injections[first..=year].iter().sum();
            let total = ring.total();
            prop_assert!(
                (total - expected).abs() <= 1e-9 * expected.max(1.0),
                "year {}: total {} != expected {}", year, total, expected
            );

            ring.advance();
        }
    }

    /// Everything injected is either still aloft or has fallen out.
    #[test]
    fn mass_is_conserved(
        residence_time in 1usize..40,
        injections in prop::collection::vec(0.0f64..1.0e4, 0..80),
    ) {
        let mut ring = CohortRing::new(residence_time).unwrap();
        let mut fallout = 0.0;

        for &amount in &injections {
            ring.inject(amount);
            fallout += ring.advance();
        }

        let injected: f64 = injections.iter().sum();
        prop_assert!((injected - fallout - ring.total()).abs() <= 1e-9 * injected.max(1.0));
    }

    /// The buffer never changes length and slot 0 is empty after advancing.
    #[test]
    fn advance_keeps_shape(
        residence_time in 1usize..40,
        amount in 0.0f64..1.0e4,
        years in 0usize..100,
    ) {
        let mut ring = CohortRing::new(residence_time).unwrap();
        for _ in 0..years {
            ring.inject(amount);
            ring.advance();
            prop_assert_eq!(ring.cohorts().len(), residence_time);
            prop_assert_eq!(ring.cohorts()[0], 0.0);
        }
    }
}
