//! Property-based tests for the generator.
//!
//! These hold for any seed and any valid weight table.

mod common;

use chrono::Duration;
use common::{at, config, generator_with};
use paygen_core::{rng::GenRng, sampler::WeightedTable};
use proptest::prelude::*;
use std::collections::HashSet;

// =============================================================================
// Arbitrary Strategies
// =============================================================================

/// Weight tables with at least one strictly positive weight.
fn arb_weights() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..100.0, 1..12)
        .prop_filter("needs a positive weight", |w| w.iter().any(|x| *x > 0.0))
}

/// Window lengths from zero up to about two years, in seconds.
fn arb_window_secs() -> impl Strategy<Value = i64> {
    0i64..(2 * 366 * 86_400)
}

// =============================================================================
// Sampler
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Sampling never returns a zero-weight entry.
    #[test]
    fn sampler_skips_zero_weights(weights in arb_weights(), seed in any::<u64>()) {
        let table = WeightedTable::new(
            "prop",
            weights.iter().copied().enumerate().collect(),
        ).unwrap();
        let mut rng = GenRng::seeded(seed);
        for _ in 0..200 {
            let i = *table.sample(&mut rng);
            prop_assert!(weights[i] > 0.0, "picked index {} with weight {}", i, weights[i]);
        }
    }
}

// =============================================================================
// Generator invariants
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn records_hold_invariants(
        seed in any::<u64>(),
        n in 1usize..300,
        span in arb_window_secs(),
    ) {
        let start = at(2024, 1, 1, 0, 0, 0);
        let end = start + Duration::seconds(span);
        let records = generator_with(config(n, start, end), seed).generate().unwrap();

        prop_assert_eq!(records.len(), n);
        let mut codes = HashSet::new();
        for r in &records {
            prop_assert!(r.amount > 0 && r.amount % 1000 == 0);
            prop_assert_eq!(r.authorization_code.len(), 11);
            prop_assert_eq!(
                &r.authorization_code[..6],
                r.approval_time.format("%y%m%d").to_string()
            );
            prop_assert!(codes.insert(r.authorization_code.clone()));
            prop_assert!(r.approval_time.date() >= start.date());
            prop_assert!(r.approval_time.date() <= end.date());
            if let Some(c) = r.canceled_at {
                prop_assert!(r.is_canceled());
                prop_assert!(c > r.approval_time);
                prop_assert!(c <= end);
            }
        }
        prop_assert!(records.windows(2).all(|w| w[0].approval_time <= w[1].approval_time));
    }
}
