//! Property tests for the scoring functions.

use proptest::prelude::*;

use causeway_core::config::{DecayCurve, PcsConfig};
use causeway_core::models::PcsSubscores;
use causeway_scoring::{decay, pcs};
use chrono::Duration;

proptest! {
    // =========================================================================
    // PCS stays in [0, 1] and matches its own breakdown
    // =========================================================================
    #[test]
    fn pcs_score_in_unit_range(
        p1 in -1.0..2.0f64,
        p2 in -1.0..2.0f64,
        p3 in -1.0..2.0f64,
        p4 in -1.0..2.0f64,
    ) {
        let config = PcsConfig::default();
        let breakdown = pcs::score(&PcsSubscores::new(p1, p2, p3, p4), &config);

        prop_assert!((0.0..=1.0).contains(&breakdown.score));
        let recomputed: f64 = breakdown.weighted.iter().sum();
        prop_assert!((breakdown.score - recomputed.clamp(0.0, 1.0)).abs() < 1e-12);
    }

    // =========================================================================
    // PCS is monotone in each sub-score
    // =========================================================================
    #[test]
    fn pcs_is_monotone_in_subscores(
        base in 0.0..=0.8f64,
        bump in 0.0..=0.2f64,
    ) {
        let config = PcsConfig::default();
        let low = pcs::score(&PcsSubscores::new(base, base, base, base), &config);
        let high = pcs::score(&PcsSubscores::new(base + bump, base, base, base), &config);
        prop_assert!(high.score >= low.score);
    }

    // =========================================================================
    // Decay: monotone in age, never reaches 1, zero at age zero
    // =========================================================================
    #[test]
    fn decay_monotone_and_bounded(
        half_life in 1.0..1000.0f64,
        rate in 0.0..0.1f64,
        age_a in 0i64..100_000,
        age_b in 0i64..100_000,
    ) {
        let (young, old) = (age_a.min(age_b), age_a.max(age_b));
        for curve in [
            DecayCurve::Exponential { half_life_days: half_life },
            DecayCurve::Linear { rate_per_day: rate },
        ] {
            let d_young = decay::factor(&curve, Duration::days(young));
            let d_old = decay::factor(&curve, Duration::days(old));
            prop_assert!(d_young <= d_old);
            prop_assert!((0.0..1.0).contains(&d_old));
            prop_assert_eq!(decay::factor(&curve, Duration::zero()), 0.0);
        }
    }
}
