//! Property-based tests for the evaluation pipeline.
//!
//! Verifies the guarantees the stages make for arbitrary readings:
//! - scores stay in [0, 100] and tiers match their buckets;
//! - the stages are deterministic modulo fresh ids and timestamps;
//! - alert output is never empty and the all-normal achievement is
//!   mutually exclusive with rule-driven alerts;
//! - the two standing recommendations always appear.

use chrono::Utc;
use proptest::option;
use proptest::prelude::*;

use materna::{
    generate_alerts, generate_recommendations, health_score, StatusTier, VitalSource,
    VitalsSnapshot,
};

fn arb_snapshot() -> impl Strategy<Value = VitalsSnapshot> {
    (
        option::of(20.0..220.0f64),
        option::of(50.0..100.0f64),
        option::of(30.0..43.0f64),
        option::of(60.0..220.0f64),
        option::of(30.0..140.0f64),
        option::of(20.0..500.0f64),
        any::<bool>(),
    )
        .prop_map(
            |(heart_rate, oxygen_saturation, temperature, systolic_bp, diastolic_bp, glucose, manual)| {
                VitalsSnapshot {
                    id: "prop".to_string(),
                    timestamp: Utc::now(),
                    heart_rate,
                    oxygen_saturation,
                    temperature,
                    systolic_bp,
                    diastolic_bp,
                    glucose,
                    source: if manual {
                        VitalSource::Manual
                    } else {
                        VitalSource::Device
                    },
                }
            },
        )
}

proptest! {
    #[test]
    fn score_stays_in_range_and_tier_matches(snapshot in arb_snapshot()) {
        let score = health_score(&snapshot);
        prop_assert!((0.0..=100.0).contains(&score.value));
        prop_assert_eq!(score.tier, StatusTier::from_score(score.value));
    }

    #[test]
    fn scoring_is_deterministic(snapshot in arb_snapshot()) {
        let first = health_score(&snapshot);
        let second = health_score(&snapshot);
        prop_assert_eq!(first.value, second.value);
        prop_assert_eq!(first.tier, second.tier);
    }

    #[test]
    fn source_never_affects_the_score(snapshot in arb_snapshot()) {
        let device = VitalsSnapshot { source: VitalSource::Device, ..snapshot.clone() };
        let manual = VitalsSnapshot { source: VitalSource::Manual, ..snapshot };
        prop_assert_eq!(health_score(&device).value, health_score(&manual).value);
    }

    #[test]
    fn alerts_are_never_empty_and_achievement_is_exclusive(
        latest in arb_snapshot(),
        previous in option::of(arb_snapshot()),
    ) {
        let alerts = generate_alerts(&latest, previous.as_ref());
        prop_assert!(!alerts.is_empty());

        let has_achievement = alerts.iter().any(|a| a.title == "All Vitals Normal");
        if has_achievement {
            prop_assert_eq!(alerts.len(), 1);
        }
        for alert in &alerts {
            prop_assert!(!alert.acknowledged);
        }
    }

    #[test]
    fn alert_content_is_deterministic(
        latest in arb_snapshot(),
        previous in option::of(arb_snapshot()),
    ) {
        let first = generate_alerts(&latest, previous.as_ref());
        let second = generate_alerts(&latest, previous.as_ref());
        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            prop_assert_eq!(&a.title, &b.title);
            prop_assert_eq!(&a.message, &b.message);
            prop_assert_eq!(a.severity, b.severity);
            prop_assert_eq!(a.kind, b.kind);
            // Ids are fresh per evaluation.
            prop_assert_ne!(&a.id, &b.id);
        }
    }

    #[test]
    fn standing_recommendations_always_present(snapshot in arb_snapshot()) {
        let recs = generate_recommendations(&snapshot);
        prop_assert!(recs.iter().any(|r| r.title == "Regular Prenatal Check-ups"));
        prop_assert!(recs.iter().any(|r| r.title == "Balanced Nutrition"));
        let now = Utc::now();
        for rec in &recs {
            prop_assert!(rec.expires_at.is_none());
            prop_assert!(rec.is_active(now));
        }
    }

    #[test]
    fn recommendation_content_is_deterministic(snapshot in arb_snapshot()) {
        let first = generate_recommendations(&snapshot);
        let second = generate_recommendations(&snapshot);
        let titles = |recs: &[materna::Recommendation]| {
            recs.iter().map(|r| r.title.clone()).collect::<Vec<_>>()
        };
        prop_assert_eq!(titles(&first), titles(&second));
    }
}
