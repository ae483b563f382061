//! Recommendation generation: conditional suggestions driven by the latest
//! snapshot plus two standing entries for the monitored population.

use chrono::Utc;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::core::thresholds::{heart_rate, oxygen, temperature};
use crate::models::recommendation::{
    Recommendation, RecommendationCategory, RecommendationPriority,
};
use crate::models::vitals::VitalsSnapshot;

/// Generate recommendations for the latest snapshot.
///
/// Always returns at least the two standing entries, even for an empty
/// snapshot. Every entry gets a fresh id, `created_at` of now, no expiry,
/// and `completed = false`; expiry and completion belong to the app layer.
#[instrument(skip(latest), fields(snapshot_id = %latest.id))]
pub fn generate_recommendations(latest: &VitalsSnapshot) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if let Some(hr) = latest.heart_rate {
        if hr > heart_rate::ELEVATED {
            recs.push(build(
                "Rest and Relaxation",
                "Your heart rate is elevated. Take a break, sit down, and breathe slowly \
                 for a few minutes.",
                RecommendationCategory::Rest,
                RecommendationPriority::Medium,
            ));
        } else if hr < heart_rate::LOW_ACTIVITY {
            recs.push(build(
                "Gentle Activity",
                "Your heart rate is on the low side. A short walk or light stretching can \
                 help get circulation going.",
                RecommendationCategory::Exercise,
                RecommendationPriority::Low,
            ));
        }
    }

    if let Some(spo2) = latest.oxygen_saturation {
        if spo2 < oxygen::BREATHING_EXERCISE {
            recs.push(build(
                "Deep Breathing Exercise",
                "Spend five minutes on slow, deep breaths to support your oxygen levels.",
                RecommendationCategory::Mindfulness,
                RecommendationPriority::Medium,
            ));
        }
    }

    if let Some(temp) = latest.temperature {
        if temp > temperature::HYDRATION {
            recs.push(build(
                "Stay Hydrated",
                "Your temperature is slightly raised. Drink water regularly and rest in a \
                 cool place.",
                RecommendationCategory::Hydration,
                RecommendationPriority::Medium,
            ));
        }
    }

    // Standing entries for the target population, appended unconditionally.
    recs.push(build(
        "Regular Prenatal Check-ups",
        "Keep up with your scheduled prenatal appointments to track your health and \
         your baby's development.",
        RecommendationCategory::Appointment,
        RecommendationPriority::High,
    ));
    recs.push(build(
        "Balanced Nutrition",
        "Aim for varied meals with plenty of vegetables, whole grains, and protein.",
        RecommendationCategory::Nutrition,
        RecommendationPriority::Medium,
    ));

    debug!(count = recs.len(), "generated recommendations");
    recs
}

fn build(
    title: &str,
    description: &str,
    category: RecommendationCategory,
    priority: RecommendationPriority,
) -> Recommendation {
    Recommendation {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        priority,
        created_at: Utc::now(),
        expires_at: None,
        completed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vitals::VitalSource;

    fn snapshot() -> VitalsSnapshot {
        VitalsSnapshot::new(VitalSource::Device)
    }

    fn titles(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn empty_snapshot_still_gets_standing_entries() {
        let recs = generate_recommendations(&snapshot());
        assert_eq!(
            titles(&recs),
            vec!["Regular Prenatal Check-ups", "Balanced Nutrition"]
        );
        assert_eq!(recs[0].priority, RecommendationPriority::High);
        assert_eq!(recs[0].category, RecommendationCategory::Appointment);
        assert_eq!(recs[1].priority, RecommendationPriority::Medium);
        assert_eq!(recs[1].category, RecommendationCategory::Nutrition);
    }

    #[test]
    fn elevated_heart_rate_suggests_rest() {
        let recs = generate_recommendations(&VitalsSnapshot {
            heart_rate: Some(110.0),
            ..snapshot()
        });
        assert!(titles(&recs).contains(&"Rest and Relaxation"));
        assert!(!titles(&recs).contains(&"Gentle Activity"));
    }

    #[test]
    fn low_heart_rate_suggests_activity() {
        let recs = generate_recommendations(&VitalsSnapshot {
            heart_rate: Some(55.0),
            ..snapshot()
        });
        assert!(titles(&recs).contains(&"Gentle Activity"));
        let rec = recs.iter().find(|r| r.title == "Gentle Activity").unwrap();
        assert_eq!(rec.priority, RecommendationPriority::Low);
    }

    #[test]
    fn heart_rate_boundaries_do_not_trigger() {
        // Exactly 100 and exactly 60 are both in range.
        for hr in [100.0, 60.0] {
            let recs = generate_recommendations(&VitalsSnapshot {
                heart_rate: Some(hr),
                ..snapshot()
            });
            assert_eq!(recs.len(), 2, "hr {hr} should only produce standing entries");
        }
    }

    #[test]
    fn sub_optimal_oxygen_suggests_breathing() {
        let recs = generate_recommendations(&VitalsSnapshot {
            oxygen_saturation: Some(97.0),
            ..snapshot()
        });
        assert!(titles(&recs).contains(&"Deep Breathing Exercise"));
    }

    #[test]
    fn raised_temperature_suggests_hydration() {
        let recs = generate_recommendations(&VitalsSnapshot {
            temperature: Some(37.3),
            ..snapshot()
        });
        assert!(titles(&recs).contains(&"Stay Hydrated"));
    }

    #[test]
    fn generated_entries_are_fresh_and_open_ended() {
        let recs = generate_recommendations(&snapshot());
        for rec in &recs {
            assert!(rec.expires_at.is_none());
            assert!(!rec.completed);
            assert!(rec.is_active(Utc::now()));
        }
        let again = generate_recommendations(&snapshot());
        assert_ne!(recs[0].id, again[0].id);
    }

    #[test]
    fn content_is_idempotent_modulo_ids() {
        let reading = VitalsSnapshot {
            heart_rate: Some(110.0),
            temperature: Some(37.4),
            ..snapshot()
        };
        let first = generate_recommendations(&reading);
        let second = generate_recommendations(&reading);
        assert_eq!(titles(&first), titles(&second));
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.description, b.description);
            assert_eq!(a.category, b.category);
            assert_eq!(a.priority, b.priority);
        }
    }
}
