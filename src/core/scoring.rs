//! Health scoring: one vitals snapshot in, a 0-100 score and status tier out.
//!
//! Each present metric gets a sub-score from tiered range checks; the final
//! score is the arithmetic mean of the present sub-scores. A snapshot with
//! nothing measured scores a neutral 50. Band bounds are inclusive.

use tracing::{debug, instrument};

use crate::core::thresholds::{blood_pressure, glucose, heart_rate, oxygen, temperature};
use crate::models::score::HealthScore;
use crate::models::vitals::VitalsSnapshot;

/// Neutral score when a snapshot carries no measurements.
const NEUTRAL_SCORE: f64 = 50.0;

/// Compute the health score for a single snapshot.
///
/// Pure and infallible: absent metrics are skipped, an all-absent snapshot
/// yields 50 / Fair. No history is consulted.
#[instrument(skip(snapshot), fields(snapshot_id = %snapshot.id))]
pub fn health_score(snapshot: &VitalsSnapshot) -> HealthScore {
    let mut sub_scores = Vec::with_capacity(5);

    if let Some(hr) = snapshot.heart_rate {
        sub_scores.push(score_heart_rate(hr));
    }
    if let Some(spo2) = snapshot.oxygen_saturation {
        sub_scores.push(score_oxygen_saturation(spo2));
    }
    if let Some(temp) = snapshot.temperature {
        sub_scores.push(score_temperature(temp));
    }
    if let Some((sys, dia)) = snapshot.blood_pressure() {
        sub_scores.push(score_blood_pressure(sys, dia));
    }
    if let Some(glucose) = snapshot.glucose {
        sub_scores.push(score_glucose(glucose));
    }

    let value = if sub_scores.is_empty() {
        NEUTRAL_SCORE
    } else {
        sub_scores.iter().sum::<f64>() / sub_scores.len() as f64
    };

    let score = HealthScore::new(value);
    debug!(value = score.value, tier = score.tier.as_str(), "scored snapshot");
    score
}

/// 60-100 bpm scores 100, 50-120 scores 80, 40-140 scores 60, else 30.
fn score_heart_rate(hr: f64) -> f64 {
    if (heart_rate::OPTIMAL_LOW..=heart_rate::OPTIMAL_HIGH).contains(&hr) {
        100.0
    } else if (heart_rate::ACCEPTABLE_LOW..=heart_rate::ACCEPTABLE_HIGH).contains(&hr) {
        80.0
    } else if (heart_rate::CONCERNING_LOW..=heart_rate::CONCERNING_HIGH).contains(&hr) {
        60.0
    } else {
        30.0
    }
}

/// >=95% scores 100, >=90 scores 70, >=85 scores 40, else 20.
fn score_oxygen_saturation(spo2: f64) -> f64 {
    if spo2 >= oxygen::OPTIMAL {
        100.0
    } else if spo2 >= oxygen::ACCEPTABLE {
        70.0
    } else if spo2 >= oxygen::CONCERNING {
        40.0
    } else {
        20.0
    }
}

/// 36.1-37.2 scores 100, 35.5-37.8 scores 80, 35.0-38.5 scores 60, else 30.
fn score_temperature(temp: f64) -> f64 {
    if (temperature::OPTIMAL_LOW..=temperature::OPTIMAL_HIGH).contains(&temp) {
        100.0
    } else if (temperature::ACCEPTABLE_LOW..=temperature::ACCEPTABLE_HIGH).contains(&temp) {
        80.0
    } else if (temperature::CONCERNING_LOW..=temperature::CONCERNING_HIGH).contains(&temp) {
        60.0
    } else {
        30.0
    }
}

/// 90-120 over 60-80 scores 100, 80-140 over 50-90 scores 70, else 40.
fn score_blood_pressure(sys: f64, dia: f64) -> f64 {
    if (blood_pressure::OPTIMAL_SYS_LOW..=blood_pressure::OPTIMAL_SYS_HIGH).contains(&sys)
        && (blood_pressure::OPTIMAL_DIA_LOW..=blood_pressure::OPTIMAL_DIA_HIGH).contains(&dia)
    {
        100.0
    } else if (blood_pressure::ACCEPTABLE_SYS_LOW..=blood_pressure::ACCEPTABLE_SYS_HIGH)
        .contains(&sys)
        && (blood_pressure::ACCEPTABLE_DIA_LOW..=blood_pressure::ACCEPTABLE_DIA_HIGH)
            .contains(&dia)
    {
        70.0
    } else {
        40.0
    }
}

/// 70-140 mg/dL scores 100, 60-180 scores 70, else 40.
fn score_glucose(value: f64) -> f64 {
    if (glucose::OPTIMAL_LOW..=glucose::OPTIMAL_HIGH).contains(&value) {
        100.0
    } else if (glucose::ACCEPTABLE_LOW..=glucose::ACCEPTABLE_HIGH).contains(&value) {
        70.0
    } else {
        40.0
    }
}
