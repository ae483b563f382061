//! The evaluation pipeline: scoring, alert rules, and recommendations over
//! vital-sign snapshots.

pub mod alerts;
pub mod recommendations;
pub mod scoring;
pub mod thresholds;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::EngineError;
use crate::models::alert::Alert;
use crate::models::recommendation::Recommendation;
use crate::models::score::HealthScore;
use crate::models::vitals::VitalsSnapshot;

/// The combined output of one pipeline run over a batch of readings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalsEvaluation {
    pub score: HealthScore,
    pub alerts: Vec<Alert>,
    pub recommendations: Vec<Recommendation>,
}

/// Run all three stages over a chronologically ordered batch of readings.
///
/// The last reading is evaluated as the latest snapshot; the one before it,
/// when present, feeds the heart-rate trend check. The stages themselves
/// are pure and independently callable; this is the convenience entry point
/// for callers holding a reading stream.
///
/// # Errors
///
/// `EngineError::InvalidInput` when `readings` is empty: no meaningful
/// result can be produced from no reading.
#[instrument(skip(readings), fields(batch_len = readings.len()))]
pub fn evaluate(readings: &[VitalsSnapshot]) -> Result<VitalsEvaluation, EngineError> {
    let latest = readings.last().ok_or(EngineError::InvalidInput)?;
    let previous = readings.len().checked_sub(2).map(|i| &readings[i]);

    Ok(VitalsEvaluation {
        score: scoring::health_score(latest),
        alerts: alerts::generate_alerts(latest, previous),
        recommendations: recommendations::generate_recommendations(latest),
    })
}
