//! Materna health monitoring core library
//!
//! This crate implements the decision logic behind the Materna monitoring
//! app: a deterministic pipeline that turns vital-sign snapshots into a
//! health score, alerts, and recommendations. It renders nothing, persists
//! nothing, and holds no state between calls; the surrounding app supplies
//! readings and owns the results.

pub mod core;
pub mod error;
pub mod models;

pub use crate::core::alerts::generate_alerts;
pub use crate::core::recommendations::generate_recommendations;
pub use crate::core::scoring::health_score;
pub use crate::core::{evaluate, VitalsEvaluation};
pub use crate::error::EngineError;
pub use crate::models::alert::{Alert, AlertKind, AlertSeverity};
pub use crate::models::recommendation::{
    Recommendation, RecommendationCategory, RecommendationPriority,
};
pub use crate::models::score::{HealthScore, StatusTier};
pub use crate::models::vitals::{VitalSource, VitalsSnapshot};
