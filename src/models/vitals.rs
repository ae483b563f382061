use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Provenance of a vitals reading. Informational only; scoring and alert
/// rules never branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalSource {
    Device,
    Manual,
}

impl VitalSource {
    pub fn as_str(self) -> &'static str {
        match self {
            VitalSource::Device => "device",
            VitalSource::Manual => "manual",
        }
    }
}

/// One timestamped set of vital-sign measurements.
///
/// `None` means "not measured in this reading", never zero. A snapshot with
/// every measurement absent is valid; it scores a neutral 50 and fires no
/// threshold alerts. Snapshots are immutable once constructed; an updated
/// reading is a new snapshot built with `Clone` plus struct update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalsSnapshot {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub heart_rate: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    pub temperature: Option<f64>,
    pub systolic_bp: Option<f64>,
    pub diastolic_bp: Option<f64>,
    pub glucose: Option<f64>,
    pub source: VitalSource,
}

impl VitalsSnapshot {
    /// An empty reading taken now, with a fresh id. Measurements are filled
    /// in with struct update syntax.
    pub fn new(source: VitalSource) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            heart_rate: None,
            oxygen_saturation: None,
            temperature: None,
            systolic_bp: None,
            diastolic_bp: None,
            glucose: None,
            source,
        }
    }

    /// True when no measurement is present at all.
    pub fn is_empty(&self) -> bool {
        self.heart_rate.is_none()
            && self.oxygen_saturation.is_none()
            && self.temperature.is_none()
            && self.systolic_bp.is_none()
            && self.diastolic_bp.is_none()
            && self.glucose.is_none()
    }

    /// Blood pressure counts as a single combined metric; it is only usable
    /// when both the systolic and diastolic values were measured.
    pub fn blood_pressure(&self) -> Option<(f64, f64)> {
        match (self.systolic_bp, self.diastolic_bp) {
            (Some(sys), Some(dia)) => Some((sys, dia)),
            _ => None,
        }
    }
}
