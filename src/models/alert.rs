use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of condition an alert describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// A single measurement crossed an absolute threshold.
    VitalThreshold,
    /// Derived from comparing two consecutive snapshots.
    TrendChange,
    /// Overall-status events, e.g. the all-normal achievement.
    GeneralStatus,
    Emergency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
    Emergency,
}

impl AlertSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertSeverity::Info => "info",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Critical => "critical",
            AlertSeverity::Emergency => "emergency",
        }
    }
}

/// An event describing an out-of-range condition or trend.
///
/// Created unacknowledged by the alert generator. Acknowledgement is the
/// only mutation; the app layer owns retention and display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    pub action_label: Option<String>,
    pub acknowledged: bool,
}

impl Alert {
    pub fn acknowledge(&mut self) {
        self.acknowledged = true;
    }
}
