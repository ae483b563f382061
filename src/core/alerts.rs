//! Alert generation: absolute threshold checks on the latest snapshot, a
//! heart-rate trend check against the previous snapshot, and an all-normal
//! achievement when nothing fired.
//!
//! Rules are cumulative; one snapshot can raise several alerts. Absent
//! metrics are skipped, never treated as errors. Callers sort by timestamp
//! descending for display; the generator itself does not order.

use chrono::Utc;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::core::thresholds::{glucose, heart_rate, oxygen, temperature};
use crate::models::alert::{Alert, AlertKind, AlertSeverity};
use crate::models::vitals::VitalsSnapshot;

/// Evaluate all alert rules against the latest snapshot.
///
/// `previous` enables the heart-rate trend check; without it only absolute
/// thresholds run. When no rule fires, exactly one informational
/// "All Vitals Normal" alert is returned. Alerts are never auto-resolved
/// here; acknowledgement happens in the app layer.
#[instrument(skip(latest, previous), fields(snapshot_id = %latest.id))]
pub fn generate_alerts(latest: &VitalsSnapshot, previous: Option<&VitalsSnapshot>) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if let Some(hr) = latest.heart_rate {
        if hr > heart_rate::ALERT_HIGH {
            alerts.push(threshold_alert(
                AlertSeverity::Warning,
                "High Heart Rate",
                format!("Heart rate is {hr:.0} bpm, above the normal range."),
            ));
        } else if hr < heart_rate::ALERT_LOW {
            alerts.push(threshold_alert(
                AlertSeverity::Warning,
                "Low Heart Rate",
                format!("Heart rate is {hr:.0} bpm, below the normal range."),
            ));
        }
    }

    if let Some(spo2) = latest.oxygen_saturation {
        if spo2 < oxygen::ALERT_LOW {
            let mut alert = threshold_alert(
                AlertSeverity::Critical,
                "Low Oxygen Saturation",
                format!("Oxygen saturation is {spo2:.0}%, below the safe level."),
            );
            alert.action_label = Some("Contact your care provider".to_string());
            alerts.push(alert);
        }
    }

    if let Some(temp) = latest.temperature {
        if temp > temperature::ALERT_HIGH {
            alerts.push(threshold_alert(
                AlertSeverity::Warning,
                "Elevated Temperature",
                format!("Body temperature is {temp:.1}\u{b0}C, above the normal range."),
            ));
        }
    }

    if let Some(value) = latest.glucose {
        if value > glucose::ALERT_HIGH {
            alerts.push(threshold_alert(
                AlertSeverity::Warning,
                "High Glucose",
                format!("Blood glucose is {value:.0} mg/dL, above the normal range."),
            ));
        } else if value < glucose::ALERT_LOW {
            alerts.push(threshold_alert(
                AlertSeverity::Warning,
                "Low Glucose",
                format!("Blood glucose is {value:.0} mg/dL, below the normal range."),
            ));
        }
    }

    // Trend check covers heart rate only. The other metrics intentionally
    // have no trend rule; see DESIGN.md.
    if let (Some(current), Some(prior)) =
        (latest.heart_rate, previous.and_then(|p| p.heart_rate))
    {
        if (current - prior).abs() > heart_rate::TREND_DELTA {
            alerts.push(Alert {
                id: Uuid::new_v4().to_string(),
                timestamp: Utc::now(),
                kind: AlertKind::TrendChange,
                severity: AlertSeverity::Info,
                title: "Rapid Heart Rate Change".to_string(),
                message: format!(
                    "Heart rate changed from {prior:.0} to {current:.0} bpm between readings."
                ),
                action_label: None,
                acknowledged: false,
            });
        }
    }

    if alerts.is_empty() {
        alerts.push(Alert {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            kind: AlertKind::GeneralStatus,
            severity: AlertSeverity::Info,
            title: "All Vitals Normal".to_string(),
            message: "Every measured vital sign is within its normal range. Keep it up!"
                .to_string(),
            action_label: None,
            acknowledged: false,
        });
    }

    debug!(count = alerts.len(), "generated alerts");
    alerts
}

fn threshold_alert(severity: AlertSeverity, title: &str, message: String) -> Alert {
    Alert {
        id: Uuid::new_v4().to_string(),
        timestamp: Utc::now(),
        kind: AlertKind::VitalThreshold,
        severity,
        title: title.to_string(),
        message,
        action_label: None,
        acknowledged: false,
    }
}
