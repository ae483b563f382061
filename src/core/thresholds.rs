//! Clinical threshold constants used by the scorer, alert rules, and
//! recommendation rules.
//!
//! These are fixed clinical reference values for the monitored population,
//! not runtime configuration: the score bands and tier cutoffs they define
//! are user-visible severity boundaries and must not drift between builds.

/// Heart rate bands (beats per minute).
pub mod heart_rate {
    /// Resting range scoring 100.
    pub const OPTIMAL_LOW: f64 = 60.0;
    pub const OPTIMAL_HIGH: f64 = 100.0;
    /// Acceptable range scoring 80.
    pub const ACCEPTABLE_LOW: f64 = 50.0;
    pub const ACCEPTABLE_HIGH: f64 = 120.0;
    /// Concerning range scoring 60; anything outside scores 30.
    pub const CONCERNING_LOW: f64 = 40.0;
    pub const CONCERNING_HIGH: f64 = 140.0;

    /// Absolute alert thresholds (strict comparisons).
    pub const ALERT_HIGH: f64 = 120.0;
    pub const ALERT_LOW: f64 = 50.0;
    /// Change between consecutive readings that fires the trend alert.
    pub const TREND_DELTA: f64 = 20.0;

    /// Recommendation triggers.
    pub const ELEVATED: f64 = 100.0;
    pub const LOW_ACTIVITY: f64 = 60.0;
}

/// Oxygen saturation bands (percent).
pub mod oxygen {
    pub const OPTIMAL: f64 = 95.0;
    pub const ACCEPTABLE: f64 = 90.0;
    pub const CONCERNING: f64 = 85.0;

    /// Below this is a critical alert.
    pub const ALERT_LOW: f64 = 95.0;
    /// Below this suggests breathing exercises.
    pub const BREATHING_EXERCISE: f64 = 98.0;
}

/// Body temperature bands (degrees Celsius).
pub mod temperature {
    pub const OPTIMAL_LOW: f64 = 36.1;
    pub const OPTIMAL_HIGH: f64 = 37.2;
    pub const ACCEPTABLE_LOW: f64 = 35.5;
    pub const ACCEPTABLE_HIGH: f64 = 37.8;
    pub const CONCERNING_LOW: f64 = 35.0;
    pub const CONCERNING_HIGH: f64 = 38.5;

    pub const ALERT_HIGH: f64 = 37.5;
    pub const HYDRATION: f64 = 37.0;
}

/// Blood pressure bands (mmHg), systolic and diastolic together.
pub mod blood_pressure {
    pub const OPTIMAL_SYS_LOW: f64 = 90.0;
    pub const OPTIMAL_SYS_HIGH: f64 = 120.0;
    pub const OPTIMAL_DIA_LOW: f64 = 60.0;
    pub const OPTIMAL_DIA_HIGH: f64 = 80.0;
    pub const ACCEPTABLE_SYS_LOW: f64 = 80.0;
    pub const ACCEPTABLE_SYS_HIGH: f64 = 140.0;
    pub const ACCEPTABLE_DIA_LOW: f64 = 50.0;
    pub const ACCEPTABLE_DIA_HIGH: f64 = 90.0;
}

/// Blood glucose bands (mg/dL).
pub mod glucose {
    pub const OPTIMAL_LOW: f64 = 70.0;
    pub const OPTIMAL_HIGH: f64 = 140.0;
    pub const ACCEPTABLE_LOW: f64 = 60.0;
    pub const ACCEPTABLE_HIGH: f64 = 180.0;

    pub const ALERT_HIGH: f64 = 140.0;
    pub const ALERT_LOW: f64 = 70.0;
}
