//! Data models for the Materna monitoring core.

pub mod alert;
pub mod recommendation;
pub mod score;
pub mod vitals;
