use thiserror::Error;

/// Errors produced by the evaluation pipeline.
///
/// Per-metric absence is never an error: a missing measurement is skipped by
/// every rule. The only failure mode is being asked to evaluate nothing.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no readings supplied: at least one vitals snapshot is required")]
    InvalidInput,
}
