//! Error types for data-model validation.

use thiserror::Error;

/// Errors raised when constructing or validating data-model values.
///
/// These are boundary errors: once a value has been constructed successfully,
/// the theory engine assumes it is well-formed and performs no further checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("key {key} out of range (must be 0..{max})")]
    KeyOutOfRange { key: u8, max: i32 },
    #[error("mode {mode} out of range (must be 0..{max})")]
    ModeOutOfRange { mode: u8, max: usize },
    #[error("chord progression cannot be empty")]
    EmptyProgression,
    #[error("chord progression step {step} at position {position} out of range (must be 1..={max})")]
    ProgressionStepOutOfRange {
        step: u8,
        position: usize,
        max: usize,
    },
    #[error("scale intervals sum to {sum}, expected {expected}")]
    BadIntervalSum { sum: i32, expected: i32 },
    #[error("invalid accidental value {value} (must be -1, 0, or 1)")]
    InvalidAccidental { value: i8 },
}

impl EngineError for SpecError {
    fn code(&self) -> &'static str {
        match self {
            SpecError::KeyOutOfRange { .. } => "SPEC_001",
            SpecError::ModeOutOfRange { .. } => "SPEC_002",
            SpecError::EmptyProgression => "SPEC_003",
            SpecError::ProgressionStepOutOfRange { .. } => "SPEC_004",
            SpecError::BadIntervalSum { .. } => "SPEC_005",
            SpecError::InvalidAccidental { .. } => "SPEC_006",
        }
    }

    fn category(&self) -> &'static str {
        "spec"
    }
}

/// Trait implemented by all motifkit error types.
///
/// Provides stable string error codes for programmatic handling and
/// reporting, without requiring callers to match on concrete enums.
pub trait EngineError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "SPEC_001" or "THEORY_001". These codes
    /// are stable across releases.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}
