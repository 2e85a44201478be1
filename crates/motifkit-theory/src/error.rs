//! Error types for the theory engine.

use thiserror::Error;

use motifkit_spec::EngineError;

/// Errors that can occur in the theory engine.
///
/// The engine is pure arithmetic over pre-validated inputs; the only runtime
/// failure is the data-consistency case where a malformed scale table leaves
/// a chromatic note more than one semitone from every degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("no scale degree within one semitone of chromatic note {raw}")]
    NoScaleDegree { raw: i32 },
}

impl EngineError for TheoryError {
    fn code(&self) -> &'static str {
        match self {
            TheoryError::NoScaleDegree { .. } => "THEORY_001",
        }
    }

    fn category(&self) -> &'static str {
        "theory"
    }
}
