//! motifkit Data Model
//!
//! This crate provides the value types, lookup tables, and boundary
//! validation shared by the motifkit theory engine and its callers.
//!
//! # Overview
//!
//! The configuration/session layer owns key, scale, mode, and
//! chord-progression settings; measures persist either absolute chromatic
//! note indices or key-relative [`LeitmotifNote`] pairs. This crate defines
//! those types:
//!
//! - **[`Scale`] / [`ScaleTable`]**: scale identifiers and their
//!   seven-interval patterns, plus pentatonic avoid pairs
//! - **[`KeySignature`]**: validated key/scale/mode triple
//! - **[`LeitmotifNote`] / [`Accidental`]**: the persisted key-relative note
//!   representation
//! - **[`ChordProgression`]**: validated 1-based scale-step sequence
//!
//! # Example
//!
//! ```
//! use motifkit_spec::{ChordProgression, KeySignature, Scale, ScaleTable};
//!
//! let signature = KeySignature::new(0, Scale::Major, 0).unwrap();
//! let table = ScaleTable::builtin();
//! let progression = ChordProgression::new(vec![1, 4, 4, 5]).unwrap();
//!
//! assert_eq!(table.intervals(signature.scale), [2, 2, 1, 2, 2, 2, 1]);
//! assert_eq!(progression.step(1), 4);
//! ```
//!
//! # Validation
//!
//! All range checks live at construction/deserialization time so the theory
//! engine can stay check-free: a value that exists is a value that is
//! well-formed.

pub mod constants;
pub mod error;
pub mod tables;
pub mod theory;

// Re-export main types
pub use constants::{
    MAX_INSTRUMENT_NOTES, OCTAVE_SIZE, PLAYABLE_OCTAVES, SCALE_LENGTH, TOTAL_SCALE_NOTES,
};
pub use error::{EngineError, SpecError};
pub use tables::{AvoidPair, ScaleIntervals, ScaleTable};
pub use theory::{Accidental, ChordProgression, KeySignature, LeitmotifNote, Scale, ScaleFamily};

/// Crate version for identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
