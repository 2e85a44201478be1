//! motifkit Theory Engine - Scale-Relative Note Mapping and Leitmotif Encoding
//!
//! This crate converts between the absolute chromatic note indices used for
//! audio playback and the key/scale/mode-relative representation (scale
//! degree + accidental) persisted for leitmotif measures, and derives the
//! active chord tone for a timestep from a chord progression.
//!
//! # Determinism
//!
//! Every operation is a pure, stateless, allocation-free function over small
//! integer domains. The same inputs always produce the same outputs, there
//! is no shared mutable state, and all functions are safe to call from any
//! number of threads concurrently.
//!
//! # Example
//!
//! ```
//! use motifkit_spec::{KeySignature, Scale, ScaleTable};
//! use motifkit_theory::{chromatic_to_leitmotif, leitmotif_to_chromatic};
//!
//! let table = ScaleTable::builtin();
//! let signature = KeySignature::new(0, Scale::Major, 0).unwrap();
//! let intervals = table.intervals(signature.scale);
//!
//! // Encode a raw chromatic note key-relative, then decode it back.
//! let encoded = chromatic_to_leitmotif(7, signature.key, &intervals, signature.mode);
//! let decoded = leitmotif_to_chromatic(&encoded, signature.key, &intervals, signature.mode);
//! assert_eq!(decoded, 7);
//! ```
//!
//! # Module Structure
//!
//! - [`mapper`]: scale-degree to chromatic-note conversion and
//!   chord-progression stepping
//! - [`leitmotif`]: chromatic/leitmotif encode and decode
//! - [`avoid`]: pentatonic avoidance predicate for hint generation
//! - [`hint`]: shared chord-tone derivation for hint consumers

pub mod avoid;
pub mod error;
pub mod hint;
pub mod leitmotif;
pub mod mapper;

// Re-export main operations
pub use avoid::is_avoided;
pub use error::TheoryError;
pub use hint::chord_tone_at;
pub use leitmotif::{chromatic_to_leitmotif, leitmotif_to_chromatic, try_chromatic_to_leitmotif};
pub use mapper::{active_chord_degree, active_chord_step, degree_to_chromatic};

/// Crate version for engine identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine identifier for reporting.
pub const ENGINE_ID: &str = "motifkit-theory";
