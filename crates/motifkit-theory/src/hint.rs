//! Shared chord-tone derivation for editor hints.
//!
//! Hint generators all need the same first step: which chromatic note is the
//! root of the chord active at a timestep. The walk from that chord tone to
//! a target note is hint-strategy specific and stays with the caller.

use motifkit_spec::{ChordProgression, KeySignature, ScaleTable};

use crate::mapper::{active_chord_degree, degree_to_chromatic};

/// The chromatic note of the active chord's root degree at a timestep.
pub fn chord_tone_at(
    signature: &KeySignature,
    table: &ScaleTable,
    progression: &ChordProgression,
    progression_rate: u32,
    step_index: u32,
) -> i32 {
    let degree = active_chord_degree(progression, progression_rate, step_index);
    let intervals = table.intervals(signature.scale);
    degree_to_chromatic(signature.key, &intervals, signature.mode, degree as u32)
}
