//! Scale-degree to chromatic-note mapping and chord-progression stepping.

use motifkit_spec::constants::{MAX_INSTRUMENT_NOTES, SCALE_LENGTH};
use motifkit_spec::{ChordProgression, ScaleIntervals};

/// Convert a scale-degree index to an absolute chromatic note.
///
/// Walks `degree_index` steps of the interval pattern starting from `key`,
/// rotating the pattern by `mode`, then folds the result into the playable
/// chromatic range. Deterministic and side-effect free.
///
/// # Preconditions
///
/// `key` must be in `0..OCTAVE_SIZE` and `mode` in `0..SCALE_LENGTH`. These
/// are caller contracts (enforced where a
/// [`KeySignature`](motifkit_spec::KeySignature) is constructed), checked
/// here only in debug builds.
///
/// # Examples
///
/// ```
/// use motifkit_theory::degree_to_chromatic;
///
/// let major = [2, 2, 1, 2, 2, 2, 1];
/// assert_eq!(degree_to_chromatic(0, &major, 0, 0), 0); // C
/// assert_eq!(degree_to_chromatic(0, &major, 0, 4), 7); // G, the 5th degree
/// assert_eq!(degree_to_chromatic(0, &major, 0, 7), 12); // C, one octave up
/// ```
pub fn degree_to_chromatic(key: u8, intervals: &ScaleIntervals, mode: u8, degree_index: u32) -> i32 {
    debug_assert!((mode as usize) < SCALE_LENGTH, "mode {} out of range", mode);

    let mut note = key as i32;
    for sub_index in 0..degree_index as usize {
        let scale_idx = (sub_index + mode as usize) % SCALE_LENGTH;
        note += intervals[scale_idx] as i32;
    }
    note.rem_euclid(MAX_INSTRUMENT_NOTES)
}

/// The 1-based scale step active at a given timestep.
///
/// `progression_rate` is the number of timesteps each progression entry
/// holds for; the progression repeats once exhausted:
/// `chord_index = (step_index / progression_rate) % progression.len()`.
///
/// # Preconditions
///
/// `progression_rate > 0`. Division by zero is a caller bug; the progression
/// itself is non-empty by construction.
pub fn active_chord_step(
    progression: &ChordProgression,
    progression_rate: u32,
    step_index: u32,
) -> u8 {
    debug_assert!(progression_rate > 0, "progression rate must be positive");

    let chord_index = (step_index / progression_rate) as usize % progression.len();
    progression.step(chord_index)
}

/// The 0-based degree offset of the active chord step.
///
/// Progression entries are musician-facing 1-based scale steps; this is the
/// form combined with [`degree_to_chromatic`].
pub fn active_chord_degree(
    progression: &ChordProgression,
    progression_rate: u32,
    step_index: u32,
) -> u8 {
    active_chord_step(progression, progression_rate, step_index) - 1
}
