//! Numeric constants shared by the data model and the theory engine.

/// Number of degrees in a diatonic scale.
pub const SCALE_LENGTH: usize = 7;

/// Number of semitones in an octave.
pub const OCTAVE_SIZE: i32 = 12;

/// Number of octaves an instrument can play.
pub const PLAYABLE_OCTAVES: i32 = 5;

/// Total chromatic range understood by the audio layer.
///
/// Chromatic note indices are always folded into `[0, MAX_INSTRUMENT_NOTES)`.
pub const MAX_INSTRUMENT_NOTES: i32 = OCTAVE_SIZE * PLAYABLE_OCTAVES;

/// Total diatonic-degree range spanning the playable octaves.
///
/// Scale degrees in a [`crate::LeitmotifNote`] are indices into this range.
pub const TOTAL_SCALE_NOTES: i32 = SCALE_LENGTH as i32 * PLAYABLE_OCTAVES;
