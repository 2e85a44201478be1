//! Bidirectional mapping between chromatic notes and leitmotif notes.
//!
//! Decoding (degree + accidental to chromatic) is a thin wrapper over the
//! scale mapper. Encoding is the hard direction: it scans the diatonic
//! ladder for the degree whose natural pitch lies within one semitone of the
//! target, spelling off-scale notes with the musically conventional
//! accidental so that serialization is stable across saves.

use motifkit_spec::constants::{MAX_INSTRUMENT_NOTES, TOTAL_SCALE_NOTES};
use motifkit_spec::{Accidental, LeitmotifNote, ScaleIntervals};

use crate::error::TheoryError;
use crate::mapper::degree_to_chromatic;

/// Decode a leitmotif note to an absolute chromatic note under the current
/// key/scale/mode.
///
/// # Examples
///
/// ```
/// use motifkit_spec::{Accidental, LeitmotifNote};
/// use motifkit_theory::leitmotif_to_chromatic;
///
/// let major = [2, 2, 1, 2, 2, 2, 1];
/// let sharp_one = LeitmotifNote::new(0, Accidental::Sharp);
/// assert_eq!(leitmotif_to_chromatic(&sharp_one, 0, &major, 0), 1); // C#
/// ```
pub fn leitmotif_to_chromatic(
    note: &LeitmotifNote,
    key: u8,
    intervals: &ScaleIntervals,
    mode: u8,
) -> i32 {
    let base = degree_to_chromatic(key, intervals, mode, note.degree as u32);
    (base + note.accidental.offset()).rem_euclid(MAX_INSTRUMENT_NOTES)
}

/// Encode a raw chromatic note as a leitmotif note, or report that no scale
/// degree lies within one semitone of it.
///
/// Scans degrees in ascending order. An exact natural match always wins. A
/// degree one semitone below the target becomes a pending sharp candidate,
/// kept while the scan checks whether the next degree matches exactly; if
/// the next degree instead overshoots (by one semitone or more), the pending
/// sharp is emitted. A flat spelling is used only when no sharp of the
/// immediately preceding degree is pending. This makes the chosen spelling
/// deterministic and prefers resolving upward approach tones as the sharp of
/// the lower degree.
///
/// For well-formed diatonic tables every chromatic pitch is within one
/// semitone of some degree, so `Err` indicates a malformed scale table
/// (`TheoryError::NoScaleDegree`).
pub fn try_chromatic_to_leitmotif(
    raw: i32,
    key: u8,
    intervals: &ScaleIntervals,
    mode: u8,
) -> Result<LeitmotifNote, TheoryError> {
    debug_assert!(
        (0..MAX_INSTRUMENT_NOTES).contains(&raw),
        "raw note {} outside playable range",
        raw
    );

    let mut pending_sharp: Option<u8> = None;
    for degree in 0..TOTAL_SCALE_NOTES as u8 {
        let natural = degree_to_chromatic(key, intervals, mode, degree as u32);
        match wrapped_delta(raw, natural) {
            0 => return Ok(LeitmotifNote::natural(degree)),
            1 => pending_sharp = Some(degree),
            -1 => {
                // Equidistant: the sharp of the previous degree wins the tie.
                if let Some(below) = pending_sharp {
                    if below + 1 == degree {
                        return Ok(LeitmotifNote::new(below, Accidental::Sharp));
                    }
                }
                return Ok(LeitmotifNote::new(degree, Accidental::Flat));
            }
            delta if delta < -1 => {
                // The walk overshot the target; a pending sharp is exact.
                if let Some(below) = pending_sharp {
                    return Ok(LeitmotifNote::new(below, Accidental::Sharp));
                }
            }
            _ => {}
        }
    }

    if let Some(below) = pending_sharp {
        return Ok(LeitmotifNote::new(below, Accidental::Sharp));
    }
    Err(TheoryError::NoScaleDegree { raw })
}

/// Encode a raw chromatic note as a leitmotif note.
///
/// Like [`try_chromatic_to_leitmotif`], but recovers from the
/// malformed-table case with the documented fallback
/// (`LeitmotifNote::default()`, degree 0 natural) so that an editing session
/// is never interrupted by a single unencodable note. Callers that need the
/// report use the `try_` form.
pub fn chromatic_to_leitmotif(
    raw: i32,
    key: u8,
    intervals: &ScaleIntervals,
    mode: u8,
) -> LeitmotifNote {
    try_chromatic_to_leitmotif(raw, key, intervals, mode).unwrap_or_default()
}

/// Signed semitone distance from `natural` to `raw`, aware of the fold at
/// the top of the playable range.
fn wrapped_delta(raw: i32, natural: i32) -> i32 {
    let mut delta = (raw - natural).rem_euclid(MAX_INSTRUMENT_NOTES);
    if delta > MAX_INSTRUMENT_NOTES / 2 {
        delta -= MAX_INSTRUMENT_NOTES;
    }
    delta
}
