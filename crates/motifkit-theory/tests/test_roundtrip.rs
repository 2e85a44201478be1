//! Exhaustive law tests for the leitmotif codec.
//!
//! These cover the whole input space: every built-in scale, every key,
//! every mode, and every chromatic note in the playable range.

use pretty_assertions::assert_eq;

use motifkit_spec::constants::{MAX_INSTRUMENT_NOTES, OCTAVE_SIZE, SCALE_LENGTH, TOTAL_SCALE_NOTES};
use motifkit_spec::{Accidental, Scale, ScaleTable};
use motifkit_theory::{
    chromatic_to_leitmotif, degree_to_chromatic, leitmotif_to_chromatic,
    try_chromatic_to_leitmotif,
};

// =============================================================================
// Round-trip law
// =============================================================================

#[test]
fn test_encode_decode_roundtrip_exhaustive() {
    // decode(encode(raw)) == raw for every key, mode, scale, and raw note.
    // Built-in diatonic tables leave every chromatic pitch within one
    // semitone of some degree, so the fallback case never fires here.
    let table = ScaleTable::builtin();
    for scale in Scale::ALL {
        let intervals = table.intervals(scale);
        for key in 0..OCTAVE_SIZE as u8 {
            for mode in 0..SCALE_LENGTH as u8 {
                for raw in 0..MAX_INSTRUMENT_NOTES {
                    let encoded = try_chromatic_to_leitmotif(raw, key, &intervals, mode)
                        .unwrap_or_else(|err| {
                            panic!(
                                "unexpected encode failure for {:?} key={} mode={} raw={}: {}",
                                scale, key, mode, raw, err
                            )
                        });
                    let decoded = leitmotif_to_chromatic(&encoded, key, &intervals, mode);
                    assert_eq!(
                        decoded, raw,
                        "roundtrip failed for {:?} key={} mode={} raw={} encoded={:?}",
                        scale, key, mode, raw, encoded
                    );
                }
            }
        }
    }
}

#[test]
fn test_encoded_degree_stays_in_diatonic_range() {
    let table = ScaleTable::builtin();
    for scale in Scale::ALL {
        let intervals = table.intervals(scale);
        for key in 0..OCTAVE_SIZE as u8 {
            for raw in 0..MAX_INSTRUMENT_NOTES {
                let encoded = chromatic_to_leitmotif(raw, key, &intervals, 0);
                assert!(
                    (encoded.degree as i32) < TOTAL_SCALE_NOTES,
                    "degree {} out of range for {:?} key={} raw={}",
                    encoded.degree,
                    scale,
                    key,
                    raw
                );
            }
        }
    }
}

// =============================================================================
// Spelling conventions
// =============================================================================

#[test]
fn test_c_major_spellings() {
    let major = ScaleTable::builtin().intervals(Scale::Major);

    // On-scale notes are natural.
    for (raw, degree) in [(0, 0), (2, 1), (4, 2), (5, 3), (7, 4), (9, 5), (11, 6)] {
        let encoded = chromatic_to_leitmotif(raw, 0, &major, 0);
        assert_eq!(encoded.degree, degree);
        assert_eq!(encoded.accidental, Accidental::Natural);
    }

    // Off-scale notes in whole-step gaps are sharps of the lower degree.
    for (raw, degree) in [(1, 0), (3, 1), (6, 3), (8, 4), (10, 5)] {
        let encoded = chromatic_to_leitmotif(raw, 0, &major, 0);
        assert_eq!(
            (encoded.degree, encoded.accidental),
            (degree, Accidental::Sharp),
            "raw {} should be the sharp of degree {}",
            raw,
            degree
        );
    }
}

#[test]
fn test_spelling_repeats_per_octave() {
    let major = ScaleTable::builtin().intervals(Scale::Major);
    for raw in 0..OCTAVE_SIZE {
        let low = chromatic_to_leitmotif(raw, 0, &major, 0);
        let high = chromatic_to_leitmotif(raw + OCTAVE_SIZE, 0, &major, 0);
        assert_eq!(high.accidental, low.accidental);
        assert_eq!(high.degree, low.degree + SCALE_LENGTH as u8);
    }
}

// =============================================================================
// Mapper invariants
// =============================================================================

#[test]
fn test_octave_invariance() {
    // Walking a full diatonic cycle returns to the same chromatic note
    // after folding.
    let table = ScaleTable::builtin();
    for scale in Scale::ALL {
        let intervals = table.intervals(scale);
        for mode in 0..SCALE_LENGTH as u8 {
            for degree in 0..TOTAL_SCALE_NOTES as u32 {
                assert_eq!(
                    degree_to_chromatic(0, &intervals, mode, degree),
                    degree_to_chromatic(0, &intervals, mode, degree + TOTAL_SCALE_NOTES as u32),
                    "octave invariance failed for {:?} mode={} degree={}",
                    scale,
                    mode,
                    degree
                );
            }
        }
    }
}

#[test]
fn test_mapper_output_always_in_playable_range() {
    let table = ScaleTable::builtin();
    for scale in Scale::ALL {
        let intervals = table.intervals(scale);
        for key in 0..OCTAVE_SIZE as u8 {
            for degree in 0..(TOTAL_SCALE_NOTES as u32 * 2) {
                let note = degree_to_chromatic(key, &intervals, 0, degree);
                assert!((0..MAX_INSTRUMENT_NOTES).contains(&note));
            }
        }
    }
}
