//! Chord-progression stepping and hint derivation tests.

use pretty_assertions::assert_eq;

use motifkit_spec::{ChordProgression, KeySignature, Scale, ScaleTable};
use motifkit_theory::{active_chord_step, chord_tone_at};

/// The I-IV-IV-V progression used throughout the editor defaults.
fn one_four_four_five() -> ChordProgression {
    ChordProgression::new(vec![1, 4, 4, 5]).unwrap()
}

#[test]
fn test_stepping_is_periodic() {
    // active_chord_step has period progression.len() * rate in the
    // timestep index.
    let progression = one_four_four_five();
    for rate in [1u32, 4, 8, 16] {
        let period = progression.len() as u32 * rate;
        for step_index in 0..period * 2 {
            assert_eq!(
                active_chord_step(&progression, rate, step_index),
                active_chord_step(&progression, rate, step_index + period),
                "period broken at rate={} step={}",
                rate,
                step_index
            );
        }
    }
}

#[test]
fn test_stepping_holds_within_window() {
    let progression = one_four_four_five();
    for step_index in 0..16 {
        assert_eq!(active_chord_step(&progression, 16, step_index), 1);
    }
    for step_index in 16..32 {
        assert_eq!(active_chord_step(&progression, 16, step_index), 4);
    }
}

#[test]
fn test_single_entry_progression_never_moves() {
    let progression = ChordProgression::new(vec![6]).unwrap();
    for step_index in [0u32, 1, 15, 16, 99, 1000] {
        assert_eq!(active_chord_step(&progression, 16, step_index), 6);
    }
}

#[test]
fn test_rate_one_advances_every_step() {
    let progression = one_four_four_five();
    let steps: Vec<u8> = (0..8)
        .map(|i| active_chord_step(&progression, 1, i))
        .collect();
    assert_eq!(steps, vec![1, 4, 4, 5, 1, 4, 4, 5]);
}

#[test]
fn test_chord_tone_matches_manual_walk() {
    // A minor, I-IV-V: A (9), D (9 + 5 = 14), E (9 + 7 = 16).
    let signature = KeySignature::new(9, Scale::Minor, 0).unwrap();
    let table = ScaleTable::builtin();
    let progression = ChordProgression::new(vec![1, 4, 5]).unwrap();

    assert_eq!(chord_tone_at(&signature, &table, &progression, 8, 0), 9);
    assert_eq!(chord_tone_at(&signature, &table, &progression, 8, 8), 14);
    assert_eq!(chord_tone_at(&signature, &table, &progression, 8, 16), 16);
    assert_eq!(chord_tone_at(&signature, &table, &progression, 8, 24), 9);
}
