//! Core music-theory value types.
//!
//! These are the types exchanged between the configuration/session layer and
//! the theory engine, and the representation persisted for leitmotif
//! measures.

use serde::{Deserialize, Serialize};

use crate::constants::{OCTAVE_SIZE, SCALE_LENGTH};
use crate::error::SpecError;

/// Diatonic scale identifier.
///
/// Identifies which seven-interval pattern a key signature walks. Modal
/// rotations (Dorian, Phrygian, ...) are not separate scales; they are
/// expressed through [`KeySignature::mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    /// Major (Ionian) scale.
    Major,
    /// Natural minor (Aeolian) scale.
    Minor,
    /// Harmonic major scale (major with a lowered sixth).
    HarmonicMajor,
    /// Harmonic minor scale (minor with a raised seventh).
    HarmonicMinor,
    /// Melodic minor scale (ascending form).
    MelodicMinor,
}

impl Scale {
    /// All supported scales, in declaration order.
    pub const ALL: [Scale; 5] = [
        Scale::Major,
        Scale::Minor,
        Scale::HarmonicMajor,
        Scale::HarmonicMinor,
        Scale::MelodicMinor,
    ];

    /// Returns the family this scale belongs to.
    ///
    /// The family selects the pentatonic avoid-pair table entry.
    pub fn family(&self) -> ScaleFamily {
        match self {
            Scale::Major | Scale::HarmonicMajor => ScaleFamily::Major,
            Scale::Minor | Scale::HarmonicMinor | Scale::MelodicMinor => ScaleFamily::Minor,
        }
    }
}

/// Major/minor family of a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleFamily {
    /// Scales built on a major third.
    Major,
    /// Scales built on a minor third.
    Minor,
}

/// Semitone adjustment applied to a scale degree's natural pitch.
///
/// Persisted as the integers -1/0/1; any other value is rejected at
/// deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Accidental {
    /// One semitone below the natural pitch.
    Flat,
    /// The natural pitch.
    #[default]
    Natural,
    /// One semitone above the natural pitch.
    Sharp,
}

impl Accidental {
    /// Signed semitone offset: -1, 0, or 1.
    pub fn offset(&self) -> i32 {
        match self {
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
        }
    }
}

impl TryFrom<i8> for Accidental {
    type Error = SpecError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Accidental::Flat),
            0 => Ok(Accidental::Natural),
            1 => Ok(Accidental::Sharp),
            _ => Err(SpecError::InvalidAccidental { value }),
        }
    }
}

impl From<Accidental> for i8 {
    fn from(value: Accidental) -> i8 {
        value.offset() as i8
    }
}

/// A key/scale-relative note, the representation persisted for leitmotif
/// measures.
///
/// Storing degree + accidental instead of an absolute chromatic index lets a
/// leitmotif re-derive correct pitches after the generator changes key,
/// scale, or mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeitmotifNote {
    /// Scale degree (0-based index into the diatonic ladder spanning the
    /// playable octaves, `0..TOTAL_SCALE_NOTES`).
    pub degree: u8,
    /// Semitone adjustment needed to reach the exact chromatic target.
    pub accidental: Accidental,
}

impl LeitmotifNote {
    /// Creates a note at the given degree with the given accidental.
    pub fn new(degree: u8, accidental: Accidental) -> Self {
        LeitmotifNote { degree, accidental }
    }

    /// The natural (unaltered) note at the given degree.
    pub fn natural(degree: u8) -> Self {
        LeitmotifNote {
            degree,
            accidental: Accidental::Natural,
        }
    }
}

/// Key, scale, and mode of the current configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySignature {
    /// Chromatic offset of scale degree 0 (0-11, where 0 = C).
    pub key: u8,
    /// Which interval pattern to walk.
    pub scale: Scale,
    /// Rotation applied to the interval pattern (0-6).
    pub mode: u8,
}

impl KeySignature {
    /// Creates a validated key signature.
    pub fn new(key: u8, scale: Scale, mode: u8) -> Result<Self, SpecError> {
        let sig = KeySignature { key, scale, mode };
        sig.validate()?;
        Ok(sig)
    }

    /// Checks the key and mode ranges.
    ///
    /// The theory engine treats these ranges as preconditions and does not
    /// re-check them, so deserialized signatures must be validated here
    /// before use.
    pub fn validate(&self) -> Result<(), SpecError> {
        if (self.key as i32) >= OCTAVE_SIZE {
            return Err(SpecError::KeyOutOfRange {
                key: self.key,
                max: OCTAVE_SIZE,
            });
        }
        if (self.mode as usize) >= SCALE_LENGTH {
            return Err(SpecError::ModeOutOfRange {
                mode: self.mode,
                max: SCALE_LENGTH,
            });
        }
        Ok(())
    }
}

/// An ordered sequence of 1-based scale steps defining harmonic movement
/// over a measure or phrase.
///
/// Typically four entries (e.g. `[1, 4, 4, 5]` for I-IV-IV-V). Construction
/// validates that every step is in `1..=7`, so the theory engine can index
/// the progression without range checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct ChordProgression {
    steps: Vec<u8>,
}

impl ChordProgression {
    /// Creates a validated progression from 1-based scale steps.
    pub fn new(steps: Vec<u8>) -> Result<Self, SpecError> {
        if steps.is_empty() {
            return Err(SpecError::EmptyProgression);
        }
        for (position, &step) in steps.iter().enumerate() {
            if step < 1 || step as usize > SCALE_LENGTH {
                return Err(SpecError::ProgressionStepOutOfRange {
                    step,
                    position,
                    max: SCALE_LENGTH,
                });
            }
        }
        Ok(ChordProgression { steps })
    }

    /// Number of entries in the progression.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; an empty progression cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The 1-based scale step at the given progression index.
    pub fn step(&self, index: usize) -> u8 {
        self.steps[index]
    }

    /// All steps, in order.
    pub fn steps(&self) -> &[u8] {
        &self.steps
    }
}

impl TryFrom<Vec<u8>> for ChordProgression {
    type Error = SpecError;

    fn try_from(steps: Vec<u8>) -> Result<Self, Self::Error> {
        ChordProgression::new(steps)
    }
}

impl From<ChordProgression> for Vec<u8> {
    fn from(progression: ChordProgression) -> Vec<u8> {
        progression.steps
    }
}
