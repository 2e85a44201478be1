//! Interval and pentatonic-avoid lookup tables.
//!
//! The theory engine never reads these as ambient globals; a [`ScaleTable`]
//! is passed in by the caller, which keeps the engine testable against
//! synthetic tables.

use std::collections::HashMap;

use crate::constants::{OCTAVE_SIZE, SCALE_LENGTH};
use crate::error::SpecError;
use crate::theory::{Scale, ScaleFamily};

/// Seven signed semitone steps between successive scale degrees.
///
/// One full rotation always sums to [`OCTAVE_SIZE`].
pub type ScaleIntervals = [i8; SCALE_LENGTH];

const MAJOR_INTERVALS: ScaleIntervals = [2, 2, 1, 2, 2, 2, 1];
const MINOR_INTERVALS: ScaleIntervals = [2, 1, 2, 2, 1, 2, 2];
const HARMONIC_MAJOR_INTERVALS: ScaleIntervals = [2, 2, 1, 2, 1, 3, 1];
const HARMONIC_MINOR_INTERVALS: ScaleIntervals = [2, 1, 2, 2, 1, 3, 1];
const MELODIC_MINOR_INTERVALS: ScaleIntervals = [2, 1, 2, 2, 2, 2, 1];

/// At most two scale-degree indices suppressed from hint generation.
///
/// Entries are degree indices into `[0, SCALE_LENGTH)`; `-1` means unset.
/// Derived from the pentatonic subset of each scale family: the major
/// pentatonic omits degrees 4 and 7 (indices 3 and 6), the minor pentatonic
/// omits degrees 2 and 6 (indices 1 and 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvoidPair {
    first: i8,
    second: i8,
}

impl AvoidPair {
    /// A pair with both entries unset; avoids nothing.
    pub const NONE: AvoidPair = AvoidPair {
        first: -1,
        second: -1,
    };

    /// Creates a pair from raw entries (`-1` = unset).
    pub fn new(first: i8, second: i8) -> Self {
        AvoidPair { first, second }
    }

    /// Both entries, unset slots as `-1`.
    pub fn entries(&self) -> [i8; 2] {
        [self.first, self.second]
    }
}

/// Read-only lookup from scale id to interval pattern and avoid pair.
///
/// `builtin()` covers every [`Scale`] variant; tests can override individual
/// entries with `with_intervals`.
#[derive(Debug, Clone, Default)]
pub struct ScaleTable {
    overrides: HashMap<Scale, ScaleIntervals>,
}

impl ScaleTable {
    /// The built-in diatonic tables.
    pub fn builtin() -> Self {
        ScaleTable::default()
    }

    /// Returns a table with the given scale's intervals replaced.
    ///
    /// Fails if the intervals do not sum to a full octave, which would break
    /// the octave-folding arithmetic downstream.
    pub fn with_intervals(
        mut self,
        scale: Scale,
        intervals: ScaleIntervals,
    ) -> Result<Self, SpecError> {
        let sum: i32 = intervals.iter().map(|&step| step as i32).sum();
        if sum != OCTAVE_SIZE {
            return Err(SpecError::BadIntervalSum {
                sum,
                expected: OCTAVE_SIZE,
            });
        }
        self.overrides.insert(scale, intervals);
        Ok(self)
    }

    /// The interval pattern for the given scale.
    pub fn intervals(&self, scale: Scale) -> ScaleIntervals {
        if let Some(&intervals) = self.overrides.get(&scale) {
            return intervals;
        }
        match scale {
            Scale::Major => MAJOR_INTERVALS,
            Scale::Minor => MINOR_INTERVALS,
            Scale::HarmonicMajor => HARMONIC_MAJOR_INTERVALS,
            Scale::HarmonicMinor => HARMONIC_MINOR_INTERVALS,
            Scale::MelodicMinor => MELODIC_MINOR_INTERVALS,
        }
    }

    /// The pentatonic avoid pair for the given scale, keyed by family.
    pub fn avoid_pair(&self, scale: Scale) -> AvoidPair {
        match scale.family() {
            ScaleFamily::Major => AvoidPair::new(3, 6),
            ScaleFamily::Minor => AvoidPair::new(1, 5),
        }
    }
}
