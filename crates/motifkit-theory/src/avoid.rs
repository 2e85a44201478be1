//! Pentatonic avoidance predicate for hint generation.

use motifkit_spec::constants::SCALE_LENGTH;
use motifkit_spec::AvoidPair;

/// Whether a candidate scale degree should be suppressed from hint display.
///
/// The degree and the pair entries are both normalized into
/// `[0, SCALE_LENGTH)` before comparison, so multi-octave degree indices
/// match their pitch-class equivalents. Unset pair entries (`-1`) never
/// match.
///
/// # Examples
///
/// ```
/// use motifkit_spec::AvoidPair;
/// use motifkit_theory::is_avoided;
///
/// let major_avoid = AvoidPair::new(3, 6);
/// assert!(is_avoided(3, &major_avoid));
/// assert!(is_avoided(10, &major_avoid)); // degree 3, one octave up
/// assert!(!is_avoided(0, &major_avoid));
/// ```
pub fn is_avoided(degree: u32, avoid: &AvoidPair) -> bool {
    let normalized = (degree as usize % SCALE_LENGTH) as i8;
    avoid
        .entries()
        .iter()
        .any(|&entry| entry >= 0 && entry.rem_euclid(SCALE_LENGTH as i8) == normalized)
}
