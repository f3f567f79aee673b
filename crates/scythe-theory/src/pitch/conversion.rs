//! Conversion between note names and numeric pitches.

use super::constants::{MAX_PITCH, MIN_PITCH, OCTAVE, REFERENCE_OCTAVE, REFERENCE_PITCH};
use super::name::NoteName;
use crate::error::TheoryError;

/// Convert a note name and octave to a numeric pitch.
///
/// # Arguments
/// * `name` - Note name without octave (e.g., "C", "F#", "Bb")
/// * `octave` - Octave number (4 is the reference octave)
///
/// # Returns
/// Numeric pitch where C4 = 60, or [`TheoryError::InvalidNote`] when the name
/// does not resolve to one of the 12 chromatic classes.
///
/// # Examples
/// ```
/// use scythe_theory::pitch::note_to_pitch;
///
/// assert_eq!(note_to_pitch("C", 4).unwrap(), 60);
/// assert_eq!(note_to_pitch("A", 4).unwrap(), 69);
/// assert_eq!(note_to_pitch("Bb", 3).unwrap(), 58);
/// assert!(note_to_pitch("H", 4).is_err());
/// ```
pub fn note_to_pitch(name: &str, octave: i32) -> Result<i32, TheoryError> {
    Ok(NoteName::parse(name)?.to_pitch(octave))
}

/// Convert a numeric pitch to a sharp-spelled note name and octave.
///
/// Flat input does not round-trip: `Bb3` comes back as `A#3`.
///
/// # Examples
/// ```
/// use scythe_theory::pitch::pitch_to_note;
///
/// let (name, octave) = pitch_to_note(61);
/// assert_eq!(name.to_string(), "C#");
/// assert_eq!(octave, 4);
/// ```
pub fn pitch_to_note(pitch: i32) -> (NoteName, i32) {
    let octave = (pitch - REFERENCE_PITCH).div_euclid(OCTAVE) + REFERENCE_OCTAVE;
    (NoteName::from_pitch_class(pitch), octave)
}

/// Convert a numeric pitch to a name with octave (e.g., 60 -> "C4").
pub fn pitch_to_name(pitch: i32) -> String {
    let (name, octave) = pitch_to_note(pitch);
    format!("{}{}", name, octave)
}

/// Parse a note with an attached octave (e.g., "C4", "A#3", "Bb5", "C-1").
///
/// A missing octave defaults to 4.
pub fn parse_pitch(text: &str) -> Result<i32, TheoryError> {
    let trimmed = text.trim();
    let split = trimmed
        .char_indices()
        .find(|(i, c)| *i > 0 && (c.is_ascii_digit() || *c == '-'))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());

    let (name, octave_str) = trimmed.split_at(split);
    let octave = if octave_str.is_empty() {
        4
    } else {
        octave_str
            .parse::<i32>()
            .map_err(|_| TheoryError::invalid_note(text))?
    };

    let note = NoteName::parse(name).map_err(|_| TheoryError::invalid_note(text))?;
    Ok(note.to_pitch(octave))
}

/// Clamp a pitch into the performable range [0, 127].
pub fn clamp_pitch(pitch: i32) -> i32 {
    pitch.clamp(MIN_PITCH, MAX_PITCH)
}

/// Whether a pitch lies in the performable range.
pub fn is_performable(pitch: i32) -> bool {
    (MIN_PITCH..=MAX_PITCH).contains(&pitch)
}

/// Moves a pitch by whole octaves until it is performable, keeping its pitch
/// class.
///
/// Pitches above the range land on the highest matching pitch, pitches below
/// on the lowest.
///
/// # Examples
/// ```
/// use scythe_theory::pitch::fold_pitch;
///
/// assert_eq!(fold_pitch(64), 64);
/// assert_eq!(fold_pitch(139), 127);
/// assert_eq!(fold_pitch(-1), 11);
/// ```
pub fn fold_pitch(pitch: i32) -> i32 {
    if is_performable(pitch) {
        return pitch;
    }
    let edge = clamp_pitch(pitch);
    let shift = (pitch - edge).rem_euclid(OCTAVE);
    if pitch > MAX_PITCH {
        edge - (OCTAVE - shift) % OCTAVE
    } else {
        edge + shift
    }
}
