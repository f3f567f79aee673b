//! Pitch model: note names, accidentals and numeric pitch conversion.
//!
//! Pitches are plain integers in semitones with C4 = 60. Note names carry a
//! letter and an optional sharp/flat; conversion to pitch goes through the
//! pitch class, so flat spellings normalize to their sharp equivalents.

mod constants;
mod conversion;
mod name;

#[cfg(test)]
mod tests;

pub use constants::{MAX_PITCH, MIN_PITCH, OCTAVE, REFERENCE_OCTAVE, REFERENCE_PITCH, SHARP_NAMES};

pub use conversion::{
    clamp_pitch, fold_pitch, is_performable, note_to_pitch, parse_pitch, pitch_to_name,
    pitch_to_note,
};

pub use name::{Accidental, Letter, NoteName};
