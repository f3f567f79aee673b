//! Constants for pitch and note-name conversion.

/// Numeric pitch of the reference note (middle C).
pub const REFERENCE_PITCH: i32 = 60;

/// Octave number of the reference note (C4 = 60).
pub const REFERENCE_OCTAVE: i32 = 4;

/// Lowest performable pitch.
pub const MIN_PITCH: i32 = 0;

/// Highest performable pitch.
pub const MAX_PITCH: i32 = 127;

/// Semitones per octave.
pub const OCTAVE: i32 = 12;

/// Chromatic note names, sharp spelling, indexed by pitch class.
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Semitone offsets for natural note letters (C=0, D=2, E=4, F=5, G=7, A=9, B=11).
pub(super) const SEMITONE_MAP: [(char, i32); 7] = [
    ('C', 0),
    ('D', 2),
    ('E', 4),
    ('F', 5),
    ('G', 7),
    ('A', 9),
    ('B', 11),
];
