//! Note letters, accidentals and spelled note names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constants::{OCTAVE, REFERENCE_OCTAVE, REFERENCE_PITCH, SEMITONE_MAP, SHARP_NAMES};
use crate::error::TheoryError;

/// A natural note letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Parses a letter, case-insensitively.
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    /// Uppercase character for this letter.
    pub fn as_char(&self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    /// Semitones above C for the natural letter.
    pub fn semitone(&self) -> i32 {
        let c = self.as_char();
        SEMITONE_MAP
            .iter()
            .find(|(letter, _)| *letter == c)
            .map(|(_, s)| *s)
            .unwrap_or(0)
    }
}

/// Optional sharp/flat modifier on a note letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    /// Semitone offset applied to the letter.
    pub fn offset(&self) -> i32 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }
}

/// A spelled note name without octave (e.g., `C`, `F#`, `Bb`).
///
/// Flat and sharp spellings of the same pitch class compare unequal; use
/// [`NoteName::pitch_class`] or [`NoteName::normalized`] for enharmonic
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NoteName {
    pub letter: Letter,
    pub accidental: Accidental,
}

impl NoteName {
    pub const fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    /// Parses a note name like `C`, `f#`, `Bb`, `E#` or `Cb`.
    ///
    /// The letter is case-insensitive. A single `#` or `b` modifier may follow.
    /// Anything else is rejected with [`TheoryError::InvalidNote`].
    pub fn parse(name: &str) -> Result<NoteName, TheoryError> {
        let trimmed = name.trim();
        let mut chars = trimmed.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| TheoryError::invalid_note(name))?;

        let accidental = match chars.next() {
            None => Accidental::Natural,
            Some('#') | Some('♯') => Accidental::Sharp,
            Some('b') | Some('B') | Some('♭') => Accidental::Flat,
            Some(_) => return Err(TheoryError::invalid_note(name)),
        };

        if chars.next().is_some() {
            return Err(TheoryError::invalid_note(name));
        }

        Ok(NoteName { letter, accidental })
    }

    /// Sharp-spelled note name for a pitch class (taken modulo 12).
    pub fn from_pitch_class(pitch_class: i32) -> NoteName {
        let pc = pitch_class.rem_euclid(OCTAVE);
        let (letter, accidental) = match pc {
            0 => (Letter::C, Accidental::Natural),
            1 => (Letter::C, Accidental::Sharp),
            2 => (Letter::D, Accidental::Natural),
            3 => (Letter::D, Accidental::Sharp),
            4 => (Letter::E, Accidental::Natural),
            5 => (Letter::F, Accidental::Natural),
            6 => (Letter::F, Accidental::Sharp),
            7 => (Letter::G, Accidental::Natural),
            8 => (Letter::G, Accidental::Sharp),
            9 => (Letter::A, Accidental::Natural),
            10 => (Letter::A, Accidental::Sharp),
            _ => (Letter::B, Accidental::Natural),
        };
        NoteName { letter, accidental }
    }

    /// Pitch class 0..=11 (C=0).
    ///
    /// `Cb` maps to B (11) and `B#` to C (0), `Fb` to E and `E#` to F.
    pub fn pitch_class(&self) -> i32 {
        (self.letter.semitone() + self.accidental.offset()).rem_euclid(OCTAVE)
    }

    /// Sharp-spelled enharmonic equivalent.
    pub fn normalized(&self) -> NoteName {
        NoteName::from_pitch_class(self.pitch_class())
    }

    /// Numeric pitch at the given octave (C4 = 60).
    ///
    /// The octave number is attached to the normalized pitch class, so `B#4`
    /// is 60 and `Cb4` is 71.
    pub fn to_pitch(&self, octave: i32) -> i32 {
        REFERENCE_PITCH + self.pitch_class() + (octave - REFERENCE_OCTAVE) * OCTAVE
    }

    /// Moves the note by `semitones`, returning a sharp-spelled name.
    pub fn transpose(&self, semitones: i32) -> NoteName {
        NoteName::from_pitch_class(self.pitch_class() + semitones)
    }

    /// Sharp-spelled display name of the pitch class.
    pub fn sharp_name(&self) -> &'static str {
        SHARP_NAMES[self.pitch_class() as usize]
    }
}

impl Default for NoteName {
    fn default() -> Self {
        NoteName::new(Letter::C, Accidental::Natural)
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter.as_char(), self.accidental.symbol())
    }
}

impl FromStr for NoteName {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteName::parse(s)
    }
}

impl TryFrom<String> for NoteName {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        NoteName::parse(&value)
    }
}

impl From<NoteName> for String {
    fn from(value: NoteName) -> Self {
        value.to_string()
    }
}
