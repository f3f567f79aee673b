//! Roman-numeral chord symbols (`ii7`, `bVII`, `V7b9`, ...).

use crate::chord::{classify_suffix, ChordType};

use super::Mode;

const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// A parsed Roman numeral: accidental, scale degree, letter case and suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomanNumeral {
    /// Semitone modifier from a leading `b` (-1) or `#` (+1).
    pub accidental: i32,
    /// Scale degree 1..=7.
    pub degree: usize,
    /// Whether the numeral was written in lowercase.
    pub lowercase: bool,
    /// Explicit chord-type suffix following the numeral, possibly empty.
    pub suffix: String,
}

impl RomanNumeral {
    /// Parses a numeral symbol. Never fails: an unknown numeral resolves to
    /// degree 1.
    pub fn parse(symbol: &str) -> RomanNumeral {
        let (accidental, body) = if let Some(rest) = symbol.strip_prefix('b') {
            (-1, rest)
        } else if let Some(rest) = symbol.strip_prefix('#') {
            (1, rest)
        } else {
            (0, symbol)
        };

        let numeral_len = body
            .char_indices()
            .find(|(_, c)| !matches!(c.to_ascii_uppercase(), 'I' | 'V' | 'X'))
            .map(|(i, _)| i)
            .unwrap_or(body.len());
        let (numeral, suffix) = body.split_at(numeral_len);

        let upper = numeral.to_ascii_uppercase();
        let degree = match NUMERALS.iter().position(|n| *n == upper) {
            Some(index) => index + 1,
            None => {
                tracing::warn!(numeral = symbol, "unknown roman numeral, using degree 1");
                1
            }
        };

        RomanNumeral {
            accidental,
            degree,
            lowercase: !numeral.is_empty() && numeral.chars().all(|c| c.is_ascii_lowercase()),
            suffix: suffix.to_string(),
        }
    }

    /// Chord quality implied by the numeral.
    ///
    /// An explicit suffix wins over letter case, except that a bare `7`
    /// becomes a minor seventh under a lowercase numeral.
    pub fn chord_type(&self) -> ChordType {
        match self.suffix.as_str() {
            "" if self.lowercase => ChordType::Minor,
            "" => ChordType::Major,
            "7" if self.lowercase => ChordType::Min7,
            "7" => ChordType::Dominant7,
            suffix => classify_suffix(suffix),
        }
    }

    /// Root pitch class relative to a key root in the given mode.
    pub fn root_pitch_class(&self, key_pitch_class: i32, mode: Mode) -> i32 {
        let interval = mode.scale_type().intervals()[self.degree - 1];
        (key_pitch_class + interval + self.accidental).rem_euclid(12)
    }
}
