//! Progression model: Roman-numeral resolution, diatonic qualities, the
//! genre progression table and voice-led chord sequences.

mod library;
mod modulation;
mod numeral;


use serde::{Deserialize, Serialize};

use crate::chord::{parse_chord_symbol, voice_lead, Chord, ChordType};
use crate::pitch::NoteName;
use crate::scale::ScaleType;

pub use library::{genres, get_progression, progression_numerals, styles};
pub use modulation::{
    modulate_circle_of_fifths, modulate_to_relative_major, modulate_to_relative_minor,
    modulate_up_half_step,
};
pub use numeral::RomanNumeral;

/// Key mode used to resolve numerals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Major,
    Minor,
}

impl Mode {
    /// `"minor"` (any case) is minor; everything else is major.
    pub fn from_name(name: &str) -> Mode {
        if name.eq_ignore_ascii_case("minor") {
            Mode::Minor
        } else {
            Mode::Major
        }
    }

    /// Heptatonic scale the numerals index into.
    pub fn scale_type(&self) -> ScaleType {
        match self {
            Mode::Major => ScaleType::Major,
            Mode::Minor => ScaleType::NaturalMinor,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
        }
    }
}

/// Triad quality of a scale degree (1..=7) in a mode.
///
/// Degrees outside 1..=7 wrap.
pub fn diatonic_quality(mode: Mode, degree: i32) -> ChordType {
    const MAJOR: [ChordType; 7] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Minor,
        ChordType::Major,
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
    ];
    const MINOR: [ChordType; 7] = [
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Major,
        ChordType::Minor,
        ChordType::Minor,
        ChordType::Major,
        ChordType::Major,
    ];
    let index = (degree - 1).rem_euclid(7) as usize;
    match mode {
        Mode::Major => MAJOR[index],
        Mode::Minor => MINOR[index],
    }
}

/// The seven diatonic triads of a key.
pub fn diatonic_chords(key: NoteName, mode: Mode, octave: i32) -> Vec<Chord> {
    mode.scale_type()
        .intervals()
        .iter()
        .zip(1..)
        .map(|(interval, degree)| {
            Chord::new(key.transpose(*interval), diatonic_quality(mode, degree)).with_octave(octave)
        })
        .collect()
}

/// A key-relative chord sequence.
///
/// Entries are Roman numerals (`I`, `bVII7`, `iiø7`) or explicit chord
/// symbols starting with an uppercase note letter (`Cmaj7`, `F#m`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    pub key: NoteName,
    #[serde(default)]
    pub mode: Mode,
    pub chords: Vec<String>,
    #[serde(default = "default_bars_per_chord")]
    pub bars_per_chord: u32,
}

fn default_bars_per_chord() -> u32 {
    1
}

impl Progression {
    pub fn new(key: NoteName, mode: Mode, chords: Vec<String>) -> Self {
        Self {
            key,
            mode,
            chords,
            bars_per_chord: default_bars_per_chord(),
        }
    }

    pub fn with_bars_per_chord(mut self, bars_per_chord: u32) -> Self {
        self.bars_per_chord = bars_per_chord;
        self
    }

    /// Length of the progression in bars.
    pub fn total_bars(&self) -> u32 {
        self.chords.len() as u32 * self.bars_per_chord
    }

    /// One chord per entry, in order, each resolved independently.
    pub fn resolve(&self, octave: i32) -> Vec<Chord> {
        self.chords
            .iter()
            .map(|entry| self.resolve_entry(entry, octave))
            .collect()
    }

    /// Resolved chords with each chord after the first voice-led from the
    /// previous output chord.
    pub fn with_voice_leading(&self, octave: i32) -> Vec<Chord> {
        let mut result: Vec<Chord> = Vec::with_capacity(self.chords.len());
        for chord in self.resolve(octave) {
            let next = match result.last() {
                Some(previous) => voice_lead(previous, &chord),
                None => chord,
            };
            result.push(next);
        }
        result
    }

    fn resolve_entry(&self, entry: &str, octave: i32) -> Chord {
        if entry.starts_with(|c: char| matches!(c, 'A'..='G')) {
            match parse_chord_symbol(entry) {
                Ok(chord) => return chord.with_octave(octave),
                Err(err) => tracing::warn!(entry, %err, "unreadable chord symbol, trying numeral"),
            }
        }

        let numeral = RomanNumeral::parse(entry);
        let root = NoteName::from_pitch_class(
            numeral.root_pitch_class(self.key.pitch_class(), self.mode),
        );
        Chord::new(root, numeral.chord_type()).with_octave(octave)
    }
}
