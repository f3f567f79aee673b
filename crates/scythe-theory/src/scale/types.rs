//! Scale type table.

use serde::{Deserialize, Serialize};

/// Named scale interval sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    // Major and minor
    #[default]
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
    // Modes
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
    // Pentatonic
    MajorPentatonic,
    MinorPentatonic,
    // Blues
    Blues,
    BluesMajor,
    // Jazz / bebop
    BebopDominant,
    BebopMajor,
    // Symmetric and exotic
    WholeTone,
    Diminished,
    DiminishedHw,
    HungarianMinor,
    Spanish,
    Japanese,
    Arabic,
    Chromatic,
}

/// Friendly names accepted in addition to the canonical table keys.
const SCALE_ALIASES: [(&str, ScaleType); 4] = [
    ("minor", ScaleType::NaturalMinor),
    ("pentatonic", ScaleType::MinorPentatonic),
    ("penta", ScaleType::MinorPentatonic),
    ("maj_penta", ScaleType::MajorPentatonic),
];

impl ScaleType {
    /// Every scale type, in table order.
    pub const ALL: [ScaleType; 25] = [
        ScaleType::Major,
        ScaleType::NaturalMinor,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::Ionian,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Aeolian,
        ScaleType::Locrian,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
        ScaleType::Blues,
        ScaleType::BluesMajor,
        ScaleType::BebopDominant,
        ScaleType::BebopMajor,
        ScaleType::WholeTone,
        ScaleType::Diminished,
        ScaleType::DiminishedHw,
        ScaleType::HungarianMinor,
        ScaleType::Spanish,
        ScaleType::Japanese,
        ScaleType::Arabic,
        ScaleType::Chromatic,
    ];

    /// Semitone intervals from the root, strictly ascending from 0.
    pub fn intervals(&self) -> &'static [i32] {
        match self {
            ScaleType::Major | ScaleType::Ionian => &[0, 2, 4, 5, 7, 9, 11],
            ScaleType::NaturalMinor | ScaleType::Aeolian => &[0, 2, 3, 5, 7, 8, 10],
            ScaleType::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            ScaleType::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],
            ScaleType::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            ScaleType::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            ScaleType::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            ScaleType::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            ScaleType::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            ScaleType::MajorPentatonic => &[0, 2, 4, 7, 9],
            ScaleType::MinorPentatonic => &[0, 3, 5, 7, 10],
            ScaleType::Blues => &[0, 3, 5, 6, 7, 10],
            ScaleType::BluesMajor => &[0, 2, 3, 4, 7, 9],
            ScaleType::BebopDominant => &[0, 2, 4, 5, 7, 9, 10, 11],
            ScaleType::BebopMajor => &[0, 2, 4, 5, 7, 8, 9, 11],
            ScaleType::WholeTone => &[0, 2, 4, 6, 8, 10],
            // Whole-half.
            ScaleType::Diminished => &[0, 2, 3, 5, 6, 8, 9, 11],
            // Half-whole.
            ScaleType::DiminishedHw => &[0, 1, 3, 4, 6, 7, 9, 10],
            ScaleType::HungarianMinor => &[0, 2, 3, 6, 7, 8, 11],
            ScaleType::Spanish => &[0, 1, 4, 5, 7, 8, 10],
            ScaleType::Japanese => &[0, 1, 5, 7, 8],
            ScaleType::Arabic => &[0, 1, 4, 5, 7, 8, 11],
            ScaleType::Chromatic => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        }
    }

    /// Canonical table key (e.g., "natural_minor").
    pub fn name(&self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::NaturalMinor => "natural_minor",
            ScaleType::HarmonicMinor => "harmonic_minor",
            ScaleType::MelodicMinor => "melodic_minor",
            ScaleType::Ionian => "ionian",
            ScaleType::Dorian => "dorian",
            ScaleType::Phrygian => "phrygian",
            ScaleType::Lydian => "lydian",
            ScaleType::Mixolydian => "mixolydian",
            ScaleType::Aeolian => "aeolian",
            ScaleType::Locrian => "locrian",
            ScaleType::MajorPentatonic => "major_pentatonic",
            ScaleType::MinorPentatonic => "minor_pentatonic",
            ScaleType::Blues => "blues",
            ScaleType::BluesMajor => "blues_major",
            ScaleType::BebopDominant => "bebop_dominant",
            ScaleType::BebopMajor => "bebop_major",
            ScaleType::WholeTone => "whole_tone",
            ScaleType::Diminished => "diminished",
            ScaleType::DiminishedHw => "diminished_hw",
            ScaleType::HungarianMinor => "hungarian_minor",
            ScaleType::Spanish => "spanish",
            ScaleType::Japanese => "japanese",
            ScaleType::Arabic => "arabic",
            ScaleType::Chromatic => "chromatic",
        }
    }

    /// Strict lookup by table key or alias, case-insensitive.
    pub fn lookup(name: &str) -> Option<ScaleType> {
        let key = name.trim().to_ascii_lowercase();
        SCALE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, ty)| *ty)
            .or_else(|| ScaleType::ALL.iter().copied().find(|ty| ty.name() == key))
    }

    /// Permissive lookup: unknown names fall back to [`ScaleType::Major`].
    pub fn from_name(name: &str) -> ScaleType {
        ScaleType::lookup(name).unwrap_or_else(|| {
            tracing::warn!(scale = name, "unknown scale type, using major");
            ScaleType::Major
        })
    }

    /// Number of degrees in the scale.
    pub fn cardinality(&self) -> usize {
        self.intervals().len()
    }
}

impl std::fmt::Display for ScaleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
