//! Chord type table and alias resolution.

use serde::{Deserialize, Serialize};

/// Named chord interval sets.
///
/// Serialized as the table key (e.g., `"maj7"`, `"7b9"`); unknown keys
/// deserialize to [`ChordType::Major`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum ChordType {
    // Triads
    #[default]
    Major,
    Minor,
    Diminished,
    Augmented,
    Sus2,
    Sus4,
    // Sevenths
    Maj7,
    Min7,
    Dominant7,
    Dim7,
    HalfDiminished7,
    MinMaj7,
    Aug7,
    // Extended
    Dominant9,
    Maj9,
    Min9,
    Dominant11,
    Min11,
    Dominant13,
    Maj13,
    // Added tones
    Add9,
    Add11,
    MinAdd9,
    // Altered dominants
    Dominant7Flat9,
    Dominant7Sharp9,
    Dominant7Sharp11,
    Dominant7Flat13,
    Altered,
    // Power chords
    Fifth,
    Power,
    // Suspended colours
    Add9Sus4,
    Dominant7Sus4,
}

/// Symbol aliases resolved before the table lookup. Matching is case-sensitive.
const CHORD_ALIASES: [(&str, ChordType); 12] = [
    ("m", ChordType::Minor),
    ("M", ChordType::Major),
    ("-", ChordType::Minor),
    ("o", ChordType::Diminished),
    ("+", ChordType::Augmented),
    ("dom7", ChordType::Dominant7),
    ("Δ7", ChordType::Maj7),
    ("Δ", ChordType::Maj7),
    ("-7", ChordType::Min7),
    ("ø", ChordType::HalfDiminished7),
    ("ø7", ChordType::HalfDiminished7),
    ("o7", ChordType::Dim7),
];

impl ChordType {
    /// Every chord type, in table order.
    pub const ALL: [ChordType; 32] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Augmented,
        ChordType::Sus2,
        ChordType::Sus4,
        ChordType::Maj7,
        ChordType::Min7,
        ChordType::Dominant7,
        ChordType::Dim7,
        ChordType::HalfDiminished7,
        ChordType::MinMaj7,
        ChordType::Aug7,
        ChordType::Dominant9,
        ChordType::Maj9,
        ChordType::Min9,
        ChordType::Dominant11,
        ChordType::Min11,
        ChordType::Dominant13,
        ChordType::Maj13,
        ChordType::Add9,
        ChordType::Add11,
        ChordType::MinAdd9,
        ChordType::Dominant7Flat9,
        ChordType::Dominant7Sharp9,
        ChordType::Dominant7Sharp11,
        ChordType::Dominant7Flat13,
        ChordType::Altered,
        ChordType::Fifth,
        ChordType::Power,
        ChordType::Add9Sus4,
        ChordType::Dominant7Sus4,
    ];

    /// Semitone intervals from the root in construction order; always starts at 0.
    pub fn intervals(&self) -> &'static [i32] {
        match self {
            ChordType::Major => &[0, 4, 7],
            ChordType::Minor => &[0, 3, 7],
            ChordType::Diminished => &[0, 3, 6],
            ChordType::Augmented => &[0, 4, 8],
            ChordType::Sus2 => &[0, 2, 7],
            ChordType::Sus4 => &[0, 5, 7],
            ChordType::Maj7 => &[0, 4, 7, 11],
            ChordType::Min7 => &[0, 3, 7, 10],
            ChordType::Dominant7 => &[0, 4, 7, 10],
            ChordType::Dim7 => &[0, 3, 6, 9],
            ChordType::HalfDiminished7 => &[0, 3, 6, 10],
            ChordType::MinMaj7 => &[0, 3, 7, 11],
            ChordType::Aug7 => &[0, 4, 8, 10],
            ChordType::Dominant9 => &[0, 4, 7, 10, 14],
            ChordType::Maj9 => &[0, 4, 7, 11, 14],
            ChordType::Min9 => &[0, 3, 7, 10, 14],
            ChordType::Dominant11 => &[0, 4, 7, 10, 14, 17],
            ChordType::Min11 => &[0, 3, 7, 10, 14, 17],
            ChordType::Dominant13 => &[0, 4, 7, 10, 14, 17, 21],
            ChordType::Maj13 => &[0, 4, 7, 11, 14, 17, 21],
            ChordType::Add9 => &[0, 4, 7, 14],
            ChordType::Add11 => &[0, 4, 7, 17],
            ChordType::MinAdd9 => &[0, 3, 7, 14],
            ChordType::Dominant7Flat9 => &[0, 4, 7, 10, 13],
            ChordType::Dominant7Sharp9 => &[0, 4, 7, 10, 15],
            ChordType::Dominant7Sharp11 => &[0, 4, 7, 10, 18],
            ChordType::Dominant7Flat13 => &[0, 4, 7, 10, 20],
            ChordType::Altered => &[0, 4, 6, 10, 13, 15],
            ChordType::Fifth => &[0, 7],
            ChordType::Power => &[0, 7, 12],
            ChordType::Add9Sus4 => &[0, 5, 7, 14],
            ChordType::Dominant7Sus4 => &[0, 5, 7, 10],
        }
    }

    /// Canonical table key.
    pub fn symbol(&self) -> &'static str {
        match self {
            ChordType::Major => "major",
            ChordType::Minor => "minor",
            ChordType::Diminished => "diminished",
            ChordType::Augmented => "augmented",
            ChordType::Sus2 => "sus2",
            ChordType::Sus4 => "sus4",
            ChordType::Maj7 => "maj7",
            ChordType::Min7 => "min7",
            ChordType::Dominant7 => "7",
            ChordType::Dim7 => "dim7",
            ChordType::HalfDiminished7 => "m7b5",
            ChordType::MinMaj7 => "minmaj7",
            ChordType::Aug7 => "aug7",
            ChordType::Dominant9 => "9",
            ChordType::Maj9 => "maj9",
            ChordType::Min9 => "min9",
            ChordType::Dominant11 => "11",
            ChordType::Min11 => "min11",
            ChordType::Dominant13 => "13",
            ChordType::Maj13 => "maj13",
            ChordType::Add9 => "add9",
            ChordType::Add11 => "add11",
            ChordType::MinAdd9 => "madd9",
            ChordType::Dominant7Flat9 => "7b9",
            ChordType::Dominant7Sharp9 => "7#9",
            ChordType::Dominant7Sharp11 => "7#11",
            ChordType::Dominant7Flat13 => "7b13",
            ChordType::Altered => "7alt",
            ChordType::Fifth => "5",
            ChordType::Power => "power",
            ChordType::Add9Sus4 => "add9sus4",
            ChordType::Dominant7Sus4 => "7sus4",
        }
    }

    /// Exact table-key lookup.
    pub fn lookup(symbol: &str) -> Option<ChordType> {
        ChordType::ALL.iter().copied().find(|ty| ty.symbol() == symbol)
    }

    /// Alias-table lookup.
    pub fn alias(symbol: &str) -> Option<ChordType> {
        CHORD_ALIASES
            .iter()
            .find(|(alias, _)| *alias == symbol)
            .map(|(_, ty)| *ty)
    }

    /// Alias then table lookup.
    pub fn resolve(name: &str) -> Option<ChordType> {
        ChordType::alias(name).or_else(|| ChordType::lookup(name))
    }

    /// Permissive lookup: unknown names fall back to [`ChordType::Major`].
    pub fn from_name(name: &str) -> ChordType {
        ChordType::resolve(name).unwrap_or_else(|| {
            tracing::warn!(chord_type = name, "unknown chord type, using major");
            ChordType::Major
        })
    }

    /// Number of voices in root position.
    pub fn cardinality(&self) -> usize {
        self.intervals().len()
    }

    /// Short suffix used when displaying a chord name.
    pub fn display_suffix(&self) -> &'static str {
        match self {
            ChordType::Major => "",
            ChordType::Minor => "m",
            ChordType::Diminished => "dim",
            ChordType::Augmented => "aug",
            ChordType::Min7 => "m7",
            other => other.symbol(),
        }
    }
}

impl std::fmt::Display for ChordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl From<String> for ChordType {
    fn from(value: String) -> Self {
        ChordType::from_name(&value)
    }
}

impl From<ChordType> for String {
    fn from(value: ChordType) -> Self {
        value.symbol().to_string()
    }
}
