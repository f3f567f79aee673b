//! Named progressions by genre and style.
//!
//! Every entry is written in Roman numerals so it transposes to any key.
//! Genres and styles are listed in definition order; the first style of a
//! genre is its default.

use crate::pitch::NoteName;

use super::{Mode, Progression};

type StyleTable = &'static [(&'static str, &'static [&'static str])];

const PROGRESSIONS: &[(&str, StyleTable)] = &[
    (
        "pop",
        &[
            ("axis", &["I", "V", "vi", "IV"]),
            ("classic", &["I", "IV", "V", "I"]),
            ("sensitive", &["vi", "IV", "I", "V"]),
            ("doo_wop", &["I", "vi", "IV", "V"]),
        ],
    ),
    (
        "jazz",
        &[
            ("ii_v_i", &["ii7", "V7", "Imaj7"]),
            ("ii_v_i_vi", &["ii7", "V7", "Imaj7", "vi7"]),
            ("rhythm_changes_a", &["Imaj7", "vi7", "ii7", "V7"]),
            ("minor_ii_v_i", &["iiø7", "V7b9", "i7"]),
            ("turnaround", &["Imaj7", "vi7", "ii7", "V7"]),
            ("backdoor", &["Imaj7", "bVII7", "Imaj7"]),
            ("coltrane", &["Imaj7", "bIIImaj7", "Vmaj7"]),
        ],
    ),
    (
        "blues",
        &[
            (
                "12_bar",
                &["I7", "I7", "I7", "I7", "IV7", "IV7", "I7", "I7", "V7", "IV7", "I7", "V7"],
            ),
            (
                "quick_change",
                &["I7", "IV7", "I7", "I7", "IV7", "IV7", "I7", "I7", "V7", "IV7", "I7", "V7"],
            ),
            (
                "minor_blues",
                &["i7", "i7", "i7", "i7", "iv7", "iv7", "i7", "i7", "VI7", "V7", "i7", "V7"],
            ),
        ],
    ),
    (
        "rock",
        &[
            ("classic", &["I", "IV", "V", "I"]),
            ("power", &["I5", "bVII5", "IV5", "I5"]),
            ("grunge", &["I", "IV", "bVI", "bVII"]),
            ("modal", &["i", "bVII", "bVI", "bVII"]),
        ],
    ),
    (
        "lofi",
        &[
            ("chill", &["ii7", "V7", "Imaj7", "vi7"]),
            ("melancholic", &["i9", "bVI9", "III9", "bVII9"]),
            ("jazzy", &["IVmaj7", "iii7", "vi7", "ii7"]),
            ("dreamy", &["Imaj7", "ii7", "iii7", "IVmaj7"]),
        ],
    ),
    (
        "electronic",
        &[
            ("trance", &["i", "bVI", "bVII", "i"]),
            ("house", &["i", "i", "bVI", "bVII"]),
            ("edm_drop", &["vi", "IV", "I", "V"]),
            ("techno", &["i", "bVII", "bVI", "V"]),
        ],
    ),
    (
        "shoegaze",
        &[
            ("wall", &["I", "iii", "IV", "ii"]),
            ("ethereal", &["Iadd9", "IVadd9", "vi", "V"]),
            ("dreamy", &["I", "bVII", "IV", "I"]),
        ],
    ),
    (
        "dreampop",
        &[
            ("lush", &["Imaj7", "IVmaj7add9", "vi7", "IV"]),
            ("nostalgic", &["I", "vi", "IV", "iii"]),
        ],
    ),
    (
        "emo",
        &[
            ("classic", &["I", "vi", "IV", "V"]),
            ("midwest", &["I", "V", "vi", "IV"]),
            ("post", &["i", "III", "bVII", "IV"]),
        ],
    ),
    (
        "folk",
        &[
            ("simple", &["I", "IV", "V", "I"]),
            ("storytelling", &["I", "V", "vi", "IV"]),
            ("modal", &["i", "bVII", "i", "iv"]),
        ],
    ),
    (
        "chiptune",
        &[
            ("heroic", &["I", "IV", "V", "I"]),
            ("boss_battle", &["i", "bVI", "bVII", "i"]),
            ("victory", &["I", "IV", "I", "V", "I"]),
        ],
    ),
    (
        "ambient",
        &[
            ("drone", &["I", "I", "I", "I"]),
            ("evolving", &["Imaj7", "IVmaj7", "Imaj7", "Vmaj7"]),
            ("cinematic", &["i", "bVI", "IV", "i"]),
        ],
    ),
];

/// Genre names in definition order.
pub fn genres() -> Vec<&'static str> {
    PROGRESSIONS.iter().map(|(genre, _)| *genre).collect()
}

/// Style names for a genre, or `None` for an unknown genre.
pub fn styles(genre: &str) -> Option<Vec<&'static str>> {
    find_genre(genre).map(|table| table.iter().map(|(style, _)| *style).collect())
}

fn find_genre(genre: &str) -> Option<StyleTable> {
    PROGRESSIONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(genre))
        .map(|(_, table)| *table)
}

/// Numerals for a genre and style.
///
/// Unknown genres use the pop table. A missing or unknown style uses the
/// genre's first style.
pub fn progression_numerals(genre: &str, style: Option<&str>) -> &'static [&'static str] {
    let table = find_genre(genre).unwrap_or_else(|| {
        tracing::warn!(genre, "unknown progression genre, using pop");
        PROGRESSIONS[0].1
    });

    let chosen = style.and_then(|wanted| {
        let found = table
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted));
        if found.is_none() {
            tracing::warn!(genre, style = wanted, "unknown progression style, using default");
        }
        found
    });

    chosen.unwrap_or(&table[0]).1
}

/// Named progression in a key and mode.
pub fn get_progression(key: NoteName, genre: &str, style: Option<&str>, mode: Mode) -> Progression {
    let chords = progression_numerals(genre, style)
        .iter()
        .map(|numeral| numeral.to_string())
        .collect();
    Progression::new(key, mode, chords)
}
