//! Drum maps: instrument name to MIDI pitch.

/// Pitch used for instruments missing from a map.
pub const FALLBACK_DRUM_PITCH: i32 = 36;

/// A static instrument-name to pitch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrumMap {
    pub name: &'static str,
    entries: &'static [(&'static str, i32)],
}

impl DrumMap {
    /// Pitch for an instrument, or [`FALLBACK_DRUM_PITCH`] when unmapped.
    pub fn pitch(&self, instrument: &str) -> i32 {
        self.get(instrument).unwrap_or(FALLBACK_DRUM_PITCH)
    }

    pub fn get(&self, instrument: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(name, _)| *name == instrument)
            .map(|(_, pitch)| *pitch)
    }

    pub fn instruments(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Looks a map up by name (`gm` or `808`).
    pub fn by_name(name: &str) -> Option<DrumMap> {
        [GM_DRUM_MAP, TR808_DRUM_MAP]
            .into_iter()
            .find(|map| map.name.eq_ignore_ascii_case(name))
    }
}

impl Default for DrumMap {
    fn default() -> Self {
        GM_DRUM_MAP
    }
}

/// General MIDI percussion map.
pub const GM_DRUM_MAP: DrumMap = DrumMap {
    name: "gm",
    entries: &[
        ("kick", 36),
        ("snare", 38),
        ("clap", 39),
        ("closed_hat", 42),
        ("open_hat", 46),
        ("low_tom", 45),
        ("mid_tom", 47),
        ("high_tom", 50),
        ("crash", 49),
        ("ride", 51),
        ("rimshot", 37),
        ("cowbell", 56),
        ("tambourine", 54),
        ("shaker", 70),
    ],
};

/// 808-style map used by hip-hop and trap kits.
pub const TR808_DRUM_MAP: DrumMap = DrumMap {
    name: "808",
    entries: &[
        ("kick", 36),
        ("snare", 38),
        ("clap", 39),
        ("closed_hat", 42),
        ("open_hat", 46),
        ("perc1", 75),
        ("perc2", 67),
    ],
};
