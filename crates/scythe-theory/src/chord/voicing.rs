//! Voice leading and named voicing presets.

use serde::{Deserialize, Serialize};

use super::types::ChordType;
use super::Chord;

/// Total pitch movement from one note set to another.
///
/// For every note in `from`, the distance to its nearest note in `to` is
/// summed. An empty `to` set has no movement.
pub fn movement(from: &[i32], to: &[i32]) -> i32 {
    from.iter()
        .filter_map(|f| to.iter().map(|t| (t - f).abs()).min())
        .sum()
}

/// Re-voices `to` with the inversion that moves least from `from`.
///
/// Every inversion `0..cardinality` is tried in order and the first one with
/// the strictly smallest [`movement`] wins, so ties keep the lower inversion.
/// Any custom voicing on `to` is dropped.
pub fn voice_lead(from: &Chord, to: &Chord) -> Chord {
    voice_lead_with_movement(from, to).0
}

/// Like [`voice_lead`], also returning the chosen movement.
pub fn voice_lead_with_movement(from: &Chord, to: &Chord) -> (Chord, i32) {
    let from_notes = from.notes();
    let mut best = (0usize, i32::MAX);

    for inversion in 0..to.cardinality() {
        let candidate = to.root_position().with_inversion(inversion);
        let moved = movement(&from_notes, &candidate.notes());
        if moved < best.1 {
            best = (inversion, moved);
        }
    }

    let moved = if best.1 == i32::MAX { 0 } else { best.1 };
    (to.root_position().with_inversion(best.0), moved)
}

/// Named voicing styles with per-chord-type interval presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoicingStyle {
    Open,
    Closed,
    Drop2,
    Shell,
}

impl VoicingStyle {
    pub const ALL: [VoicingStyle; 4] = [
        VoicingStyle::Open,
        VoicingStyle::Closed,
        VoicingStyle::Drop2,
        VoicingStyle::Shell,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VoicingStyle::Open => "open",
            VoicingStyle::Closed => "closed",
            VoicingStyle::Drop2 => "drop2",
            VoicingStyle::Shell => "shell",
        }
    }

    pub fn lookup(name: &str) -> Option<VoicingStyle> {
        let lower = name.to_ascii_lowercase();
        VoicingStyle::ALL.iter().copied().find(|s| s.name() == lower)
    }
}

/// Interval preset for a chord type in a voicing style, if one is defined.
pub fn voicing_preset(style: VoicingStyle, chord_type: ChordType) -> Option<&'static [i32]> {
    let preset: &'static [i32] = match (style, chord_type) {
        (VoicingStyle::Open, ChordType::Major) => &[0, 7, 12, 16],
        (VoicingStyle::Open, ChordType::Minor) => &[0, 7, 12, 15],
        (VoicingStyle::Closed, ChordType::Major) => &[0, 4, 7],
        (VoicingStyle::Closed, ChordType::Minor) => &[0, 3, 7],
        (VoicingStyle::Drop2, ChordType::Maj7) => &[0, 7, 11, 16],
        (VoicingStyle::Drop2, ChordType::Min7) => &[0, 7, 10, 15],
        (VoicingStyle::Shell, ChordType::Maj7) => &[0, 4, 11],
        (VoicingStyle::Shell, ChordType::Min7) => &[0, 3, 10],
        (VoicingStyle::Shell, ChordType::Dominant7) => &[0, 4, 10],
        _ => return None,
    };
    Some(preset)
}

/// Pitches of a chord rendered through a voicing preset, rooted at the
/// chord's root pitch. `None` when the style has no preset for the type.
pub fn voiced_pitches(chord: &Chord, style: VoicingStyle) -> Option<Vec<i32>> {
    let root = chord.root_pitch();
    voicing_preset(style, chord.chord_type)
        .map(|intervals| intervals.iter().map(|i| root + i).collect())
}
