//! Basslines from chord sequences.

mod styles;


use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use scythe_theory::pitch::fold_pitch;
use scythe_theory::rhythm::Note;
use scythe_theory::{parse_chord_symbol, Chord};

use crate::error::GenerateError;

/// Default bass register.
pub const DEFAULT_BASS_OCTAVE: i32 = 2;

/// Default chord length in beats.
pub const DEFAULT_BEATS_PER_CHORD: f64 = 4.0;

/// Bass playing styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BassStyle {
    #[serde(rename = "root")]
    Root,
    #[default]
    #[serde(rename = "root_fifth")]
    RootFifth,
    #[serde(rename = "walking")]
    Walking,
    #[serde(rename = "synth")]
    Synth,
    #[serde(rename = "octave")]
    Octave,
    #[serde(rename = "808")]
    Trap808,
}

impl BassStyle {
    pub const ALL: [BassStyle; 6] = [
        BassStyle::Root,
        BassStyle::RootFifth,
        BassStyle::Walking,
        BassStyle::Synth,
        BassStyle::Octave,
        BassStyle::Trap808,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BassStyle::Root => "root",
            BassStyle::RootFifth => "root_fifth",
            BassStyle::Walking => "walking",
            BassStyle::Synth => "synth",
            BassStyle::Octave => "octave",
            BassStyle::Trap808 => "808",
        }
    }

    /// Case-insensitive lookup; unknown styles play root-fifth.
    pub fn from_name(name: &str) -> BassStyle {
        let lower = name.to_lowercase();
        BassStyle::ALL
            .iter()
            .copied()
            .find(|style| style.name() == lower)
            .unwrap_or_else(|| {
                warn!(style = name, "unknown bass style, using root_fifth");
                BassStyle::RootFifth
            })
    }
}

impl std::fmt::Display for BassStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A generated bassline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bassline {
    pub notes: Vec<Note>,
    pub length_beats: f64,
    pub style: BassStyle,
}

/// Generates a bassline under `chords`.
///
/// Chords are re-registered in root position at `octave` before the style
/// runs, so their own octave and inversion do not matter. Pitches outside
/// 0..=127 are folded back by octaves.
pub fn generate_bassline<R: Rng + ?Sized>(
    rng: &mut R,
    chords: &[Chord],
    style: BassStyle,
    beats_per_chord: f64,
    octave: i32,
) -> Bassline {
    let chords: Vec<Chord> = chords.iter().map(|c| c.at_octave(octave)).collect();

    let mut notes = match style {
        BassStyle::Root => styles::root(&chords, beats_per_chord),
        BassStyle::RootFifth => styles::root_fifth(&chords, beats_per_chord),
        BassStyle::Walking => styles::walking(rng, &chords, beats_per_chord),
        BassStyle::Synth => styles::synth(rng, &chords, beats_per_chord),
        BassStyle::Octave => styles::octave(&chords, beats_per_chord),
        BassStyle::Trap808 => styles::trap_808(rng, &chords, beats_per_chord),
    };
    for note in &mut notes {
        note.pitch = fold_pitch(note.pitch);
    }

    debug!(
        style = %style,
        chords = chords.len(),
        beats_per_chord,
        notes = notes.len(),
        "generated bassline"
    );

    Bassline {
        notes,
        length_beats: chords.len() as f64 * beats_per_chord,
        style,
    }
}

/// Parses chord symbols and generates a bassline under them.
pub fn generate_bassline_from_symbols<R, S>(
    rng: &mut R,
    symbols: &[S],
    style: BassStyle,
    beats_per_chord: f64,
    octave: i32,
) -> Result<Bassline, GenerateError>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    let chords = symbols
        .iter()
        .map(|s| parse_chord_symbol(s.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(generate_bassline(
        rng,
        &chords,
        style,
        beats_per_chord,
        octave,
    ))
}
