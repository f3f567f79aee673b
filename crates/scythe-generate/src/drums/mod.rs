//! Genre drum patterns.
//!
//! A genre family picks a fixed layering of instrument sub-generators (kick,
//! snare, hats). Tracks keep their insertion order so flattening is stable.

mod kit;
mod parts;


use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use scythe_theory::pitch::fold_pitch;
use scythe_theory::rhythm::{Note, Rhythm, TimeSignature};

pub use kit::{DrumMap, FALLBACK_DRUM_PITCH, GM_DRUM_MAP, TR808_DRUM_MAP};

/// Minimum swing forced on hip-hop and lo-fi patterns.
pub const HIPHOP_MIN_SWING: f64 = 0.15;

/// Genre families with distinct instrument layerings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrumGenre {
    Electronic,
    HipHop,
    Trap,
    Rock,
    Chiptune,
    #[default]
    Default,
}

impl DrumGenre {
    /// Maps a genre name (case-insensitive) onto its family. Unknown genres
    /// use the default kit.
    pub fn from_name(name: &str) -> DrumGenre {
        match name.to_lowercase().as_str() {
            "electronic" | "house" | "techno" => DrumGenre::Electronic,
            "hiphop" | "hip-hop" | "boom_bap" | "lofi" => DrumGenre::HipHop,
            "trap" => DrumGenre::Trap,
            "rock" | "punk" | "emo" => DrumGenre::Rock,
            "chiptune" | "8bit" => DrumGenre::Chiptune,
            other => {
                debug!(genre = other, "no dedicated drum kit, using default");
                DrumGenre::Default
            }
        }
    }
}

/// Parameters for [`generate_drum_pattern`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrumParams {
    pub genre: String,
    pub bars: u32,
    pub bpm: f64,
    pub variation: String,
    pub swing: f64,
}

impl Default for DrumParams {
    fn default() -> Self {
        Self {
            genre: "electronic".to_string(),
            bars: 4,
            bpm: 120.0,
            variation: "basic".to_string(),
            swing: 0.0,
        }
    }
}

/// One instrument lane of a pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrumTrack {
    pub instrument: String,
    pub rhythm: Rhythm,
}

/// A multi-instrument drum pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrumPattern {
    /// `{genre}_{variation}`.
    pub name: String,
    pub bars: u32,
    pub bpm: f64,
    pub time_signature: TimeSignature,
    /// Swing actually applied, after genre minimums.
    pub swing: f64,
    pub tracks: Vec<DrumTrack>,
}

impl DrumPattern {
    pub fn track(&self, instrument: &str) -> Option<&Rhythm> {
        self.tracks
            .iter()
            .find(|t| t.instrument == instrument)
            .map(|t| &t.rhythm)
    }

    pub fn instruments(&self) -> Vec<&str> {
        self.tracks.iter().map(|t| t.instrument.as_str()).collect()
    }

    pub fn length_beats(&self) -> f64 {
        self.bars as f64 * self.time_signature.beats_per_bar()
    }

    /// Flattens every track into one note list.
    ///
    /// Each note takes its instrument's pitch from `map` (36 when unmapped).
    /// The result is stably sorted by start, so simultaneous hits keep track
    /// order.
    pub fn to_midi_notes(&self, map: &DrumMap) -> Vec<Note> {
        let mut notes: Vec<Note> = self
            .tracks
            .iter()
            .flat_map(|track| {
                let pitch = fold_pitch(map.pitch(&track.instrument));
                track.rhythm.with_pitch(pitch).into_notes()
            })
            .collect();
        notes.sort_by(|a, b| a.start.total_cmp(&b.start));
        notes
    }
}

/// Generates a drum pattern for a genre.
///
/// Hip-hop and lo-fi force at least [`HIPHOP_MIN_SWING`]; any positive swing
/// is applied to every track.
pub fn generate_drum_pattern<R: Rng + ?Sized>(rng: &mut R, params: &DrumParams) -> DrumPattern {
    let bars = params.bars;
    let genre = DrumGenre::from_name(&params.genre);
    let mut swing = params.swing;

    let tracks: Vec<(&str, Rhythm)> = match genre {
        DrumGenre::Electronic => vec![
            ("kick", parts::four_on_floor(bars, 100)),
            ("snare", parts::backbeat_snare(bars, 90)),
            ("closed_hat", parts::eighth_hat(bars, 65)),
            ("open_hat", parts::offbeat_hat(bars, 70)),
        ],
        DrumGenre::HipHop => {
            swing = swing.max(HIPHOP_MIN_SWING);
            vec![
                ("kick", parts::boom_bap_kick(rng, bars, 100)),
                ("snare", parts::backbeat_snare(bars, 100)),
                ("closed_hat", parts::eighth_hat(bars, 55)),
            ]
        }
        DrumGenre::Trap => vec![
            ("kick", parts::boom_bap_kick(rng, bars, 100)),
            ("snare", parts::backbeat_snare(bars, 110)),
            ("closed_hat", parts::trap_hihat(rng, bars, 80)),
        ],
        DrumGenre::Rock => vec![
            ("kick", parts::four_on_floor(bars, 110)),
            ("snare", parts::backbeat_snare(bars, 120)),
            ("closed_hat", parts::eighth_hat(bars, 75)),
        ],
        DrumGenre::Chiptune => vec![
            ("kick", parts::four_on_floor(bars, 120)),
            ("snare", parts::backbeat_snare(bars, 110)),
        ],
        DrumGenre::Default => vec![
            ("kick", parts::four_on_floor(bars, 100)),
            ("snare", parts::backbeat_snare(bars, 100)),
            ("closed_hat", parts::eighth_hat(bars, 65)),
        ],
    };

    let tracks: Vec<DrumTrack> = tracks
        .into_iter()
        .map(|(instrument, rhythm)| DrumTrack {
            instrument: instrument.to_string(),
            rhythm: if swing > 0.0 {
                rhythm.with_swing(swing)
            } else {
                rhythm
            },
        })
        .collect();

    debug!(
        genre = %params.genre,
        family = ?genre,
        bars,
        swing,
        tracks = tracks.len(),
        "generated drum pattern"
    );

    DrumPattern {
        name: format!("{}_{}", params.genre.to_lowercase(), params.variation),
        bars,
        bpm: params.bpm,
        time_signature: TimeSignature::COMMON_TIME,
        swing,
        tracks,
    }
}
