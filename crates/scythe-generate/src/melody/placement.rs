//! Rhythm skeletons: where melody notes start and how long they last.

use rand::Rng;
use serde::{Deserialize, Serialize};

const SYNCOPATED_DURATIONS: [f64; 4] = [0.5, 0.75, 1.0, 1.5];
const SYNCOPATED_ADVANCES: [f64; 3] = [0.5, 1.0, 1.5];
const VARIED_DURATIONS: [f64; 6] = [0.25, 0.5, 0.75, 1.0, 1.5, 2.0];
const DENSE_GAPS: [f64; 4] = [0.0, 0.0, 0.25, 0.5];
const SPARSE_GAPS: [f64; 3] = [0.25, 0.5, 1.0];

/// Rhythmic placement style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MelodyStyle {
    Straight,
    Syncopated,
    #[default]
    Varied,
}

impl MelodyStyle {
    pub const ALL: [MelodyStyle; 3] = [
        MelodyStyle::Straight,
        MelodyStyle::Syncopated,
        MelodyStyle::Varied,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MelodyStyle::Straight => "straight",
            MelodyStyle::Syncopated => "syncopated",
            MelodyStyle::Varied => "varied",
        }
    }

    /// Unrecognized names use the varied placement.
    pub fn from_name(name: &str) -> MelodyStyle {
        let lower = name.to_lowercase();
        MelodyStyle::ALL
            .iter()
            .copied()
            .find(|s| s.name() == lower)
            .unwrap_or_else(|| {
                tracing::warn!(style = name, "unknown melody style, using varied");
                MelodyStyle::Varied
            })
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, choices: &[f64]) -> f64 {
    choices[rng.gen_range(0..choices.len())]
}

/// `(start, duration)` pairs bounded by `beats`.
///
/// May be empty for the randomized styles; the caller supplies a fallback.
pub fn place_rhythm<R: Rng + ?Sized>(
    rng: &mut R,
    beats: f64,
    density: f64,
    style: MelodyStyle,
) -> Vec<(f64, f64)> {
    let mut positions = Vec::new();
    let mut pos = 0.0;

    match style {
        MelodyStyle::Straight => {
            let note_length = if density > 0.5 { 1.0 } else { 2.0 };
            while pos < beats {
                let duration = note_length * rng.gen_range(0.8..=1.0);
                positions.push((pos, duration));
                pos += note_length;
            }
        }
        MelodyStyle::Syncopated => {
            while pos < beats {
                if rng.gen::<f64>() < 0.3 {
                    pos += 0.5;
                }
                let duration = pick(rng, &SYNCOPATED_DURATIONS);
                if pos + duration <= beats {
                    positions.push((pos, duration));
                }
                pos += pick(rng, &SYNCOPATED_ADVANCES);
            }
        }
        MelodyStyle::Varied => {
            while pos < beats {
                let duration = pick(rng, &VARIED_DURATIONS) * rng.gen_range(0.9..=1.0);
                if pos + duration <= beats {
                    positions.push((pos, duration));
                }
                let gap = if density > 0.5 {
                    pick(rng, &DENSE_GAPS)
                } else {
                    pick(rng, &SPARSE_GAPS)
                };
                pos += duration + gap;
            }
        }
    }

    positions
}

/// One 0.9-beat note on every beat.
pub fn fallback_rhythm(beats: u64) -> Vec<(f64, f64)> {
    (0..beats).map(|beat| (beat as f64, 0.9)).collect()
}
