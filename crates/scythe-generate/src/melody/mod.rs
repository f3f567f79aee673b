//! Melodies and arpeggios.
//!
//! A melody is built in three passes: a rhythm skeleton of `(start,
//! duration)` slots, a directional contour of the same length, and a
//! scale-degree walk that turns the contour into pitches.

mod arpeggio;
mod contour;
mod placement;


use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use scythe_theory::pitch::fold_pitch;
use scythe_theory::rhythm::{clamp_velocity, Note};
use scythe_theory::{get_scale, Scale};

use crate::error::GenerateError;

pub use arpeggio::{arpeggio_sequence, generate_arpeggio, ArpPattern, MIN_NOTE_LENGTH};
pub use contour::{apply_contour, generate_contour, Contour};
pub use placement::{fallback_rhythm, place_rhythm, MelodyStyle};

/// Degrees a melody may open on.
const START_DEGREES: [i32; 3] = [1, 3, 5];

/// Velocity added to notes starting exactly on a beat.
const DOWNBEAT_ACCENT: i32 = 15;

/// Parameters for [`generate_melody`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MelodyParams {
    pub bars: u32,
    pub style: MelodyStyle,
    pub contour: Contour,
    /// 0.0 (sparse) to 1.0 (dense).
    pub density: f64,
    /// Octaves below and above the scale octave the walk may reach.
    pub octave_range: (i32, i32),
}

impl Default for MelodyParams {
    fn default() -> Self {
        Self {
            bars: 4,
            style: MelodyStyle::Varied,
            contour: Contour::Arch,
            density: 0.5,
            octave_range: (-1, 1),
        }
    }
}

/// A generated melodic line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Melody {
    pub notes: Vec<Note>,
    pub length_beats: f64,
    pub scale: Scale,
    pub style: String,
}

/// Generates a melody over `scale` in 4/4.
///
/// Walk pitches outside 0..=127 are folded back by octaves, so notes stay in
/// the scale.
pub fn generate_melody<R: Rng + ?Sized>(rng: &mut R, scale: &Scale, params: &MelodyParams) -> Melody {
    let beats = u64::from(params.bars) * 4;

    let mut slots = place_rhythm(rng, beats as f64, params.density, params.style);
    if slots.is_empty() {
        debug!(style = params.style.name(), "empty rhythm skeleton, using one note per beat");
        slots = fallback_rhythm(beats);
    }

    let steps = generate_contour(rng, slots.len(), params.contour);
    let start_degree = START_DEGREES[rng.gen_range(0..START_DEGREES.len())];
    let pitches = apply_contour(rng, scale, &steps, start_degree, params.octave_range);

    let notes: Vec<Note> = slots
        .iter()
        .zip(pitches)
        .map(|(&(start, duration), pitch)| {
            let mut velocity = rng.gen_range(75..=100);
            if start.rem_euclid(1.0) == 0.0 {
                velocity += DOWNBEAT_ACCENT;
            }
            Note::new(start, duration, clamp_velocity(velocity), fold_pitch(pitch))
        })
        .collect();

    debug!(
        scale = %scale.scale_type,
        bars = params.bars,
        style = params.style.name(),
        contour = params.contour.name(),
        notes = notes.len(),
        "generated melody"
    );

    Melody {
        notes,
        length_beats: beats as f64,
        scale: scale.clone(),
        style: params.style.name().to_string(),
    }
}

/// Builds the scale from names, then generates a melody over it.
pub fn generate_melody_in_key<R: Rng + ?Sized>(
    rng: &mut R,
    key: &str,
    scale_type: &str,
    octave: i32,
    params: &MelodyParams,
) -> Result<Melody, GenerateError> {
    let scale = get_scale(key, scale_type, octave)?;
    Ok(generate_melody(rng, &scale, params))
}
