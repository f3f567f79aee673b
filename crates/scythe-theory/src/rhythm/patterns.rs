//! Fixed-grid pattern builders: subdivisions, straight and syncopated
//! patterns, and a handful of well-known rhythms.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Note, Rhythm, TimeSignature};

const TRIPLET: [f64; 3] = [0.0, 1.0 / 3.0, 2.0 / 3.0];
const SEXTUPLET: [f64; 6] = [0.0, 1.0 / 6.0, 2.0 / 6.0, 3.0 / 6.0, 4.0 / 6.0, 5.0 / 6.0];

/// Positions within one beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subdivision {
    #[default]
    Quarter,
    Eighth,
    Triplet,
    Sixteenth,
    Sextuplet,
}

impl Subdivision {
    pub const ALL: [Subdivision; 5] = [
        Subdivision::Quarter,
        Subdivision::Eighth,
        Subdivision::Triplet,
        Subdivision::Sixteenth,
        Subdivision::Sextuplet,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Subdivision::Quarter => "quarter",
            Subdivision::Eighth => "eighth",
            Subdivision::Triplet => "triplet",
            Subdivision::Sixteenth => "sixteenth",
            Subdivision::Sextuplet => "sextuplet",
        }
    }

    /// Unknown names are quarter notes.
    pub fn from_name(name: &str) -> Subdivision {
        Subdivision::ALL
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    pub fn positions(&self) -> &'static [f64] {
        match self {
            Subdivision::Quarter => &[0.0],
            Subdivision::Eighth => &[0.0, 0.5],
            Subdivision::Triplet => &TRIPLET,
            Subdivision::Sixteenth => &[0.0, 0.25, 0.5, 0.75],
            Subdivision::Sextuplet => &SEXTUPLET,
        }
    }
}

fn scale_velocity(velocity: u8, factor: f64) -> u8 {
    (velocity as f64 * factor).clamp(1.0, 127.0) as u8
}

/// One note per subdivision slot across `beats` beats.
///
/// With an accent pattern, slot `k` is accented when
/// `accents[k % accents.len()]` is set: accented slots play at 130% velocity,
/// the others at 70%.
pub fn create_straight_pattern(
    beats: u32,
    subdivision: Subdivision,
    pitch: i32,
    velocity: u8,
    accents: Option<&[bool]>,
) -> Rhythm {
    let positions = subdivision.positions();
    let duration = 1.0 / positions.len() as f64 * 0.9;
    let accents = accents.filter(|a| !a.is_empty());

    let mut notes = Vec::with_capacity(beats as usize * positions.len());
    for beat in 0..beats {
        for (i, offset) in positions.iter().enumerate() {
            let vel = match accents {
                Some(pattern) => {
                    let slot = beat as usize * positions.len() + i;
                    let factor = if pattern[slot % pattern.len()] { 1.3 } else { 0.7 };
                    scale_velocity(velocity, factor)
                }
                None => velocity,
            };
            notes.push(Note::new(beat as f64 + offset, duration, vel, pitch));
        }
    }

    Rhythm::new(TimeSignature::COMMON_TIME, notes, beats as f64)
}

/// Sixteenth-note grid with off-beat emphasis.
///
/// On-beat slots sound with probability 0.3, off-beat slots with probability
/// `density` at 80% velocity. Hits last 0.2 beats.
pub fn create_syncopated_pattern<R: Rng + ?Sized>(
    rng: &mut R,
    beats: u32,
    density: f64,
    pitch: i32,
    velocity: u8,
) -> Rhythm {
    let mut notes = Vec::new();
    for beat in 0..beats {
        for sixteenth in 0..4 {
            let on_beat = sixteenth == 0;
            let threshold = if on_beat { 0.3 } else { density };
            if rng.gen::<f64>() < threshold {
                let vel = if on_beat {
                    velocity
                } else {
                    (velocity as f64 * 0.8) as u8
                };
                notes.push(Note::new(
                    beat as f64 + sixteenth as f64 * 0.25,
                    0.2,
                    vel.max(1),
                    pitch,
                ));
            }
        }
    }
    Rhythm::new(TimeSignature::COMMON_TIME, notes, beats as f64)
}

/// Well-known one-bar rhythms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommonRhythm {
    #[default]
    FourOnFloor,
    Backbeat,
    BoomBap,
    ReggaeOneDrop,
    Disco,
}

impl CommonRhythm {
    pub const ALL: [CommonRhythm; 5] = [
        CommonRhythm::FourOnFloor,
        CommonRhythm::Backbeat,
        CommonRhythm::BoomBap,
        CommonRhythm::ReggaeOneDrop,
        CommonRhythm::Disco,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CommonRhythm::FourOnFloor => "four_on_floor",
            CommonRhythm::Backbeat => "backbeat",
            CommonRhythm::BoomBap => "boom_bap",
            CommonRhythm::ReggaeOneDrop => "reggae_one_drop",
            CommonRhythm::Disco => "disco",
        }
    }

    /// Unknown names fall back to four-on-the-floor.
    pub fn from_name(name: &str) -> CommonRhythm {
        CommonRhythm::ALL
            .iter()
            .copied()
            .find(|r| r.name() == name)
            .unwrap_or_else(|| {
                tracing::warn!(rhythm = name, "unknown rhythm, using four_on_floor");
                CommonRhythm::FourOnFloor
            })
    }

    /// Hit positions within one 4/4 bar.
    pub fn positions(&self) -> &'static [f64] {
        match self {
            CommonRhythm::FourOnFloor => &[0.0, 1.0, 2.0, 3.0],
            CommonRhythm::Backbeat => &[1.0, 3.0],
            CommonRhythm::BoomBap => &[0.0, 1.5, 2.75],
            CommonRhythm::ReggaeOneDrop => &[2.5],
            CommonRhythm::Disco => &[0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5],
        }
    }
}

/// A named rhythm repeated for `bars` bars of 4/4, with 0.25-beat hits.
pub fn get_common_rhythm(name: &str, bars: u32, pitch: i32, velocity: u8) -> Rhythm {
    let positions = CommonRhythm::from_name(name).positions();
    let notes = (0..bars)
        .flat_map(|bar| {
            positions
                .iter()
                .map(move |pos| Note::new(pos + bar as f64 * 4.0, 0.25, velocity, pitch))
        })
        .collect();
    Rhythm::new(TimeSignature::COMMON_TIME, notes, 4.0 * bars as f64)
}
