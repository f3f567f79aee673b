//! Per-instrument sub-generators. Each returns one 4/4 [`Rhythm`] spanning
//! `bars` bars.

use rand::Rng;

use scythe_theory::rhythm::{clamp_velocity, Note, Rhythm, TimeSignature};

use super::kit::GM_DRUM_MAP;

const BEATS_PER_BAR: f64 = 4.0;

const BOOM_BAP_TEMPLATES: [&[f64]; 3] = [
    &[0.0, 1.75, 3.0],
    &[0.0, 0.75, 2.75],
    &[0.0, 1.5, 2.5, 3.5],
];

pub(super) fn rhythm(bars: u32, notes: Vec<Note>) -> Rhythm {
    Rhythm::new(
        TimeSignature::COMMON_TIME,
        notes,
        bars as f64 * BEATS_PER_BAR,
    )
}

pub(super) fn beats(bars: u32) -> impl Iterator<Item = f64> {
    let count = u64::from(bars) * BEATS_PER_BAR as u64;
    (0..count).map(|beat| beat as f64)
}

/// Kick on every beat.
pub(crate) fn four_on_floor(bars: u32, velocity: i32) -> Rhythm {
    let kick = GM_DRUM_MAP.pitch("kick");
    let notes = beats(bars)
        .map(|beat| Note::new(beat, 0.25, clamp_velocity(velocity), kick))
        .collect();
    rhythm(bars, notes)
}

/// One of three syncopated kick templates, chosen once and repeated every
/// bar, with ±5 velocity jitter per hit.
pub(crate) fn boom_bap_kick<R: Rng + ?Sized>(rng: &mut R, bars: u32, velocity: i32) -> Rhythm {
    let kick = GM_DRUM_MAP.pitch("kick");
    let template = BOOM_BAP_TEMPLATES[rng.gen_range(0..BOOM_BAP_TEMPLATES.len())];

    let mut notes = Vec::with_capacity(bars as usize * template.len());
    for bar in 0..bars {
        let offset = bar as f64 * BEATS_PER_BAR;
        for pos in template {
            let jitter = rng.gen_range(-5..=5);
            notes.push(Note::new(
                offset + pos,
                0.25,
                clamp_velocity(velocity + jitter),
                kick,
            ));
        }
    }
    rhythm(bars, notes)
}

/// Eighth-note hats (second eighth 10 softer) with a 25% chance per beat of
/// a three-hit triplet roll in the second half of the beat.
pub(crate) fn trap_hihat<R: Rng + ?Sized>(rng: &mut R, bars: u32, velocity: i32) -> Rhythm {
    let hat = GM_DRUM_MAP.pitch("closed_hat");
    let mut notes = Vec::new();
    for beat in beats(bars) {
        for eighth in 0..2 {
            notes.push(Note::new(
                beat + eighth as f64 * 0.5,
                0.125,
                clamp_velocity(velocity - eighth * 10),
                hat,
            ));
        }
        if rng.gen::<f64>() < 0.25 {
            for step in 0..3 {
                notes.push(Note::new(
                    beat + 0.5 + step as f64 / 6.0,
                    0.08,
                    clamp_velocity(velocity - 20),
                    hat,
                ));
            }
        }
    }
    rhythm(bars, notes)
}

/// Snare on beats 2 and 4.
pub(crate) fn backbeat_snare(bars: u32, velocity: i32) -> Rhythm {
    let snare = GM_DRUM_MAP.pitch("snare");
    let notes = (0..bars)
        .flat_map(|bar| {
            [1.0, 3.0].into_iter().map(move |beat| {
                Note::new(
                    bar as f64 * BEATS_PER_BAR + beat,
                    0.25,
                    clamp_velocity(velocity),
                    snare,
                )
            })
        })
        .collect();
    rhythm(bars, notes)
}

/// Open hat on every offbeat eighth.
pub(crate) fn offbeat_hat(bars: u32, velocity: i32) -> Rhythm {
    let hat = GM_DRUM_MAP.pitch("open_hat");
    let notes = beats(bars)
        .map(|beat| Note::new(beat + 0.5, 0.25, clamp_velocity(velocity), hat))
        .collect();
    rhythm(bars, notes)
}

/// Straight closed-hat eighths, offbeats 15 softer.
pub(crate) fn eighth_hat(bars: u32, velocity: i32) -> Rhythm {
    let hat = GM_DRUM_MAP.pitch("closed_hat");
    let notes = beats(bars)
        .flat_map(|beat| {
            [
                Note::new(beat, 0.2, clamp_velocity(velocity), hat),
                Note::new(beat + 0.5, 0.2, clamp_velocity(velocity - 15), hat),
            ]
        })
        .collect();
    rhythm(bars, notes)
}
