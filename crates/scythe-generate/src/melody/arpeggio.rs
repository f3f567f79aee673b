//! Chord arpeggios.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use scythe_theory::pitch::fold_pitch;
use scythe_theory::rhythm::Note;
use scythe_theory::{Chord, Scale, ScaleType};

use super::Melody;

/// Shortest note length accepted by [`generate_arpeggio`], in beats.
pub const MIN_NOTE_LENGTH: f64 = 1.0 / 64.0;

const ARPEGGIO_VELOCITY: u8 = 85;

/// Order in which chord tones are cycled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArpPattern {
    #[default]
    Up,
    Down,
    UpDown,
    Random,
}

impl ArpPattern {
    pub const ALL: [ArpPattern; 4] = [
        ArpPattern::Up,
        ArpPattern::Down,
        ArpPattern::UpDown,
        ArpPattern::Random,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ArpPattern::Up => "up",
            ArpPattern::Down => "down",
            ArpPattern::UpDown => "up_down",
            ArpPattern::Random => "random",
        }
    }

    /// Unrecognized names shuffle.
    pub fn from_name(name: &str) -> ArpPattern {
        let lower = name.to_lowercase();
        ArpPattern::ALL
            .iter()
            .copied()
            .find(|p| p.name() == lower)
            .unwrap_or_else(|| {
                warn!(pattern = name, "unknown arpeggio pattern, using random");
                ArpPattern::Random
            })
    }
}

/// Pitch sequence cycled by the arpeggiator.
///
/// The chord's voiced notes are copied across `octaves` octaves, then ordered
/// by `pattern`. `UpDown` climbs and descends without repeating either end.
pub fn arpeggio_sequence<R: Rng + ?Sized>(
    rng: &mut R,
    chord: &Chord,
    pattern: ArpPattern,
    octaves: u32,
) -> Vec<i32> {
    let voiced = chord.notes();
    let mut all: Vec<i32> = (0..octaves as i32)
        .flat_map(|oct| voiced.iter().map(move |n| n + oct * 12))
        .collect();

    match pattern {
        ArpPattern::Up => all,
        ArpPattern::Down => {
            all.reverse();
            all
        }
        ArpPattern::UpDown => {
            let inner: Vec<i32> = match all.len() {
                0..=2 => Vec::new(),
                len => all[1..len - 1].iter().rev().copied().collect(),
            };
            all.extend(inner);
            all
        }
        ArpPattern::Random => {
            all.shuffle(rng);
            all
        }
    }
}

/// Arpeggiates `chord` for `bars` bars of 4/4.
///
/// Note `i` starts at `i * note_length` and plays sequence index
/// `i % sequence.len()`. `note_length` is raised to [`MIN_NOTE_LENGTH`]
/// when smaller. Pitches outside 0..=127 are folded back by octaves.
pub fn generate_arpeggio<R: Rng + ?Sized>(
    rng: &mut R,
    chord: &Chord,
    bars: u32,
    pattern: ArpPattern,
    note_length: f64,
    octaves: u32,
) -> Melody {
    let note_length = if note_length.is_finite() && note_length >= MIN_NOTE_LENGTH {
        note_length
    } else {
        MIN_NOTE_LENGTH
    };
    let beats = bars as f64 * 4.0;
    let sequence = arpeggio_sequence(rng, chord, pattern, octaves);

    let mut notes = Vec::new();
    if !sequence.is_empty() {
        let mut step = 0usize;
        loop {
            let start = step as f64 * note_length;
            if start >= beats {
                break;
            }
            notes.push(Note::new(
                start,
                note_length * 0.9,
                ARPEGGIO_VELOCITY,
                fold_pitch(sequence[step % sequence.len()]),
            ));
            step += 1;
        }
    }

    debug!(
        chord = %chord,
        pattern = pattern.name(),
        bars,
        notes = notes.len(),
        "generated arpeggio"
    );

    Melody {
        notes,
        length_beats: beats,
        scale: Scale::new(chord.root, ScaleType::Major, chord.octave),
        style: format!("arpeggio_{}", pattern.name()),
    }
}
