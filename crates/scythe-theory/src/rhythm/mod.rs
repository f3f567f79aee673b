//! Rhythm model: the note event every generator emits, and pattern-level
//! transforms (swing, humanize, transpose, repeat).
//!
//! Positions and durations are in beats; tempo is not modeled here.

mod patterns;
mod time_signature;

#[cfg(test)]
mod tests;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub use patterns::{
    create_straight_pattern, create_syncopated_pattern, get_common_rhythm, CommonRhythm,
    Subdivision,
};
pub use time_signature::{TimeSignature, COMMON_TIME_SIGNATURES};

/// Default swing amount.
pub const DEFAULT_SWING: f64 = 0.33;

/// Default humanize timing jitter, in beats.
pub const DEFAULT_TIMING_JITTER: f64 = 0.02;

/// Default humanize velocity jitter.
pub const DEFAULT_VELOCITY_JITTER: i32 = 10;

/// A single note or hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Position in beats from the start of the containing pattern.
    pub start: f64,
    /// Length in beats.
    pub duration: f64,
    pub velocity: u8,
    pub pitch: i32,
}

impl Note {
    pub fn new(start: f64, duration: f64, velocity: u8, pitch: i32) -> Self {
        Self {
            start,
            duration,
            velocity,
            pitch,
        }
    }

    /// Delays off-beat notes by `amount * 0.5` beats.
    ///
    /// Only notes whose fractional position is strictly inside (0.4, 0.6)
    /// move; this targets the eighth-note offbeat.
    pub fn with_swing(&self, amount: f64) -> Note {
        let beat_pos = self.start.rem_euclid(1.0);
        if beat_pos > 0.4 && beat_pos < 0.6 {
            Note {
                start: self.start + amount * 0.5,
                ..*self
            }
        } else {
            *self
        }
    }

    /// Applies independent uniform timing and velocity jitter.
    ///
    /// Start is clamped to be non-negative and velocity to 1..=127.
    pub fn humanize<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        timing_range: f64,
        velocity_range: i32,
    ) -> Note {
        let timing = timing_range.abs();
        let vel_range = velocity_range.abs();
        let timing_offset = rng.gen_range(-timing..=timing);
        let velocity_offset = rng.gen_range(-vel_range..=vel_range);

        Note {
            start: (self.start + timing_offset).max(0.0),
            velocity: clamp_velocity(self.velocity as i32 + velocity_offset),
            ..*self
        }
    }

    pub fn transposed(&self, semitones: i32) -> Note {
        Note {
            pitch: self.pitch + semitones,
            ..*self
        }
    }

    /// Copy moved later by `offset` beats.
    pub fn shifted(&self, offset: f64) -> Note {
        Note {
            start: self.start + offset,
            ..*self
        }
    }

    /// End position in beats.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Clamps a velocity into the MIDI range 1..=127.
pub fn clamp_velocity(velocity: i32) -> u8 {
    velocity.clamp(1, 127) as u8
}

/// A pattern of notes under a time signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rhythm {
    #[serde(default)]
    pub time_signature: TimeSignature,
    pub notes: Vec<Note>,
    #[serde(default = "default_length_beats")]
    pub length_beats: f64,
}

fn default_length_beats() -> f64 {
    4.0
}

impl Rhythm {
    pub fn new(time_signature: TimeSignature, notes: Vec<Note>, length_beats: f64) -> Self {
        Self {
            time_signature,
            notes,
            length_beats,
        }
    }

    /// Empty 4/4 pattern of the given length.
    pub fn empty(length_beats: f64) -> Self {
        Rhythm::new(TimeSignature::COMMON_TIME, Vec::new(), length_beats)
    }

    pub fn beats_per_bar(&self) -> f64 {
        self.time_signature.beats_per_bar()
    }

    pub fn with_swing(&self, amount: f64) -> Rhythm {
        self.map_notes(|n| n.with_swing(amount))
    }

    /// Humanizes with the default jitter ranges.
    pub fn humanize<R: Rng + ?Sized>(&self, rng: &mut R) -> Rhythm {
        self.humanize_with(rng, DEFAULT_TIMING_JITTER, DEFAULT_VELOCITY_JITTER)
    }

    pub fn humanize_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        timing_range: f64,
        velocity_range: i32,
    ) -> Rhythm {
        self.map_notes(|n| n.humanize(rng, timing_range, velocity_range))
    }

    pub fn transpose(&self, semitones: i32) -> Rhythm {
        self.map_notes(|n| n.transposed(semitones))
    }

    /// Concatenates `times` copies, copy `i` shifted by `i * length_beats`.
    pub fn repeat(&self, times: u32) -> Rhythm {
        let notes = (0..times)
            .flat_map(|i| {
                let offset = i as f64 * self.length_beats;
                self.notes.iter().map(move |n| n.shifted(offset))
            })
            .collect();
        Rhythm::new(self.time_signature, notes, self.length_beats * times as f64)
    }

    /// Notes with every pitch set to `pitch`.
    pub fn with_pitch(&self, pitch: i32) -> Rhythm {
        self.map_notes(|n| Note { pitch, ..*n })
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn into_notes(self) -> Vec<Note> {
        self.notes
    }

    fn map_notes<F>(&self, f: F) -> Rhythm
    where
        F: FnMut(&Note) -> Note,
    {
        Rhythm::new(
            self.time_signature,
            self.notes.iter().map(f).collect(),
            self.length_beats,
        )
    }
}
