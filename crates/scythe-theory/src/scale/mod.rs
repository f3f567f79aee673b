//! Scale model: interval tables, scale-degree arithmetic and membership.

mod keys;
mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::pitch::{NoteName, OCTAVE};

pub use keys::{parallel_minor, relative_major, relative_minor};
pub use types::ScaleType;

/// Radius searched by [`Scale::nearest_in_scale`], in semitones.
const NEAREST_SEARCH_RADIUS: i32 = 6;

/// A scale rooted on a note at a given octave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    pub root: NoteName,
    pub scale_type: ScaleType,
    #[serde(default = "default_scale_octave")]
    pub octave: i32,
}

fn default_scale_octave() -> i32 {
    4
}

impl Scale {
    pub fn new(root: NoteName, scale_type: ScaleType, octave: i32) -> Self {
        Self {
            root,
            scale_type,
            octave,
        }
    }

    /// Semitone intervals from the root.
    pub fn intervals(&self) -> &'static [i32] {
        self.scale_type.intervals()
    }

    /// Number of degrees per octave.
    pub fn cardinality(&self) -> usize {
        self.intervals().len()
    }

    /// Pitch of degree 1 at the scale's octave.
    pub fn root_pitch(&self) -> i32 {
        self.root.to_pitch(self.octave)
    }

    /// Pitches of the scale across `octaves` consecutive octaves.
    pub fn notes(&self, octaves: usize) -> Vec<i32> {
        let root = self.root_pitch();
        (0..octaves as i32)
            .flat_map(|oct| {
                self.intervals()
                    .iter()
                    .map(move |interval| root + oct * OCTAVE + interval)
            })
            .collect()
    }

    /// Sharp-spelled names of the scale's pitch classes, root first.
    pub fn note_names(&self) -> Vec<NoteName> {
        self.intervals()
            .iter()
            .map(|interval| self.root.transpose(*interval))
            .collect()
    }

    /// Pitch of a 1-indexed scale degree.
    ///
    /// Degree 1 is the root. Degrees past the cardinality continue into the
    /// next octave and degrees at or below 0 continue downward, so
    /// `degree_to_pitch(d + cardinality) == degree_to_pitch(d) + 12` for all `d`.
    pub fn degree_to_pitch(&self, degree: i32, octave_offset: i32) -> i32 {
        let card = self.cardinality() as i32;
        let degree_index = degree - 1;
        let octave_add = degree_index.div_euclid(card);
        let interval = self.intervals()[degree_index.rem_euclid(card) as usize];
        self.root_pitch() + interval + (octave_offset + octave_add) * OCTAVE
    }

    /// Pitch-class membership test (octave-invariant).
    pub fn contains(&self, pitch: i32) -> bool {
        let note_class = pitch.rem_euclid(OCTAVE);
        let root_class = self.root.pitch_class();
        self.intervals()
            .iter()
            .any(|interval| (root_class + interval) % OCTAVE == note_class)
    }

    /// Nearest pitch belonging to the scale.
    ///
    /// Searches outward one semitone at a time, testing above before below at
    /// each distance. Returns the input unchanged if nothing is found within
    /// six semitones.
    pub fn nearest_in_scale(&self, pitch: i32) -> i32 {
        if self.contains(pitch) {
            return pitch;
        }
        for offset in 1..=NEAREST_SEARCH_RADIUS {
            if self.contains(pitch + offset) {
                return pitch + offset;
            }
            if self.contains(pitch - offset) {
                return pitch - offset;
            }
        }
        pitch
    }
}

/// Build a scale from a root name and a scale type name.
///
/// Scale type aliases (`minor`, `pentatonic`, ...) are honored and unknown
/// types fall back to major. An unparseable root is an error.
pub fn get_scale(root: &str, scale_type: &str, octave: i32) -> Result<Scale, TheoryError> {
    Ok(Scale::new(
        NoteName::parse(root)?,
        ScaleType::from_name(scale_type),
        octave,
    ))
}
