//! Chord model: chord types, construction, symbol parsing and voice leading.
//!
//! A [`Chord`] is a root, a [`ChordType`], an octave, an inversion count and
//! an optional custom voicing. Inversion raises the lowest constructed voices
//! by an octave; it is not a bass-note inversion.

mod parse;
mod types;
mod voicing;


use serde::{Deserialize, Serialize};

use crate::pitch::{NoteName, OCTAVE};

pub use parse::{classify_suffix, parse_chord_symbol};
pub use types::ChordType;
pub use voicing::{
    movement, voice_lead, voice_lead_with_movement, voiced_pitches, voicing_preset, VoicingStyle,
};

const INVERSION_SUFFIXES: [&str; 4] = ["", "/3", "/5", "/7"];

/// A chord built on a root at an octave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub root: NoteName,
    #[serde(default)]
    pub chord_type: ChordType,
    #[serde(default = "default_chord_octave")]
    pub octave: i32,
    #[serde(default)]
    pub inversion: usize,
    /// Voice indices into the (inverted) base note set. Indices past the
    /// cardinality wrap and add an octave per full cycle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voicing: Option<Vec<usize>>,
}

fn default_chord_octave() -> i32 {
    4
}

impl Default for Chord {
    fn default() -> Self {
        Chord::new(NoteName::default(), ChordType::Major)
    }
}

impl Chord {
    /// Root-position chord at octave 4.
    pub fn new(root: NoteName, chord_type: ChordType) -> Self {
        Self {
            root,
            chord_type,
            octave: default_chord_octave(),
            inversion: 0,
            voicing: None,
        }
    }

    pub fn with_octave(mut self, octave: i32) -> Self {
        self.octave = octave;
        self
    }

    pub fn with_inversion(mut self, inversion: usize) -> Self {
        self.inversion = inversion;
        self
    }

    pub fn with_voicing(mut self, voicing: Vec<usize>) -> Self {
        self.voicing = Some(voicing);
        self
    }

    /// Same root, type and octave with inversion and voicing cleared.
    pub fn root_position(&self) -> Chord {
        Chord {
            inversion: 0,
            voicing: None,
            ..self.clone()
        }
    }

    /// Root-position copy re-registered at another octave.
    pub fn at_octave(&self, octave: i32) -> Chord {
        self.root_position().with_octave(octave)
    }

    pub fn intervals(&self) -> &'static [i32] {
        self.chord_type.intervals()
    }

    pub fn cardinality(&self) -> usize {
        self.chord_type.cardinality()
    }

    pub fn root_pitch(&self) -> i32 {
        self.root.to_pitch(self.octave)
    }

    /// Pitches of the chord, honoring inversion and custom voicing.
    ///
    /// The bottom `inversion % cardinality` voices are raised an octave and
    /// the set is re-sorted; each full multiple of the cardinality in the
    /// inversion lifts the whole chord another octave.
    pub fn notes(&self) -> Vec<i32> {
        let root = self.root_pitch();
        let mut base: Vec<i32> = self.intervals().iter().map(|i| root + i).collect();
        let card = base.len();

        if self.inversion > 0 && card > 0 {
            let raised = self.inversion % card;
            let lift = (self.inversion / card) as i32 * OCTAVE;
            for note in base.iter_mut().take(raised) {
                *note += OCTAVE;
            }
            base.sort_unstable();
            for note in base.iter_mut() {
                *note += lift;
            }
        }

        match &self.voicing {
            Some(indices) if !indices.is_empty() && card > 0 => indices
                .iter()
                .map(|i| base[i % card] + OCTAVE * (i / card) as i32)
                .collect(),
            _ => base,
        }
    }

    /// Sharp-spelled names of [`Chord::notes`], in pitch order.
    pub fn note_names(&self) -> Vec<NoteName> {
        self.notes()
            .into_iter()
            .map(NoteName::from_pitch_class)
            .collect()
    }

    /// Display name such as `Cm`, `F#maj7` or `G7/3`.
    pub fn name(&self) -> String {
        let inversion = match self.inversion {
            0 => String::new(),
            n if n < INVERSION_SUFFIXES.len() => INVERSION_SUFFIXES[n].to_string(),
            n => format!("/{}", n),
        };
        format!("{}{}{}", self.root, self.chord_type.display_suffix(), inversion)
    }

    /// Slash chord over `bass`.
    ///
    /// Picks the inversion whose construction-order voice matches the bass
    /// pitch class. Returns the chord unchanged when the bass is not a chord
    /// tone.
    pub fn with_bass(&self, bass: NoteName) -> Chord {
        let bass_interval = (bass.pitch_class() - self.root.pitch_class()).rem_euclid(OCTAVE);
        match self
            .intervals()
            .iter()
            .position(|interval| interval % OCTAVE == bass_interval)
        {
            Some(inversion) => self.root_position().with_inversion(inversion),
            None => self.clone(),
        }
    }
}

impl std::fmt::Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}
