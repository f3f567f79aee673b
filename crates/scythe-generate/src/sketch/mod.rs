//! Multi-track song sketches.
//!
//! A sketch resolves the genre's progression in the requested key, then
//! generates drums, a bassline under the progression and a melody over the
//! scale. Each track draws from its own seeded stream, so changing one
//! track's parameters never changes another track's notes.

mod spec;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use tracing::info;

use scythe_theory::progression::{get_progression, Mode};
use scythe_theory::rhythm::Note;
use scythe_theory::{get_scale, rng_for, Chord, NoteName};

use crate::bass::{generate_bassline, BassStyle, DEFAULT_BASS_OCTAVE};
use crate::drums::{generate_drum_pattern, DrumMap, DrumParams};
use crate::error::GenerateError;
use crate::melody::{generate_melody, MelodyParams};

pub use spec::{SketchSpec, MAX_SKETCH_BARS};

/// Octave progression chords are resolved at.
const HARMONY_OCTAVE: i32 = 4;
/// Octave the melody's scale starts at.
const MELODY_OCTAVE: i32 = 5;
/// Each progression chord lasts one 4/4 bar.
const BEATS_PER_CHORD: f64 = 4.0;

/// Instrument role of a sketch track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    Drums,
    Bass,
    Melody,
}

/// One generated track, ready for a DAW bridge to place at beat 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchTrack {
    pub name: String,
    pub kind: TrackKind,
    pub length_beats: f64,
    pub notes: Vec<Note>,
}

/// Result of [`generate_sketch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongSketch {
    pub genre: String,
    pub key: NoteName,
    pub scale: String,
    pub mode: Mode,
    pub tempo: f64,
    pub bars: u32,
    pub seed: u32,
    /// Chord names of the resolved progression, one per entry.
    pub progression: Vec<String>,
    pub tracks: Vec<SketchTrack>,
}

impl SongSketch {
    pub fn track(&self, kind: TrackKind) -> Option<&SketchTrack> {
        self.tracks.iter().find(|t| t.kind == kind)
    }

    pub fn note_count(&self) -> usize {
        self.tracks.iter().map(|t| t.notes.len()).sum()
    }
}

/// Bass style a genre plays when the sketch does not name one.
pub fn bass_style_for_genre(genre: &str) -> BassStyle {
    match genre.to_lowercase().as_str() {
        "trap" | "hiphop" => BassStyle::Trap808,
        "electronic" => BassStyle::Synth,
        _ => BassStyle::RootFifth,
    }
}

/// Generates a drums + bass + melody sketch.
pub fn generate_sketch(spec: &SketchSpec) -> Result<SongSketch, GenerateError> {
    spec.validate()?;

    let seed = spec.seed.unwrap_or_default();
    let key = NoteName::parse(&spec.key)?;
    let mode = if spec.is_minor() { Mode::Minor } else { Mode::Major };
    let bars = spec.bars;
    let length_beats = bars as f64 * BEATS_PER_CHORD;

    let progression = get_progression(key, &spec.genre, None, mode);
    let chords = progression.resolve(HARMONY_OCTAVE);
    let chord_names: Vec<String> = chords.iter().map(Chord::name).collect();

    let drum_params = DrumParams {
        genre: spec.genre.clone(),
        bars,
        bpm: spec.tempo,
        swing: spec.swing,
        ..DrumParams::default()
    };
    let pattern = generate_drum_pattern(&mut rng_for(seed, "drums"), &drum_params);
    let drums = SketchTrack {
        name: format!("{} Drums", capitalize(&spec.genre)),
        kind: TrackKind::Drums,
        length_beats: pattern.length_beats(),
        notes: pattern.to_midi_notes(&DrumMap::default()),
    };

    let bass_style = spec
        .bass_style
        .unwrap_or_else(|| bass_style_for_genre(&spec.genre));
    let bass_chords = cycle_chords(&chords, bars);
    let bassline = generate_bassline(
        &mut rng_for(seed, "bass"),
        &bass_chords,
        bass_style,
        BEATS_PER_CHORD,
        DEFAULT_BASS_OCTAVE,
    );
    let bass = SketchTrack {
        name: format!("Bass ({})", bass_style),
        kind: TrackKind::Bass,
        length_beats: bassline.length_beats,
        notes: bassline.notes,
    };

    let scale = get_scale(&spec.key, &spec.scale, MELODY_OCTAVE)?;
    let melody_params = MelodyParams {
        bars,
        style: spec.melody_style,
        contour: spec.contour,
        density: spec.density,
        ..MelodyParams::default()
    };
    let melody = generate_melody(&mut rng_for(seed, "melody"), &scale, &melody_params);
    let melody = SketchTrack {
        name: format!("Melody ({} {})", spec.key, spec.scale),
        kind: TrackKind::Melody,
        length_beats,
        notes: melody.notes,
    };

    let sketch = SongSketch {
        genre: spec.genre.clone(),
        key,
        scale: spec.scale.clone(),
        mode,
        tempo: spec.tempo,
        bars,
        seed,
        progression: chord_names,
        tracks: vec![drums, bass, melody],
    };

    info!(
        genre = %sketch.genre,
        key = %sketch.key,
        mode = sketch.mode.name(),
        bars,
        seed,
        notes = sketch.note_count(),
        "generated song sketch"
    );

    Ok(sketch)
}

/// Repeats the progression until it covers `bars` bars, truncating the last
/// pass.
fn cycle_chords(chords: &[Chord], bars: u32) -> Vec<Chord> {
    chords.iter().cycle().take(bars as usize).cloned().collect()
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
