//! Shared inputs for the end-to-end suites.

use scythe_generate::bass::BassStyle;
use scythe_generate::drums::DrumParams;
use scythe_generate::melody::{Contour, MelodyParams, MelodyStyle};
use scythe_generate::sketch::SketchSpec;

/// Seeds used by the determinism suites.
pub const SEEDS: [u32; 4] = [1, 7, 42, 20240611];

/// One genre per drum family; `pop` falls through to the default kit.
pub const DRUM_GENRES: [&str; 6] = ["electronic", "hiphop", "trap", "rock", "chiptune", "pop"];

/// A sketch spec for each family of defaults: electronic, trap, lo-fi and
/// a major-key pop song.
pub fn standard_sketches() -> Vec<(&'static str, SketchSpec)> {
    vec![
        ("electronic", SketchSpec::default()),
        (
            "trap",
            SketchSpec {
                genre: "trap".to_string(),
                key: "F".to_string(),
                scale: "harmonic_minor".to_string(),
                bars: 8,
                tempo: 140.0,
                seed: Some(808),
                melody_style: MelodyStyle::Syncopated,
                contour: Contour::Descending,
                ..SketchSpec::default()
            },
        ),
        (
            "lofi",
            SketchSpec {
                genre: "lofi".to_string(),
                key: "D".to_string(),
                scale: "dorian".to_string(),
                tempo: 82.0,
                seed: Some(3),
                swing: 0.3,
                bass_style: Some(BassStyle::Walking),
                melody_style: MelodyStyle::Varied,
                ..SketchSpec::default()
            },
        ),
        (
            "pop",
            SketchSpec {
                genre: "pop".to_string(),
                key: "G".to_string(),
                scale: "major".to_string(),
                bars: 16,
                seed: Some(11),
                melody_style: MelodyStyle::Straight,
                contour: Contour::Wave,
                density: 0.7,
                ..SketchSpec::default()
            },
        ),
    ]
}

/// Drum parameters for `genre` at the usual four-bar length.
pub fn drum_params(genre: &str) -> DrumParams {
    DrumParams {
        genre: genre.to_string(),
        ..DrumParams::default()
    }
}

/// Dense melody parameters that exercise every contour step.
pub fn busy_melody() -> MelodyParams {
    MelodyParams {
        bars: 8,
        style: MelodyStyle::Syncopated,
        contour: Contour::Random,
        density: 0.9,
        ..MelodyParams::default()
    }
}

/// Chord symbols for a jazz turnaround.
pub fn jazz_turnaround() -> Vec<&'static str> {
    vec!["Dm7", "G7", "Cmaj7", "A7b9"]
}
