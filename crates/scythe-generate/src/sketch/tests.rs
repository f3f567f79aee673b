//! Tests for song sketches.

use pretty_assertions::assert_eq;

use scythe_theory::EngineError;

use super::*;
use crate::melody::{Contour, MelodyStyle};

fn pop_spec(bars: u32) -> SketchSpec {
    SketchSpec {
        genre: "pop".to_string(),
        scale: "major".to_string(),
        bars,
        seed: Some(7),
        ..SketchSpec::default()
    }
}

#[test]
fn test_empty_json_uses_defaults() {
    let spec = SketchSpec::from_json("{}").unwrap();
    assert_eq!(spec, SketchSpec::default());
    assert_eq!(spec.genre, "electronic");
    assert_eq!(spec.melody_style, MelodyStyle::Syncopated);
    assert!(spec.is_minor());
}

#[test]
fn test_json_fields() {
    let spec = SketchSpec::from_json(
        r#"{"genre":"trap","key":"F#","bars":8,"seed":99,"bass_style":"walking","contour":"wave"}"#,
    )
    .unwrap();
    assert_eq!(spec.key, "F#");
    assert_eq!(spec.bars, 8);
    assert_eq!(spec.seed, Some(99));
    assert_eq!(spec.bass_style, Some(BassStyle::Walking));
    assert_eq!(spec.contour, Contour::Wave);
    assert_eq!(spec.tempo, 120.0);
}

#[test]
fn test_unknown_fields_are_rejected() {
    let err = SketchSpec::from_json(r#"{"genre":"pop","tempoo":90}"#).unwrap_err();
    assert_eq!(err.code(), "GENERATE_002");
}

#[test]
fn test_validate() {
    assert!(SketchSpec::default().validate().is_ok());

    let cases: Vec<(SketchSpec, &str)> = vec![
        (SketchSpec { bars: 0, ..SketchSpec::default() }, "bars"),
        (
            SketchSpec {
                bars: MAX_SKETCH_BARS + 1,
                ..SketchSpec::default()
            },
            "bars",
        ),
        (SketchSpec { tempo: 0.0, ..SketchSpec::default() }, "tempo"),
        (
            SketchSpec {
                tempo: f64::INFINITY,
                ..SketchSpec::default()
            },
            "tempo",
        ),
        (SketchSpec { density: 1.5, ..SketchSpec::default() }, "density"),
        (SketchSpec { swing: -0.1, ..SketchSpec::default() }, "swing"),
    ];
    for (spec, expected) in cases {
        match spec.validate() {
            Err(GenerateError::InvalidSpec { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected {} error, got {:?}", expected, other),
        }
    }

    let bad_key = SketchSpec {
        key: "H".to_string(),
        ..SketchSpec::default()
    };
    assert_eq!(bad_key.validate().unwrap_err().code(), "THEORY_001");
}

#[test]
fn test_bass_style_for_genre() {
    assert_eq!(bass_style_for_genre("trap"), BassStyle::Trap808);
    assert_eq!(bass_style_for_genre("hiphop"), BassStyle::Trap808);
    assert_eq!(bass_style_for_genre("Electronic"), BassStyle::Synth);
    assert_eq!(bass_style_for_genre("jazz"), BassStyle::RootFifth);
}

#[test]
fn test_pop_sketch() {
    let sketch = generate_sketch(&pop_spec(6)).unwrap();
    assert_eq!(sketch.progression, vec!["C", "G", "Am", "F"]);
    assert_eq!(sketch.mode, Mode::Major);
    assert_eq!(sketch.seed, 7);

    let names: Vec<&str> = sketch.tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Pop Drums", "Bass (root_fifth)", "Melody (C major)"]
    );
    assert!(sketch.tracks.iter().all(|t| t.length_beats == 24.0));

    // The progression repeats to fill six bars.
    let bass = sketch.track(TrackKind::Bass).unwrap();
    let pitches: Vec<i32> = bass.notes.iter().map(|n| n.pitch).collect();
    assert_eq!(
        pitches,
        vec![36, 43, 43, 50, 45, 52, 41, 48, 36, 43, 43, 50]
    );

    let melody = sketch.track(TrackKind::Melody).unwrap();
    let scale = get_scale("C", "major", 5).unwrap();
    assert!(melody.notes.iter().all(|n| scale.contains(n.pitch)));
}

#[test]
fn test_minor_sketch_uses_minor_harmony() {
    let spec = SketchSpec {
        genre: "pop".to_string(),
        key: "A".to_string(),
        scale: "harmonic_minor".to_string(),
        ..SketchSpec::default()
    };
    let sketch = generate_sketch(&spec).unwrap();
    assert_eq!(sketch.mode, Mode::Minor);
    assert_eq!(sketch.progression[0], "A");
    assert_eq!(sketch.track(TrackKind::Bass).unwrap().name, "Bass (root_fifth)");
}

#[test]
fn test_bass_override_and_genre_default() {
    let sketch = generate_sketch(&SketchSpec::default()).unwrap();
    assert_eq!(sketch.track(TrackKind::Bass).unwrap().name, "Bass (synth)");
    assert_eq!(sketch.track(TrackKind::Drums).unwrap().name, "Electronic Drums");

    let spec = SketchSpec {
        bass_style: Some(BassStyle::Root),
        ..SketchSpec::default()
    };
    let sketch = generate_sketch(&spec).unwrap();
    let bass = sketch.track(TrackKind::Bass).unwrap();
    assert_eq!(bass.name, "Bass (root)");
    assert_eq!(bass.notes.len(), 4);
}

#[test]
fn test_tracks_use_independent_streams() {
    let base = generate_sketch(&pop_spec(4)).unwrap();
    let changed = generate_sketch(&SketchSpec {
        contour: Contour::Descending,
        ..pop_spec(4)
    })
    .unwrap();

    assert_eq!(base.track(TrackKind::Drums), changed.track(TrackKind::Drums));
    assert_eq!(base.track(TrackKind::Bass), changed.track(TrackKind::Bass));
}

#[test]
fn test_sketch_is_deterministic() {
    let spec = SketchSpec {
        genre: "trap".to_string(),
        seed: Some(1234),
        ..SketchSpec::default()
    };
    assert_eq!(generate_sketch(&spec).unwrap(), generate_sketch(&spec).unwrap());
}

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("lofi"), "Lofi");
    assert_eq!(capitalize("HIPHOP"), "Hiphop");
    assert_eq!(capitalize(""), "");
}
