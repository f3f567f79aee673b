//! Tests for note name parsing and pitch conversion.

use pretty_assertions::assert_eq;

use super::*;
use crate::error::TheoryError;

#[test]
fn test_note_to_pitch() {
    assert_eq!(note_to_pitch("C", 4).unwrap(), 60);
    assert_eq!(note_to_pitch("c", 4).unwrap(), 60);
    assert_eq!(note_to_pitch("A", 4).unwrap(), 69);
    assert_eq!(note_to_pitch("C#", 4).unwrap(), 61);
    assert_eq!(note_to_pitch("Db", 4).unwrap(), 61);
    assert_eq!(note_to_pitch("B", 3).unwrap(), 59);
    assert_eq!(note_to_pitch("C", -1).unwrap(), 0);
    assert_eq!(note_to_pitch("G", 9).unwrap(), 127);
}

#[test]
fn test_flat_half_step_cases() {
    // Fb and Cb resolve to their natural neighbours.
    assert_eq!(note_to_pitch("Fb", 4).unwrap(), note_to_pitch("E", 4).unwrap());
    assert_eq!(note_to_pitch("Cb", 4).unwrap(), note_to_pitch("B", 4).unwrap());
    assert_eq!(note_to_pitch("E#", 4).unwrap(), note_to_pitch("F", 4).unwrap());
    assert_eq!(note_to_pitch("B#", 4).unwrap(), note_to_pitch("C", 4).unwrap());
}

#[test]
fn test_invalid_notes() {
    for bad in ["", "H", "X#", "C##", "Cx", "Bbb", "7"] {
        let err = note_to_pitch(bad, 4).unwrap_err();
        assert!(
            matches!(err, TheoryError::InvalidNote { .. }),
            "expected InvalidNote for {:?}",
            bad
        );
    }
}

#[test]
fn test_pitch_to_note() {
    let (name, octave) = pitch_to_note(60);
    assert_eq!(name.to_string(), "C");
    assert_eq!(octave, 4);

    let (name, octave) = pitch_to_note(58);
    assert_eq!(name.to_string(), "A#");
    assert_eq!(octave, 3);

    let (name, octave) = pitch_to_note(0);
    assert_eq!(name.to_string(), "C");
    assert_eq!(octave, -1);
}

#[test]
fn test_sharp_spelling_roundtrip() {
    let names = [
        "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb",
        "B",
    ];
    for octave in 0..=8 {
        for name in names {
            let pitch = note_to_pitch(name, octave).unwrap();
            let (back, back_octave) = pitch_to_note(pitch);
            let original = NoteName::parse(name).unwrap();
            assert_eq!(back.pitch_class(), original.pitch_class(), "{}{}", name, octave);
            assert_eq!(back, original.normalized());
            assert_eq!(back_octave, octave);
        }
    }
}

#[test]
fn test_note_name_display_keeps_spelling() {
    assert_eq!(NoteName::parse("bb").unwrap().to_string(), "Bb");
    assert_eq!(NoteName::parse("f#").unwrap().to_string(), "F#");
    assert_eq!(NoteName::parse("Bb").unwrap().normalized().to_string(), "A#");
}

#[test]
fn test_transpose_note_name() {
    let c = NoteName::parse("C").unwrap();
    assert_eq!(c.transpose(7).to_string(), "G");
    assert_eq!(c.transpose(-3).to_string(), "A");
    assert_eq!(c.transpose(25).to_string(), "C#");
}

#[test]
fn test_pitch_to_name() {
    assert_eq!(pitch_to_name(60), "C4");
    assert_eq!(pitch_to_name(69), "A4");
    assert_eq!(pitch_to_name(47), "B2");
}

#[test]
fn test_parse_pitch() {
    assert_eq!(parse_pitch("C4").unwrap(), 60);
    assert_eq!(parse_pitch("A#3").unwrap(), 58);
    assert_eq!(parse_pitch("Bb5").unwrap(), 82);
    assert_eq!(parse_pitch("C-1").unwrap(), 0);
    assert_eq!(parse_pitch("E").unwrap(), 64);
    assert!(parse_pitch("Q4").is_err());
    assert!(parse_pitch("C4x").is_err());
}

#[test]
fn test_clamp_pitch() {
    assert_eq!(clamp_pitch(-5), 0);
    assert_eq!(clamp_pitch(64), 64);
    assert_eq!(clamp_pitch(200), 127);
    assert!(is_performable(0));
    assert!(!is_performable(128));
}

#[test]
fn test_fold_pitch_keeps_pitch_class() {
    assert_eq!(fold_pitch(0), 0);
    assert_eq!(fold_pitch(127), 127);
    // C10 and E10 drop to C9 and E9.
    assert_eq!(fold_pitch(132), 120);
    assert_eq!(fold_pitch(136), 124);
    assert_eq!(fold_pitch(128), 116);
    assert_eq!(fold_pitch(139), 127);
    assert_eq!(fold_pitch(-1), 11);
    assert_eq!(fold_pitch(-12), 0);
    assert_eq!(fold_pitch(-25), 11);

    for pitch in -300..300 {
        let folded = fold_pitch(pitch);
        assert!(is_performable(folded), "{} folded to {}", pitch, folded);
        assert_eq!(folded.rem_euclid(12), pitch.rem_euclid(12));
    }
}

#[test]
fn test_reference_pitch_round_trip() {
    assert_eq!(note_to_pitch("C", REFERENCE_OCTAVE).unwrap(), REFERENCE_PITCH);
    assert_eq!(pitch_to_note(REFERENCE_PITCH).1, REFERENCE_OCTAVE);
    assert_eq!(pitch_to_note(0).1, -1);
    assert_eq!(pitch_to_note(-1).1, -2);
    assert_eq!(pitch_to_note(127).1, 9);
}

#[test]
fn test_note_name_serde() {
    let name = NoteName::parse("Eb").unwrap();
    let json = serde_json::to_string(&name).unwrap();
    assert_eq!(json, "\"Eb\"");
    let back: NoteName = serde_json::from_str(&json).unwrap();
    assert_eq!(back, name);
    assert!(serde_json::from_str::<NoteName>("\"Q\"").is_err());
}
