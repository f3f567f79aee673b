//! Tests for scale tables and degree arithmetic.

use pretty_assertions::assert_eq;

use super::*;

fn c_major() -> Scale {
    get_scale("C", "major", 4).unwrap()
}

#[test]
fn test_scale_tables_are_well_formed() {
    for ty in ScaleType::ALL {
        let intervals = ty.intervals();
        assert_eq!(intervals[0], 0, "{} must start at 0", ty);
        assert!(
            intervals.windows(2).all(|w| w[0] < w[1]),
            "{} must be strictly ascending",
            ty
        );
        assert!(*intervals.last().unwrap() < 12, "{} spans one octave", ty);
        assert_eq!(intervals.len(), ty.cardinality());
    }
}

#[test]
fn test_scale_cardinalities() {
    assert_eq!(ScaleType::MajorPentatonic.cardinality(), 5);
    assert_eq!(ScaleType::Blues.cardinality(), 6);
    assert_eq!(ScaleType::WholeTone.cardinality(), 6);
    assert_eq!(ScaleType::Dorian.cardinality(), 7);
    assert_eq!(ScaleType::BebopDominant.cardinality(), 8);
    assert_eq!(ScaleType::Diminished.cardinality(), 8);
    assert_eq!(ScaleType::Chromatic.cardinality(), 12);
}

#[test]
fn test_scale_lookup_and_aliases() {
    assert_eq!(ScaleType::lookup("minor"), Some(ScaleType::NaturalMinor));
    assert_eq!(ScaleType::lookup("Penta"), Some(ScaleType::MinorPentatonic));
    assert_eq!(ScaleType::lookup("maj_penta"), Some(ScaleType::MajorPentatonic));
    assert_eq!(ScaleType::lookup("DORIAN"), Some(ScaleType::Dorian));
    assert_eq!(ScaleType::lookup("nonsense"), None);
    assert_eq!(ScaleType::from_name("nonsense"), ScaleType::Major);
}

#[test]
fn test_scale_type_serde_names() {
    let json = serde_json::to_string(&ScaleType::DiminishedHw).unwrap();
    assert_eq!(json, "\"diminished_hw\"");
    for ty in ScaleType::ALL {
        let json = serde_json::to_string(&ty).unwrap();
        assert_eq!(json, format!("\"{}\"", ty.name()));
    }
}

#[test]
fn test_notes() {
    assert_eq!(c_major().notes(1), vec![60, 62, 64, 65, 67, 69, 71]);
    let two = get_scale("A", "minor_pentatonic", 3).unwrap().notes(2);
    assert_eq!(two, vec![57, 60, 62, 64, 67, 69, 72, 74, 76, 79]);
}

#[test]
fn test_note_names() {
    let names: Vec<String> = get_scale("D", "major", 4)
        .unwrap()
        .note_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(names, vec!["D", "E", "F#", "G", "A", "B", "C#"]);

    let names: Vec<String> = get_scale("Bb", "major", 4)
        .unwrap()
        .note_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(names, vec!["A#", "C", "D", "D#", "F", "G", "A"]);
}

#[test]
fn test_degree_to_pitch() {
    let scale = c_major();
    assert_eq!(scale.degree_to_pitch(1, 0), 60);
    assert_eq!(scale.degree_to_pitch(3, 0), 64);
    assert_eq!(scale.degree_to_pitch(7, 0), 71);
    assert_eq!(scale.degree_to_pitch(8, 0), 72);
    assert_eq!(scale.degree_to_pitch(10, 0), 76);
    assert_eq!(scale.degree_to_pitch(1, 1), 72);
    assert_eq!(scale.degree_to_pitch(1, -1), 48);
    // Degree 0 is one step below the root.
    assert_eq!(scale.degree_to_pitch(0, 0), 59);
    assert_eq!(scale.degree_to_pitch(-6, 0), 48);
}

#[test]
fn test_degree_octave_periodicity() {
    for ty in ScaleType::ALL {
        let scale = Scale::new(NoteName::parse("E").unwrap(), ty, 3);
        let card = scale.cardinality() as i32;
        for degree in -20..=20 {
            assert_eq!(
                scale.degree_to_pitch(degree, 0) - scale.degree_to_pitch(degree + card, 0),
                -12,
                "{} degree {}",
                ty,
                degree
            );
        }
    }
}

#[test]
fn test_contains_is_octave_invariant() {
    let scale = c_major();
    assert!(scale.contains(60));
    assert!(scale.contains(72));
    assert!(scale.contains(11));
    assert!(!scale.contains(61));
    assert!(!scale.contains(1));

    let fs_minor = get_scale("F#", "minor", 2).unwrap();
    assert!(fs_minor.contains(note_pitch("A", 6)));
    assert!(!fs_minor.contains(note_pitch("A#", 6)));
}

fn note_pitch(name: &str, octave: i32) -> i32 {
    crate::pitch::note_to_pitch(name, octave).unwrap()
}

#[test]
fn test_nearest_in_scale_prefers_above_on_ties() {
    let scale = c_major();
    assert_eq!(scale.nearest_in_scale(64), 64);
    // C# is one semitone from both C and D; the upper neighbour wins.
    assert_eq!(scale.nearest_in_scale(61), 62);
    assert_eq!(scale.nearest_in_scale(66), 67);

    let penta = get_scale("C", "major_pentatonic", 4).unwrap();
    // F (65): E is 1 below, G is 2 above.
    assert_eq!(penta.nearest_in_scale(65), 64);
}

#[test]
fn test_nearest_in_scale_sparse_scale() {
    // C japanese = {C, C#, F, G, G#}; from D# the first hit is F, two above.
    let scale = Scale::new(NoteName::parse("C").unwrap(), ScaleType::Japanese, 4);
    assert_eq!(scale.nearest_in_scale(63), 65);
    assert_eq!(scale.nearest_in_scale(62), 61);
}

#[test]
fn test_key_relations() {
    let c = NoteName::parse("C").unwrap();
    assert_eq!(relative_minor(c).to_string(), "A");
    assert_eq!(relative_major(NoteName::parse("A").unwrap()).to_string(), "C");
    assert_eq!(parallel_minor(c), c);
}

#[test]
fn test_get_scale_invalid_root() {
    assert!(get_scale("Z", "major", 4).is_err());
}
