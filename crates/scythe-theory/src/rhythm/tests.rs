//! Tests for notes, rhythm transforms, time signatures and pattern builders.

use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn bar(notes: &[(f64, i32)]) -> Rhythm {
    let notes = notes
        .iter()
        .map(|(start, pitch)| Note::new(*start, 0.5, 100, *pitch))
        .collect();
    Rhythm::new(TimeSignature::COMMON_TIME, notes, 4.0)
}

#[test]
fn test_swing_moves_only_offbeats() {
    let off = Note::new(0.5, 0.25, 100, 42).with_swing(0.33);
    assert!(approx(off.start, 0.665));
    assert_eq!(off.pitch, 42);

    assert_eq!(Note::new(0.0, 0.25, 100, 42).with_swing(0.33).start, 0.0);
    assert_eq!(Note::new(2.25, 0.25, 100, 42).with_swing(0.5).start, 2.25);
    // Window bounds are exclusive.
    assert_eq!(Note::new(1.4, 0.25, 100, 42).with_swing(0.5).start, 1.4);
    assert!(approx(Note::new(3.55, 0.1, 90, 42).with_swing(0.2).start, 3.65));
}

#[test]
fn test_humanize_stays_in_range() {
    let mut rng = Pcg32::seed_from_u64(7);
    let loud = Note::new(0.0, 1.0, 125, 60);
    let soft = Note::new(2.0, 1.0, 3, 60);
    for _ in 0..500 {
        let h = loud.humanize(&mut rng, 0.05, 10);
        assert!(h.start >= 0.0 && h.start <= 0.05);
        assert!((115..=127).contains(&h.velocity));
        assert_eq!(h.duration, 1.0);
        assert_eq!(h.pitch, 60);

        let s = soft.humanize(&mut rng, 0.05, 10);
        assert!(s.start >= 1.95 && s.start <= 2.05);
        assert!((1..=13).contains(&s.velocity));
    }
}

#[test]
fn test_humanize_zero_range_is_identity() {
    let mut rng = Pcg32::seed_from_u64(1);
    let note = Note::new(1.5, 0.5, 64, 48);
    assert_eq!(note.humanize(&mut rng, 0.0, 0), note);
}

#[test]
fn test_rhythm_humanize_is_seed_deterministic() {
    let rhythm = bar(&[(0.0, 36), (1.0, 38), (2.0, 36), (3.0, 38)]);
    let a = rhythm.humanize(&mut Pcg32::seed_from_u64(99));
    let b = rhythm.humanize(&mut Pcg32::seed_from_u64(99));
    assert_eq!(a, b);
    assert_eq!(a.len(), 4);
}

#[test]
fn test_rhythm_transpose_and_swing() {
    let rhythm = bar(&[(0.0, 60), (0.5, 62)]);
    let up = rhythm.transpose(7);
    assert_eq!(
        up.notes.iter().map(|n| n.pitch).collect::<Vec<_>>(),
        vec![67, 69]
    );
    let swung = rhythm.with_swing(0.5);
    assert_eq!(swung.notes[0].start, 0.0);
    assert!(approx(swung.notes[1].start, 0.75));
    assert_eq!(swung.length_beats, 4.0);
}

#[test]
fn test_rhythm_repeat() {
    let rhythm = bar(&[(0.0, 36), (2.5, 38)]);
    let repeated = rhythm.repeat(3);
    assert_eq!(repeated.length_beats, 12.0);
    assert_eq!(
        repeated.notes.iter().map(|n| n.start).collect::<Vec<_>>(),
        vec![0.0, 2.5, 4.0, 6.5, 8.0, 10.5]
    );
    assert!(rhythm.repeat(0).is_empty());
}

#[test]
fn test_time_signatures() {
    let six_eight: TimeSignature = "6/8".parse().unwrap();
    assert_eq!(six_eight.beats_per_bar(), 3.0);
    assert_eq!(TimeSignature::COMMON_TIME.beats_per_bar(), 4.0);
    assert_eq!("7/8".parse::<TimeSignature>().unwrap().beats_per_bar(), 3.5);
    for name in COMMON_TIME_SIGNATURES {
        let ts: TimeSignature = name.parse().unwrap();
        assert!(ts.is_common());
        assert_eq!(ts.to_string(), name);
    }
    assert!(!"13/16".parse::<TimeSignature>().unwrap().is_common());
}

#[test]
fn test_time_signature_rejects_garbage() {
    for bad in ["", "4", "4/0", "0/4", "x/4", "4/4/4"] {
        assert!(
            matches!(
                bad.parse::<TimeSignature>(),
                Err(crate::error::TheoryError::InvalidTimeSignature { .. })
            ),
            "{:?}",
            bad
        );
    }
}

#[test]
fn test_rhythm_serde() {
    let json = serde_json::to_string(&bar(&[(1.0, 38)])).unwrap();
    assert_eq!(
        json,
        r#"{"time_signature":"4/4","notes":[{"start":1.0,"duration":0.5,"velocity":100,"pitch":38}],"length_beats":4.0}"#
    );
    let back: Rhythm = serde_json::from_str(&json).unwrap();
    assert_eq!(back.time_signature, TimeSignature::COMMON_TIME);
}

#[test]
fn test_straight_pattern() {
    let rhythm = create_straight_pattern(2, Subdivision::Eighth, 42, 100, None);
    assert_eq!(rhythm.len(), 4);
    assert_eq!(
        rhythm.notes.iter().map(|n| n.start).collect::<Vec<_>>(),
        vec![0.0, 0.5, 1.0, 1.5]
    );
    assert!(approx(rhythm.notes[0].duration, 0.45));
    assert_eq!(rhythm.length_beats, 2.0);
}

#[test]
fn test_straight_pattern_accents() {
    let accents = [true, false, false];
    let rhythm = create_straight_pattern(1, Subdivision::Sixteenth, 42, 100, Some(&accents));
    assert_eq!(
        rhythm.notes.iter().map(|n| n.velocity).collect::<Vec<_>>(),
        vec![127, 70, 70, 127]
    );
}

#[test]
fn test_subdivision_lookup() {
    assert_eq!(Subdivision::from_name("triplet").positions().len(), 3);
    assert_eq!(Subdivision::from_name("SEXTUPLET").positions().len(), 6);
    assert_eq!(Subdivision::from_name("bogus"), Subdivision::Quarter);
}

#[test]
fn test_syncopated_pattern() {
    let mut rng = Pcg32::seed_from_u64(3);
    let rhythm = create_syncopated_pattern(&mut rng, 8, 0.5, 60, 100);
    assert_eq!(rhythm.length_beats, 8.0);
    for note in &rhythm.notes {
        let on_beat = note.start.fract() == 0.0;
        assert_eq!(note.velocity, if on_beat { 100 } else { 80 });
        assert_eq!(note.duration, 0.2);
        assert!(note.start < 8.0);
    }

    let silent = create_syncopated_pattern(&mut rng, 4, 0.0, 60, 100);
    assert!(silent.notes.iter().all(|n| n.start.fract() == 0.0));
}

#[test]
fn test_common_rhythms() {
    let boom = get_common_rhythm("boom_bap", 2, 36, 110);
    assert_eq!(
        boom.notes.iter().map(|n| n.start).collect::<Vec<_>>(),
        vec![0.0, 1.5, 2.75, 4.0, 5.5, 6.75]
    );
    assert_eq!(boom.length_beats, 8.0);
    assert!(boom.notes.iter().all(|n| n.duration == 0.25 && n.velocity == 110));

    assert_eq!(get_common_rhythm("polka", 1, 36, 100).len(), 4);
}
