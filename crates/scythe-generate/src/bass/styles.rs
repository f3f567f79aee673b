//! Bass style algorithms. Each emits one segment per chord and advances the
//! running position by `beats_per_chord`.

use rand::Rng;

use scythe_theory::rhythm::Note;
use scythe_theory::Chord;

const SYNTH_TEMPLATES: [&[f64]; 3] = [
    &[0.0, 0.75, 1.5, 2.0, 3.0, 3.5],
    &[0.0, 1.0, 2.5, 3.0],
    &[0.0, 0.5, 1.0, 2.0, 2.5, 3.0],
];

const TRAP_808_TEMPLATES: [&[(f64, f64)]; 3] = [
    &[(0.0, 3.0), (3.0, 0.9)],
    &[(0.0, 1.5), (1.75, 2.0)],
    &[(0.0, 4.0)],
];

const WALKING_PASSING_INTERVALS: [i32; 3] = [2, 3, 5];

fn chord_starts(chords: &[Chord], beats_per_chord: f64) -> impl Iterator<Item = (f64, &Chord)> {
    chords
        .iter()
        .enumerate()
        .map(move |(i, chord)| (i as f64 * beats_per_chord, chord))
}

pub(crate) fn root(chords: &[Chord], beats_per_chord: f64) -> Vec<Note> {
    chord_starts(chords, beats_per_chord)
        .map(|(pos, chord)| Note::new(pos, beats_per_chord * 0.9, 100, chord.root_pitch()))
        .collect()
}

/// Root on beat 1, fifth on beat 3.
pub(crate) fn root_fifth(chords: &[Chord], beats_per_chord: f64) -> Vec<Note> {
    chord_starts(chords, beats_per_chord)
        .flat_map(|(pos, chord)| {
            let root = chord.root_pitch();
            [
                Note::new(pos, 1.8, 100, root),
                Note::new(pos + 2.0, 1.8, 85, root + 7),
            ]
        })
        .collect()
}

/// Four quarter notes per chord: root, a non-root chord tone, a passing tone
/// above the root, and a chromatic approach to the next chord's root.
pub(crate) fn walking<R: Rng + ?Sized>(
    rng: &mut R,
    chords: &[Chord],
    beats_per_chord: f64,
) -> Vec<Note> {
    let mut notes = Vec::with_capacity(chords.len() * 4);
    for (i, (pos, chord)) in chord_starts(chords, beats_per_chord).enumerate() {
        let root = chord.root_pitch();
        let intervals = chord.intervals();
        let chord_tone = match intervals.len() {
            0 | 1 => root,
            len => root + intervals[rng.gen_range(1..len)],
        };
        let passing =
            root + WALKING_PASSING_INTERVALS[rng.gen_range(0..WALKING_PASSING_INTERVALS.len())];
        let target = chords[(i + 1) % chords.len()].root_pitch();
        let approach = if rng.gen::<f64>() < 0.5 {
            target - 1
        } else {
            target + 1
        };

        for (beat, pitch) in [root, chord_tone, passing, approach].into_iter().enumerate() {
            let velocity = if beat == 0 { 100 } else { 85 };
            notes.push(Note::new(pos + beat as f64, 0.9, velocity, pitch));
        }
    }
    notes
}

/// One rhythmic template chosen per call and repeated under every chord.
pub(crate) fn synth<R: Rng + ?Sized>(
    rng: &mut R,
    chords: &[Chord],
    beats_per_chord: f64,
) -> Vec<Note> {
    let template = SYNTH_TEMPLATES[rng.gen_range(0..SYNTH_TEMPLATES.len())];
    chord_starts(chords, beats_per_chord)
        .flat_map(|(pos, chord)| {
            let root = chord.root_pitch();
            template.iter().map(move |offset| {
                let velocity = if *offset == 0.0 { 100 } else { 80 };
                Note::new(pos + offset, 0.4, velocity, root)
            })
        })
        .collect()
}

/// Disco octaves: low root on each whole beat, the octave above on the "and".
pub(crate) fn octave(chords: &[Chord], beats_per_chord: f64) -> Vec<Note> {
    let whole_beats = beats_per_chord.max(0.0).floor() as u32;
    chord_starts(chords, beats_per_chord)
        .flat_map(|(pos, chord)| {
            let root = chord.root_pitch();
            (0..whole_beats).flat_map(move |beat| {
                let at = pos + beat as f64;
                [
                    Note::new(at, 0.2, 100, root),
                    Note::new(at + 0.5, 0.2, 80, root + 12),
                ]
            })
        })
        .collect()
}

/// Long 808 hits, template chosen independently per chord.
pub(crate) fn trap_808<R: Rng + ?Sized>(
    rng: &mut R,
    chords: &[Chord],
    beats_per_chord: f64,
) -> Vec<Note> {
    let mut notes = Vec::new();
    for (pos, chord) in chord_starts(chords, beats_per_chord) {
        let root = chord.root_pitch();
        let template = TRAP_808_TEMPLATES[rng.gen_range(0..TRAP_808_TEMPLATES.len())];
        for (offset, duration) in template {
            notes.push(Note::new(pos + offset, *duration, 110, root));
        }
    }
    notes
}
