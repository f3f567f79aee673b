//! End-to-End Determinism Tests for Scythe
//!
//! Tests verify:
//! - Same seed and parameters -> byte-identical serialized output
//! - Different seeds -> different output for randomized generators
//! - Named RNG streams are independent of each other
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p scythe-tests --test e2e_determinism
//! ```

use pretty_assertions::{assert_eq, assert_ne};

use scythe_generate::bass::{generate_bassline_from_symbols, BassStyle};
use scythe_generate::drums::generate_drum_pattern;
use scythe_generate::melody::{generate_arpeggio, generate_melody, ArpPattern};
use scythe_generate::sketch::{generate_sketch, SketchSpec, TrackKind};
use scythe_tests::determinism::{compute_hash, serialize_output};
use scythe_tests::fixtures;
use scythe_tests::{test_determinism, verify_determinism, verify_hash_determinism, verify_seed_sensitivity};
use scythe_theory::{get_scale, parse_chord_symbol, rng_for};

// ============================================================================
// Macro-generated determinism tests
// ============================================================================

test_determinism!(trap_drums, {
    generate_drum_pattern(&mut rng_for(9, "drums"), &fixtures::drum_params("trap"))
});

test_determinism!(walking_bass, {
    generate_bassline_from_symbols(
        &mut rng_for(9, "bass"),
        &fixtures::jazz_turnaround(),
        BassStyle::Walking,
        4.0,
        2,
    )
    .unwrap()
});

test_determinism!(random_arpeggio, runs = 5, {
    let chord = parse_chord_symbol("Am7").unwrap();
    generate_arpeggio(&mut rng_for(9, "arpeggio"), &chord, 2, ArpPattern::Random, 0.25, 2)
});

// ============================================================================
// Generators
// ============================================================================

#[test]
fn test_drum_determinism_all_genres() {
    for genre in fixtures::DRUM_GENRES {
        for seed in fixtures::SEEDS {
            let result = verify_determinism(
                || generate_drum_pattern(&mut rng_for(seed, "drums"), &fixtures::drum_params(genre)),
                3,
            );
            result.assert_deterministic();
        }
    }
}

#[test]
fn test_melody_determinism() {
    let scale = get_scale("A", "minor", 5).unwrap();
    let params = fixtures::busy_melody();
    for seed in fixtures::SEEDS {
        verify_determinism(|| generate_melody(&mut rng_for(seed, "melody"), &scale, &params), 3)
            .assert_deterministic();
    }
}

#[test]
fn test_melody_seed_sensitivity() {
    let scale = get_scale("A", "minor", 5).unwrap();
    let params = fixtures::busy_melody();
    assert!(verify_seed_sensitivity(
        |seed| generate_melody(&mut rng_for(seed, "melody"), &scale, &params),
        &fixtures::SEEDS,
    ));
}

#[test]
fn test_walking_bass_seed_sensitivity() {
    let symbols = fixtures::jazz_turnaround();
    assert!(verify_seed_sensitivity(
        |seed| {
            generate_bassline_from_symbols(&mut rng_for(seed, "bass"), &symbols, BassStyle::Walking, 4.0, 2)
                .unwrap()
        },
        &fixtures::SEEDS,
    ));
}

// ============================================================================
// Sketch
// ============================================================================

#[test]
fn test_sketch_determinism() {
    for (label, spec) in fixtures::standard_sketches() {
        let result = verify_determinism(|| generate_sketch(&spec).unwrap(), 3);
        assert!(result.is_deterministic, "{} sketch is not deterministic", label);
        assert_eq!(result.hash.len(), 64);
    }
}

#[test]
fn test_sketch_hash_stable_across_spec_roundtrip() {
    let (_, spec) = fixtures::standard_sketches().remove(2);
    let reparsed = SketchSpec::from_json(&spec.to_json_pretty().unwrap()).unwrap();

    let hashes: Vec<String> = [spec, reparsed]
        .iter()
        .map(|s| compute_hash(&serialize_output(&generate_sketch(s).unwrap())))
        .collect();
    assert!(verify_hash_determinism(&hashes));
}

#[test]
fn test_sketch_seed_changes_output() {
    let with_seed = |seed| SketchSpec {
        seed: Some(seed),
        ..SketchSpec::default()
    };
    let a = generate_sketch(&with_seed(1)).unwrap();
    let b = generate_sketch(&with_seed(2)).unwrap();

    assert_ne!(
        a.track(TrackKind::Melody).unwrap().notes,
        b.track(TrackKind::Melody).unwrap().notes
    );
}

#[test]
fn test_sketch_tracks_use_independent_streams() {
    let base = SketchSpec {
        seed: Some(42),
        genre: "trap".to_string(),
        ..SketchSpec::default()
    };
    let denser = SketchSpec {
        density: 0.95,
        ..base.clone()
    };

    let a = generate_sketch(&base).unwrap();
    let b = generate_sketch(&denser).unwrap();

    assert_eq!(a.track(TrackKind::Drums), b.track(TrackKind::Drums));
    assert_eq!(a.track(TrackKind::Bass), b.track(TrackKind::Bass));
}
