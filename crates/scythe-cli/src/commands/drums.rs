//! Drums command implementation
//!
//! Generates a genre drum pattern and prints its flattened note list.

use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use scythe_generate::drums::{generate_drum_pattern, DrumMap, DrumParams};
use scythe_theory::rhythm::Note;
use scythe_theory::rng_for;

use super::{print_json, resolve_seed};

/// Arguments for `scythe drums`.
#[derive(Debug, Clone, Args)]
pub struct DrumsArgs {
    /// Genre (electronic, hiphop, lofi, trap, rock, chiptune, ...)
    #[arg(short, long, default_value = "electronic")]
    pub genre: String,

    /// Number of 4/4 bars
    #[arg(short, long, default_value_t = 4)]
    pub bars: u32,

    /// Tempo recorded on the pattern
    #[arg(long, default_value_t = 120.0)]
    pub bpm: f64,

    /// Variation label used in the pattern name
    #[arg(long, default_value = "basic")]
    pub variation: String,

    /// Swing amount (0.0 - 1.0)
    #[arg(long, default_value_t = 0.0)]
    pub swing: f64,

    /// Drum map for pitches (gm, 808)
    #[arg(long, default_value = "gm")]
    pub kit: String,

    /// Random seed (drawn when omitted)
    #[arg(long)]
    pub seed: Option<u32>,
}

/// JSON printed by `scythe drums`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrumsOutput {
    pub name: String,
    pub seed: u32,
    pub bpm: f64,
    pub swing: f64,
    pub length_beats: f64,
    pub instruments: Vec<String>,
    pub notes: Vec<Note>,
}

/// Generates the pattern described by `args`.
pub fn build(args: &DrumsArgs) -> Result<DrumsOutput> {
    if !(0.0..=1.0).contains(&args.swing) {
        bail!("--swing must be between 0.0 and 1.0, got {}", args.swing);
    }
    let Some(map) = DrumMap::by_name(&args.kit) else {
        bail!("unknown drum kit '{}' (expected gm or 808)", args.kit);
    };

    let seed = resolve_seed(args.seed);
    let params = DrumParams {
        genre: args.genre.clone(),
        bars: args.bars,
        bpm: args.bpm,
        variation: args.variation.clone(),
        swing: args.swing,
    };
    let pattern = generate_drum_pattern(&mut rng_for(seed, "drums"), &params);

    Ok(DrumsOutput {
        name: pattern.name.clone(),
        seed,
        bpm: pattern.bpm,
        swing: pattern.swing,
        length_beats: pattern.length_beats(),
        instruments: pattern.instruments().into_iter().map(String::from).collect(),
        notes: pattern.to_midi_notes(&map),
    })
}

/// Run the drums command
pub fn run(args: &DrumsArgs, pretty: bool) -> Result<ExitCode> {
    print_json(&build(args)?, pretty)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(genre: &str) -> DrumsArgs {
        DrumsArgs {
            genre: genre.to_string(),
            bars: 4,
            bpm: 120.0,
            variation: "basic".to_string(),
            swing: 0.0,
            kit: "gm".to_string(),
            seed: Some(3),
        }
    }

    #[test]
    fn test_build_electronic() {
        let out = build(&args("electronic")).unwrap();
        assert_eq!(out.name, "electronic_basic");
        assert_eq!(out.length_beats, 16.0);
        let kicks = out.notes.iter().filter(|n| n.pitch == 36).count();
        assert_eq!(kicks, 16);
        assert!(out.notes.windows(2).all(|w| w[0].start <= w[1].start));
    }

    #[test]
    fn test_build_808_kit() {
        let mut a = args("trap");
        a.kit = "808".to_string();
        let out = build(&a).unwrap();
        assert!(!out.notes.is_empty());
        assert_eq!(out.instruments, vec!["kick", "snare", "closed_hat"]);
    }

    #[test]
    fn test_build_rejects_bad_input() {
        let mut a = args("rock");
        a.kit = "tr909".to_string();
        assert!(build(&a).is_err());

        let mut a = args("rock");
        a.swing = 2.0;
        assert!(build(&a).is_err());
    }
}
