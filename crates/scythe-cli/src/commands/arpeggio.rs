//! Arpeggio command implementation

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use scythe_generate::melody::{generate_arpeggio, ArpPattern};
use scythe_theory::{parse_chord_symbol, rng_for};

use super::melody::MelodyOutput;
use super::{print_json, resolve_seed};

/// Arguments for `scythe arpeggio`.
#[derive(Debug, Clone, Args)]
pub struct ArpeggioArgs {
    /// Chord symbol to arpeggiate (e.g. Am7)
    #[arg(short, long)]
    pub chord: String,

    /// Number of 4/4 bars
    #[arg(short, long, default_value_t = 1)]
    pub bars: u32,

    /// Order of chord tones (up, down, up_down, random)
    #[arg(short, long, default_value = "up")]
    pub pattern: String,

    /// Length of each note in beats
    #[arg(long, default_value_t = 0.25)]
    pub note_length: f64,

    /// Octaves the pattern spans
    #[arg(long, default_value_t = 1)]
    pub octaves: u32,

    /// Octave of the chord root
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    pub octave: i32,

    /// Random seed (drawn when omitted)
    #[arg(long)]
    pub seed: Option<u32>,
}

/// Generates the arpeggio described by `args`.
pub fn build(args: &ArpeggioArgs) -> Result<MelodyOutput> {
    let chord = parse_chord_symbol(&args.chord)
        .with_context(|| format!("Failed to parse chord '{}'", args.chord))?
        .with_octave(args.octave);
    let seed = resolve_seed(args.seed);
    let melody = generate_arpeggio(
        &mut rng_for(seed, "arpeggio"),
        &chord,
        args.bars,
        ArpPattern::from_name(&args.pattern),
        args.note_length,
        args.octaves,
    );
    Ok(MelodyOutput { seed, melody })
}

/// Run the arpeggio command
pub fn run(args: &ArpeggioArgs, pretty: bool) -> Result<ExitCode> {
    print_json(&build(args)?, pretty)?;
    Ok(ExitCode::SUCCESS)
}
