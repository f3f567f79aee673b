//! Bass command implementation

use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use scythe_generate::bass::{
    generate_bassline_from_symbols, BassStyle, Bassline, DEFAULT_BASS_OCTAVE,
    DEFAULT_BEATS_PER_CHORD,
};
use scythe_theory::rng_for;

use super::{print_json, resolve_seed};

/// Arguments for `scythe bass`.
#[derive(Debug, Clone, Args)]
pub struct BassArgs {
    /// Chord symbols, one per segment (e.g. Cmaj7 Am7 Dm7 G7)
    #[arg(short, long, num_args = 1.., required = true)]
    pub chords: Vec<String>,

    /// Style (root, root_fifth, walking, synth, octave, 808)
    #[arg(short, long, default_value = "root_fifth")]
    pub style: String,

    /// Beats each chord lasts
    #[arg(long, default_value_t = DEFAULT_BEATS_PER_CHORD)]
    pub beats_per_chord: f64,

    /// Bass register octave
    #[arg(long, default_value_t = DEFAULT_BASS_OCTAVE, allow_negative_numbers = true)]
    pub octave: i32,

    /// Random seed (drawn when omitted)
    #[arg(long)]
    pub seed: Option<u32>,
}

/// JSON printed by `scythe bass`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BassOutput {
    pub seed: u32,
    #[serde(flatten)]
    pub bassline: Bassline,
}

/// Generates the bassline described by `args`.
pub fn build(args: &BassArgs) -> Result<BassOutput> {
    if !args.beats_per_chord.is_finite() || args.beats_per_chord <= 0.0 {
        bail!(
            "--beats-per-chord must be a positive number, got {}",
            args.beats_per_chord
        );
    }
    let seed = resolve_seed(args.seed);
    let bassline = generate_bassline_from_symbols(
        &mut rng_for(seed, "bass"),
        &args.chords,
        BassStyle::from_name(&args.style),
        args.beats_per_chord,
        args.octave,
    )?;
    Ok(BassOutput { seed, bassline })
}

/// Run the bass command
pub fn run(args: &BassArgs, pretty: bool) -> Result<ExitCode> {
    print_json(&build(args)?, pretty)?;
    Ok(ExitCode::SUCCESS)
}
