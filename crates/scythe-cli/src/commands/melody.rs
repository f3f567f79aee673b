//! Melody command implementation

use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use scythe_generate::melody::{generate_melody_in_key, Contour, Melody, MelodyParams, MelodyStyle};
use scythe_theory::rng_for;

use super::{print_json, resolve_seed};

/// Arguments for `scythe melody`.
#[derive(Debug, Clone, Args)]
pub struct MelodyArgs {
    /// Root note of the scale
    #[arg(short, long, default_value = "C")]
    pub key: String,

    /// Scale type (major, minor, dorian, blues, ...)
    #[arg(long, default_value = "minor")]
    pub scale: String,

    /// Number of 4/4 bars
    #[arg(short, long, default_value_t = 4)]
    pub bars: u32,

    /// Rhythmic style (straight, syncopated, varied)
    #[arg(short, long, default_value = "varied")]
    pub style: String,

    /// Melodic contour (arch, ascending, descending, wave, random)
    #[arg(long, default_value = "arch")]
    pub contour: String,

    /// Note density (0.0 sparse - 1.0 dense)
    #[arg(long, default_value_t = 0.5)]
    pub density: f64,

    /// Octave of the scale root
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    pub octave: i32,

    /// Random seed (drawn when omitted)
    #[arg(long)]
    pub seed: Option<u32>,
}

/// JSON printed by `scythe melody` and `scythe arpeggio`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MelodyOutput {
    pub seed: u32,
    #[serde(flatten)]
    pub melody: Melody,
}

/// Generates the melody described by `args`.
pub fn build(args: &MelodyArgs) -> Result<MelodyOutput> {
    if !(0.0..=1.0).contains(&args.density) {
        bail!("--density must be between 0.0 and 1.0, got {}", args.density);
    }
    let seed = resolve_seed(args.seed);
    let params = MelodyParams {
        bars: args.bars,
        style: MelodyStyle::from_name(&args.style),
        contour: Contour::from_name(&args.contour),
        density: args.density,
        ..MelodyParams::default()
    };
    let melody = generate_melody_in_key(
        &mut rng_for(seed, "melody"),
        &args.key,
        &args.scale,
        args.octave,
        &params,
    )?;
    Ok(MelodyOutput { seed, melody })
}

/// Run the melody command
pub fn run(args: &MelodyArgs, pretty: bool) -> Result<ExitCode> {
    print_json(&build(args)?, pretty)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args() -> MelodyArgs {
        MelodyArgs {
            key: "D".to_string(),
            scale: "dorian".to_string(),
            bars: 2,
            style: "straight".to_string(),
            contour: "wave".to_string(),
            density: 0.9,
            octave: 5,
            seed: Some(8),
        }
    }

    #[test]
    fn test_build_straight_melody() {
        let out = build(&args()).unwrap();
        assert_eq!(out.melody.notes.len(), 8);
        assert_eq!(out.melody.length_beats, 8.0);
        assert!(out.melody.notes.iter().all(|n| out.melody.scale.contains(n.pitch)));
    }

    #[test]
    fn test_build_is_seeded() {
        assert_eq!(build(&args()).unwrap(), build(&args()).unwrap());
    }

    #[test]
    fn test_build_rejects_bad_input() {
        let mut a = args();
        a.density = -0.5;
        assert!(build(&a).is_err());

        let mut a = args();
        a.key = "Z".to_string();
        assert!(build(&a).is_err());
    }
}
