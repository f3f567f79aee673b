//! Theory command implementations
//!
//! Prints scale, chord and named-rhythm data without any randomness.

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use scythe_theory::chord::{voiced_pitches, VoicingStyle};
use scythe_theory::rhythm::get_common_rhythm;
use scythe_theory::{get_scale, parse_chord_symbol, ChordType, NoteName, Rhythm, ScaleType};

use super::print_json;

/// Theory lookups.
#[derive(Debug, Clone, Subcommand)]
pub enum TheoryCommand {
    /// Print a scale's intervals, pitches and note names
    Scale(ScaleArgs),
    /// Print a chord's pitches and note names
    Chord(ChordArgs),
    /// Print a named rhythm (four_on_floor, backbeat, boom_bap, reggae_one_drop, disco)
    Rhythm(RhythmArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ScaleArgs {
    /// Root note
    pub root: String,

    /// Scale type (major, minor, dorian, blues, ...)
    #[arg(default_value = "major")]
    pub scale_type: String,

    /// Octave of the root
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    pub octave: i32,

    /// Number of octaves to list
    #[arg(long, default_value_t = 1)]
    pub octaves: usize,
}

#[derive(Debug, Clone, Args)]
pub struct ChordArgs {
    /// Chord symbol (e.g. Cmaj7, F#m, Bbdim7)
    pub symbol: String,

    /// Octave of the root
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    pub octave: i32,

    /// Number of lowest voices raised an octave
    #[arg(long, default_value_t = 0)]
    pub inversion: usize,

    /// Bass note for a slash chord (overrides --inversion)
    #[arg(long)]
    pub bass: Option<String>,

    /// Voicing preset (open, closed, drop2, shell)
    #[arg(long)]
    pub voicing: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct RhythmArgs {
    /// Rhythm name
    #[arg(default_value = "four_on_floor")]
    pub name: String,

    /// Number of 4/4 bars
    #[arg(short, long, default_value_t = 1)]
    pub bars: u32,

    /// Pitch for every hit
    #[arg(long, default_value_t = 36)]
    pub pitch: i32,

    /// Velocity for every hit
    #[arg(long, default_value_t = 100)]
    pub velocity: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleOutput {
    pub root: NoteName,
    pub scale_type: ScaleType,
    pub intervals: Vec<i32>,
    pub notes: Vec<i32>,
    pub note_names: Vec<NoteName>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChordOutput {
    pub name: String,
    pub chord_type: ChordType,
    pub intervals: Vec<i32>,
    pub notes: Vec<i32>,
    pub note_names: Vec<NoteName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voiced: Option<Vec<i32>>,
}

pub fn scale(args: &ScaleArgs) -> Result<ScaleOutput> {
    let scale = get_scale(&args.root, &args.scale_type, args.octave)
        .with_context(|| format!("Invalid scale root '{}'", args.root))?;
    Ok(ScaleOutput {
        root: scale.root,
        scale_type: scale.scale_type,
        intervals: scale.intervals().to_vec(),
        notes: scale.notes(args.octaves),
        note_names: scale.note_names(),
    })
}

pub fn chord(args: &ChordArgs) -> Result<ChordOutput> {
    let mut chord = parse_chord_symbol(&args.symbol)
        .with_context(|| format!("Failed to parse chord '{}'", args.symbol))?
        .with_octave(args.octave)
        .with_inversion(args.inversion);
    if let Some(bass) = &args.bass {
        let bass = NoteName::parse(bass).with_context(|| format!("Invalid bass note '{}'", bass))?;
        chord = chord.with_bass(bass);
    }

    let voiced = match &args.voicing {
        Some(name) => {
            let Some(style) = VoicingStyle::lookup(name) else {
                bail!("unknown voicing '{}' (expected open, closed, drop2 or shell)", name);
            };
            let pitches = voiced_pitches(&chord, style);
            if pitches.is_none() {
                bail!("no {} voicing for {} chords", style.name(), chord.chord_type);
            }
            pitches
        }
        None => None,
    };

    Ok(ChordOutput {
        name: chord.name(),
        chord_type: chord.chord_type,
        intervals: chord.intervals().to_vec(),
        notes: chord.notes(),
        note_names: chord.note_names(),
        voiced,
    })
}

pub fn rhythm(args: &RhythmArgs) -> Rhythm {
    get_common_rhythm(&args.name, args.bars, args.pitch, args.velocity)
}

/// Run a theory subcommand
pub fn run(command: &TheoryCommand, pretty: bool) -> Result<ExitCode> {
    match command {
        TheoryCommand::Scale(args) => print_json(&scale(args)?, pretty)?,
        TheoryCommand::Chord(args) => print_json(&chord(args)?, pretty)?,
        TheoryCommand::Rhythm(args) => print_json(&rhythm(args), pretty)?,
    }
    Ok(ExitCode::SUCCESS)
}
