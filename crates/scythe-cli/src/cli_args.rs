//! CLI argument definitions for the Scythe command-line interface.
//!
//! The top-level `#[derive(Parser)]` and `#[derive(Subcommand)]` types live
//! here, keeping `main.rs` focused on dispatch. Per-command argument structs
//! are defined next to their command implementations.

use clap::{Parser, Subcommand};

use scythe_cli::commands::arpeggio::ArpeggioArgs;
use scythe_cli::commands::bass::BassArgs;
use scythe_cli::commands::drums::DrumsArgs;
use scythe_cli::commands::melody::MelodyArgs;
use scythe_cli::commands::progression::ProgressionArgs;
use scythe_cli::commands::sketch::SketchArgs;
use scythe_cli::commands::theory::TheoryCommand;

/// Scythe - Procedural Music Composition
#[derive(Parser)]
#[command(name = "scythe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Pretty-print the output JSON
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log generator decisions at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate a genre drum pattern
    Drums(DrumsArgs),

    /// Generate a bassline under a chord sequence
    Bass(BassArgs),

    /// Generate a melody over a scale
    Melody(MelodyArgs),

    /// Arpeggiate a chord
    Arpeggio(ArpeggioArgs),

    /// Resolve a genre progression in a key
    Progression(ProgressionArgs),

    /// Generate a drums + bass + melody song sketch
    Sketch(SketchArgs),

    /// Scale, chord and rhythm lookups
    Theory {
        #[command(subcommand)]
        command: TheoryCommand,
    },
}
