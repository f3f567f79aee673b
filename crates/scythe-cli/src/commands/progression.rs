//! Progression command implementation
//!
//! Resolves a genre progression in a key, or lists the progression table.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use scythe_theory::progression::{genres, get_progression, styles, Mode};
use scythe_theory::{ChordType, NoteName};

use super::print_json;

/// Arguments for `scythe progression`.
#[derive(Debug, Clone, Args)]
pub struct ProgressionArgs {
    /// Key root
    #[arg(short, long, default_value = "C")]
    pub key: String,

    /// Key mode (major, minor)
    #[arg(short, long, default_value = "major")]
    pub mode: String,

    /// Genre table to draw from
    #[arg(short, long, default_value = "pop")]
    pub genre: String,

    /// Named style within the genre (default: the genre's first style)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Octave chords are built at
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    pub octave: i32,

    /// Choose inversions that minimize movement between chords
    #[arg(long)]
    pub voice_lead: bool,

    /// List genres and their styles instead of resolving
    #[arg(long)]
    pub list: bool,
}

/// One resolved chord.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChordOutput {
    pub symbol: String,
    pub name: String,
    pub chord_type: ChordType,
    pub inversion: usize,
    pub notes: Vec<i32>,
}

/// JSON printed by `scythe progression`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressionOutput {
    pub key: NoteName,
    pub mode: Mode,
    pub genre: String,
    pub chords: Vec<ChordOutput>,
}

/// One genre and its styles, in definition order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreListing {
    pub genre: &'static str,
    pub styles: Vec<&'static str>,
}

/// Resolves the progression described by `args`.
pub fn build(args: &ProgressionArgs) -> Result<ProgressionOutput> {
    let key = NoteName::parse(&args.key).with_context(|| format!("Invalid key '{}'", args.key))?;
    let mode = Mode::from_name(&args.mode);
    let progression = get_progression(key, &args.genre, args.style.as_deref(), mode);

    let chords = if args.voice_lead {
        progression.with_voice_leading(args.octave)
    } else {
        progression.resolve(args.octave)
    };

    let chords = progression
        .chords
        .iter()
        .zip(chords)
        .map(|(symbol, chord)| ChordOutput {
            symbol: symbol.clone(),
            name: chord.name(),
            chord_type: chord.chord_type,
            inversion: chord.inversion,
            notes: chord.notes(),
        })
        .collect();

    Ok(ProgressionOutput {
        key,
        mode,
        genre: args.genre.to_lowercase(),
        chords,
    })
}

/// The full progression table.
pub fn listing() -> Vec<GenreListing> {
    genres()
        .into_iter()
        .map(|genre| GenreListing {
            genre,
            styles: styles(genre).unwrap_or_default(),
        })
        .collect()
}

/// Run the progression command
pub fn run(args: &ProgressionArgs, pretty: bool) -> Result<ExitCode> {
    if args.list {
        print_json(&listing(), pretty)?;
    } else {
        print_json(&build(args)?, pretty)?;
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(genre: &str, style: Option<&str>) -> ProgressionArgs {
        ProgressionArgs {
            key: "C".to_string(),
            mode: "major".to_string(),
            genre: genre.to_string(),
            style: style.map(String::from),
            octave: 4,
            voice_lead: false,
            list: false,
        }
    }

    #[test]
    fn test_build_jazz() {
        let out = build(&args("jazz", Some("ii_v_i"))).unwrap();
        let names: Vec<&str> = out.chords.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Dm7", "G7", "Cmaj7"]);
        assert_eq!(out.chords[2].notes, vec![60, 64, 67, 71]);
        assert_eq!(out.chords[0].symbol, "ii7");
    }

    #[test]
    fn test_build_voice_lead_keeps_first_chord() {
        let mut a = args("pop", Some("axis"));
        a.voice_lead = true;
        let out = build(&a).unwrap();
        assert_eq!(out.chords[0].inversion, 0);
        assert_eq!(out.chords[0].notes, vec![60, 64, 67]);
        assert_eq!(out.chords.len(), 4);
    }

    #[test]
    fn test_listing_covers_every_genre() {
        let list = listing();
        assert_eq!(list.len(), genres().len());
        assert_eq!(list[0].genre, "pop");
        assert_eq!(list[0].styles[0], "axis");
        assert!(list.iter().all(|g| !g.styles.is_empty()));
    }
}
