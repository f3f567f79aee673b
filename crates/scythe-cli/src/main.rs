//! Scythe CLI - Command-line interface for procedural music generation
//!
//! Every command prints JSON note data to stdout. Logs and errors go to
//! stderr.

use clap::Parser;
use std::process::ExitCode;

use scythe_cli::{commands, logging};

mod cli_args;
use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let pretty = cli.pretty;
    let result = match &cli.command {
        Commands::Drums(args) => commands::drums::run(args, pretty),
        Commands::Bass(args) => commands::bass::run(args, pretty),
        Commands::Melody(args) => commands::melody::run(args, pretty),
        Commands::Arpeggio(args) => commands::arpeggio::run(args, pretty),
        Commands::Progression(args) => commands::progression::run(args, pretty),
        Commands::Sketch(args) => commands::sketch::run(args, pretty),
        Commands::Theory { command } => commands::theory::run(command, pretty),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            commands::report_error(&e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scythe_cli::commands::theory::TheoryCommand;

    #[test]
    fn test_cli_parses_drums_defaults() {
        let cli = Cli::try_parse_from(["scythe", "drums"]).unwrap();
        assert!(!cli.pretty);
        match cli.command {
            Commands::Drums(args) => {
                assert_eq!(args.genre, "electronic");
                assert_eq!(args.bars, 4);
                assert_eq!(args.kit, "gm");
                assert_eq!(args.seed, None);
            }
            _ => panic!("expected drums command"),
        }
    }

    #[test]
    fn test_cli_parses_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["scythe", "melody", "--key", "Eb", "--pretty", "-v"]).unwrap();
        assert!(cli.pretty);
        assert!(cli.verbose);
        match cli.command {
            Commands::Melody(args) => assert_eq!(args.key, "Eb"),
            _ => panic!("expected melody command"),
        }
    }

    #[test]
    fn test_cli_parses_bass_chords() {
        let cli = Cli::try_parse_from([
            "scythe", "bass", "--chords", "Cmaj7", "Am7", "Dm7", "G7", "--style", "walking",
        ])
        .unwrap();
        match cli.command {
            Commands::Bass(args) => {
                assert_eq!(args.chords, vec!["Cmaj7", "Am7", "Dm7", "G7"]);
                assert_eq!(args.style, "walking");
                assert_eq!(args.beats_per_chord, 4.0);
            }
            _ => panic!("expected bass command"),
        }
    }

    #[test]
    fn test_cli_requires_chords_for_bass() {
        assert!(Cli::try_parse_from(["scythe", "bass"]).is_err());
    }

    #[test]
    fn test_cli_parses_sketch_overrides() {
        let cli = Cli::try_parse_from([
            "scythe", "sketch", "--spec", "song.json", "--bars", "8", "--seed", "42",
        ])
        .unwrap();
        match cli.command {
            Commands::Sketch(args) => {
                assert_eq!(args.spec.as_deref(), Some(std::path::Path::new("song.json")));
                assert_eq!(args.bars, Some(8));
                assert_eq!(args.seed, Some(42));
                assert_eq!(args.genre, None);
            }
            _ => panic!("expected sketch command"),
        }
    }

    #[test]
    fn test_cli_parses_theory_chord() {
        let cli = Cli::try_parse_from([
            "scythe", "theory", "chord", "Dm7", "--voicing", "shell", "--octave", "-1",
        ])
        .unwrap();
        match cli.command {
            Commands::Theory {
                command: TheoryCommand::Chord(args),
            } => {
                assert_eq!(args.symbol, "Dm7");
                assert_eq!(args.voicing.as_deref(), Some("shell"));
                assert_eq!(args.octave, -1);
            }
            _ => panic!("expected theory chord command"),
        }
    }

    #[test]
    fn test_cli_parses_progression_voice_lead() {
        let cli = Cli::try_parse_from([
            "scythe", "progression", "--genre", "jazz", "--style", "ii_v_i", "--voice-lead",
        ])
        .unwrap();
        match cli.command {
            Commands::Progression(args) => {
                assert_eq!(args.style.as_deref(), Some("ii_v_i"));
                assert!(args.voice_lead);
            }
            _ => panic!("expected progression command"),
        }
    }
}
