//! Sketch command implementation
//!
//! Loads an optional JSON sketch spec, applies flag overrides and prints the
//! generated multi-track sketch.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use scythe_generate::bass::BassStyle;
use scythe_generate::melody::{Contour, MelodyStyle};
use scythe_generate::sketch::{generate_sketch, SketchSpec, SongSketch};

use super::{print_json, resolve_seed};

/// Arguments for `scythe sketch`. Flags override values from `--spec`.
#[derive(Debug, Clone, Default, Args)]
pub struct SketchArgs {
    /// Path to a JSON sketch spec
    #[arg(long)]
    pub spec: Option<PathBuf>,

    /// Genre for the progression and drum kit
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Key root
    #[arg(short, long)]
    pub key: Option<String>,

    /// Scale type; names containing "minor" use minor harmony
    #[arg(long)]
    pub scale: Option<String>,

    /// Number of 4/4 bars
    #[arg(short, long)]
    pub bars: Option<u32>,

    /// Tempo in BPM
    #[arg(short, long)]
    pub tempo: Option<f64>,

    /// Random seed (drawn when neither flag nor spec gives one)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Bass style override (root, root_fifth, walking, synth, octave, 808)
    #[arg(long)]
    pub bass_style: Option<String>,

    /// Melody rhythmic style (straight, syncopated, varied)
    #[arg(long)]
    pub melody_style: Option<String>,

    /// Melody contour (arch, ascending, descending, wave, random)
    #[arg(long)]
    pub contour: Option<String>,

    /// Melody density (0.0 - 1.0)
    #[arg(long)]
    pub density: Option<f64>,

    /// Drum swing (0.0 - 1.0)
    #[arg(long)]
    pub swing: Option<f64>,
}

/// Reads the spec file (or the defaults) and layers the flags on top.
pub fn resolve_spec(args: &SketchArgs) -> Result<SketchSpec> {
    let mut spec = match &args.spec {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read sketch spec: {}", path.display()))?;
            SketchSpec::from_json(&json)
                .with_context(|| format!("Failed to parse sketch spec: {}", path.display()))?
        }
        None => SketchSpec::default(),
    };

    if let Some(genre) = &args.genre {
        spec.genre = genre.clone();
    }
    if let Some(key) = &args.key {
        spec.key = key.clone();
    }
    if let Some(scale) = &args.scale {
        spec.scale = scale.clone();
    }
    if let Some(bars) = args.bars {
        spec.bars = bars;
    }
    if let Some(tempo) = args.tempo {
        spec.tempo = tempo;
    }
    if let Some(style) = &args.bass_style {
        spec.bass_style = Some(BassStyle::from_name(style));
    }
    if let Some(style) = &args.melody_style {
        spec.melody_style = MelodyStyle::from_name(style);
    }
    if let Some(contour) = &args.contour {
        spec.contour = Contour::from_name(contour);
    }
    if let Some(density) = args.density {
        spec.density = density;
    }
    if let Some(swing) = args.swing {
        spec.swing = swing;
    }
    spec.seed = Some(resolve_seed(args.seed.or(spec.seed)));

    Ok(spec)
}

/// Generates the sketch described by `args`.
pub fn build(args: &SketchArgs) -> Result<SongSketch> {
    let spec = resolve_spec(args)?;
    Ok(generate_sketch(&spec)?)
}

/// Run the sketch command
pub fn run(args: &SketchArgs, pretty: bool) -> Result<ExitCode> {
    print_json(&build(args)?, pretty)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flags_override_defaults() {
        let args = SketchArgs {
            genre: Some("lofi".to_string()),
            bars: Some(8),
            seed: Some(5),
            bass_style: Some("walking".to_string()),
            ..SketchArgs::default()
        };
        let spec = resolve_spec(&args).unwrap();
        assert_eq!(spec.genre, "lofi");
        assert_eq!(spec.bars, 8);
        assert_eq!(spec.seed, Some(5));
        assert_eq!(spec.bass_style, Some(BassStyle::Walking));
        assert_eq!(spec.key, "C");
    }

    #[test]
    fn test_spec_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sketch.json");
        fs::write(&path, r#"{"genre":"rock","key":"E","bars":2,"seed":9}"#).unwrap();

        let args = SketchArgs {
            spec: Some(path),
            key: Some("A".to_string()),
            ..SketchArgs::default()
        };
        let spec = resolve_spec(&args).unwrap();

        assert_eq!(spec.genre, "rock");
        assert_eq!(spec.key, "A");
        assert_eq!(spec.bars, 2);
        assert_eq!(spec.seed, Some(9));
    }

    #[test]
    fn test_missing_spec_file() {
        let args = SketchArgs {
            spec: Some(PathBuf::from("/nonexistent/scythe/sketch.json")),
            ..SketchArgs::default()
        };
        let err = resolve_spec(&args).unwrap_err();
        assert!(err.to_string().contains("Failed to read sketch spec"));
    }

    #[test]
    fn test_build_reports_invalid_spec() {
        let args = SketchArgs {
            bars: Some(0),
            seed: Some(1),
            ..SketchArgs::default()
        };
        let err = build(&args).unwrap_err();
        assert_eq!(crate::commands::error_code(&err), Some("GENERATE_001"));
    }

    #[test]
    fn test_build_sketch() {
        let args = SketchArgs {
            seed: Some(21),
            ..SketchArgs::default()
        };
        let sketch = build(&args).unwrap();
        assert_eq!(sketch.seed, 21);
        assert_eq!(sketch.tracks.len(), 3);
    }
}
