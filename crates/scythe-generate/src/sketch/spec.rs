//! Song sketch configuration.

use serde::{Deserialize, Serialize};

use scythe_theory::NoteName;

use crate::bass::BassStyle;
use crate::error::GenerateError;
use crate::melody::{Contour, MelodyStyle};

/// Longest sketch accepted by [`SketchSpec::validate`], in bars.
pub const MAX_SKETCH_BARS: u32 = 1024;

/// Parameters for a multi-track song sketch.
///
/// Every field has a default, so `{}` is a valid sketch: four bars of
/// electronic music in C minor at 120 BPM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SketchSpec {
    /// Genre name used for the progression table and the drum kit.
    pub genre: String,
    /// Root note name (`C`, `F#`, `Bb`).
    pub key: String,
    /// Scale name; names containing `minor` select minor-mode harmony.
    pub scale: String,
    pub bars: u32,
    pub tempo: f64,
    /// Seed for every track; `None` means seed 0 unless the caller draws one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Overrides the genre's bass style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bass_style: Option<BassStyle>,
    pub melody_style: MelodyStyle,
    pub contour: Contour,
    pub density: f64,
    pub swing: f64,
}

impl Default for SketchSpec {
    fn default() -> Self {
        Self {
            genre: "electronic".to_string(),
            key: "C".to_string(),
            scale: "minor".to_string(),
            bars: 4,
            tempo: 120.0,
            seed: None,
            bass_style: None,
            melody_style: MelodyStyle::Syncopated,
            contour: Contour::Arch,
            density: 0.5,
            swing: 0.0,
        }
    }
}

impl SketchSpec {
    /// Parses a sketch from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GenerateError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the sketch to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, GenerateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects structurally invalid values.
    ///
    /// Unknown genre, scale and style names are not errors; they fall back
    /// to defaults during generation.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.bars == 0 || self.bars > MAX_SKETCH_BARS {
            return Err(GenerateError::invalid_spec(
                "bars",
                format!("must be between 1 and {}, got {}", MAX_SKETCH_BARS, self.bars),
            ));
        }
        if !self.tempo.is_finite() || self.tempo <= 0.0 {
            return Err(GenerateError::invalid_spec(
                "tempo",
                format!("must be a positive number, got {}", self.tempo),
            ));
        }
        check_unit("density", self.density)?;
        check_unit("swing", self.swing)?;
        NoteName::parse(&self.key)?;
        Ok(())
    }

    /// Whether the scale name selects minor-mode harmony.
    pub fn is_minor(&self) -> bool {
        self.scale.to_lowercase().contains("minor")
    }
}

fn check_unit(field: &'static str, value: f64) -> Result<(), GenerateError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GenerateError::invalid_spec(
            field,
            format!("must be between 0.0 and 1.0, got {}", value),
        ))
    }
}
