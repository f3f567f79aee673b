//! Scythe Generate - seeded drum, bass, melody and song sketch generation
//!
//! Generators turn theory values from `scythe-theory` into note lists. Each
//! takes the random source explicitly, so a fixed seed always produces the
//! same notes.
//!
//! # Determinism
//!
//! Generators accept any `R: rand::Rng + ?Sized`. Production callers seed a
//! PCG32 stream through [`scythe_theory::rng_for`]; [`sketch::generate_sketch`]
//! gives each track its own stream derived from the sketch seed.
//!
//! # Module Structure
//!
//! - [`drums`]: genre drum patterns and drum maps
//! - [`bass`]: basslines in six styles
//! - [`melody`]: contour-driven melodies and arpeggios
//! - [`sketch`]: drums + bass + melody from one JSON-configurable spec
//!
//! # Example
//!
//! ```
//! use scythe_generate::drums::{generate_drum_pattern, DrumParams};
//! use scythe_theory::rng_for;
//!
//! let pattern = generate_drum_pattern(&mut rng_for(42, "drums"), &DrumParams::default());
//! assert_eq!(pattern.track("kick").map(|k| k.len()), Some(16));
//! ```

pub mod bass;
pub mod drums;
pub mod error;
pub mod melody;
pub mod sketch;

pub use bass::{generate_bassline, BassStyle, Bassline};
pub use drums::{generate_drum_pattern, DrumMap, DrumParams, DrumPattern};
pub use error::GenerateError;
pub use melody::{generate_arpeggio, generate_melody, ArpPattern, Contour, Melody, MelodyParams, MelodyStyle};
pub use sketch::{generate_sketch, SketchSpec, SongSketch};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
