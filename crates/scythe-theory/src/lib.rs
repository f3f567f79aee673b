//! Scythe Theory - music theory core for procedural composition
//!
//! This crate models the harmonic and rhythmic vocabulary the Scythe
//! generators work with. Everything here is an immutable value type built
//! fresh per call; lookup tables are static.
//!
//! # Module Structure
//!
//! - [`pitch`]: note names and numeric pitch conversion (C4 = 60)
//! - [`scale`]: scale interval tables and scale-degree arithmetic
//! - [`chord`]: chord types, chord symbols, inversions and voice leading
//! - [`progression`]: Roman-numeral progressions and the genre table
//! - [`rhythm`]: the [`rhythm::Note`] event, swing, humanize and patterns
//! - [`rng`]: seeded random streams
//!
//! # Example
//!
//! ```
//! use scythe_theory::pitch::NoteName;
//! use scythe_theory::progression::{get_progression, Mode};
//!
//! let key = NoteName::parse("C").unwrap();
//! let progression = get_progression(key, "pop", Some("axis"), Mode::Major);
//! let names: Vec<String> = progression.resolve(4).iter().map(|c| c.name()).collect();
//! assert_eq!(names, vec!["C", "G", "Am", "F"]);
//! ```

pub mod chord;
pub mod error;
pub mod pitch;
pub mod progression;
pub mod rhythm;
pub mod rng;
pub mod scale;

pub use chord::{parse_chord_symbol, voice_lead, Chord, ChordType};
pub use error::{EngineError, TheoryError};
pub use pitch::{note_to_pitch, pitch_to_note, NoteName};
pub use progression::{get_progression, Mode, Progression};
pub use rhythm::{Note, Rhythm, TimeSignature};
pub use rng::rng_for;
pub use scale::{get_scale, Scale, ScaleType};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
