//! Determinism testing framework for Scythe.
//!
//! Generator output is serialized to JSON and hashed with BLAKE3. Two runs
//! are identical when their serialized bytes are identical, which covers
//! pitches, float timings and velocities at once.
//!
//! # Example
//!
//! ```rust,ignore
//! use scythe_tests::determinism::{verify_determinism, verify_seed_sensitivity};
//!
//! let result = verify_determinism(|| generate_melody(&mut rng_for(7, "melody"), &scale, &params), 3);
//! assert!(result.is_deterministic);
//!
//! assert!(verify_seed_sensitivity(|seed| drums_for(seed), &[1, 2, 3]));
//! ```

pub mod core;
#[macro_use]
pub mod macros;


pub use self::core::{
    compute_hash, serialize_output, verify_determinism, verify_hash_determinism,
    verify_seed_sensitivity, DeterminismResult, DiffInfo,
};
