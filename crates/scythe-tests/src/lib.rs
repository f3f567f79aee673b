//! Scythe End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the generation pipeline:
//!
//! - Generation: parameters -> note lists with known shapes
//! - **Determinism**: a fixed seed reproduces identical serialized output
//! - Properties: theory invariants checked with `proptest`
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p scythe-tests
//! ```
//!
//! ## Determinism Testing
//!
//! ```rust,ignore
//! use scythe_tests::determinism::verify_determinism;
//!
//! let result = verify_determinism(|| generate_sketch(&spec).unwrap(), 3);
//! result.assert_deterministic();
//! ```

pub mod determinism;
pub mod fixtures;

pub use determinism::{
    compute_hash, verify_determinism, verify_hash_determinism, verify_seed_sensitivity,
    DeterminismResult, DiffInfo,
};
