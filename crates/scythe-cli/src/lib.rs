//! Scythe CLI library.
//!
//! Argument types, command implementations and logging setup for the
//! `scythe` binary. Every command prints JSON to stdout; diagnostics go to
//! stderr.

pub mod commands;
pub mod logging;
