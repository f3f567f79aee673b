//! Shared output helpers for commands.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use tracing::info;

use scythe_generate::GenerateError;
use scythe_theory::{EngineError, TheoryError};

/// Prints `value` as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// Returns `seed`, or draws and logs a fresh one.
pub fn resolve_seed(seed: Option<u32>) -> u32 {
    match seed {
        Some(seed) => seed,
        None => {
            let seed = rand::random();
            info!(seed, "no seed given, drew one");
            seed
        }
    }
}

/// Engine error code of the first engine error in the cause chain.
pub fn error_code(err: &anyhow::Error) -> Option<&'static str> {
    err.chain().find_map(|cause| {
        cause
            .downcast_ref::<GenerateError>()
            .map(|e| e.code())
            .or_else(|| cause.downcast_ref::<TheoryError>().map(|e| e.code()))
    })
}

/// Prints a one-line coloured error to stderr.
pub fn report_error(err: &anyhow::Error) {
    let label = match error_code(err) {
        Some(code) => format!("error[{}]:", code),
        None => "error:".to_string(),
    };
    eprintln!("{} {:#}", label.red().bold(), err);
}
