//! CLI command implementations

pub mod arpeggio;
pub mod bass;
pub mod drums;
pub mod melody;
pub mod progression;
pub mod sketch;
pub mod theory;

mod reporting;

pub use reporting::{error_code, print_json, report_error, resolve_seed};
