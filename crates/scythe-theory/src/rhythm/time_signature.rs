//! Time signatures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// Time signatures with a name in the common table.
pub const COMMON_TIME_SIGNATURES: [&str; 10] = [
    "4/4", "3/4", "2/4", "6/8", "12/8", "5/4", "7/4", "7/8", "9/8", "11/8",
];

/// A meter such as 4/4 or 6/8. Serialized as `"N/D"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSignature {
    pub numerator: u32,
    pub denominator: u32,
}

impl TimeSignature {
    pub const COMMON_TIME: TimeSignature = TimeSignature {
        numerator: 4,
        denominator: 4,
    };

    /// Returns `None` when either part is zero.
    pub fn new(numerator: u32, denominator: u32) -> Option<TimeSignature> {
        (numerator > 0 && denominator > 0).then_some(TimeSignature {
            numerator,
            denominator,
        })
    }

    /// Length of one bar in quarter-note beats.
    pub fn beats_per_bar(&self) -> f64 {
        self.numerator as f64 * 4.0 / self.denominator as f64
    }

    /// Whether this signature appears in [`COMMON_TIME_SIGNATURES`].
    pub fn is_common(&self) -> bool {
        let text = self.to_string();
        COMMON_TIME_SIGNATURES.contains(&text.as_str())
    }
}

impl Default for TimeSignature {
    fn default() -> Self {
        TimeSignature::COMMON_TIME
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for TimeSignature {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TheoryError::InvalidTimeSignature {
            text: s.to_string(),
        };
        let (num, den) = s.trim().split_once('/').ok_or_else(invalid)?;
        let numerator = num.trim().parse::<u32>().map_err(|_| invalid())?;
        let denominator = den.trim().parse::<u32>().map_err(|_| invalid())?;
        TimeSignature::new(numerator, denominator).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimeSignature {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSignature> for String {
    fn from(value: TimeSignature) -> Self {
        value.to_string()
    }
}
