//! Melodic contours and the scale-degree walk that realizes them.

use rand::Rng;
use serde::{Deserialize, Serialize};

use scythe_theory::Scale;

/// Weighted toward "no change".
const RANDOM_STEPS: [i32; 4] = [-1, 0, 0, 1];

/// Overall melodic shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Contour {
    #[default]
    Arch,
    Descending,
    Ascending,
    Wave,
    Random,
}

impl Contour {
    pub const ALL: [Contour; 5] = [
        Contour::Arch,
        Contour::Descending,
        Contour::Ascending,
        Contour::Wave,
        Contour::Random,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Contour::Arch => "arch",
            Contour::Descending => "descending",
            Contour::Ascending => "ascending",
            Contour::Wave => "wave",
            Contour::Random => "random",
        }
    }

    /// Unrecognized names produce a random contour.
    pub fn from_name(name: &str) -> Contour {
        let lower = name.to_lowercase();
        Contour::ALL
            .iter()
            .copied()
            .find(|c| c.name() == lower)
            .unwrap_or_else(|| {
                tracing::warn!(contour = name, "unknown contour, using random");
                Contour::Random
            })
    }
}

/// Directional steps, one per note.
pub fn generate_contour<R: Rng + ?Sized>(rng: &mut R, length: usize, contour: Contour) -> Vec<i32> {
    match contour {
        Contour::Arch => {
            let mid = length / 2;
            (0..length).map(|i| if i < mid { 1 } else { -1 }).collect()
        }
        Contour::Descending => vec![-1; length],
        Contour::Ascending => vec![1; length],
        Contour::Wave => (0..length).map(|i| if i % 4 < 2 { 1 } else { -1 }).collect(),
        Contour::Random => (0..length)
            .map(|_| RANDOM_STEPS[rng.gen_range(0..RANDOM_STEPS.len())])
            .collect(),
    }
}

/// Walks scale degrees along `contour`, returning one pitch per step.
///
/// Steps of magnitude 2 become a random leap of 2 or 3 degrees in the same
/// direction. After every step the degree is folded by whole cardinalities
/// into `[1 + card * low, card * (1 + high)]` where `(low, high)` is
/// `octave_range`.
pub fn apply_contour<R: Rng + ?Sized>(
    rng: &mut R,
    scale: &Scale,
    contour: &[i32],
    start_degree: i32,
    octave_range: (i32, i32),
) -> Vec<i32> {
    let card = scale.cardinality() as i32;
    let (low, high) = if octave_range.0 <= octave_range.1 {
        octave_range
    } else {
        (octave_range.1, octave_range.0)
    };
    let floor = 1 + card * low;
    let ceiling = card * (1 + high);

    let mut degree = start_degree;
    contour
        .iter()
        .map(|&direction| {
            let step = if direction.abs() == 2 {
                direction.signum() * rng.gen_range(2..=3)
            } else {
                direction
            };
            degree += step;
            while degree > ceiling {
                degree -= card;
            }
            while degree < floor {
                degree += card;
            }
            scale.degree_to_pitch(degree, 0)
        })
        .collect()
}
