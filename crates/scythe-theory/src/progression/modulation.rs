//! Key modulation helpers. Results are sharp-spelled.

use crate::pitch::NoteName;
use crate::scale::{relative_major, relative_minor};

pub fn modulate_up_half_step(key: NoteName) -> NoteName {
    key.transpose(1)
}

pub fn modulate_to_relative_minor(major_key: NoteName) -> NoteName {
    relative_minor(major_key)
}

pub fn modulate_to_relative_major(minor_key: NoteName) -> NoteName {
    relative_major(minor_key)
}

/// Moves `steps` fifths clockwise; negative steps move counter-clockwise.
pub fn modulate_circle_of_fifths(key: NoteName, steps: i32) -> NoteName {
    key.transpose(7 * steps)
}
