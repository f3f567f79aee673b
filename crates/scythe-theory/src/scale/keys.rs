//! Relative and parallel key relations.

use crate::pitch::NoteName;

/// Relative minor of a major key (three semitones down).
pub fn relative_minor(major_root: NoteName) -> NoteName {
    major_root.transpose(-3)
}

/// Relative major of a minor key (three semitones up).
pub fn relative_major(minor_root: NoteName) -> NoteName {
    minor_root.transpose(3)
}

/// Parallel minor of a major key: the same root with a minor scale.
pub fn parallel_minor(major_root: NoteName) -> NoteName {
    major_root
}
