//! Chord symbol parsing (e.g., "Cmaj7", "Dm", "F#m7b5").

use super::types::ChordType;
use super::Chord;
use crate::error::TheoryError;
use crate::pitch::NoteName;

/// Parse a chord symbol into a root-position chord at octave 4.
///
/// The root is the first character, plus a second one when it is `#` or `b`.
/// The remainder is classified by [`classify_suffix`]. Empty input yields
/// C major. An unparseable root is reported as [`TheoryError::InvalidNote`].
///
/// # Examples
/// ```
/// use scythe_theory::chord::{parse_chord_symbol, ChordType};
///
/// let chord = parse_chord_symbol("Cmaj7").unwrap();
/// assert_eq!(chord.chord_type, ChordType::Maj7);
/// assert_eq!(chord.notes(), vec![60, 64, 67, 71]);
/// ```
pub fn parse_chord_symbol(text: &str) -> Result<Chord, TheoryError> {
    let symbol = text.trim();
    if symbol.is_empty() {
        return Ok(Chord::default());
    }

    let mut root_len = symbol.chars().next().map(char::len_utf8).unwrap_or(1);
    if let Some(second) = symbol[root_len..].chars().next() {
        if second == '#' || second == 'b' {
            root_len += 1;
        }
    }

    let root = NoteName::parse(&symbol[..root_len])?;
    let chord_type = classify_suffix(&symbol[root_len..]);
    Ok(Chord::new(root, chord_type))
}

/// Classify a chord-type suffix.
///
/// Tried in order: exact table key, alias, then the same two on the
/// lowercased text, then a minor-prefix heuristic (a leading `m` that is not
/// `maj` is rewritten as `min…` or `m…`). Anything else is major.
pub fn classify_suffix(suffix: &str) -> ChordType {
    if suffix.is_empty() {
        return ChordType::Major;
    }
    if let Some(ty) = ChordType::lookup(suffix).or_else(|| ChordType::alias(suffix)) {
        return ty;
    }

    let lower = suffix.to_lowercase();
    if let Some(ty) = ChordType::lookup(&lower).or_else(|| ChordType::alias(&lower)) {
        return ty;
    }

    if lower.starts_with('m') && !lower.starts_with("maj") {
        if lower == "min" {
            return ChordType::Minor;
        }
        let rest = &lower[1..];
        if let Some(ty) = ChordType::lookup(&format!("min{}", rest))
            .or_else(|| ChordType::lookup(&format!("m{}", rest)))
        {
            return ty;
        }
    }

    tracing::warn!(suffix, "unrecognized chord suffix, using major");
    ChordType::Major
}
