//! Core determinism verification types and functions.

use std::fmt;

use serde::Serialize;

/// Characters of serialized output shown on each side of a difference.
const CONTEXT_CHARS: usize = 24;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the serialized output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the reference run.
    pub hash: String,
    /// If non-deterministic, where the first difference was found.
    pub diff_info: Option<DiffInfo>,
}

/// The first difference between the reference run and a later run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset into the serialized JSON.
    pub offset: usize,
    /// Which run (0-indexed) produced the differing output.
    pub run_index: usize,
    /// Reference JSON around the offset.
    pub expected: String,
    /// Differing JSON around the offset.
    pub actual: String,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference at byte {} (run {})\n  expected: ...{}...\n  actual:   ...{}...",
            self.offset, self.run_index, self.expected, self.actual
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// Serializes generator output to the bytes that are hashed and compared.
pub fn serialize_output<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).unwrap_or_else(|e| panic!("output must serialize to JSON: {}", e))
}

/// Compute BLAKE3 hash of data.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Run generation `runs` times and verify every serialized output matches
/// the first.
pub fn verify_determinism<F, T>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> T,
    T: Serialize,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = serialize_output(&generate_fn());
    let hash = compute_hash(&reference);

    for run_index in 1..runs {
        let output = serialize_output(&generate_fn());
        if let Some(diff) = find_first_difference(&reference, &output, run_index) {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                output_size: reference.len(),
                hash,
                diff_info: Some(diff),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        output_size: reference.len(),
        hash,
        diff_info: None,
    }
}

/// True when every seed in `seeds` produces distinct output.
///
/// Catches generators that ignore their random source.
pub fn verify_seed_sensitivity<F, T>(generate_fn: F, seeds: &[u32]) -> bool
where
    F: Fn(u32) -> T,
    T: Serialize,
{
    let mut hashes: Vec<String> = seeds
        .iter()
        .map(|&seed| compute_hash(&serialize_output(&generate_fn(seed))))
        .collect();
    hashes.sort();
    hashes.dedup();
    hashes.len() == seeds.len()
}

/// Compare hashes from separate runs.
pub fn verify_hash_determinism(hashes: &[String]) -> bool {
    match hashes.first() {
        Some(reference) => hashes.iter().all(|h| h == reference),
        None => true,
    }
}

/// First differing byte, or the shorter length when one output is a prefix
/// of the other.
pub(crate) fn find_first_difference(
    expected: &[u8],
    actual: &[u8],
    run_index: usize,
) -> Option<DiffInfo> {
    let offset = expected
        .iter()
        .zip(actual)
        .position(|(e, a)| e != a)
        .or_else(|| (expected.len() != actual.len()).then(|| expected.len().min(actual.len())))?;

    Some(DiffInfo {
        offset,
        run_index,
        expected: extract_context(expected, offset),
        actual: extract_context(actual, offset),
    })
}

/// Serialized text around `offset`.
pub(crate) fn extract_context(data: &[u8], offset: usize) -> String {
    let start = offset.saturating_sub(CONTEXT_CHARS);
    let end = (offset + CONTEXT_CHARS).min(data.len());
    String::from_utf8_lossy(&data[start.min(end)..end]).into_owned()
}
