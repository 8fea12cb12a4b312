//! Loading named bit sequences from JSON files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::AnalysisResult;

/// Load a sequence file: a JSON object mapping sequence names to strings
/// of '0' and '1' characters.
///
/// Returns a `BTreeMap` so callers iterate sequences in a stable order
/// regardless of how the file was written.
///
/// # Errors
///
/// Returns an error when the file cannot be read or does not contain a
/// JSON object of string values. Sequence contents are not validated
/// here; the individual tests report bad characters with their position.
pub fn load_sequence_file<P: AsRef<Path>>(path: P) -> AnalysisResult<BTreeMap<String, String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let sequences: BTreeMap<String, String> = serde_json::from_str(&contents)?;
    tracing::debug!(
        path = %path.display(),
        sequences = sequences.len(),
        "loaded sequence file"
    );
    Ok(sequences)
}
