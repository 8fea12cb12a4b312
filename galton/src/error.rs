use thiserror::Error;

/// Errors that can occur while loading or analyzing bit sequences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// An I/O error occurred while reading a sequence file.
    #[error("I/O error: {0}")]
    Io(String),
    /// A sequence file is not a JSON object of name to bit-string pairs.
    #[error("malformed sequence file: {0}")]
    Malformed(String),
    /// A sequence contains a character other than '0' or '1'.
    #[error("invalid character {found:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        found: char,
        /// Zero-based position of the offending character.
        position: usize,
    },
    /// A sequence is empty.
    #[error("empty sequence")]
    Empty,
    /// A sequence has fewer bits than the test requires.
    #[error("sequence too short: {length} bits, need at least {minimum}")]
    TooShort {
        /// Number of bits in the sequence.
        length: usize,
        /// Minimum number of bits the test requires.
        minimum: usize,
    },
}

/// A type alias for `Result<T, AnalysisError>`.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        AnalysisError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Malformed(err.to_string())
    }
}
