//! # galton
//!
//! Random 128-bit binary sequence generation and statistical analysis.
//!
//! Two programs are built from this crate, both on top of the provider
//! abstraction in `galton-core`:
//!
//! - `galton` draws two independent 64-bit values from an entropy-seeded
//!   engine and prints their concatenated binary rendering as a single
//!   128-character line on stdout
//! - `galton-analyze` loads named bit sequences from JSON files and checks
//!   them against a small battery of randomness tests
//!
//! ## Example Usage
//!
//! ```rust
//! use galton::generator::{emit, generate};
//! use galton_core::SeededRandomProvider;
//!
//! let provider = SeededRandomProvider::new(42);
//! let sequence = generate(&provider);
//!
//! let mut line = Vec::new();
//! emit(&sequence, &mut line).unwrap();
//! assert_eq!(line.len(), 129); // 128 digits plus newline
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

/// Error types and utilities for sequence analysis.
pub mod error;
/// The draw-and-render procedure behind the generator binary.
pub mod generator;
/// Loading named bit sequences from JSON files.
pub mod input;
/// Per-sequence analysis results and the aggregated report.
pub mod report;
/// Randomness tests for bit sequences.
pub mod stats;

// Public API exports
pub use error::{AnalysisError, AnalysisResult};
pub use generator::{emit, generate};
pub use input::load_sequence_file;
pub use report::{AnalysisConfig, AnalysisReport, SequenceAnalysis};
pub use stats::{block_frequency_test, frequency_test, longest_run_of_ones_test};
