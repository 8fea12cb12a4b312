//! Per-sequence analysis results and the aggregated report.

use std::fmt;

use crate::error::AnalysisResult;
use crate::stats;

/// Settings for sequence analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    /// Significance level; a test fails when its p-value drops below this.
    pub alpha: f64,
    /// Block size for the block frequency test.
    pub block_size: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            alpha: 0.01,
            block_size: 8,
        }
    }
}

/// Results of running the full test battery against one sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceAnalysis {
    /// Name of the sequence in the input file.
    pub name: String,
    /// Number of bits in the sequence.
    pub length: usize,
    /// p-value of the frequency (monobit) test.
    pub frequency_p: f64,
    /// p-value of the block frequency test.
    pub block_frequency_p: f64,
    /// p-value of the longest run of ones test.
    pub longest_run_p: f64,
}

impl SequenceAnalysis {
    /// Run every test against `sequence`.
    ///
    /// # Errors
    ///
    /// Returns an error when the sequence is empty, contains characters
    /// other than '0' and '1', or is shorter than 128 bits (the minimum
    /// the longest-run test accepts).
    pub fn evaluate(name: &str, sequence: &str, config: &AnalysisConfig) -> AnalysisResult<Self> {
        Ok(Self {
            name: name.to_string(),
            length: sequence.chars().count(),
            frequency_p: stats::frequency_test(sequence)?,
            block_frequency_p: stats::block_frequency_test(sequence, config.block_size)?,
            longest_run_p: stats::longest_run_of_ones_test(sequence)?,
        })
    }

    /// Whether every test passed at significance level `alpha`.
    pub fn passes(&self, alpha: f64) -> bool {
        self.frequency_p >= alpha && self.block_frequency_p >= alpha && self.longest_run_p >= alpha
    }
}

/// Aggregated results across every sequence in a run.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Significance level the verdicts were computed at.
    pub alpha: f64,
    /// Per-sequence results, in input order.
    pub analyses: Vec<SequenceAnalysis>,
    /// Number of sequences that passed every test.
    pub passed: usize,
    /// Number of sequences that failed at least one test.
    pub failed: usize,
}

impl AnalysisReport {
    /// Create an empty report evaluated at `alpha`.
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            analyses: Vec::new(),
            passed: 0,
            failed: 0,
        }
    }

    /// Record one sequence's results.
    pub fn push(&mut self, analysis: SequenceAnalysis) {
        if analysis.passes(self.alpha) {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.analyses.push(analysis);
    }

    /// Total number of sequences analyzed.
    pub fn total(&self) -> usize {
        self.analyses.len()
    }

    /// Share of sequences that passed every test, as a percentage.
    pub fn success_rate(&self) -> f64 {
        if self.analyses.is_empty() {
            0.0
        } else {
            (self.passed as f64 / self.analyses.len() as f64) * 100.0
        }
    }

    /// Whether every sequence passed every test.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Sequence Analysis ===")?;
        writeln!(f, "Sequences: {}", self.total())?;
        writeln!(f, "Passed: {}", self.passed)?;
        writeln!(f, "Failed: {}", self.failed)?;
        writeln!(f, "Success Rate: {:.2}%", self.success_rate())?;
        writeln!(f, "Significance Level: {}", self.alpha)?;

        if !self.analyses.is_empty() {
            writeln!(f)?;
            for analysis in &self.analyses {
                let verdict = if analysis.passes(self.alpha) {
                    "pass"
                } else {
                    "FAIL"
                };
                writeln!(
                    f,
                    "{} [{}] ({} bits): frequency={:.6} block_frequency={:.6} longest_run={:.6}",
                    analysis.name,
                    verdict,
                    analysis.length,
                    analysis.frequency_p,
                    analysis.block_frequency_p,
                    analysis.longest_run_p
                )?;
            }
        }

        Ok(())
    }
}
