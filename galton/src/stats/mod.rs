//! Randomness tests for bit sequences.
//!
//! Implements three tests from the NIST SP 800-22 battery: frequency
//! (monobit), block frequency, and longest run of ones in a block. Each
//! test returns a p-value in [0, 1]; a sequence passes a test at
//! significance level alpha when its p-value is at least alpha.

mod special;

use crate::error::{AnalysisError, AnalysisResult};
use special::{erfc, gamma_q};

/// Block size for the longest-run test.
const LONGEST_RUN_BLOCK: usize = 8;
/// Minimum sequence length for the longest-run test at this block size.
const LONGEST_RUN_MIN_BITS: usize = 128;
/// Reference probabilities for the longest-run categories (at most one,
/// two, three, four or more consecutive ones) in an 8-bit block.
const LONGEST_RUN_PI: [f64; 4] = [0.2148, 0.3672, 0.2305, 0.1875];

/// Frequency (monobit) test.
///
/// Measures whether the proportion of ones is close to one half. The
/// statistic is the absolute sum of +1/-1 steps scaled by sqrt(n); the
/// p-value is erfc(s_obs / sqrt(2)).
///
/// # Errors
///
/// Returns an error when the sequence is empty or contains a character
/// other than '0' or '1'.
///
/// # Examples
///
/// ```
/// let p = galton::stats::frequency_test("1011010101").unwrap();
/// assert!((p - 0.527089).abs() < 1e-5);
/// ```
pub fn frequency_test(sequence: &str) -> AnalysisResult<f64> {
    let bits = collect_bits(sequence)?;
    let n = bits.len() as f64;
    let sum: i64 = bits.iter().map(|&bit| if bit { 1 } else { -1 }).sum();
    let s_obs = (sum as f64).abs() / n.sqrt();
    Ok(erfc(s_obs / std::f64::consts::SQRT_2))
}

/// Block frequency test.
///
/// Splits the sequence into blocks of `block_size` bits (the trailing
/// partial block is discarded), measures the proportion of ones in each
/// block, and folds the deviations from one half into a chi-squared
/// statistic with one degree of freedom per block.
///
/// # Errors
///
/// Returns an error when the sequence is empty, contains a character other
/// than '0' or '1', or is shorter than one block.
///
/// # Panics
///
/// Panics when `block_size` is zero.
pub fn block_frequency_test(sequence: &str, block_size: usize) -> AnalysisResult<f64> {
    assert!(block_size > 0, "block size must be positive");
    let bits = collect_bits(sequence)?;
    if bits.len() < block_size {
        return Err(AnalysisError::TooShort {
            length: bits.len(),
            minimum: block_size,
        });
    }

    let blocks = bits.len() / block_size;
    let mut chi_squared = 0.0;
    for block in bits.chunks_exact(block_size) {
        let ones = block.iter().filter(|&&bit| bit).count();
        let proportion = ones as f64 / block_size as f64;
        chi_squared += (proportion - 0.5) * (proportion - 0.5);
    }
    chi_squared *= 4.0 * block_size as f64;

    Ok(gamma_q(blocks as f64 / 2.0, chi_squared / 2.0))
}

/// Longest run of ones in a block test.
///
/// Splits the sequence into 8-bit blocks (the trailing partial block is
/// discarded) and classifies each block by its longest run of consecutive
/// ones. The observed category counts are compared against the reference
/// distribution for 8-bit blocks via a chi-squared statistic with three
/// degrees of freedom.
///
/// # Errors
///
/// Returns an error when the sequence is empty, contains a character other
/// than '0' or '1', or is shorter than 128 bits.
pub fn longest_run_of_ones_test(sequence: &str) -> AnalysisResult<f64> {
    let bits = collect_bits(sequence)?;
    if bits.len() < LONGEST_RUN_MIN_BITS {
        return Err(AnalysisError::TooShort {
            length: bits.len(),
            minimum: LONGEST_RUN_MIN_BITS,
        });
    }

    let mut counts = [0usize; 4];
    for block in bits.chunks_exact(LONGEST_RUN_BLOCK) {
        let category = match longest_run(block) {
            0 | 1 => 0,
            2 => 1,
            3 => 2,
            _ => 3,
        };
        counts[category] += 1;
    }

    let blocks = (bits.len() / LONGEST_RUN_BLOCK) as f64;
    let mut chi_squared = 0.0;
    for (count, pi) in counts.iter().zip(LONGEST_RUN_PI) {
        let expected = blocks * pi;
        let deviation = *count as f64 - expected;
        chi_squared += deviation * deviation / expected;
    }

    let degrees_of_freedom = (LONGEST_RUN_PI.len() - 1) as f64;
    Ok(gamma_q(degrees_of_freedom / 2.0, chi_squared / 2.0))
}

/// Validate the sequence and return its bits, true for '1'.
fn collect_bits(sequence: &str) -> AnalysisResult<Vec<bool>> {
    if sequence.is_empty() {
        return Err(AnalysisError::Empty);
    }
    sequence
        .chars()
        .enumerate()
        .map(|(position, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            found => Err(AnalysisError::InvalidCharacter { found, position }),
        })
        .collect()
}

/// Length of the longest run of consecutive ones in the block.
fn longest_run(block: &[bool]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for &bit in block {
        if bit {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
