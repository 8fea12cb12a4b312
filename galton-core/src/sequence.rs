//! The 128-bit sequence value and its binary rendering.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// 128-bit value built from two independent 64-bit draws.
///
/// The halves keep their draw order: `first` is the earlier draw, `second`
/// the later one. `Display` renders each half as a 64-digit zero-padded
/// binary string, most significant bit first, and concatenates them in
/// that order with no separator.
///
/// # Examples
///
/// ```
/// use galton_core::BitSequence;
///
/// let sequence = BitSequence::new(1, u64::MAX);
/// let text = sequence.to_string();
/// assert_eq!(text.len(), 128);
/// assert!(text.starts_with("000"));
/// assert!(text.ends_with("111"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitSequence {
    /// First 64 bits, drawn first, rendered first.
    pub first: u64,
    /// Second 64 bits, drawn second, rendered second.
    pub second: u64,
}

impl BitSequence {
    /// Number of bits in a sequence.
    pub const BITS: usize = 128;

    /// Create a new sequence with explicit halves.
    pub const fn new(first: u64, second: u64) -> Self {
        Self { first, second }
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:064b}{:064b}", self.first, self.second)
    }
}

impl FromStr for BitSequence {
    type Err = ParseBitSequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != Self::BITS {
            return Err(ParseBitSequenceError::WrongLength(length));
        }

        let mut first: u64 = 0;
        let mut second: u64 = 0;
        for (position, c) in s.chars().enumerate() {
            let bit = match c {
                '0' => 0,
                '1' => 1,
                found => return Err(ParseBitSequenceError::InvalidDigit { found, position }),
            };
            if position < Self::BITS / 2 {
                first = (first << 1) | bit;
            } else {
                second = (second << 1) | bit;
            }
        }

        Ok(Self { first, second })
    }
}

/// Error parsing a bit sequence from string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBitSequenceError {
    /// The input does not have exactly 128 characters.
    #[error("wrong sequence length: expected 128 digits, found {0}")]
    WrongLength(usize),
    /// The input contains a character other than '0' or '1'.
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        found: char,
        /// Zero-based position of the offending character.
        position: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_extremes() {
        assert_eq!(BitSequence::new(0, 0).to_string(), "0".repeat(128));
        assert_eq!(
            BitSequence::new(u64::MAX, u64::MAX).to_string(),
            "1".repeat(128)
        );
    }

    #[test]
    fn test_display_zero_padding_and_order() {
        let rendering = BitSequence::new(5, 2).to_string();
        let expected = format!("{}101{}10", "0".repeat(61), "0".repeat(62));

        assert_eq!(rendering.len(), 128);
        assert_eq!(rendering, expected);
    }

    #[test]
    fn test_display_halves_are_independent_renderings() {
        let sequence = BitSequence::new(0x123456789ABCDEF0, 0xFEDCBA9876543210);
        let rendering = sequence.to_string();

        assert_eq!(&rendering[..64], format!("{:064b}", sequence.first));
        assert_eq!(&rendering[64..], format!("{:064b}", sequence.second));
    }

    #[test]
    fn test_parse_roundtrip() {
        let sequence = BitSequence::new(0xDEADBEEF00C0FFEE, 0x0123456789ABCDEF);
        let parsed: BitSequence = sequence.to_string().parse().expect("parse rendering");

        assert_eq!(parsed, sequence);
    }

    #[test]
    fn test_parse_known_bits() {
        let text = format!("{}11{}", "0".repeat(63), "0".repeat(63));
        let parsed: BitSequence = text.parse().expect("parse");

        assert_eq!(parsed.first, 1);
        assert_eq!(parsed.second, 1 << 63);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            "01".parse::<BitSequence>(),
            Err(ParseBitSequenceError::WrongLength(2))
        );
        assert_eq!(
            "0".repeat(129).parse::<BitSequence>(),
            Err(ParseBitSequenceError::WrongLength(129))
        );
    }

    #[test]
    fn test_parse_rejects_invalid_digit() {
        let mut text = "0".repeat(128);
        text.replace_range(5..6, "x");

        assert_eq!(
            text.parse::<BitSequence>(),
            Err(ParseBitSequenceError::InvalidDigit {
                found: 'x',
                position: 5
            })
        );
    }

    #[test]
    fn test_default_is_all_zeros() {
        assert_eq!(BitSequence::default().to_string(), "0".repeat(128));
    }
}
