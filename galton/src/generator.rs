//! The draw-and-render procedure behind the generator binary.
//!
//! Generation is split from output so deterministic tests can verify the
//! rendering and concatenation order with a seeded provider, and so the
//! binary stays a straight-line wrapper around these two calls.

use std::io;

use galton_core::{BitSequence, RandomProvider};

/// Draw a fresh 128-bit sequence from the provider.
///
/// Two independent uniformly distributed 64-bit values are drawn in order;
/// the earlier draw becomes the leading half of the rendering.
pub fn generate<R: RandomProvider>(random: &R) -> BitSequence {
    let first: u64 = random.random();
    let second: u64 = random.random();
    BitSequence::new(first, second)
}

/// Write the sequence's 128-character rendering plus a trailing newline.
///
/// The output is always exactly 129 bytes: 128 ASCII '0'/'1' digits and a
/// line feed.
///
/// # Errors
///
/// Returns any error reported by the underlying writer.
pub fn emit<W: io::Write>(sequence: &BitSequence, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{}", sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use galton_core::SeededRandomProvider;

    #[test]
    fn test_generate_preserves_draw_order() {
        let reference = SeededRandomProvider::new(7);
        let expected_first: u64 = reference.random();
        let expected_second: u64 = reference.random();

        let provider = SeededRandomProvider::new(7);
        let sequence = generate(&provider);

        assert_eq!(sequence.first, expected_first);
        assert_eq!(sequence.second, expected_second);
    }

    #[test]
    fn test_emit_writes_exactly_one_line() {
        let sequence = BitSequence::new(0, 1);
        let mut line = Vec::new();
        emit(&sequence, &mut line).expect("write to vec");

        assert_eq!(line.len(), 129);
        assert_eq!(line.last(), Some(&b'\n'));
        assert!(line[..128].iter().all(|&b| b == b'0' || b == b'1'));
    }

    #[test]
    fn test_emit_matches_rendering() {
        let provider = SeededRandomProvider::new(1234);
        let sequence = generate(&provider);

        let mut line = Vec::new();
        emit(&sequence, &mut line).expect("write to vec");

        let text = String::from_utf8(line).expect("ascii output");
        assert_eq!(text, format!("{}\n", sequence));
    }
}
