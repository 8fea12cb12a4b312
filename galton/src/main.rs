//! Generator binary: print one random 128-bit binary sequence.
//!
//! Seeds a 64-bit engine once from OS entropy, draws two independent
//! values, and prints their concatenated binary rendering as a single
//! line on stdout. Takes no arguments and reads no environment; the only
//! failure mode is an unavailable entropy source, which aborts.

use std::io;

use galton::generator::{emit, generate};
use galton_core::OsRandomProvider;

fn main() {
    let random = OsRandomProvider::new();
    let sequence = generate(&random);

    emit(&sequence, io::stdout().lock()).expect("write sequence to stdout");
}
