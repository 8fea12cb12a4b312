//! Analyzer binary: check recorded bit sequences against the test battery.
//!
//! Each input file is a JSON object mapping sequence names to strings of
//! '0' and '1' characters. The report goes to stdout; exit code is 1 when
//! any sequence fails any test or any file cannot be loaded.

use std::process;

use galton::input::load_sequence_file;
use galton::report::{AnalysisConfig, AnalysisReport, SequenceAnalysis};

fn print_usage() {
    eprintln!("Usage: galton-analyze <sequences.json>...");
    eprintln!();
    eprintln!("Each file must contain a JSON object mapping sequence names to");
    eprintln!("strings of '0' and '1' characters, at least 128 bits each.");
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .try_init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        print_usage();
        process::exit(1);
    }

    let config = AnalysisConfig::default();
    let mut report = AnalysisReport::new(config.alpha);
    let mut errors = 0usize;

    for path in &paths {
        let sequences = match load_sequence_file(path) {
            Ok(sequences) => sequences,
            Err(e) => {
                tracing::error!("{}: {}", path, e);
                errors += 1;
                continue;
            }
        };

        for (name, sequence) in &sequences {
            match SequenceAnalysis::evaluate(name, sequence, &config) {
                Ok(analysis) => report.push(analysis),
                Err(e) => {
                    tracing::error!("{}: sequence {:?}: {}", path, name, e);
                    errors += 1;
                }
            }
        }
    }

    print!("{}", report);

    if errors > 0 || !report.all_passed() {
        process::exit(1);
    }
}
