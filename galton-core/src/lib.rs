//! # galton-core
//!
//! Core abstractions for random binary sequence generation.
//!
//! This crate provides the building blocks shared by the galton binaries:
//!
//! - **Provider trait**: [`RandomProvider`] abstracts the source of uniform
//!   random values so the same generation code runs against OS entropy in
//!   production and against fixed seeds in tests
//! - **Providers**: [`OsRandomProvider`] (entropy-seeded, one engine per
//!   construction) and [`SeededRandomProvider`] (deterministic)
//! - **Value type**: [`BitSequence`], a 128-bit value built from two 64-bit
//!   draws and rendered as a fixed-width binary string

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

mod random;
mod sequence;

// Provider exports
pub use random::seeded::SeededRandomProvider;
pub use random::{OsRandomProvider, RandomProvider};

// Value type exports
pub use sequence::{BitSequence, ParseBitSequenceError};
