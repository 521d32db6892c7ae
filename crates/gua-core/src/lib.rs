//! Core types for three-coin I Ching divination: coin lines, trigrams,
//! King Wen resolution, and the change transform.
//!
//! This crate is pure — no I/O, no async. Randomness comes in through a
//! caller-supplied [`rand::rngs::StdRng`], so casts are reproducible under a
//! fixed seed. The 64-record canon dataset is embedded and reachable only by
//! id lookup.

/// One complete divination and its derived views.
pub mod cast;
/// The embedded 64-record canon dataset.
pub mod canon;
/// Error types used throughout the crate.
pub mod error;
/// Hexagram resolution via the King Wen table.
pub mod hexagram;
/// Coin lines and six-line sequences.
pub mod line;
/// The eight trigrams and their bit encoding.
pub mod trigram;

/// Re-export the cast aggregate.
pub use cast::Cast;
/// Re-export the canon record type.
pub use canon::HexagramRecord;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export line types.
pub use line::{CoinLine, LineSequence};
/// Re-export the trigram type.
pub use trigram::Trigram;
