//! # cmdcodec - Manipulator Command-String Codec
//!
//! A deterministic, reversible compression scheme for manipulator command
//! strings over a fixed 6-command alphabet (`Л П В Н О Б`), with its
//! exact inverse and a tolerant parser.
//!
//! The pipeline is one-way and stateless: a raw user-entered string is
//! validated by [`parse`], compressed by [`compress_runs`] (consecutive
//! repeats) and [`compress_patterns`] (repeating substrings), displayed or
//! stored in compressed form, then [`expand`]ed and re-parsed into the
//! ordered command sequence the execution engine consumes.
//!
//! ## Example
//!
//! ```
//! use cmdcodec::{expand, optimize, parse};
//!
//! let raw = "ЛЛЛЛВВПППОНННБ";
//! let compressed = optimize(raw);
//! assert_eq!(compressed, "4Л2В3ПО3НБ");
//!
//! // The round trip is exact.
//! let expanded = expand(&compressed).unwrap();
//! assert_eq!(expanded, raw);
//! assert_eq!(parse(&expanded), parse(raw));
//! ```
//!
//! ## Guarantees
//!
//! - `parse(expand(optimize(s))) == parse(s)` for every string `s` over
//!   the command alphabet: compression never loses or reorders commands.
//! - Every function is pure and deterministic; nothing is shared between
//!   calls, so concurrent use needs no locking.
//! - Compression is a greedy longest-pattern-first heuristic, not an
//!   optimal encoder; see [`compress_patterns`] for the exact search
//!   order.
//!
//! Characters outside the alphabet are silently dropped by [`parse`],
//! never reported as errors. The only fallible operation is [`expand`] on
//! text the compressor did not produce.

mod command;
mod error;
mod expand;
mod pattern;
mod rle;
mod stats;

#[cfg(test)]
mod tests;

pub use command::{parse, Command};
pub use error::ExpandError;
pub use expand::expand;
pub use pattern::{compress_patterns, optimize};
pub use rle::compress_runs;
pub use stats::{optimize_with_stats, CompressionStats};
