//! Decoding of binary-space-partitioned position codes and locating the
//! single missing identifier in an otherwise contiguous batch.
//!
//! A code like `BFFFBBFRRR` selects one of `2^7` rows with its first seven
//! symbols and one of `2^3` columns with its last three, each by repeatedly
//! keeping one half of the remaining range. [`Layout`] decodes such codes
//! into a [`Position`] and a dense integer identifier; [`gap`] consumes a
//! batch of identifiers and reports the one missing from the run.

#![warn(clippy::all, clippy::pedantic)]

pub mod decode;
pub mod gap;

pub use decode::{Alphabet, Half, Layout, Position, BOARDING};
pub use gap::{find_gap, find_gap_strict, max_id};

use fnv::FnvBuildHasher;
use thiserror::Error;

pub type HashSet<T> = std::collections::HashSet<T, FnvBuildHasher>;

/// Failures surfaced by decoding and gap finding. Any of these indicates a
/// malformed upstream source or a violated batch precondition, so none are
/// recovered internally.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum Error {
    /// Code length does not match the layout's `row_bits + col_bits`.
    #[error("malformed code: expected {expected} symbols, found {actual}")]
    MalformedCode { expected: usize, actual: usize },

    /// A symbol outside the alphabet governing its position.
    #[error("unknown symbol {symbol:?} at position {position}")]
    UnknownSymbol { symbol: char, position: usize },

    /// No identifiers were supplied.
    #[error("empty identifier batch")]
    EmptyInput,

    /// The identifier run is fully contiguous.
    #[error("no gap between the smallest and largest identifier")]
    NoGapFound,

    /// Strict search found more than one gap.
    #[error("multiple gaps in identifier run: {first} and {second}")]
    MultipleGaps { first: u32, second: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
