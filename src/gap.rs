//! Locating the missing identifier in a batch.
//!
//! The batch is assumed to cover a contiguous run of identifiers with
//! exactly one hole. The scan walks `min..=max` and returns the first
//! value absent from a hash set of the inputs; if several holes exist the
//! first one wins, unless the strict variant is asked for.

use crate::{Error, HashSet, Result};
use itertools::{Itertools, MinMaxResult};

/// Finds the first identifier missing from the run `[min, max]`.
///
/// # Errors
///
/// [`Error::EmptyInput`] on an empty batch, [`Error::NoGapFound`] when the
/// run is fully contiguous.
pub fn find_gap(ids: &[u32]) -> Result<u32> {
    let (lo, hi) = bounds(ids)?;
    let seen = ids.iter().copied().collect::<HashSet<u32>>();
    (lo..=hi)
        .find(|id| !seen.contains(id))
        .ok_or(Error::NoGapFound)
}

/// Like [`find_gap`], but validates that the gap is unique.
///
/// # Errors
///
/// The conditions of [`find_gap`], plus [`Error::MultipleGaps`] when more
/// than one identifier is missing from the run.
pub fn find_gap_strict(ids: &[u32]) -> Result<u32> {
    let (lo, hi) = bounds(ids)?;
    let seen = ids.iter().copied().collect::<HashSet<u32>>();
    let mut gaps = (lo..=hi).filter(|id| !seen.contains(id));
    let first = gaps.next().ok_or(Error::NoGapFound)?;
    match gaps.next() {
        Some(second) => Err(Error::MultipleGaps { first, second }),
        None => Ok(first),
    }
}

/// The largest identifier in the batch.
///
/// # Errors
///
/// [`Error::EmptyInput`] on an empty batch.
pub fn max_id(ids: &[u32]) -> Result<u32> {
    ids.iter().copied().max().ok_or(Error::EmptyInput)
}

fn bounds(ids: &[u32]) -> Result<(u32, u32)> {
    match ids.iter().copied().minmax() {
        MinMaxResult::NoElements => Err(Error::EmptyInput),
        MinMaxResult::OneElement(only) => Ok((only, only)),
        MinMaxResult::MinMax(lo, hi) => Ok((lo, hi)),
    }
}
