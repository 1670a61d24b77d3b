#![forbid(unsafe_code)]

//! Partition strategies, one per layout mode.
//!
//! Every strategy scans the grid in row-major order, skips occupied cells
//! and places one region at each free cell through
//! [`Occupancy::place`](crate::occupancy::Occupancy::place), so the result
//! always tiles the grid exactly.

pub(crate) mod chaos;
pub(crate) mod chess;
pub(crate) mod cubism;
pub(crate) mod glyph;
pub(crate) mod mondrian;

use std::ops::Range;

use mosaic_core::sample::Sampler;

/// `count` uniform draws from `range`.
pub(crate) fn random_weights<S: Sampler>(count: usize, range: &Range<f64>, sampler: &mut S) -> Vec<f64> {
    (0..count).map(|_| sampler.range(range.start, range.end)).collect()
}
