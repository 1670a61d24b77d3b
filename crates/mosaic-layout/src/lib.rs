#![forbid(unsafe_code)]

//! Layout: grid partition strategies.
//!
//! # Role in Mosaic
//! `mosaic-layout` turns a [`LayoutRequest`] (mode, grid, palette, tool)
//! into a [`Layout`]: styled regions that tile the grid exactly once, the
//! base track weights, and a [`Backdrop`].
//!
//! # Strategies
//! - **Chaos** (and its alias **Concentric**): random spans up to 4×3.
//! - **Chess**: deterministic checkerboard.
//! - **Mondrian**: fixed tracks with 3×3 blocks every fourth track.
//! - **Cubism**: up-to-2×2 regions, earth tones, faceted shapes.
//! - **Glyph**: flat grid of glyphs.
//!
//! Overflowing or colliding spans collapse to 1×1 via [`Occupancy`].
//! [`Layout::validate`] checks the partition.

pub mod generator;
pub mod layout;
pub mod mode;
pub mod occupancy;
mod strategy;

pub use generator::{Generator, LayoutRequest};
pub use layout::{Backdrop, BackdropColor, Layout, PartitionError, Placement};
pub use mode::LayoutMode;
pub use occupancy::Occupancy;
pub use strategy::cubism::CUBISM_BACKDROP;
pub use strategy::mondrian::{MONDRIAN_COLS, MONDRIAN_ROWS};
