#![forbid(unsafe_code)]

//! Style: colors, gradients, palettes, and cell style assignment.
//!
//! # Role in Mosaic
//! `mosaic-style` decides what a region looks like. Palettes are static
//! data selected by [`PaletteName`]; the [`StyleAssigner`] draws a [`Fill`]
//! for a region according to the active [`Tool`], and optionally new base
//! weights for the region's row and column.

pub mod assign;
pub mod color;
pub mod gradient;
pub mod palette;
pub mod style;
pub mod theme;

pub use assign::{CHAOS_WEIGHTS, Reshape, ResizePolicy, StyleAssigner, Tool};
pub use color::{ParseColorError, Rgb};
pub use gradient::{Gradient, GradientDirection, GradientStop, GradientVector};
pub use palette::{MONDRIAN_COLORS, NEUTRAL, Palette, PaletteName};
pub use style::{CellStyle, Fill, FillKind, GLYPHS, GRID_GLYPHS, Paint, PatternKind, ShapeKind};
pub use theme::Theme;
