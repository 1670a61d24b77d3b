#![forbid(unsafe_code)]

//! Generated layouts and partition validation.
//!
//! A [`Layout`] is the output of one generation: a list of styled regions
//! that exactly tile the grid, the base track weights the strategy chose,
//! and the [`Backdrop`] drawn behind the regions.

use mosaic_core::geometry::{CellRegion, GridSpec};
use mosaic_style::{CellStyle, Rgb, Theme};
use serde::Serialize;
use thiserror::Error;

use crate::mode::LayoutMode;

/// A layout is not a valid partition of its grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// A region extends past the grid edge.
    #[error("region {region} extends outside the {grid} grid")]
    OutOfBounds { region: CellRegion, grid: GridSpec },
    /// Two regions cover the same cell.
    #[error("cell ({row}, {col}) is covered more than once")]
    Overlap { row: usize, col: usize },
    /// A cell is not covered by any region.
    #[error("cell ({row}, {col}) is not covered")]
    Gap { row: usize, col: usize },
    /// A base weight vector does not match the grid.
    #[error("{axis} base weights have length {actual}, expected {expected}")]
    TrackMismatch {
        axis: &'static str,
        expected: usize,
        actual: usize,
    },
}

// ---------------------------------------------------------------------------
// Backdrop
// ---------------------------------------------------------------------------

/// Color behind the regions, visible through gaps and the border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackdropColor {
    /// The theme's line color.
    #[default]
    Line,
    /// A fixed color regardless of theme.
    Fixed(Rgb),
}

/// Gap, border and background of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Backdrop {
    /// Background color.
    pub color: BackdropColor,
    /// Gap between tracks, in output units.
    pub gap: f64,
    /// Border width around the grid, in output units.
    pub border: f64,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self {
            color: BackdropColor::Line,
            gap: 1.0,
            border: 1.0,
        }
    }
}

impl Backdrop {
    /// A fixed-color backdrop.
    pub const fn fixed(color: Rgb, gap: f64, border: f64) -> Self {
        Self {
            color: BackdropColor::Fixed(color),
            gap,
            border,
        }
    }

    /// Concrete background color under `theme`.
    pub fn resolve(&self, theme: Theme) -> Rgb {
        match self.color {
            BackdropColor::Line => theme.line(),
            BackdropColor::Fixed(c) => c,
        }
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// A region and its style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub region: CellRegion,
    pub style: CellStyle,
}

impl Placement {
    /// An unstyled placement.
    pub const fn empty(region: CellRegion) -> Self {
        Self {
            region,
            style: CellStyle::Empty,
        }
    }
}

/// One generated grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    /// Strategy that built it; `None` for a blank canvas.
    pub mode: Option<LayoutMode>,
    /// Track grid.
    pub grid: GridSpec,
    /// Regions in row-major order of their origins.
    pub placements: Vec<Placement>,
    /// Rest weights per column.
    pub base_cols: Vec<f64>,
    /// Rest weights per row.
    pub base_rows: Vec<f64>,
    /// Background, gap and border.
    pub backdrop: Backdrop,
}

impl Layout {
    /// A blank canvas of empty 1×1 regions with uniform tracks.
    pub fn blank(grid: GridSpec) -> Self {
        let placements = (0..grid.rows)
            .flat_map(|r| (0..grid.cols).map(move |c| Placement::empty(CellRegion::unit(r, c))))
            .collect();
        Self {
            mode: None,
            grid,
            placements,
            base_cols: vec![1.0; grid.cols],
            base_rows: vec![1.0; grid.rows],
            backdrop: Backdrop::default(),
        }
    }

    /// Number of painted regions.
    pub fn filled_count(&self) -> usize {
        self.placements.iter().filter(|p| p.style.is_filled()).count()
    }

    /// Index of the placement covering `(row, col)`.
    pub fn placement_at(&self, row: usize, col: usize) -> Option<usize> {
        self.placements.iter().position(|p| p.region.contains(row, col))
    }

    /// Check that the regions tile the grid exactly and the base weights
    /// match its dimensions.
    pub fn validate(&self) -> Result<(), PartitionError> {
        let grid = self.grid;
        for (axis, expected, actual) in [
            ("column", grid.cols, self.base_cols.len()),
            ("row", grid.rows, self.base_rows.len()),
        ] {
            if expected != actual {
                return Err(PartitionError::TrackMismatch {
                    axis,
                    expected,
                    actual,
                });
            }
        }

        let mut covered = vec![false; grid.cell_count()];
        for p in &self.placements {
            if !p.region.fits(grid) {
                return Err(PartitionError::OutOfBounds {
                    region: p.region,
                    grid,
                });
            }
            for (row, col) in p.region.cells() {
                let slot = &mut covered[row * grid.cols + col];
                if *slot {
                    return Err(PartitionError::Overlap { row, col });
                }
                *slot = true;
            }
        }

        match covered.iter().position(|&c| !c) {
            Some(i) => Err(PartitionError::Gap {
                row: i / grid.cols,
                col: i % grid.cols,
            }),
            None => Ok(()),
        }
    }
}
