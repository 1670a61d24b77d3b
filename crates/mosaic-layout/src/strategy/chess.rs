#![forbid(unsafe_code)]

//! Chess: a deterministic checkerboard.
//!
//! Cells with an even `row + col` are painted `solids[(row * col) % len]`;
//! the rest stay empty. No randomness is consumed.

use mosaic_core::geometry::CellRegion;
use mosaic_style::Fill;

use crate::generator::LayoutRequest;
use crate::layout::{Backdrop, Layout, Placement};

pub(crate) fn build(request: &LayoutRequest) -> Layout {
    let grid = request.grid;
    let palette = request.palette.palette();

    let placements = (0..grid.rows)
        .flat_map(|row| (0..grid.cols).map(move |col| (row, col)))
        .map(|(row, col)| {
            let mut placement = Placement::empty(CellRegion::unit(row, col));
            if (row + col) % 2 == 0 {
                placement.style = Fill::Solid(palette.solid_at(row * col)).into();
            }
            placement
        })
        .collect();

    Layout {
        mode: Some(request.mode),
        grid,
        placements,
        base_cols: vec![1.0; grid.cols],
        base_rows: vec![1.0; grid.rows],
        backdrop: Backdrop::default(),
    }
}
