#![forbid(unsafe_code)]

//! Glyph grid: flat 1×1 cells, half of them holding a large glyph.

use mosaic_core::geometry::CellRegion;
use mosaic_core::sample::Sampler;
use mosaic_style::{Fill, GRID_GLYPHS, NEUTRAL};

use crate::generator::{Generator, LayoutRequest};
use crate::layout::{Backdrop, Layout, Placement};

pub(crate) fn build<S: Sampler>(generator: &Generator, request: &LayoutRequest, sampler: &mut S) -> Layout {
    let grid = request.grid;
    let palette = request.palette.palette();
    let fill_chance = generator.tuning().fill_chance();

    let mut placements = Vec::with_capacity(grid.cell_count());
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let mut placement = Placement::empty(CellRegion::unit(row, col));
            if sampler.chance(fill_chance) {
                let color = sampler.pick(palette.solids).copied().unwrap_or(NEUTRAL);
                let glyph = sampler.pick(&GRID_GLYPHS).copied().unwrap_or('#');
                placement.style = Fill::Glyph { glyph, color }.into();
            }
            placements.push(placement);
        }
    }

    Layout {
        mode: Some(request.mode),
        grid,
        placements,
        base_cols: vec![1.0; grid.cols],
        base_rows: vec![1.0; grid.rows],
        backdrop: Backdrop::default(),
    }
}
