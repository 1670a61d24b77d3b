#![forbid(unsafe_code)]

//! Cubism: regions of at most 2×2 in the cubist palette.
//!
//! Every region is painted. With probability 30% the solid fill is
//! replaced by a triangle or rhombus.

use mosaic_core::geometry::CellRegion;
use mosaic_core::sample::Sampler;
use mosaic_style::{Fill, NEUTRAL, PaletteName, Rgb, ShapeKind};

use crate::generator::{Generator, LayoutRequest};
use crate::layout::{Backdrop, Layout, Placement};
use crate::occupancy::Occupancy;

use super::random_weights;

const SPAN_THRESHOLD: f64 = 0.7;
const FACET_THRESHOLD: f64 = 0.7;

/// Backdrop gray.
pub const CUBISM_BACKDROP: Rgb = Rgb::from_u32(0x333333);

fn span<S: Sampler>(index: usize, len: usize, sampler: &mut S) -> usize {
    if sampler.next_unit() > SPAN_THRESHOLD && index + 1 < len {
        2
    } else {
        1
    }
}

pub(crate) fn build<S: Sampler>(generator: &Generator, request: &LayoutRequest, sampler: &mut S) -> Layout {
    let grid = request.grid;
    let tuning = generator.tuning();
    let solids = PaletteName::Cubist.palette().solids;

    let base_cols = random_weights(grid.cols, &tuning.base_weight, sampler);
    let base_rows = random_weights(grid.rows, &tuning.base_weight, sampler);

    let mut occupancy = Occupancy::new(grid);
    let mut placements = Vec::new();
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            if occupancy.is_occupied(row, col) {
                continue;
            }
            let span_cols = span(col, grid.cols, sampler);
            let span_rows = span(row, grid.rows, sampler);
            let region = occupancy.place(CellRegion::new(row, col, span_rows, span_cols));

            let color = sampler.pick(solids).copied().unwrap_or(NEUTRAL);
            let fill = if sampler.next_unit() > FACET_THRESHOLD {
                let shape = sampler
                    .pick(&ShapeKind::FACETED)
                    .copied()
                    .unwrap_or(ShapeKind::Triangle);
                Fill::Shape { shape, color }
            } else {
                Fill::Solid(color)
            };
            placements.push(Placement {
                region,
                style: fill.into(),
            });
        }
    }

    Layout {
        mode: Some(request.mode),
        grid,
        placements,
        base_cols,
        base_rows,
        backdrop: Backdrop::fixed(CUBISM_BACKDROP, 2.0, 2.0),
    }
}
