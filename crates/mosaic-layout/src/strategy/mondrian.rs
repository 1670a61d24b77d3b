#![forbid(unsafe_code)]

//! Mondrian: fixed uneven tracks with 3×3 blocks.
//!
//! Track weights follow a hand-tuned sequence (repeated for grids larger
//! than 12). Spans are chosen per axis: an origin column that is a
//! multiple of 4 spans 3 columns when room permits, and likewise for rows,
//! so the 3×3 blocks sit on every fourth track. Each region is painted a
//! block color with probability 40%, else the neutral off-white.

use mosaic_core::geometry::CellRegion;
use mosaic_core::sample::Sampler;
use mosaic_style::{Fill, MONDRIAN_COLORS, NEUTRAL, PaletteName, Rgb};

use crate::generator::LayoutRequest;
use crate::layout::{Backdrop, Layout, Placement};
use crate::occupancy::Occupancy;

/// Column weights.
pub const MONDRIAN_COLS: [f64; 12] = [2.0, 4.0, 1.0, 3.0, 2.0, 2.0, 1.0, 4.0, 2.0, 1.0, 3.0, 2.0];

/// Row weights.
pub const MONDRIAN_ROWS: [f64; 12] = [3.0, 1.0, 2.0, 4.0, 1.0, 3.0, 2.0, 2.0, 4.0, 1.0, 2.0, 3.0];

const BLOCK: usize = 3;
const STRIDE: usize = 4;
const PAINT_THRESHOLD: f64 = 0.6;

fn cycle(seq: &[f64; 12], len: usize) -> Vec<f64> {
    seq.iter().copied().cycle().take(len).collect()
}

fn block_span(index: usize, len: usize) -> usize {
    if index % STRIDE == 0 && index + BLOCK < len {
        BLOCK
    } else {
        1
    }
}

pub(crate) fn build<S: Sampler>(request: &LayoutRequest, sampler: &mut S) -> Layout {
    let grid = request.grid;
    let colors: &[Rgb] = match request.palette {
        PaletteName::Modern => &MONDRIAN_COLORS,
        other => other.palette().solids,
    };

    let mut occupancy = Occupancy::new(grid);
    let mut placements = Vec::new();
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            if occupancy.is_occupied(row, col) {
                continue;
            }
            let region = occupancy.place(CellRegion::new(
                row,
                col,
                block_span(row, grid.rows),
                block_span(col, grid.cols),
            ));
            let color = if sampler.next_unit() > PAINT_THRESHOLD {
                sampler.pick(colors).copied().unwrap_or(NEUTRAL)
            } else {
                NEUTRAL
            };
            placements.push(Placement {
                region,
                style: Fill::Solid(color).into(),
            });
        }
    }

    Layout {
        mode: Some(request.mode),
        grid,
        placements,
        base_cols: cycle(&MONDRIAN_COLS, grid.cols),
        base_rows: cycle(&MONDRIAN_ROWS, grid.rows),
        backdrop: Backdrop::fixed(Rgb::BLACK, 4.0, 4.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_span_rule() {
        assert_eq!(block_span(0, 12), 3);
        assert_eq!(block_span(4, 12), 3);
        assert_eq!(block_span(8, 12), 3);
        assert_eq!(block_span(9, 12), 1);
        assert_eq!(block_span(8, 11), 1);
        assert_eq!(block_span(0, 3), 1);
    }

    #[test]
    fn sequences_cycle() {
        assert_eq!(cycle(&MONDRIAN_COLS, 14)[12..], [2.0, 4.0]);
        assert_eq!(cycle(&MONDRIAN_ROWS, 2), vec![3.0, 1.0]);
    }
}
