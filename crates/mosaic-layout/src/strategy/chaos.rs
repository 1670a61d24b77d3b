#![forbid(unsafe_code)]

//! Chaos: random spans up to 4 columns by 3 rows.
//!
//! The column span comes from one draw checked against descending
//! thresholds; the row span from up to two draws. Spans that would overflow
//! or collide collapse to 1×1. Each region is painted with the active tool
//! with probability `1 - EMPTY_CHANCE`.

use mosaic_core::geometry::CellRegion;
use mosaic_core::sample::Sampler;

use crate::generator::{Generator, LayoutRequest};
use crate::layout::{Backdrop, Layout, Placement};
use crate::occupancy::Occupancy;

use super::random_weights;

/// `(threshold, span)`: a draw above `threshold` asks for `span` columns.
const COL_SPANS: [(f64, usize); 3] = [(0.92, 4), (0.85, 3), (0.75, 2)];

/// `(threshold, span)`: each entry takes its own draw.
const ROW_SPANS: [(f64, usize); 2] = [(0.88, 3), (0.78, 2)];

fn col_span<S: Sampler>(col: usize, cols: usize, sampler: &mut S) -> usize {
    let draw = sampler.next_unit();
    COL_SPANS
        .iter()
        .find(|&&(threshold, span)| draw > threshold && col + span - 1 < cols)
        .map_or(1, |&(_, span)| span)
}

fn row_span<S: Sampler>(row: usize, rows: usize, sampler: &mut S) -> usize {
    for (threshold, span) in ROW_SPANS {
        if sampler.next_unit() > threshold && row + span - 1 < rows {
            return span;
        }
    }
    1
}

pub(crate) fn build<S: Sampler>(generator: &Generator, request: &LayoutRequest, sampler: &mut S) -> Layout {
    let grid = request.grid;
    let tuning = generator.tuning();
    let palette = request.palette.palette();

    let base_cols = random_weights(grid.cols, &tuning.base_weight, sampler);
    let base_rows = random_weights(grid.rows, &tuning.base_weight, sampler);

    let mut occupancy = Occupancy::new(grid);
    let mut placements = Vec::new();
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            if occupancy.is_occupied(row, col) {
                continue;
            }
            let span_cols = col_span(col, grid.cols, sampler);
            let span_rows = row_span(row, grid.rows, sampler);
            let region = occupancy.place(CellRegion::new(row, col, span_rows, span_cols));

            let mut placement = Placement::empty(region);
            if sampler.chance(tuning.fill_chance()) {
                placement.style = generator.assigner().assign(request.tool, palette, sampler).into();
            }
            placements.push(placement);
        }
    }

    Layout {
        mode: Some(request.mode),
        grid,
        placements,
        base_cols,
        base_rows,
        backdrop: Backdrop::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_core::sample::ScriptedSampler;

    #[test]
    fn col_span_thresholds() {
        let cases = [(0.95, 4), (0.90, 3), (0.80, 2), (0.50, 1)];
        for (draw, span) in cases {
            let mut s = ScriptedSampler::constant(draw);
            assert_eq!(col_span(0, 12, &mut s), span, "draw {draw}");
        }
    }

    #[test]
    fn col_span_respects_edge() {
        // 4 needs col < cols - 3; falls through to the next fitting span.
        let mut s = ScriptedSampler::constant(0.95);
        assert_eq!(col_span(9, 12, &mut s), 3);
        let mut s = ScriptedSampler::constant(0.95);
        assert_eq!(col_span(11, 12, &mut s), 1);
    }

    #[test]
    fn row_span_uses_second_draw() {
        let mut s = ScriptedSampler::new(vec![0.5, 0.8]);
        assert_eq!(row_span(0, 12, &mut s), 2);
        assert_eq!(s.draws(), 2);

        let mut s = ScriptedSampler::new(vec![0.9]);
        assert_eq!(row_span(0, 12, &mut s), 3);
        assert_eq!(s.draws(), 1);
    }

    #[test]
    fn row_span_at_bottom_edge() {
        let mut s = ScriptedSampler::constant(0.99);
        assert_eq!(row_span(11, 12, &mut s), 1);
        let mut s = ScriptedSampler::constant(0.99);
        assert_eq!(row_span(10, 12, &mut s), 2);
    }
}
