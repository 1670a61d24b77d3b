#![forbid(unsafe_code)]

//! Character preview of the grid.
//!
//! [`TextSink`] is a [`RenderSink`] that keeps just enough state to print
//! the grid as text: one character per region kind, with track widths
//! scaled from the latest applied sizes.

use mosaic_core::geometry::{CellRegion, GridSpec, resolve_tracks};
use mosaic_runtime::{CellHandle, RegionId, RenderSink};
use mosaic_style::{CellStyle, Fill, PatternKind, ShapeKind};

#[derive(Debug, Clone, Copy)]
struct Mounted {
    id: RegionId,
    region: CellRegion,
    style: CellStyle,
}

/// A render sink that draws into a character grid.
#[derive(Debug, Default)]
pub struct TextSink {
    mounted: Vec<Mounted>,
    // Handle of `mounted[0]`; handles are never reused across clears.
    first: u64,
    cols: Vec<f64>,
    rows: Vec<f64>,
}

impl TextSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mounted regions.
    pub fn mounted(&self) -> usize {
        self.mounted.len()
    }

    fn grid(&self) -> GridSpec {
        GridSpec::new(self.cols.len(), self.rows.len())
    }

    /// Render the grid `width` characters wide.
    ///
    /// Each row track gets lines in proportion to its weight, with the
    /// total height at half the width to offset tall terminal cells.
    pub fn render(&self, width: usize) -> String {
        let grid = self.grid();
        let col_edges = char_edges(&self.cols, width as f64);
        let row_edges = char_edges(&self.rows, (width / 2).max(grid.rows) as f64);
        let w = col_edges.last().copied().unwrap_or(0);
        let h = row_edges.last().copied().unwrap_or(0);

        let mut canvas = vec![vec![' '; w]; h];
        for m in &self.mounted {
            let (Some(&x0), Some(&x1), Some(&y0), Some(&y1)) = (
                col_edges.get(m.region.col),
                col_edges.get(m.region.col_end()),
                row_edges.get(m.region.row),
                row_edges.get(m.region.row_end()),
            ) else {
                continue;
            };
            let ch = symbol(&m.style);
            for line in &mut canvas[y0..y1] {
                for cell in &mut line[x0..x1] {
                    *cell = ch;
                }
            }
        }

        let mut out = String::with_capacity((w + 1) * h);
        for line in canvas {
            out.extend(line);
            out.push('\n');
        }
        out
    }

    /// Region id of the mounted region covering `(row, col)`.
    pub fn region_at(&self, row: usize, col: usize) -> Option<RegionId> {
        self.mounted
            .iter()
            .find(|m| m.region.contains(row, col))
            .map(|m| m.id)
    }
}

/// Track boundaries in characters, starting at 0. Rounding the cumulative
/// boundary keeps the total exact.
fn char_edges(weights: &[f64], extent: f64) -> Vec<usize> {
    std::iter::once(0)
        .chain(
            resolve_tracks(weights, extent, 0.0)
                .iter()
                .map(|t| t.end().round().max(0.0) as usize),
        )
        .collect()
}

/// One character per region kind.
fn symbol(style: &CellStyle) -> char {
    match style {
        CellStyle::Empty => '.',
        CellStyle::Filled(fill) => match *fill {
            Fill::Solid(_) => '#',
            Fill::Gradient(_) => '=',
            Fill::Pattern {
                pattern: PatternKind::Dots,
                ..
            } => ':',
            Fill::Pattern {
                pattern: PatternKind::Grid,
                ..
            } => '+',
            Fill::Shape { shape, .. } => match shape {
                ShapeKind::Circle => 'o',
                ShapeKind::Triangle => '^',
                ShapeKind::Rhombus => '*',
                ShapeKind::OutlineCircles => 'O',
                ShapeKind::NestedTriangles => 'A',
            },
            Fill::Glyph { glyph, .. } => glyph,
        },
    }
}

impl RenderSink for TextSink {
    fn apply_tracks(&mut self, cols: &[f64], rows: &[f64]) {
        self.cols = cols.to_vec();
        self.rows = rows.to_vec();
    }

    fn mount_region(&mut self, id: RegionId, region: CellRegion, style: &CellStyle) -> CellHandle {
        let handle = CellHandle(self.first + self.mounted.len() as u64);
        self.mounted.push(Mounted {
            id,
            region,
            style: *style,
        });
        handle
    }

    fn restyle(&mut self, handle: CellHandle, style: &CellStyle) {
        if let Some(m) = handle
            .0
            .checked_sub(self.first)
            .and_then(|i| self.mounted.get_mut(i as usize))
        {
            m.style = *style;
        }
    }

    fn clear(&mut self) {
        self.first += self.mounted.len() as u64;
        self.mounted.clear();
    }

    fn resolve(&self, handle: CellHandle) -> Option<RegionId> {
        let index = handle.0.checked_sub(self.first)?;
        self.mounted.get(index as usize).map(|m| m.id)
    }
}
