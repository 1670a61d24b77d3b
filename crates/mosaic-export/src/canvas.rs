#![forbid(unsafe_code)]

//! Output geometry.
//!
//! A [`Canvas`] resolves the snapshot's current track weights against the
//! output width, the aspect ratio and the backdrop's gap and border. Both
//! exporters draw from the same canvas so their geometry agrees.

use mosaic_core::geometry::{CellRegion, TrackSpan, resolve_tracks};
use mosaic_runtime::VisualState;

use crate::error::ExportError;

/// Axis-aligned rectangle in output units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Largest centered square inside the rectangle, as `(x, y, side)`.
    ///
    /// Matches `preserveAspectRatio="xMidYMid meet"` for a square viewBox.
    pub fn fitted_square(&self) -> (f64, f64, f64) {
        let side = self.w.min(self.h);
        (
            self.x + (self.w - side) / 2.0,
            self.y + (self.h - side) / 2.0,
            side,
        )
    }
}

/// Resolved output geometry for one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    border: f64,
    cols: Vec<TrackSpan>,
    rows: Vec<TrackSpan>,
}

impl Canvas {
    /// Lay out `state` on a canvas `width` units wide.
    pub fn new(state: &VisualState, width: f64) -> Result<Self, ExportError> {
        let height = state.ratio().height_for(width);
        if !(width.is_finite() && height.is_finite() && width >= 1.0 && height >= 1.0) {
            return Err(ExportError::Degenerate { width, height });
        }
        let border = state.backdrop.border.max(0.0);
        let gap = state.backdrop.gap.max(0.0);
        let cols = resolve_tracks(&state.cols, width - 2.0 * border, gap);
        let rows = resolve_tracks(&state.rows, height - 2.0 * border, gap);
        Ok(Self {
            width,
            height,
            border,
            cols,
            rows,
        })
    }

    /// Rectangle covered by `region`, including the gaps it spans.
    ///
    /// Regions outside the resolved tracks get an empty rectangle.
    pub fn rect(&self, region: CellRegion) -> Rect {
        let span = |tracks: &[TrackSpan], start: usize, end: usize| match (
            tracks.get(start),
            tracks.get(end.saturating_sub(1)),
        ) {
            (Some(first), Some(last)) => (first.start, (last.end() - first.start).max(0.0)),
            _ => (0.0, 0.0),
        };
        let (x, w) = span(&self.cols, region.col, region.col_end());
        let (y, h) = span(&self.rows, region.row, region.row_end());
        Rect {
            x: self.border + x,
            y: self.border + y,
            w,
            h,
        }
    }
}

/// Format a coordinate with at most two decimals and no trailing zeros.
pub(crate) fn num(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
