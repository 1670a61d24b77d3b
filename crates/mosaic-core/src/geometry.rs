#![forbid(unsafe_code)]

//! Grid coordinate space, rectangular regions, and track resolution.
//!
//! All coordinates are track indices (0-indexed, origin at top-left). A
//! [`CellRegion`] covers `span_rows × span_cols` tracks starting at
//! `(row, col)`; its end coordinates are exclusive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::selector::UnknownSelector;

// ---------------------------------------------------------------------------
// GridSpec
// ---------------------------------------------------------------------------

/// Dimensions of the track grid.
///
/// Both dimensions are at least 1; constructors clamp zero to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "GridDims")]
pub struct GridSpec {
    /// Number of column tracks.
    pub cols: usize,
    /// Number of row tracks.
    pub rows: usize,
}

impl GridSpec {
    /// The 12×12 grid most layout modes use.
    pub const DEFAULT: Self = Self::new(12, 12);

    /// Create a grid spec, clamping zero dimensions to 1.
    #[inline]
    pub const fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols: if cols == 0 { 1 } else { cols },
            rows: if rows == 0 { 1 } else { rows },
        }
    }

    /// Create an `n × n` grid.
    #[inline]
    pub const fn square(n: usize) -> Self {
        Self::new(n, n)
    }

    /// Total number of unit cells.
    #[inline]
    pub const fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Check if a unit cell lies inside the grid.
    #[inline]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

/// Unchecked wire form of [`GridSpec`]; deserialization clamps through
/// [`GridSpec::new`].
#[derive(Deserialize)]
struct GridDims {
    cols: usize,
    rows: usize,
}

impl From<GridDims> for GridSpec {
    fn from(dims: GridDims) -> Self {
        Self::new(dims.cols, dims.rows)
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

// ---------------------------------------------------------------------------
// CellRegion
// ---------------------------------------------------------------------------

/// A rectangular placement spanning one or more tracks in each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRegion {
    /// Top row (inclusive).
    pub row: usize,
    /// Left column (inclusive).
    pub col: usize,
    /// Number of rows covered (≥ 1).
    pub span_rows: usize,
    /// Number of columns covered (≥ 1).
    pub span_cols: usize,
}

impl CellRegion {
    /// Create a region; zero spans are clamped to 1.
    #[inline]
    pub const fn new(row: usize, col: usize, span_rows: usize, span_cols: usize) -> Self {
        Self {
            row,
            col,
            span_rows: if span_rows == 0 { 1 } else { span_rows },
            span_cols: if span_cols == 0 { 1 } else { span_cols },
        }
    }

    /// A 1×1 region at `(row, col)`.
    #[inline]
    pub const fn unit(row: usize, col: usize) -> Self {
        Self::new(row, col, 1, 1)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn row_end(&self) -> usize {
        self.row.saturating_add(self.span_rows)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn col_end(&self) -> usize {
        self.col.saturating_add(self.span_cols)
    }

    /// Number of unit cells covered.
    #[inline]
    pub const fn area(&self) -> usize {
        self.span_rows * self.span_cols
    }

    /// Whether this region covers exactly one cell.
    #[inline]
    pub const fn is_unit(&self) -> bool {
        self.span_rows == 1 && self.span_cols == 1
    }

    /// Check if a unit cell is covered by this region.
    #[inline]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row && row < self.row_end() && col >= self.col && col < self.col_end()
    }

    /// Check if the region lies entirely inside `grid`.
    #[inline]
    pub const fn fits(&self, grid: GridSpec) -> bool {
        self.row_end() <= grid.rows && self.col_end() <= grid.cols
    }

    /// Iterate the covered unit cells in row-major order as `(row, col)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let (row, col) = (self.row, self.col);
        let (row_end, col_end) = (self.row_end(), self.col_end());
        (row..row_end).flat_map(move |r| (col..col_end).map(move |c| (r, c)))
    }
}

impl fmt::Display for CellRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) span {}x{}",
            self.row, self.col, self.span_rows, self.span_cols
        )
    }
}

// ---------------------------------------------------------------------------
// Track resolution
// ---------------------------------------------------------------------------

/// A resolved track: offset and length along one axis, in output units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TrackSpan {
    /// Start offset.
    pub start: f64,
    /// Extent.
    pub len: f64,
}

impl TrackSpan {
    /// End offset (exclusive).
    #[inline]
    pub fn end(&self) -> f64 {
        self.start + self.len
    }
}

/// Resolve proportional track weights into concrete spans.
///
/// Weights behave like CSS `fr` units: after subtracting `gap` between
/// adjacent tracks, the remaining `extent` is shared in proportion to each
/// weight. Negative weights count as zero; if every weight is zero the
/// space is shared equally.
pub fn resolve_tracks(weights: &[f64], extent: f64, gap: f64) -> Vec<TrackSpan> {
    if weights.is_empty() {
        return Vec::new();
    }
    let gap = gap.max(0.0);
    let gaps = gap * (weights.len() - 1) as f64;
    let available = (extent - gaps).max(0.0);

    let clean: Vec<f64> = weights
        .iter()
        .map(|w| if w.is_finite() { w.max(0.0) } else { 0.0 })
        .collect();
    let total: f64 = clean.iter().sum();

    let mut spans = Vec::with_capacity(clean.len());
    let mut cursor = 0.0;
    for w in clean {
        let len = if total > 0.0 {
            available * w / total
        } else {
            available / weights.len() as f64
        };
        spans.push(TrackSpan { start: cursor, len });
        cursor += len + gap;
    }
    spans
}

// ---------------------------------------------------------------------------
// AspectRatio
// ---------------------------------------------------------------------------

/// Output canvas proportions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectRatio {
    /// 1:1.
    #[default]
    Square,
    /// 16:9.
    Widescreen,
    /// 4:5.
    Portrait,
}

impl AspectRatio {
    /// All ratios in cycle order.
    pub const ALL: [Self; 3] = [Self::Square, Self::Widescreen, Self::Portrait];

    /// Height for a given width.
    pub fn height_for(self, width: f64) -> f64 {
        match self {
            Self::Square => width,
            Self::Widescreen => width * 9.0 / 16.0,
            Self::Portrait => width * 5.0 / 4.0,
        }
    }

    /// The next ratio in cycle order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Square => Self::Widescreen,
            Self::Widescreen => Self::Portrait,
            Self::Portrait => Self::Square,
        }
    }

    /// Display label (`"16:9"`).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Widescreen => "16:9",
            Self::Portrait => "4:5",
        }
    }
}

impl FromStr for AspectRatio {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1:1" | "square" => Ok(Self::Square),
            "16:9" | "wide" | "widescreen" => Ok(Self::Widescreen),
            "4:5" | "portrait" => Ok(Self::Portrait),
            other => Err(UnknownSelector::new("aspect ratio", other)),
        }
    }
}
