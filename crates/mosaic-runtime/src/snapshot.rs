#![forbid(unsafe_code)]

//! Read-only snapshot of everything an exporter draws.

use mosaic_core::geometry::{AspectRatio, GridSpec};
use mosaic_layout::{Backdrop, LayoutMode, Placement};
use mosaic_style::{PaletteName, Rgb, Theme, Tool};
use serde::Serialize;

use crate::interaction::InteractionMode;

/// Process-wide selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Selections {
    pub mode: LayoutMode,
    pub palette: PaletteName,
    pub tool: Tool,
    pub interaction: InteractionMode,
    pub ratio: AspectRatio,
    pub theme: Theme,
}

/// The visible state of the grid at one instant.
///
/// Built by `Studio::snapshot`; owning it never borrows the studio, so
/// exporters cannot mutate anything.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualState {
    /// Strategy of the installed layout; `None` after a clear.
    pub layout: Option<LayoutMode>,
    pub selections: Selections,
    pub grid: GridSpec,
    pub placements: Vec<Placement>,
    /// Current (animated) column weights.
    pub cols: Vec<f64>,
    /// Current (animated) row weights.
    pub rows: Vec<f64>,
    pub backdrop: Backdrop,
}

impl VisualState {
    /// Output aspect ratio.
    pub fn ratio(&self) -> AspectRatio {
        self.selections.ratio
    }

    /// Export theme.
    pub fn theme(&self) -> Theme {
        self.selections.theme
    }

    /// Color behind the regions.
    pub fn backdrop_color(&self) -> Rgb {
        self.backdrop.resolve(self.selections.theme)
    }

    /// Color of empty regions.
    pub fn surface(&self) -> Rgb {
        self.selections.theme.surface()
    }
}
