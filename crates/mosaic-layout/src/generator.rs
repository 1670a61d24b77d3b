#![forbid(unsafe_code)]

//! Layout generation entry point.

use mosaic_core::geometry::GridSpec;
use mosaic_core::sample::Sampler;
use mosaic_core::tuning::Tuning;
use mosaic_style::{PaletteName, StyleAssigner, Tool};

use crate::layout::Layout;
use crate::mode::LayoutMode;
use crate::strategy;

/// What to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRequest {
    pub mode: LayoutMode,
    pub grid: GridSpec,
    pub palette: PaletteName,
    /// Tool used for randomly painted regions (Chaos, Concentric).
    pub tool: Tool,
}

impl LayoutRequest {
    /// Request `mode` on its default grid.
    pub fn new(mode: LayoutMode, palette: PaletteName, tool: Tool) -> Self {
        Self {
            mode,
            grid: mode.default_grid(),
            palette,
            tool,
        }
    }

    /// Override the grid size (builder).
    #[must_use]
    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.grid = grid;
        self
    }
}

/// Builds layouts.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    tuning: Tuning,
    assigner: StyleAssigner,
}

impl Generator {
    /// Create a generator.
    pub fn new(tuning: Tuning, assigner: StyleAssigner) -> Self {
        Self { tuning, assigner }
    }

    /// Tuning numbers in use.
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Style assigner in use.
    pub fn assigner(&self) -> &StyleAssigner {
        &self.assigner
    }

    /// Build a fresh layout. Any previous layout is irrelevant; nothing is
    /// carried over.
    pub fn generate<S: Sampler>(&self, request: &LayoutRequest, sampler: &mut S) -> Layout {
        let span = tracing::info_span!(
            "layout.generate",
            mode = %request.mode,
            rows = request.grid.rows,
            cols = request.grid.cols
        );
        let _guard = span.enter();

        let layout = match request.mode {
            LayoutMode::Chaos | LayoutMode::Concentric => strategy::chaos::build(self, request, sampler),
            LayoutMode::Chess => strategy::chess::build(request),
            LayoutMode::Mondrian => strategy::mondrian::build(request, sampler),
            LayoutMode::Cubism => strategy::cubism::build(self, request, sampler),
            LayoutMode::Glyph => strategy::glyph::build(self, request, sampler),
        };
        debug_assert_eq!(layout.validate(), Ok(()));

        tracing::debug!(
            regions = layout.placements.len(),
            filled = layout.filled_count(),
            "layout generated"
        );
        layout
    }
}
