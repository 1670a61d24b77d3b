#![forbid(unsafe_code)]

//! The application-state struct and its frame loop.
//!
//! [`Studio`] owns every piece of mutable state: selections, the installed
//! regions and their styles, the proportion animator, and the two interval
//! timers. A host drives it by forwarding user actions and calling
//! [`Studio::advance`] once per frame.
//!
//! # Regeneration
//!
//! Installing a layout is atomic from the point of view of callers: both
//! timers stop, the sink is cleared and the style store moves to a new
//! generation before any new region is mounted. Pointer events carrying
//! ids or handles of the previous generation resolve to nothing and are
//! dropped.
//!
//! # Example
//!
//! ```
//! use mosaic_runtime::{RecordingSink, Studio};
//! use mosaic_layout::LayoutMode;
//! use std::time::Duration;
//!
//! let mut studio = Studio::with_seed(RecordingSink::new(), 7);
//! studio.start();
//! studio.select_layout(LayoutMode::Chess);
//! let report = studio.advance(Duration::from_millis(16));
//! assert_eq!(studio.snapshot().placements.len(), 144);
//! assert!(!report.outcome.needs_push());
//! ```

use std::time::Duration;

use mosaic_core::animation::{AnimatorConfig, Axis, FrameOutcome, ProportionAnimator};
use mosaic_core::geometry::{AspectRatio, GridSpec};
use mosaic_core::sample::Sampler;
use mosaic_core::timer::IntervalTimer;
use mosaic_layout::{Backdrop, Generator, Layout, LayoutMode, LayoutRequest};
use mosaic_style::{CellStyle, PaletteName, Theme, Tool};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::interaction::{InteractionMode, PointerKind, PointerOutcome};
use crate::sink::{CellHandle, RenderSink};
use crate::snapshot::{Selections, VisualState};
use crate::store::{RegionId, StyleStore};

/// Grid installed by [`Studio::clear`].
const BLANK_GRID: GridSpec = GridSpec::DEFAULT;

/// What one call to [`Studio::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Animator result for the frame.
    pub outcome: FrameOutcome,
    /// Grid-reshape timer firings handled.
    pub grid_steps: u32,
    /// Regions restyled by the cell-reroll timer.
    pub rerolls: u32,
}

/// Application state: selections, regions, animation and timers.
#[derive(Debug)]
pub struct Studio<R: RenderSink, S: Sampler = SmallRng> {
    generator: Generator,
    animator: ProportionAnimator,
    store: StyleStore,
    sink: R,
    sampler: S,
    selections: Selections,
    layout: Option<LayoutMode>,
    grid: GridSpec,
    backdrop: Backdrop,
    grid_timer: IntervalTimer,
    shape_timer: IntervalTimer,
}

impl<R: RenderSink> Studio<R, SmallRng> {
    /// Create a studio whose random decisions replay from `seed`.
    pub fn with_seed(sink: R, seed: u64) -> Self {
        Self::new(sink, SmallRng::seed_from_u64(seed))
    }
}

impl<R: RenderSink, S: Sampler> Studio<R, S> {
    /// Create a studio with default tuning. Nothing is mounted until
    /// [`start`](Self::start).
    pub fn new(sink: R, sampler: S) -> Self {
        Self::with_generator(sink, sampler, Generator::default())
    }

    /// Create a studio with a custom generator (tuning and assigner).
    pub fn with_generator(sink: R, sampler: S, generator: Generator) -> Self {
        let tuning = generator.tuning();
        let animator = ProportionAnimator::new(AnimatorConfig::from_tuning(tuning));
        let grid_timer = IntervalTimer::new("grid", tuning.grid_interval);
        let shape_timer = IntervalTimer::new("shape", tuning.shape_interval);
        Self {
            generator,
            animator,
            store: StyleStore::new(),
            sink,
            sampler,
            selections: Selections::default(),
            layout: None,
            grid: BLANK_GRID,
            backdrop: Backdrop::default(),
            grid_timer,
            shape_timer,
        }
    }

    /// Generate the first layout for the current selections.
    pub fn start(&mut self) {
        self.regenerate();
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Current selections.
    #[must_use]
    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    /// The render sink.
    #[must_use]
    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Mutable access to the render sink.
    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    /// The proportion animator.
    #[must_use]
    pub fn animator(&self) -> &ProportionAnimator {
        &self.animator
    }

    /// The style store of the installed layout.
    #[must_use]
    pub fn store(&self) -> &StyleStore {
        &self.store
    }

    /// Installed grid.
    #[must_use]
    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    /// Whether the grid-reshape timer is running.
    #[must_use]
    pub fn grid_animation(&self) -> bool {
        self.grid_timer.running()
    }

    /// Whether the cell-reroll timer is running.
    #[must_use]
    pub fn shape_animation(&self) -> bool {
        self.shape_timer.running()
    }

    // -----------------------------------------------------------------------
    // Selections
    // -----------------------------------------------------------------------

    /// Switch layout mode and regenerate.
    pub fn select_layout(&mut self, mode: LayoutMode) {
        self.selections.mode = mode;
        self.regenerate();
    }

    /// Advance to the next layout mode and regenerate.
    pub fn cycle_layout(&mut self) -> LayoutMode {
        let next = self.selections.mode.next();
        self.select_layout(next);
        next
    }

    /// Regenerate the current layout mode.
    pub fn reroll(&mut self) {
        self.regenerate();
    }

    /// Switch palette and regenerate.
    pub fn set_palette(&mut self, palette: PaletteName) {
        self.selections.palette = palette;
        self.regenerate();
    }

    /// Replace every selection at once without regenerating.
    ///
    /// Call [`start`](Self::start) or [`reroll`](Self::reroll) afterwards
    /// to build a layout for them with a single generation.
    pub fn configure(&mut self, selections: Selections) {
        self.selections = selections;
    }

    /// Switch the restyle tool. Existing regions keep their styles.
    pub fn set_tool(&mut self, tool: Tool) {
        self.selections.tool = tool;
    }

    /// Switch between click and hover interaction.
    pub fn set_interaction(&mut self, interaction: InteractionMode) {
        self.selections.interaction = interaction;
    }

    /// Set the export aspect ratio.
    pub fn set_ratio(&mut self, ratio: AspectRatio) {
        self.selections.ratio = ratio;
    }

    /// Advance to the next export aspect ratio.
    pub fn cycle_ratio(&mut self) -> AspectRatio {
        self.selections.ratio = self.selections.ratio.next();
        self.selections.ratio
    }

    /// Set the export theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.selections.theme = theme;
    }

    /// Flip the export theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.selections.theme = self.selections.theme.toggled();
        self.selections.theme
    }

    // -----------------------------------------------------------------------
    // Timers
    // -----------------------------------------------------------------------

    /// Start or stop the grid-reshape timer. Returns `false` when already
    /// in the requested state.
    pub fn set_grid_animation(&mut self, on: bool) -> bool {
        if on {
            self.grid_timer.start()
        } else {
            self.grid_timer.stop()
        }
    }

    /// Toggle the grid-reshape timer, returning the new state.
    pub fn toggle_grid_animation(&mut self) -> bool {
        self.grid_timer.toggle()
    }

    /// Start or stop the cell-reroll timer. Returns `false` when already
    /// in the requested state.
    pub fn set_shape_animation(&mut self, on: bool) -> bool {
        if on {
            self.shape_timer.start()
        } else {
            self.shape_timer.stop()
        }
    }

    /// Toggle the cell-reroll timer, returning the new state.
    pub fn toggle_shape_animation(&mut self) -> bool {
        self.shape_timer.toggle()
    }

    // -----------------------------------------------------------------------
    // Regeneration
    // -----------------------------------------------------------------------

    /// Replace the grid with a blank 12×12 canvas.
    pub fn clear(&mut self) {
        self.install(Layout::blank(BLANK_GRID));
    }

    fn regenerate(&mut self) {
        let request = LayoutRequest::new(
            self.selections.mode,
            self.selections.palette,
            self.selections.tool,
        );
        let layout = self.generator.generate(&request, &mut self.sampler);
        self.install(layout);
    }

    fn install(&mut self, layout: Layout) {
        self.grid_timer.stop();
        self.shape_timer.stop();

        self.sink.clear();
        let ids = self.store.replace(&layout.placements);

        self.animator.seed(layout.grid);
        self.animator.set_base(Axis::Cols, layout.base_cols);
        self.animator.set_base(Axis::Rows, layout.base_rows);
        self.animator.clear_hover();

        for (id, placement) in ids.into_iter().zip(&layout.placements) {
            let handle = self.sink.mount_region(id, placement.region, &placement.style);
            self.store.set_handle(id, handle);
        }
        self.sink
            .apply_tracks(self.animator.current_cols(), self.animator.current_rows());

        self.layout = layout.mode;
        self.grid = layout.grid;
        self.backdrop = layout.backdrop;
        tracing::debug!(
            generation = self.store.generation(),
            regions = self.store.len(),
            grid = %self.grid,
            "layout installed"
        );
    }

    // -----------------------------------------------------------------------
    // Interaction
    // -----------------------------------------------------------------------

    /// Handle a pointer event addressed by region id.
    pub fn pointer(&mut self, id: RegionId, kind: PointerKind) -> PointerOutcome {
        let Some(region) = self.store.get(id).map(|r| r.region) else {
            tracing::debug!(%id, generation = self.store.generation(), "pointer event for stale region ignored");
            return PointerOutcome::Stale;
        };
        match kind {
            PointerKind::Enter => {
                self.animator.set_hover(region.row, region.col);
                if self.selections.interaction == InteractionMode::Hover {
                    self.restyle(id, true);
                    PointerOutcome::Restyled
                } else {
                    PointerOutcome::Hovered
                }
            }
            PointerKind::Leave => {
                self.animator.clear_hover();
                PointerOutcome::Hovered
            }
            PointerKind::Primary => {
                self.restyle(id, true);
                PointerOutcome::Restyled
            }
        }
    }

    /// Handle a pointer event addressed by sink handle.
    pub fn pointer_on_handle(&mut self, handle: CellHandle, kind: PointerKind) -> PointerOutcome {
        match self.sink.resolve(handle) {
            Some(id) => self.pointer(id, kind),
            None => {
                tracing::debug!(handle = handle.0, "pointer event for unknown handle ignored");
                PointerOutcome::Stale
            }
        }
    }

    /// Restyle one region with the active tool; with `resize`, also
    /// reshape the region's column and row.
    fn restyle(&mut self, id: RegionId, resize: bool) -> bool {
        let Some(stored) = self.store.get(id).copied() else {
            return false;
        };
        let tool = self.selections.tool;
        let assigner = self.generator.assigner();
        let style = CellStyle::from(assigner.assign(
            tool,
            self.selections.palette.palette(),
            &mut self.sampler,
        ));
        self.store.set_style(id, style);
        if let Some(handle) = stored.handle {
            self.sink.restyle(handle, &style);
        }
        if resize && let Some(reshape) = assigner.reshape(tool, &mut self.sampler) {
            self.animator
                .set_base_at(Axis::Cols, stored.region.col, reshape.col_weight);
            self.animator
                .set_base_at(Axis::Rows, stored.region.row, reshape.row_weight);
        }
        true
    }

    // -----------------------------------------------------------------------
    // Frame loop
    // -----------------------------------------------------------------------

    /// Run one frame that took `dt`.
    ///
    /// Timers fire first, then the animator ticks. Track sizes are pushed
    /// to the sink only when the tick asks for it.
    pub fn advance(&mut self, dt: Duration) -> FrameReport {
        let tuning = self.generator.tuning();
        let (low, high) = (tuning.auto_target.start, tuning.auto_target.end);
        let batch = tuning.reroll_batch;

        let grid_steps = self.grid_timer.advance(dt);
        for _ in 0..grid_steps {
            self.animator.randomize_targets(low, high, &mut self.sampler);
        }

        let mut rerolls = 0;
        for _ in 0..self.shape_timer.advance(dt) {
            for _ in 0..batch {
                let index = self.sampler.index(self.store.len());
                if let Some(id) = self.store.id_at(index)
                    && self.restyle(id, false)
                {
                    rerolls += 1;
                }
            }
        }

        let outcome = self.animator.tick(self.grid_timer.running());
        if outcome.needs_push() {
            self.sink
                .apply_tracks(self.animator.current_cols(), self.animator.current_rows());
        }
        tracing::trace!(?outcome, grid_steps, rerolls, "frame");
        FrameReport {
            outcome,
            grid_steps,
            rerolls,
        }
    }

    /// Run frames of length `dt` until the animator settles, at most
    /// `max_frames` of them. Returns the number of frames run.
    ///
    /// A running grid timer retargets every firing, so with it on this
    /// usually runs the full budget.
    pub fn settle(&mut self, dt: Duration, max_frames: u32) -> u32 {
        for frame in 0..max_frames {
            match self.advance(dt).outcome {
                FrameOutcome::Settled | FrameOutcome::Idle => return frame + 1,
                FrameOutcome::Push | FrameOutcome::Skipped => {}
            }
        }
        max_frames
    }

    /// Copy out the visible state for export.
    #[must_use]
    pub fn snapshot(&self) -> VisualState {
        VisualState {
            layout: self.layout,
            selections: self.selections,
            grid: self.grid,
            placements: self.store.placements(),
            cols: self.animator.current_cols().to_vec(),
            rows: self.animator.current_rows().to_vec(),
            backdrop: self.backdrop,
        }
    }
}
