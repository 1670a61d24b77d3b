#![forbid(unsafe_code)]

//! Continuous grid-proportion animation.
//!
//! Every row and column track carries three weights in a [`SizeVector`]:
//! the layout's rest weight (`base`), the value currently shown
//! (`current`), and the value being eased toward (`target`). Each frame the
//! [`ProportionAnimator`] recomputes `target` from `base` and the live
//! [`HoverState`], then moves `current` a fixed fraction of the remaining
//! distance.
//!
//! # States
//!
//! The animator starts [`AnimatorState::Idle`] and enters
//! [`AnimatorState::Running`] the first time it is seeded with a grid. There
//! is no transition back; the frame loop keeps ticking for the lifetime of
//! the animator.
//!
//! # Invariants
//!
//! 1. After [`ProportionAnimator::seed`], `base`, `current` and `target` of
//!    each axis have the grid's length.
//! 2. `target[i] == base[i]` after a recompute, except the hovered column
//!    and row which get `max(base[i], expansion)`.
//! 3. A frame whose delta is at or below epsilon snaps `current` to
//!    `target` and does not count as a change, so `current` converges
//!    exactly.
//!
//! # Failure Modes
//!
//! - Empty or length-mismatched vectors (a regeneration in progress): the
//!   frame is skipped and reported as [`FrameOutcome::Skipped`].

use serde::Serialize;

use crate::geometry::GridSpec;
use crate::sample::Sampler;
use crate::tuning::Tuning;

/// Linear interpolation from `a` toward `b` by fraction `t`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

// ---------------------------------------------------------------------------
// Axis / SizeVector / HoverState
// ---------------------------------------------------------------------------

/// One of the two track axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Column tracks (horizontal proportions).
    Cols,
    /// Row tracks (vertical proportions).
    Rows,
}

impl Axis {
    /// Number of tracks along this axis for `grid`.
    #[inline]
    pub const fn len_in(self, grid: GridSpec) -> usize {
        match self {
            Self::Cols => grid.cols,
            Self::Rows => grid.rows,
        }
    }
}

/// Rest, shown and eased-toward weights for one axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SizeVector {
    /// Rest weights set by the layout.
    pub base: Vec<f64>,
    /// Weights currently shown.
    pub current: Vec<f64>,
    /// Weights being eased toward.
    pub target: Vec<f64>,
}

impl SizeVector {
    /// All-ones vectors of length `len`.
    pub fn ones(len: usize) -> Self {
        Self {
            base: vec![1.0; len],
            current: vec![1.0; len],
            target: vec![1.0; len],
        }
    }

    /// Track count, taken from `current`.
    #[inline]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Whether the vector has no tracks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Whether all three sequences have length `len` and it is non-zero.
    pub fn is_consistent(&self, len: usize) -> bool {
        len > 0 && self.base.len() == len && self.current.len() == len && self.target.len() == len
    }
}

/// The hovered track coordinates, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HoverState {
    /// Hovered column.
    pub col: Option<usize>,
    /// Hovered row.
    pub row: Option<usize>,
}

impl HoverState {
    /// Hover at `(row, col)`.
    pub const fn at(row: usize, col: usize) -> Self {
        Self {
            col: Some(col),
            row: Some(row),
        }
    }

    /// Whether nothing is hovered.
    pub const fn is_clear(&self) -> bool {
        self.col.is_none() && self.row.is_none()
    }
}

// ---------------------------------------------------------------------------
// Config / outcome
// ---------------------------------------------------------------------------

/// Animator parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatorConfig {
    /// Fraction of the remaining distance covered per frame.
    pub rate: f64,
    /// Target floor for the hovered column and row.
    pub expansion: f64,
    /// Deltas at or below this snap to the target.
    pub epsilon: f64,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self::from_tuning(&Tuning::default())
    }
}

impl AnimatorConfig {
    /// Take the animation numbers from `tuning`.
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            rate: tuning.grid_lerp,
            expansion: tuning.mouse_expansion,
            epsilon: tuning.epsilon.abs(),
        }
    }
}

/// Lifecycle state of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimatorState {
    /// No frame loop scheduled yet.
    #[default]
    Idle,
    /// Frame loop running.
    Running,
}

/// Result of one [`ProportionAnimator::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The animator was never seeded.
    Idle,
    /// Vectors were empty or length-mismatched; nothing was touched.
    Skipped,
    /// No track moved beyond epsilon; nothing to push.
    Settled,
    /// Track sizes should be pushed to the render sink.
    Push,
}

impl FrameOutcome {
    /// Whether the caller should apply the current tracks.
    #[inline]
    pub const fn needs_push(self) -> bool {
        matches!(self, Self::Push)
    }
}

// ---------------------------------------------------------------------------
// ProportionAnimator
// ---------------------------------------------------------------------------

/// Eases row and column weights toward their targets, one frame at a time.
#[derive(Debug, Clone, Default)]
pub struct ProportionAnimator {
    config: AnimatorConfig,
    grid: GridSpec,
    cols: SizeVector,
    rows: SizeVector,
    hover: HoverState,
    state: AnimatorState,
    frames: u64,
}

impl ProportionAnimator {
    /// Create an idle animator.
    pub fn new(config: AnimatorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Lifecycle state.
    #[must_use]
    pub fn state(&self) -> AnimatorState {
        self.state
    }

    /// Frames ticked while running.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The grid the vectors were last seeded for.
    #[must_use]
    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    /// Size vector for `axis`.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> &SizeVector {
        match axis {
            Axis::Cols => &self.cols,
            Axis::Rows => &self.rows,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut SizeVector {
        match axis {
            Axis::Cols => &mut self.cols,
            Axis::Rows => &mut self.rows,
        }
    }

    /// Current column weights.
    #[must_use]
    pub fn current_cols(&self) -> &[f64] {
        &self.cols.current
    }

    /// Current row weights.
    #[must_use]
    pub fn current_rows(&self) -> &[f64] {
        &self.rows.current
    }

    /// Live hover state.
    #[must_use]
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    /// Bind the vectors to `grid`.
    ///
    /// An axis whose sizes already match the grid keeps them, so switching
    /// between layouts of the same size does not jump. Any other axis is
    /// reset to all-ones. The first seed starts the frame loop.
    pub fn seed(&mut self, grid: GridSpec) {
        self.grid = grid;
        for axis in [Axis::Cols, Axis::Rows] {
            let len = axis.len_in(grid);
            let v = self.axis_mut(axis);
            if !v.is_consistent(len) {
                *v = SizeVector::ones(len);
            }
        }
        if self.hover.col.is_some_and(|c| c >= grid.cols) || self.hover.row.is_some_and(|r| r >= grid.rows)
        {
            self.hover = HoverState::default();
        }
        if self.state == AnimatorState::Idle {
            self.state = AnimatorState::Running;
            tracing::debug!(grid = %grid, "proportion animator started");
        }
    }

    /// Replace the rest weights of `axis`.
    ///
    /// A length that disagrees with the seeded grid leaves the axis
    /// inconsistent until the next [`seed`](Self::seed); ticks in between
    /// are skipped.
    pub fn set_base(&mut self, axis: Axis, weights: Vec<f64>) {
        self.axis_mut(axis).base = weights;
    }

    /// Overwrite one rest weight. Out-of-range indices are ignored.
    pub fn set_base_at(&mut self, axis: Axis, index: usize, weight: f64) {
        if let Some(slot) = self.axis_mut(axis).base.get_mut(index) {
            *slot = weight;
        }
    }

    /// Set the hovered track coordinates.
    pub fn set_hover(&mut self, row: usize, col: usize) {
        self.hover = HoverState::at(row, col);
    }

    /// Clear the hover coordinates.
    pub fn clear_hover(&mut self) {
        self.hover = HoverState::default();
    }

    /// Overwrite every target with a uniform draw from `[low, high)`.
    ///
    /// `base` is untouched. The next recompute pulls targets back to rest
    /// unless the caller reports the grid animation as active.
    pub fn randomize_targets<S: Sampler + ?Sized>(&mut self, low: f64, high: f64, sampler: &mut S) {
        for v in [&mut self.cols, &mut self.rows] {
            for t in &mut v.target {
                *t = sampler.range(low, high);
            }
        }
    }

    /// Reset targets to `base`, then apply hover expansion.
    pub fn recompute_targets(&mut self) {
        let expansion = self.config.expansion;
        let hover = self.hover;
        for (v, hovered) in [(&mut self.cols, hover.col), (&mut self.rows, hover.row)] {
            let n = v.base.len().min(v.target.len());
            v.target[..n].copy_from_slice(&v.base[..n]);
            if let Some(i) = hovered.filter(|&i| i < n) {
                v.target[i] = v.base[i].max(expansion);
            }
        }
    }

    fn is_consistent(&self) -> bool {
        self.cols.is_consistent(self.grid.cols) && self.rows.is_consistent(self.grid.rows)
    }

    /// Advance one frame.
    ///
    /// With `grid_animating` set, targets written by the grid-reshape timer
    /// are left alone and the tracks are always pushed.
    pub fn tick(&mut self, grid_animating: bool) -> FrameOutcome {
        if self.state == AnimatorState::Idle {
            return FrameOutcome::Idle;
        }
        if !self.is_consistent() {
            tracing::debug!(
                grid = %self.grid,
                cols = self.cols.len(),
                rows = self.rows.len(),
                "size vectors inconsistent, skipping frame"
            );
            return FrameOutcome::Skipped;
        }
        self.frames += 1;

        if !grid_animating {
            self.recompute_targets();
        }

        let AnimatorConfig { rate, epsilon, .. } = self.config;
        let mut changed = false;
        for v in [&mut self.cols, &mut self.rows] {
            for (cur, &tgt) in v.current.iter_mut().zip(&v.target) {
                if (tgt - *cur).abs() <= epsilon {
                    *cur = tgt;
                } else {
                    *cur = lerp(*cur, tgt, rate);
                    changed = true;
                }
            }
        }

        tracing::trace!(frame = self.frames, changed, grid_animating, "animator tick");
        if changed || grid_animating {
            FrameOutcome::Push
        } else {
            FrameOutcome::Settled
        }
    }

    /// Whether every track sits on its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        [&self.cols, &self.rows]
            .iter()
            .all(|v| v.current.iter().zip(&v.target).all(|(c, t)| (t - c).abs() <= self.config.epsilon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::ScriptedSampler;

    fn running(grid: GridSpec) -> ProportionAnimator {
        let mut a = ProportionAnimator::new(AnimatorConfig::default());
        a.seed(grid);
        a
    }

    #[test]
    fn lerp_basics() {
        assert_eq!(lerp(2.0, 2.0, 0.5), 2.0);
        assert!((lerp(0.0, 10.0, 0.12) - 1.2).abs() < 1e-12);
        assert!((lerp(10.0, 0.0, 0.5) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn idle_until_seeded() {
        let mut a = ProportionAnimator::new(AnimatorConfig::default());
        assert_eq!(a.state(), AnimatorState::Idle);
        assert_eq!(a.tick(false), FrameOutcome::Idle);
        a.seed(GridSpec::new(3, 2));
        assert_eq!(a.state(), AnimatorState::Running);
        assert_eq!(a.axis(Axis::Cols), &SizeVector::ones(3));
        assert_eq!(a.axis(Axis::Rows), &SizeVector::ones(2));
    }

    #[test]
    fn seed_preserves_matching_lengths() {
        let mut a = running(GridSpec::new(3, 3));
        a.set_base(Axis::Cols, vec![2.0, 1.0, 1.0]);
        for _ in 0..10 {
            a.tick(false);
        }
        let before = a.current_cols().to_vec();
        a.seed(GridSpec::new(3, 3));
        assert_eq!(a.current_cols(), before.as_slice());
    }

    #[test]
    fn seed_resets_on_size_change() {
        let mut a = running(GridSpec::new(3, 3));
        a.set_base(Axis::Cols, vec![2.0, 1.0, 1.0]);
        a.tick(false);
        a.seed(GridSpec::new(5, 3));
        assert_eq!(a.axis(Axis::Cols), &SizeVector::ones(5));
    }

    #[test]
    fn mismatched_base_skips_frame() {
        let mut a = running(GridSpec::new(3, 3));
        a.set_base(Axis::Rows, vec![1.0; 4]);
        assert_eq!(a.tick(false), FrameOutcome::Skipped);
        assert_eq!(a.frames(), 0);
    }

    #[test]
    fn hover_expands_one_column_and_row() {
        let mut a = running(GridSpec::new(4, 4));
        a.set_base(Axis::Cols, vec![1.0, 5.0, 1.0, 1.0]);
        a.set_hover(2, 1);
        a.recompute_targets();
        assert_eq!(a.axis(Axis::Cols).target, vec![1.0, 5.0, 1.0, 1.0]);
        assert_eq!(a.axis(Axis::Rows).target, vec![1.0, 1.0, 3.0, 1.0]);

        a.clear_hover();
        a.recompute_targets();
        assert_eq!(a.axis(Axis::Rows).target, vec![1.0; 4]);
    }

    #[test]
    fn out_of_range_hover_is_ignored() {
        let mut a = running(GridSpec::new(2, 2));
        a.set_hover(9, 9);
        a.recompute_targets();
        assert_eq!(a.axis(Axis::Cols).target, vec![1.0, 1.0]);
    }

    #[test]
    fn converges_within_epsilon() {
        let mut a = running(GridSpec::new(2, 2));
        a.set_base(Axis::Cols, vec![4.0, 0.3]);
        let mut frames = 0;
        while a.tick(false) == FrameOutcome::Push {
            frames += 1;
            assert!(frames < 500, "did not settle");
        }
        assert!(a.is_settled());
        assert_eq!(a.current_cols(), &[4.0, 0.3]);
        assert_eq!(a.tick(false), FrameOutcome::Settled);
    }

    #[test]
    fn grid_animating_always_pushes_and_keeps_targets() {
        let mut a = running(GridSpec::new(2, 2));
        let mut s = ScriptedSampler::constant(0.5);
        a.randomize_targets(0.0, 5.0, &mut s);
        assert_eq!(a.axis(Axis::Cols).target, vec![2.5, 2.5]);
        assert_eq!(a.tick(true), FrameOutcome::Push);
        assert_eq!(a.axis(Axis::Cols).target, vec![2.5, 2.5]);
        assert_eq!(a.axis(Axis::Cols).base, vec![1.0, 1.0]);
    }

    #[test]
    fn set_base_at_ignores_out_of_range() {
        let mut a = running(GridSpec::new(2, 2));
        a.set_base_at(Axis::Rows, 1, 6.0);
        a.set_base_at(Axis::Rows, 7, 6.0);
        assert_eq!(a.axis(Axis::Rows).base, vec![1.0, 6.0]);
    }
}
