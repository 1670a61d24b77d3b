#![forbid(unsafe_code)]

//! Fixed tuning constants.
//!
//! These are compile-time constants; [`Tuning`] gathers them so tests can
//! run the generators and the animator with different numbers.

use std::ops::Range;
use std::time::Duration;

/// Fraction of the remaining distance covered per animation frame.
pub const GRID_LERP: f64 = 0.12;

/// Period of the autonomous grid-reshape timer.
pub const GRID_INTERVAL: Duration = Duration::from_millis(800);

/// Period of the cell-reroll timer.
pub const SHAPE_INTERVAL: Duration = Duration::from_millis(400);

/// Minimum target weight for the hovered row and column.
pub const MOUSE_EXPANSION: f64 = 3.0;

/// Probability that a freshly placed region stays empty.
pub const EMPTY_CHANCE: f64 = 0.50;

/// Reserved pattern probability. No strategy consumes it.
pub const PATTERN_CHANCE: f64 = 0.15;

/// Deltas at or below this are snapped instead of interpolated.
pub const SETTLE_EPSILON: f64 = 0.001;

/// "Wide" base weight range used when a restyle reshapes a track.
pub const WIDE_RANGE: Range<f64> = 2.0..7.0;

/// "Narrow" base weight range used when a restyle reshapes a track.
pub const NARROW_RANGE: Range<f64> = 0.2..0.5;

/// Random base weight range for Chaos and Cubism layouts.
pub const BASE_WEIGHT_RANGE: Range<f64> = 0.5..2.5;

/// Range of targets written by the grid-reshape timer.
pub const AUTO_TARGET_RANGE: Range<f64> = 0.0..5.0;

/// Regions restyled per cell-reroll firing.
pub const REROLL_BATCH: usize = 3;

/// Tunable numbers for generation and animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    /// Interpolation rate per frame.
    pub grid_lerp: f64,
    /// Grid-reshape timer period.
    pub grid_interval: Duration,
    /// Cell-reroll timer period.
    pub shape_interval: Duration,
    /// Hover expansion floor.
    pub mouse_expansion: f64,
    /// Empty-region probability.
    pub empty_chance: f64,
    /// Reserved, unused.
    pub pattern_chance: f64,
    /// Animator settle epsilon.
    pub epsilon: f64,
    /// Wide reshape range.
    pub wide: Range<f64>,
    /// Narrow reshape range.
    pub narrow: Range<f64>,
    /// Random base weights.
    pub base_weight: Range<f64>,
    /// Grid-reshape targets.
    pub auto_target: Range<f64>,
    /// Regions restyled per reroll firing.
    pub reroll_batch: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            grid_lerp: GRID_LERP,
            grid_interval: GRID_INTERVAL,
            shape_interval: SHAPE_INTERVAL,
            mouse_expansion: MOUSE_EXPANSION,
            empty_chance: EMPTY_CHANCE,
            pattern_chance: PATTERN_CHANCE,
            epsilon: SETTLE_EPSILON,
            wide: WIDE_RANGE,
            narrow: NARROW_RANGE,
            base_weight: BASE_WEIGHT_RANGE,
            auto_target: AUTO_TARGET_RANGE,
            reroll_batch: REROLL_BATCH,
        }
    }
}

impl Tuning {
    /// Set the empty-region probability (builder).
    #[must_use]
    pub fn with_empty_chance(mut self, chance: f64) -> Self {
        self.empty_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Set the interpolation rate (builder).
    #[must_use]
    pub fn with_grid_lerp(mut self, rate: f64) -> Self {
        self.grid_lerp = rate.clamp(0.0, 1.0);
        self
    }

    /// Probability that a freshly placed region is filled.
    #[inline]
    pub fn fill_chance(&self) -> f64 {
        1.0 - self.empty_chance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let t = Tuning::default();
        assert_eq!(t.grid_lerp, 0.12);
        assert_eq!(t.grid_interval, Duration::from_millis(800));
        assert_eq!(t.shape_interval, Duration::from_millis(400));
        assert_eq!(t.mouse_expansion, 3.0);
        assert_eq!(t.empty_chance, 0.5);
        assert_eq!(t.pattern_chance, 0.15);
        assert_eq!(t.reroll_batch, 3);
    }

    #[test]
    fn builders_clamp() {
        let t = Tuning::default().with_empty_chance(2.0).with_grid_lerp(-1.0);
        assert_eq!(t.empty_chance, 1.0);
        assert_eq!(t.grid_lerp, 0.0);
        assert_eq!(t.fill_chance(), 0.0);
    }
}
