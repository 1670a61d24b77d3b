#![forbid(unsafe_code)]

//! Pluggable randomness.
//!
//! Every random decision in Mosaic draws uniform values in `[0, 1)` from a
//! [`Sampler`]. Production code uses [`SmallRng`]; tests inject a
//! [`ScriptedSampler`] to replay a fixed sequence and pin down exactly
//! which branch a generator takes.
//!
//! [`WeightedChoice`] turns one draw into a choice among named categories
//! by cumulative thresholds.

use rand::Rng;
use rand::rngs::SmallRng;

// ---------------------------------------------------------------------------
// Sampler
// ---------------------------------------------------------------------------

/// A source of uniform draws in `[0, 1)`.
pub trait Sampler {
    /// Next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Return `true` with probability `p`.
    ///
    /// `p <= 0.0` never succeeds; `p >= 1.0` always does.
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }

    /// Uniform value in `[low, high)`.
    fn range(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }

    /// Uniform index in `[0, len)`. Returns 0 when `len` is 0.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_unit() * len as f64) as usize).min(len - 1)
    }

    /// Pick a uniformly random element, or `None` for an empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.index(items.len())])
        }
    }
}

impl Sampler for SmallRng {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

// ---------------------------------------------------------------------------
// ScriptedSampler
// ---------------------------------------------------------------------------

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Values are clamped into `[0, 1)`. An empty script always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSampler {
    values: Vec<f64>,
    cursor: usize,
    draws: u64,
}

impl ScriptedSampler {
    /// Create a sampler replaying `values` in order.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self {
            values,
            cursor: 0,
            draws: 0,
        }
    }

    /// A sampler that always yields `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Total number of draws taken so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl Sampler for ScriptedSampler {
    fn next_unit(&mut self) -> f64 {
        self.draws += 1;
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        v
    }
}

// ---------------------------------------------------------------------------
// WeightedChoice
// ---------------------------------------------------------------------------

/// A weighted choice over named categories.
///
/// One draw is scaled by the total weight and matched against the running
/// (cumulative) weights in insertion order.
#[derive(Debug, Clone)]
pub struct WeightedChoice<T> {
    entries: Vec<(&'static str, f64, T)>,
    total: f64,
}

impl<T> Default for WeightedChoice<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            total: 0.0,
        }
    }
}

/// Rounding slack on accumulated category edges.
const EDGE_EPSILON: f64 = 1e-9;

impl<T> WeightedChoice<T> {
    /// Create an empty choice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named category (builder). Non-positive weights are ignored.
    #[must_use]
    pub fn with(mut self, name: &'static str, weight: f64, value: T) -> Self {
        self.push(name, weight, value);
        self
    }

    /// Add a named category. Non-positive weights are ignored.
    pub fn push(&mut self, name: &'static str, weight: f64, value: T) {
        if weight > 0.0 && weight.is_finite() {
            self.total += weight;
            self.entries.push((name, weight, value));
        }
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no categories were added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.total
    }

    /// Weight of the category named `name`, if present.
    pub fn weight_of(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _, _)| *n == name)
            .map(|(_, w, _)| *w)
    }

    /// Choose a category with one draw, returning its name and value.
    pub fn pick_named<S: Sampler + ?Sized>(&self, sampler: &mut S) -> Option<(&'static str, &T)> {
        let last = self.entries.last()?;
        let draw = sampler.next_unit();
        // Weights that already sum to one compare against the raw draw so
        // the category edges sit on the written thresholds.
        let threshold = if (self.total - 1.0).abs() <= EDGE_EPSILON {
            draw
        } else {
            draw * self.total
        };
        let mut cumulative = 0.0;
        for (name, weight, value) in &self.entries {
            cumulative += weight;
            if threshold < cumulative - EDGE_EPSILON {
                return Some((name, value));
            }
        }
        Some((last.0, &last.2))
    }

    /// Choose a category with one draw.
    pub fn pick<S: Sampler + ?Sized>(&self, sampler: &mut S) -> Option<&T> {
        self.pick_named(sampler).map(|(_, value)| value)
    }
}
