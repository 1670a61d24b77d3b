#![forbid(unsafe_code)]

//! Cell style assignment.
//!
//! [`StyleAssigner::assign`] turns the active [`Tool`] and palette into a
//! [`Fill`]. A restyle may also reshape the grid: the touched region's
//! column and row each get a new base weight, either "wide" or "narrow"
//! with equal probability. [`ResizePolicy`] controls when that happens;
//! the glyph tool never reshapes.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use mosaic_core::sample::{Sampler, WeightedChoice};
use mosaic_core::selector::{UnknownSelector, parse_or_default};
use mosaic_core::tuning::Tuning;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::palette::{NEUTRAL, Palette};
use crate::style::{Fill, GLYPHS, Paint, PatternKind, ShapeKind};

// ---------------------------------------------------------------------------
// Tool
// ---------------------------------------------------------------------------

/// Rule set a restyle follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Weighted mix of every other category.
    #[default]
    Chaos,
    Solid,
    Gradient,
    Shape,
    Pattern,
    Glyph,
}

impl Tool {
    pub const ALL: [Self; 6] = [
        Self::Chaos,
        Self::Solid,
        Self::Gradient,
        Self::Shape,
        Self::Pattern,
        Self::Glyph,
    ];

    /// Lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chaos => "chaos",
            Self::Solid => "solid",
            Self::Gradient => "gradient",
            Self::Shape => "shape",
            Self::Pattern => "pattern",
            Self::Glyph => "glyph",
        }
    }

    /// Parse leniently, falling back to [`Tool::Chaos`].
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        parse_or_default(name)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if key == "ascii" {
            return Ok(Self::Glyph);
        }
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| UnknownSelector::new("tool", s))
    }
}

/// When a restyle may reshape the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResizePolicy {
    /// Every tool except [`Tool::Glyph`] reshapes.
    #[default]
    AllButGlyph,
    /// Restyles never reshape.
    Never,
}

// ---------------------------------------------------------------------------
// Chaos categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChaosCategory {
    Glyph,
    Pattern,
    Rect,
    Shape,
}

/// Chaos tool category weights, in threshold order.
pub const CHAOS_WEIGHTS: [(&str, f64); 4] = [
    ("glyph", 0.18),
    ("pattern", 0.17),
    ("rect", 0.30),
    ("shape", 0.35),
];

fn chaos_choice() -> WeightedChoice<ChaosCategory> {
    let categories = [
        ChaosCategory::Glyph,
        ChaosCategory::Pattern,
        ChaosCategory::Rect,
        ChaosCategory::Shape,
    ];
    CHAOS_WEIGHTS
        .into_iter()
        .zip(categories)
        .fold(WeightedChoice::new(), |choice, ((name, weight), category)| {
            choice.with(name, weight, category)
        })
}

// ---------------------------------------------------------------------------
// StyleAssigner
// ---------------------------------------------------------------------------

/// New base weights for the touched column and row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reshape {
    /// New base weight of the region's column.
    pub col_weight: f64,
    /// New base weight of the region's row.
    pub row_weight: f64,
}

/// Picks fills for regions.
#[derive(Debug, Clone)]
pub struct StyleAssigner {
    wide: Range<f64>,
    narrow: Range<f64>,
    policy: ResizePolicy,
    chaos: WeightedChoice<ChaosCategory>,
}

impl Default for StyleAssigner {
    fn default() -> Self {
        Self::new(&Tuning::default())
    }
}

impl StyleAssigner {
    /// Create an assigner with the reshape ranges from `tuning`.
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            wide: tuning.wide.clone(),
            narrow: tuning.narrow.clone(),
            policy: ResizePolicy::default(),
            chaos: chaos_choice(),
        }
    }

    /// Set the resize policy (builder).
    #[must_use]
    pub fn with_policy(mut self, policy: ResizePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Active resize policy.
    #[must_use]
    pub fn policy(&self) -> ResizePolicy {
        self.policy
    }

    /// Pick a fill for one region.
    pub fn assign<S: Sampler>(&self, tool: Tool, palette: &Palette, sampler: &mut S) -> Fill {
        let fill = match tool {
            Tool::Solid => Fill::Solid(pick_solid(palette, sampler)),
            Tool::Gradient => match sampler.pick(palette.gradients) {
                Some(g) => Fill::Gradient(g),
                None => Fill::Solid(pick_solid(palette, sampler)),
            },
            Tool::Shape => shape_fill(palette, sampler),
            Tool::Pattern => pattern_fill(palette, sampler),
            Tool::Glyph => glyph_fill(palette, sampler),
            Tool::Chaos => {
                let category = self
                    .chaos
                    .pick(sampler)
                    .copied()
                    .unwrap_or(ChaosCategory::Rect);
                match category {
                    ChaosCategory::Glyph => glyph_fill(palette, sampler),
                    ChaosCategory::Pattern => pattern_fill(palette, sampler),
                    ChaosCategory::Rect => Fill::rect(pick_pool(palette, sampler)),
                    ChaosCategory::Shape => shape_fill(palette, sampler),
                }
            }
        };
        tracing::trace!(%tool, palette = %palette.name, kind = fill.kind().as_str(), "assigned fill");
        fill
    }

    /// New base weights for a restyle with `tool`, or `None` when the
    /// policy leaves the grid alone.
    pub fn reshape<S: Sampler>(&self, tool: Tool, sampler: &mut S) -> Option<Reshape> {
        if self.policy == ResizePolicy::Never || tool == Tool::Glyph {
            return None;
        }
        let col_weight = self.reshape_weight(sampler);
        let row_weight = self.reshape_weight(sampler);
        Some(Reshape {
            col_weight,
            row_weight,
        })
    }

    fn reshape_weight<S: Sampler>(&self, sampler: &mut S) -> f64 {
        let range = if sampler.chance(0.5) {
            &self.wide
        } else {
            &self.narrow
        };
        sampler.range(range.start, range.end)
    }
}

fn pick_solid<S: Sampler>(palette: &Palette, sampler: &mut S) -> Rgb {
    sampler.pick(palette.solids).copied().unwrap_or(NEUTRAL)
}

fn pick_pool<S: Sampler>(palette: &Palette, sampler: &mut S) -> Paint {
    palette.pool_at(sampler.index(palette.pool_len()))
}

fn shape_fill<S: Sampler>(palette: &Palette, sampler: &mut S) -> Fill {
    let shape = sampler.pick(&ShapeKind::ALL).copied().unwrap_or(ShapeKind::Circle);
    Fill::shape(shape, pick_pool(palette, sampler))
}

fn pattern_fill<S: Sampler>(palette: &Palette, sampler: &mut S) -> Fill {
    let pattern = sampler.pick(&PatternKind::ALL).copied().unwrap_or(PatternKind::Dots);
    Fill::Pattern {
        pattern,
        color: pick_solid(palette, sampler),
    }
}

fn glyph_fill<S: Sampler>(palette: &Palette, sampler: &mut S) -> Fill {
    let color = pick_solid(palette, sampler);
    let glyph = sampler.pick(&GLYPHS).copied().unwrap_or('#');
    Fill::Glyph { glyph, color }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteName;
    use crate::style::FillKind;
    use mosaic_core::sample::ScriptedSampler;

    fn modern() -> &'static Palette {
        PaletteName::Modern.palette()
    }

    #[test]
    fn tool_names() {
        for tool in Tool::ALL {
            assert_eq!(tool.as_str().parse::<Tool>().unwrap(), tool);
        }
        assert_eq!("ASCII".parse::<Tool>().unwrap(), Tool::Glyph);
        assert_eq!(Tool::from_name_or_default("brush"), Tool::Chaos);
    }

    #[test]
    fn solid_tool_uses_solids() {
        let assigner = StyleAssigner::default();
        let mut s = ScriptedSampler::constant(0.99);
        assert_eq!(
            assigner.assign(Tool::Solid, modern(), &mut s),
            Fill::Solid(modern().solids[5])
        );
    }

    #[test]
    fn gradient_tool_uses_gradients() {
        let assigner = StyleAssigner::default();
        let mut s = ScriptedSampler::constant(0.0);
        let fill = assigner.assign(Tool::Gradient, modern(), &mut s);
        assert_eq!(fill, Fill::Gradient(&modern().gradients[0]));
    }

    #[test]
    fn pattern_and_glyph_use_solids_only() {
        let assigner = StyleAssigner::default();
        let mut s = ScriptedSampler::new(vec![0.3, 0.7, 0.99, 0.5]);
        for _ in 0..50 {
            for tool in [Tool::Pattern, Tool::Glyph] {
                let fill = assigner.assign(tool, modern(), &mut s);
                assert!(!fill.paint().is_gradient());
            }
        }
    }

    #[test]
    fn chaos_thresholds_select_categories() {
        let assigner = StyleAssigner::default();
        let cases = [
            (0.10, FillKind::Glyph),
            (0.20, FillKind::Pattern),
            (0.40, FillKind::Solid),
            (0.80, FillKind::Shape),
        ];
        for (draw, kind) in cases {
            // Follow-up draws stay low so rect/shape land on a solid.
            let mut s = ScriptedSampler::new(vec![draw, 0.0, 0.0, 0.0]);
            let fill = assigner.assign(Tool::Chaos, modern(), &mut s);
            assert_eq!(fill.kind(), kind, "draw {draw}");
        }
    }

    #[test]
    fn chaos_rect_may_land_on_gradient() {
        let assigner = StyleAssigner::default();
        let mut s = ScriptedSampler::new(vec![0.5, 0.95]);
        let fill = assigner.assign(Tool::Chaos, modern(), &mut s);
        assert_eq!(fill.kind(), FillKind::Gradient);
    }

    #[test]
    fn glyph_tool_never_reshapes() {
        let assigner = StyleAssigner::default();
        let mut s = ScriptedSampler::constant(0.1);
        assert_eq!(assigner.reshape(Tool::Glyph, &mut s), None);
        assert_eq!(s.draws(), 0);
    }

    #[test]
    fn never_policy_disables_reshape() {
        let assigner = StyleAssigner::default().with_policy(ResizePolicy::Never);
        let mut s = ScriptedSampler::constant(0.1);
        assert_eq!(assigner.reshape(Tool::Solid, &mut s), None);
    }

    #[test]
    fn reshape_wide_and_narrow_ranges() {
        let assigner = StyleAssigner::default();
        // chance(0.5) succeeds on 0.1 (wide), fails on 0.9 (narrow).
        let mut s = ScriptedSampler::new(vec![0.1, 0.5, 0.9, 0.5]);
        let reshape = assigner.reshape(Tool::Shape, &mut s).unwrap();
        assert!((reshape.col_weight - 4.5).abs() < 1e-9);
        assert!((reshape.row_weight - 0.35).abs() < 1e-9);
    }
}
