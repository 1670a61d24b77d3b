#![forbid(unsafe_code)]

//! Cell styles.
//!
//! A region is either [`CellStyle::Empty`] or filled with one of five
//! [`Fill`] kinds. Gradients always fill the whole region, so a vector
//! shape painted with a gradient collapses to a plain gradient fill.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::color::Rgb;
use crate::gradient::Gradient;

/// Glyphs the glyph tool draws from.
pub const GLYPHS: [char; 14] = [
    'A', 'B', 'X', '8', '@', '&', '?', '!', '%', '§', 'M', 'W', 'Q', '#',
];

/// Glyphs used by the glyph-grid layout.
pub const GRID_GLYPHS: [char; 10] = ['A', 'B', 'X', '8', '@', '&', '?', '!', '%', '§'];

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

/// Top-level category of a filled region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FillKind {
    Solid,
    Gradient,
    Shape,
    Pattern,
    Glyph,
}

impl FillKind {
    /// Lower-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Gradient => "gradient",
            Self::Shape => "shape",
            Self::Pattern => "pattern",
            Self::Glyph => "glyph",
        }
    }
}

/// Vector shape drawn centered in a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Filled circle.
    Circle,
    /// Filled upward triangle.
    Triangle,
    /// Filled diamond.
    Rhombus,
    /// Three concentric stroked circles.
    OutlineCircles,
    /// Three nested triangles at rising opacity.
    NestedTriangles,
}

impl ShapeKind {
    /// All shapes, in the order the shape tool picks from.
    pub const ALL: [Self; 5] = [
        Self::Circle,
        Self::Triangle,
        Self::Rhombus,
        Self::OutlineCircles,
        Self::NestedTriangles,
    ];

    /// Shapes the cubist layout overrides solid fills with.
    pub const FACETED: [Self; 2] = [Self::Triangle, Self::Rhombus];
}

/// Tiling pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Dot tile.
    Dots,
    /// Line-grid tile.
    Grid,
}

impl PatternKind {
    pub const ALL: [Self; 2] = [Self::Dots, Self::Grid];

    /// Tile edge length in output units.
    pub const fn tile(self) -> f64 {
        match self {
            Self::Dots => 10.0,
            Self::Grid => 20.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Paint
// ---------------------------------------------------------------------------

/// A solid color or a palette gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Rgb),
    Gradient(&'static Gradient),
}

impl Paint {
    /// Whether this paint is a gradient.
    pub const fn is_gradient(self) -> bool {
        matches!(self, Self::Gradient(_))
    }

    /// A single representative color.
    pub fn representative(self) -> Rgb {
        match self {
            Self::Solid(c) => c,
            Self::Gradient(g) => g.average(),
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid(c) => write!(f, "{c}"),
            Self::Gradient(g) => f.write_str(&g.css()),
        }
    }
}

impl Serialize for Paint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// Fill / CellStyle
// ---------------------------------------------------------------------------

/// Visual content of a filled region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    /// Flat color over the whole region.
    Solid(Rgb),
    /// Gradient over the whole region.
    Gradient(&'static Gradient),
    /// Vector shape on the backdrop.
    Shape { shape: ShapeKind, color: Rgb },
    /// Tiling pattern on the backdrop.
    Pattern { pattern: PatternKind, color: Rgb },
    /// A single large glyph.
    Glyph { glyph: char, color: Rgb },
}

impl Fill {
    /// Paint the whole region.
    pub fn rect(paint: Paint) -> Self {
        match paint {
            Paint::Solid(c) => Self::Solid(c),
            Paint::Gradient(g) => Self::Gradient(g),
        }
    }

    /// Draw `shape`; a gradient paint fills the region instead.
    pub fn shape(shape: ShapeKind, paint: Paint) -> Self {
        match paint {
            Paint::Solid(color) => Self::Shape { shape, color },
            Paint::Gradient(g) => Self::Gradient(g),
        }
    }

    /// Category of this fill.
    pub const fn kind(&self) -> FillKind {
        match self {
            Self::Solid(_) => FillKind::Solid,
            Self::Gradient(_) => FillKind::Gradient,
            Self::Shape { .. } => FillKind::Shape,
            Self::Pattern { .. } => FillKind::Pattern,
            Self::Glyph { .. } => FillKind::Glyph,
        }
    }

    /// The color or gradient this fill is drawn with.
    pub fn paint(&self) -> Paint {
        match *self {
            Self::Solid(c) => Paint::Solid(c),
            Self::Gradient(g) => Paint::Gradient(g),
            Self::Shape { color, .. } | Self::Pattern { color, .. } | Self::Glyph { color, .. } => {
                Paint::Solid(color)
            }
        }
    }

    /// Vector shape, if any.
    pub const fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Self::Shape { shape, .. } => Some(*shape),
            _ => None,
        }
    }

    /// Glyph character, if any.
    pub const fn glyph(&self) -> Option<char> {
        match self {
            Self::Glyph { glyph, .. } => Some(*glyph),
            _ => None,
        }
    }
}

/// Style attached to one region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CellStyle {
    /// Nothing drawn; the backdrop shows through.
    #[default]
    Empty,
    /// Painted.
    Filled(Fill),
}

impl CellStyle {
    /// Whether the region is painted.
    pub const fn is_filled(&self) -> bool {
        matches!(self, Self::Filled(_))
    }

    /// The fill, if painted.
    pub const fn fill(&self) -> Option<&Fill> {
        match self {
            Self::Empty => None,
            Self::Filled(fill) => Some(fill),
        }
    }

    /// Fill category, if painted.
    pub fn kind(&self) -> Option<FillKind> {
        self.fill().map(Fill::kind)
    }
}

impl From<Fill> for CellStyle {
    fn from(fill: Fill) -> Self {
        Self::Filled(fill)
    }
}

#[derive(Serialize)]
struct StyleRepr {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    paint: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shape: Option<ShapeKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<PatternKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    glyph: Option<char>,
}

impl Serialize for CellStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = match self {
            Self::Empty => StyleRepr {
                kind: "empty",
                paint: None,
                shape: None,
                pattern: None,
                glyph: None,
            },
            Self::Filled(fill) => StyleRepr {
                kind: fill.kind().as_str(),
                paint: Some(fill.paint()),
                shape: fill.shape_kind(),
                pattern: match fill {
                    Fill::Pattern { pattern, .. } => Some(*pattern),
                    _ => None,
                },
                glyph: fill.glyph(),
            },
        };
        repr.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteName;

    #[test]
    fn grid_glyphs_prefix_of_glyphs() {
        assert_eq!(&GLYPHS[..10], &GRID_GLYPHS[..]);
    }

    #[test]
    fn gradient_shape_collapses_to_gradient() {
        let g = &PaletteName::Vivid.palette().gradients[0];
        let fill = Fill::shape(ShapeKind::Circle, Paint::Gradient(g));
        assert_eq!(fill.kind(), FillKind::Gradient);
        assert_eq!(fill.shape_kind(), None);
    }

    #[test]
    fn solid_shape_keeps_shape() {
        let fill = Fill::shape(ShapeKind::Rhombus, Paint::Solid(Rgb::BLACK));
        assert_eq!(fill.kind(), FillKind::Shape);
        assert_eq!(fill.shape_kind(), Some(ShapeKind::Rhombus));
        assert_eq!(fill.paint(), Paint::Solid(Rgb::BLACK));
    }

    #[test]
    fn empty_is_default() {
        assert_eq!(CellStyle::default(), CellStyle::Empty);
        assert!(!CellStyle::Empty.is_filled());
        assert_eq!(CellStyle::Empty.kind(), None);
    }

    #[test]
    fn serialize_shapes() {
        let glyph = CellStyle::from(Fill::Glyph {
            glyph: '@',
            color: Rgb::from_u32(0xFF0055),
        });
        let json = serde_json::to_value(glyph).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "glyph", "paint": "#FF0055", "glyph": "@"})
        );

        let json = serde_json::to_value(CellStyle::Empty).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "empty"}));

        let g = &PaletteName::Bauhaus.palette().gradients[0];
        let json = serde_json::to_value(CellStyle::from(Fill::Gradient(g))).unwrap();
        assert_eq!(
            json["paint"],
            "linear-gradient(to right, #D6241F 50%, #245BA8 50%)"
        );
    }
}
