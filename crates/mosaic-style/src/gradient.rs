#![forbid(unsafe_code)]

//! Static linear gradients.
//!
//! A [`Gradient`] is a named, compile-time description of a CSS-style
//! linear gradient. It can be printed back as CSS, projected onto a unit
//! box for SVG `<linearGradient>` attributes, and sampled per pixel by the
//! rasterizer.

use std::fmt;

use crate::color::Rgb;

/// Direction of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientDirection {
    /// CSS angle in degrees (`0deg` points up, `90deg` points right).
    Angle(f64),
    /// `to top`.
    ToTop,
    /// `to right`.
    ToRight,
    /// `to bottom`.
    ToBottom,
}

impl GradientDirection {
    /// Equivalent CSS angle in degrees.
    #[must_use]
    pub fn degrees(self) -> f64 {
        match self {
            Self::Angle(deg) => deg,
            Self::ToTop => 0.0,
            Self::ToRight => 90.0,
            Self::ToBottom => 180.0,
        }
    }
}

impl fmt::Display for GradientDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Angle(deg) => write!(f, "{deg}deg"),
            Self::ToTop => f.write_str("to top"),
            Self::ToRight => f.write_str("to right"),
            Self::ToBottom => f.write_str("to bottom"),
        }
    }
}

/// One color stop; `offset` is a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Stop color.
    pub color: Rgb,
    /// Position along the gradient line.
    pub offset: f64,
}

impl GradientStop {
    /// Create a stop.
    pub const fn new(color: u32, offset: f64) -> Self {
        Self {
            color: Rgb::from_u32(color),
            offset,
        }
    }
}

/// Gradient line endpoints inside a unit box, `(x1, y1, x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientVector {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// A named linear gradient.
#[derive(Debug, PartialEq)]
pub struct Gradient {
    /// Stable identifier, unique across all palettes.
    pub id: &'static str,
    /// Direction of the gradient line.
    pub direction: GradientDirection,
    /// Color stops, ordered by offset.
    pub stops: &'static [GradientStop],
}

impl Gradient {
    /// CSS `linear-gradient(...)` text.
    #[must_use]
    pub fn css(&self) -> String {
        let stops: Vec<String> = self
            .stops
            .iter()
            .map(|s| format!("{} {}%", s.color, fmt_percent(s.offset)))
            .collect();
        format!("linear-gradient({}, {})", self.direction, stops.join(", "))
    }

    /// Gradient line across the unit box.
    ///
    /// The line passes through the center and is stretched so that it
    /// reaches the box edge along its dominant axis.
    #[must_use]
    pub fn vector(&self) -> GradientVector {
        let rad = self.direction.degrees().to_radians();
        let (mut dx, mut dy) = (rad.sin(), -rad.cos());
        let scale = dx.abs().max(dy.abs());
        if scale > f64::EPSILON {
            dx /= scale;
            dy /= scale;
        }
        GradientVector {
            x1: 0.5 - dx / 2.0,
            y1: 0.5 - dy / 2.0,
            x2: 0.5 + dx / 2.0,
            y2: 0.5 + dy / 2.0,
        }
    }

    /// Position along the gradient line of the point `(u, v)` in the unit
    /// box, clamped to `[0, 1]`.
    #[must_use]
    pub fn project(&self, u: f64, v: f64) -> f64 {
        let GradientVector { x1, y1, x2, y2 } = self.vector();
        let (dx, dy) = (x2 - x1, y2 - y1);
        let len2 = dx * dx + dy * dy;
        if len2 <= f64::EPSILON {
            return 0.0;
        }
        (((u - x1) * dx + (v - y1) * dy) / len2).clamp(0.0, 1.0)
    }

    /// Color at position `t` along the gradient line.
    ///
    /// Coincident stops produce a hard edge.
    #[must_use]
    pub fn sample(&self, t: f64) -> Rgb {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Rgb::BLACK;
        };
        if t <= first.offset {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t < b.offset {
                let span = b.offset - a.offset;
                if span <= f64::EPSILON {
                    return a.color;
                }
                return a.color.lerp(b.color, (t - a.offset) / span);
            }
        }
        last.color
    }

    /// Average of the stop colors, for previews that cannot show a ramp.
    #[must_use]
    pub fn average(&self) -> Rgb {
        if self.stops.is_empty() {
            return Rgb::BLACK;
        }
        let n = self.stops.len() as u32;
        let sum = self.stops.iter().fold((0u32, 0u32, 0u32), |acc, s| {
            (
                acc.0 + u32::from(s.color.r),
                acc.1 + u32::from(s.color.g),
                acc.2 + u32::from(s.color.b),
            )
        });
        Rgb::new((sum.0 / n) as u8, (sum.1 / n) as u8, (sum.2 / n) as u8)
    }
}

fn fmt_percent(offset: f64) -> String {
    let pct = offset * 100.0;
    if (pct - pct.round()).abs() < 1e-9 {
        format!("{}", pct.round() as i64)
    } else {
        format!("{pct:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DIAGONAL: Gradient = Gradient {
        id: "test-diagonal",
        direction: GradientDirection::Angle(135.0),
        stops: &[GradientStop::new(0xFF9A9E, 0.0), GradientStop::new(0xFECFEF, 1.0)],
    };

    static SPLIT: Gradient = Gradient {
        id: "test-split",
        direction: GradientDirection::ToRight,
        stops: &[GradientStop::new(0xD6241F, 0.5), GradientStop::new(0x245BA8, 0.5)],
    };

    #[test]
    fn css_round_trips_shape() {
        assert_eq!(
            DIAGONAL.css(),
            "linear-gradient(135deg, #FF9A9E 0%, #FECFEF 100%)"
        );
        assert_eq!(
            SPLIT.css(),
            "linear-gradient(to right, #D6241F 50%, #245BA8 50%)"
        );
    }

    #[test]
    fn vector_reaches_corners() {
        let v = DIAGONAL.vector();
        assert!(v.x1.abs() < 1e-9 && v.y1.abs() < 1e-9);
        assert!((v.x2 - 1.0).abs() < 1e-9 && (v.y2 - 1.0).abs() < 1e-9);

        let v = SPLIT.vector();
        assert!((v.y1 - 0.5).abs() < 1e-9 && (v.y2 - 0.5).abs() < 1e-9);
        assert!(v.x1.abs() < 1e-9 && (v.x2 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn to_top_runs_upward() {
        let g = Gradient {
            id: "up",
            direction: GradientDirection::ToTop,
            stops: &[],
        };
        assert!(g.project(0.5, 1.0) < 1e-9);
        assert!((g.project(0.5, 0.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn sample_interpolates() {
        assert_eq!(DIAGONAL.sample(0.0), Rgb::from_u32(0xFF9A9E));
        assert_eq!(DIAGONAL.sample(1.0), Rgb::from_u32(0xFECFEF));
        assert_eq!(DIAGONAL.sample(-3.0), Rgb::from_u32(0xFF9A9E));
    }

    #[test]
    fn sample_hard_edge() {
        assert_eq!(SPLIT.sample(0.25), Rgb::from_u32(0xD6241F));
        assert_eq!(SPLIT.sample(0.75), Rgb::from_u32(0x245BA8));
    }

    #[test]
    fn average_of_stops() {
        assert_eq!(SPLIT.average(), Rgb::new(0x7D, 0x3F, 0x63));
    }
}
