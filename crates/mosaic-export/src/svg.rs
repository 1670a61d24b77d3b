#![forbid(unsafe_code)]

//! SVG document writer.
//!
//! Every region becomes a `<rect>`; shapes are nested `<svg>` elements
//! with a 100×100 viewBox, patterns and gradients live in `<defs>`, and
//! glyphs are centered `<text>` elements.

use std::fmt::Write;

use mosaic_runtime::VisualState;
use mosaic_style::{CellStyle, Fill, Gradient, PatternKind, Rgb, ShapeKind};

use crate::canvas::{Canvas, Rect, num};

/// Render `state` on `canvas` as an SVG document.
pub fn render(state: &VisualState, canvas: &Canvas) -> String {
    let (w, h) = (num(canvas.width), num(canvas.height));
    let mut out = String::with_capacity(state.placements.len() * 96 + 512);

    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    );
    write_defs(&mut out, state);
    let _ = write!(
        out,
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        state.backdrop_color()
    );

    let surface = state.surface();
    for placement in &state.placements {
        let rect = canvas.rect(placement.region);
        match placement.style {
            CellStyle::Empty => write_rect(&mut out, rect, &surface.to_string()),
            CellStyle::Filled(fill) => write_fill(&mut out, rect, &fill, surface),
        }
    }

    out.push_str("</svg>");
    out
}

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

fn gradient_id(gradient: &Gradient) -> String {
    format!("g-{}", gradient.id)
}

fn pattern_id(pattern: PatternKind, color: Rgb) -> String {
    let kind = match pattern {
        PatternKind::Dots => "dots",
        PatternKind::Grid => "grid",
    };
    format!("p-{kind}-{:06x}", color.as_u32())
}

/// Emit one definition per distinct gradient and pattern, in first-use
/// order.
fn write_defs(out: &mut String, state: &VisualState) {
    let mut seen: Vec<String> = Vec::new();
    let mut defs = String::new();
    for fill in state.placements.iter().filter_map(|p| p.style.fill()) {
        match *fill {
            Fill::Gradient(gradient) => {
                let id = gradient_id(gradient);
                if !seen.contains(&id) {
                    write_gradient(&mut defs, &id, gradient);
                    seen.push(id);
                }
            }
            Fill::Pattern { pattern, color } => {
                let id = pattern_id(pattern, color);
                if !seen.contains(&id) {
                    write_pattern(&mut defs, &id, pattern, color);
                    seen.push(id);
                }
            }
            _ => {}
        }
    }
    if !defs.is_empty() {
        out.push_str("<defs>");
        out.push_str(&defs);
        out.push_str("</defs>");
    }
}

fn write_gradient(out: &mut String, id: &str, gradient: &Gradient) {
    let v = gradient.vector();
    let _ = write!(
        out,
        "<linearGradient id=\"{id}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">",
        num(v.x1),
        num(v.y1),
        num(v.x2),
        num(v.y2)
    );
    for stop in gradient.stops {
        let _ = write!(
            out,
            "<stop offset=\"{}%\" stop-color=\"{}\"/>",
            num(stop.offset * 100.0),
            stop.color
        );
    }
    out.push_str("</linearGradient>");
}

fn write_pattern(out: &mut String, id: &str, pattern: PatternKind, color: Rgb) {
    let tile = num(pattern.tile());
    let _ = write!(
        out,
        "<pattern id=\"{id}\" width=\"{tile}\" height=\"{tile}\" patternUnits=\"userSpaceOnUse\">"
    );
    match pattern {
        PatternKind::Dots => {
            let _ = write!(out, "<circle cx=\"5\" cy=\"5\" r=\"3.5\" fill=\"{color}\"/>");
        }
        PatternKind::Grid => {
            let _ = write!(
                out,
                "<path d=\"M 20 0 L 0 0 0 20\" fill=\"none\" stroke=\"{color}\" stroke-width=\"4\"/>"
            );
        }
    }
    out.push_str("</pattern>");
}

// ---------------------------------------------------------------------------
// Regions
// ---------------------------------------------------------------------------

fn write_rect(out: &mut String, rect: Rect, fill: &str) {
    let _ = write!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{fill}\"/>",
        num(rect.x),
        num(rect.y),
        num(rect.w),
        num(rect.h)
    );
}

fn write_fill(out: &mut String, rect: Rect, fill: &Fill, surface: Rgb) {
    match *fill {
        Fill::Solid(color) => write_rect(out, rect, &color.to_string()),
        Fill::Gradient(gradient) => {
            write_rect(out, rect, &format!("url(#{})", gradient_id(gradient)));
        }
        Fill::Pattern { pattern, color } => {
            write_rect(out, rect, &surface.to_string());
            write_rect(out, rect, &format!("url(#{})", pattern_id(pattern, color)));
        }
        Fill::Shape { shape, color } => {
            write_rect(out, rect, &surface.to_string());
            let _ = write!(
                out,
                "<svg x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 100 100\" preserveAspectRatio=\"xMidYMid meet\">",
                num(rect.x),
                num(rect.y),
                num(rect.w),
                num(rect.h)
            );
            write_shape(out, shape, color);
            out.push_str("</svg>");
        }
        Fill::Glyph { glyph, color } => {
            write_rect(out, rect, &surface.to_string());
            let size = rect.w.min(rect.h) * 0.6;
            let _ = write!(
                out,
                "<text x=\"{}\" y=\"{}\" font-family=\"monospace\" font-weight=\"900\" font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" fill=\"{color}\">",
                num(rect.x + rect.w / 2.0),
                num(rect.y + rect.h / 2.0),
                num(size)
            );
            let mut buf = [0u8; 4];
            svg_escape_into(out, glyph.encode_utf8(&mut buf));
            out.push_str("</text>");
        }
    }
}

fn write_shape(out: &mut String, shape: ShapeKind, color: Rgb) {
    match shape {
        ShapeKind::Circle => {
            let _ = write!(out, "<circle cx=\"50\" cy=\"50\" r=\"48\" fill=\"{color}\"/>");
        }
        ShapeKind::Triangle => {
            let _ = write!(out, "<polygon points=\"50,10 90,90 10,90\" fill=\"{color}\"/>");
        }
        ShapeKind::Rhombus => {
            let _ = write!(
                out,
                "<polygon points=\"50,10 90,50 50,90 10,50\" fill=\"{color}\"/>"
            );
        }
        ShapeKind::OutlineCircles => {
            for r in [45, 30, 15] {
                let _ = write!(
                    out,
                    "<circle cx=\"50\" cy=\"50\" r=\"{r}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"6\"/>"
                );
            }
        }
        ShapeKind::NestedTriangles => {
            for (points, opacity) in NESTED_TRIANGLES {
                let _ = write!(
                    out,
                    "<polygon points=\"{}\" fill=\"{color}\" opacity=\"{}\"/>",
                    points_attr(&points),
                    num(opacity)
                );
            }
        }
    }
}

/// Nested triangle layers, outermost first, in viewBox units.
pub(crate) const NESTED_TRIANGLES: [([(f64, f64); 3], f64); 3] = [
    ([(50.0, 5.0), (95.0, 85.0), (5.0, 85.0)], 0.5),
    ([(50.0, 15.0), (85.0, 75.0), (15.0, 75.0)], 0.7),
    ([(50.0, 25.0), (75.0, 65.0), (25.0, 65.0)], 0.9),
];

fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn svg_escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        let mut out = String::new();
        svg_escape_into(&mut out, "&<>");
        assert_eq!(out, "&amp;&lt;&gt;");
    }

    #[test]
    fn pattern_ids_are_color_specific() {
        let a = pattern_id(PatternKind::Dots, Rgb::from_u32(0x112233));
        let b = pattern_id(PatternKind::Grid, Rgb::from_u32(0x112233));
        assert_eq!(a, "p-dots-112233");
        assert_ne!(a, b);
    }

    #[test]
    fn nested_triangles_points() {
        let mut out = String::new();
        write_shape(&mut out, ShapeKind::NestedTriangles, Rgb::BLACK);
        assert!(out.contains("points=\"50,5 95,85 5,85\""));
        assert!(out.contains("opacity=\"0.9\""));
        assert_eq!(out.matches("<polygon").count(), 3);
    }
}
