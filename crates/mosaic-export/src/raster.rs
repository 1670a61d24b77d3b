#![forbid(unsafe_code)]

//! PNG rasterizer.
//!
//! Draws the same geometry as the SVG writer with per-pixel coverage
//! tests sampled at pixel centers. No anti-aliasing.

use std::io::Cursor;

use image::{ImageFormat, RgbImage};
use mosaic_runtime::VisualState;
use mosaic_style::{CellStyle, Fill, Gradient, PatternKind, Rgb, ShapeKind};

use crate::canvas::{Canvas, Rect};
use crate::error::{ExportError, MAX_RASTER_EDGE};
use crate::font::{GLYPH_H, GLYPH_W, is_set};
use crate::svg::NESTED_TRIANGLES;

/// Render `state` on `canvas` at `scale` pixels per unit and encode as PNG.
pub fn render(state: &VisualState, canvas: &Canvas, scale: f64) -> Result<Vec<u8>, ExportError> {
    let image = paint(state, canvas, scale)?;
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

/// Render `state` into an RGB buffer.
pub fn paint(state: &VisualState, canvas: &Canvas, scale: f64) -> Result<RgbImage, ExportError> {
    let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
    let pw = (canvas.width * scale).round();
    let ph = (canvas.height * scale).round();
    if pw < 1.0 || ph < 1.0 {
        return Err(ExportError::Degenerate {
            width: pw,
            height: ph,
        });
    }
    if pw > f64::from(MAX_RASTER_EDGE) || ph > f64::from(MAX_RASTER_EDGE) {
        return Err(ExportError::TooLarge {
            width: pw as u32,
            height: ph as u32,
        });
    }
    let (pw, ph) = (pw as u32, ph as u32);

    let mut image = RgbImage::from_pixel(pw, ph, pixel(state.backdrop_color()));
    let surface = state.surface();
    for placement in &state.placements {
        let rect = canvas.rect(placement.region);
        let x0 = (rect.x * scale).round().max(0.0) as u32;
        let y0 = (rect.y * scale).round().max(0.0) as u32;
        let x1 = ((rect.right() * scale).round() as u32).min(pw);
        let y1 = ((rect.bottom() * scale).round() as u32).min(ph);
        for py in y0..y1 {
            for px in x0..x1 {
                let x = (f64::from(px) + 0.5) / scale;
                let y = (f64::from(py) + 0.5) / scale;
                let color = match &placement.style {
                    CellStyle::Empty => surface,
                    CellStyle::Filled(fill) => fill_at(fill, rect, x, y, surface),
                };
                image.put_pixel(px, py, pixel(color));
            }
        }
    }
    Ok(image)
}

fn pixel(color: Rgb) -> image::Rgb<u8> {
    image::Rgb([color.r, color.g, color.b])
}

/// Color of `fill` at canvas point `(x, y)` inside `rect`.
fn fill_at(fill: &Fill, rect: Rect, x: f64, y: f64, surface: Rgb) -> Rgb {
    match *fill {
        Fill::Solid(color) => color,
        Fill::Gradient(gradient) => gradient_at(gradient, rect, x, y),
        Fill::Pattern { pattern, color } => {
            if pattern_covers(pattern, x, y) {
                color
            } else {
                surface
            }
        }
        Fill::Shape { shape, color } => {
            let (sx, sy, side) = rect.fitted_square();
            if side <= 0.0 {
                return surface;
            }
            let u = (x - sx) / side * 100.0;
            let v = (y - sy) / side * 100.0;
            shape_at(shape, u, v, color, surface)
        }
        Fill::Glyph { glyph, color } => {
            if glyph_covers(glyph, rect, x, y) {
                color
            } else {
                surface
            }
        }
    }
}

fn gradient_at(gradient: &Gradient, rect: Rect, x: f64, y: f64) -> Rgb {
    let u = if rect.w > 0.0 { (x - rect.x) / rect.w } else { 0.0 };
    let v = if rect.h > 0.0 { (y - rect.y) / rect.h } else { 0.0 };
    gradient.sample(gradient.project(u, v))
}

/// Patterns tile from the canvas origin, like `patternUnits="userSpaceOnUse"`.
fn pattern_covers(pattern: PatternKind, x: f64, y: f64) -> bool {
    let tile = pattern.tile();
    let (tx, ty) = (x.rem_euclid(tile), y.rem_euclid(tile));
    match pattern {
        PatternKind::Dots => (tx - 5.0).powi(2) + (ty - 5.0).powi(2) <= 3.5 * 3.5,
        // The stroke is centered on the tile edge; the tile clips its outer half.
        PatternKind::Grid => tx < 2.0 || ty < 2.0,
    }
}

/// Shape color at `(u, v)` in the 100×100 viewBox.
fn shape_at(shape: ShapeKind, u: f64, v: f64, color: Rgb, surface: Rgb) -> Rgb {
    let d = ((u - 50.0).powi(2) + (v - 50.0).powi(2)).sqrt();
    let hit = match shape {
        ShapeKind::Circle => d <= 48.0,
        ShapeKind::Triangle => in_triangle((u, v), [(50.0, 10.0), (90.0, 90.0), (10.0, 90.0)]),
        ShapeKind::Rhombus => (u - 50.0).abs() + (v - 50.0).abs() <= 40.0,
        ShapeKind::OutlineCircles => [45.0, 30.0, 15.0].iter().any(|r| (d - r).abs() <= 3.0),
        ShapeKind::NestedTriangles => {
            return NESTED_TRIANGLES
                .iter()
                .filter(|(points, _)| in_triangle((u, v), *points))
                .fold(surface, |under, (_, alpha)| under.lerp(color, *alpha));
        }
    };
    if hit { color } else { surface }
}

fn in_triangle(p: (f64, f64), [a, b, c]: [(f64, f64); 3]) -> bool {
    let cross = |o: (f64, f64), e: (f64, f64)| (e.0 - o.0) * (p.1 - o.1) - (e.1 - o.1) * (p.0 - o.0);
    let (d1, d2, d3) = (cross(a, b), cross(b, c), cross(c, a));
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Glyphs are drawn `0.6 ×` the shorter region side tall, centered.
fn glyph_covers(glyph: char, rect: Rect, x: f64, y: f64) -> bool {
    let gh = rect.w.min(rect.h) * 0.6;
    let gw = gh * GLYPH_W as f64 / GLYPH_H as f64;
    if gh <= 0.0 {
        return false;
    }
    let gx = rect.x + (rect.w - gw) / 2.0;
    let gy = rect.y + (rect.h - gh) / 2.0;
    if x < gx || y < gy {
        return false;
    }
    let col = ((x - gx) / gw * GLYPH_W as f64) as usize;
    let row = ((y - gy) / gh * GLYPH_H as f64) as usize;
    is_set(glyph, row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_containment() {
        let tri = [(50.0, 10.0), (90.0, 90.0), (10.0, 90.0)];
        assert!(in_triangle((50.0, 50.0), tri));
        assert!(!in_triangle((5.0, 5.0), tri));
        assert!(in_triangle((50.0, 10.0), tri));
    }

    #[test]
    fn dots_tile_every_ten_units() {
        assert!(pattern_covers(PatternKind::Dots, 5.0, 5.0));
        assert!(pattern_covers(PatternKind::Dots, 25.0, 35.0));
        assert!(!pattern_covers(PatternKind::Dots, 0.5, 0.5));
    }

    #[test]
    fn grid_lines_on_tile_edges() {
        assert!(pattern_covers(PatternKind::Grid, 1.0, 10.0));
        assert!(pattern_covers(PatternKind::Grid, 10.0, 21.0));
        assert!(!pattern_covers(PatternKind::Grid, 10.0, 19.0));
        assert!(!pattern_covers(PatternKind::Grid, 10.0, 10.0));
    }

    #[test]
    fn outline_circles_leave_gaps() {
        let (c, s) = (Rgb::BLACK, Rgb::WHITE);
        assert_eq!(shape_at(ShapeKind::OutlineCircles, 50.0, 5.0, c, s), c);
        assert_eq!(shape_at(ShapeKind::OutlineCircles, 50.0, 12.0, c, s), s);
        assert_eq!(shape_at(ShapeKind::OutlineCircles, 50.0, 50.0, c, s), s);
    }

    #[test]
    fn nested_triangles_darken_inward() {
        let (c, s) = (Rgb::BLACK, Rgb::WHITE);
        let outer = shape_at(ShapeKind::NestedTriangles, 50.0, 80.0, c, s);
        let inner = shape_at(ShapeKind::NestedTriangles, 50.0, 50.0, c, s);
        assert!(inner.luminance_u8() < outer.luminance_u8());
        assert_eq!(shape_at(ShapeKind::NestedTriangles, 2.0, 2.0, c, s), s);
    }

    #[test]
    fn glyph_centered_in_rect() {
        let rect = Rect {
            x: 0.0,
            y: 0.0,
            w: 70.0,
            h: 70.0,
        };
        // '!' column is the middle bitmap column.
        assert!(glyph_covers('!', rect, 35.0, 20.0));
        assert!(!glyph_covers('!', rect, 5.0, 5.0));
    }
}
