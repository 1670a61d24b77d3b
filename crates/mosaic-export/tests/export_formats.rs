#![forbid(unsafe_code)]

//! Exported documents and images agree with the snapshot.

use mosaic_core::geometry::{AspectRatio, CellRegion, GridSpec};
use mosaic_export::{Canvas, ExportError, ExportSink, Exporter};
use mosaic_layout::{Backdrop, LayoutMode, Placement};
use mosaic_runtime::{RecordingSink, Selections, Studio, VisualState};
use mosaic_style::{CellStyle, Fill, Palette, PatternKind, Rgb, ShapeKind, Theme};
use proptest::prelude::*;

fn single(style: CellStyle) -> VisualState {
    VisualState {
        layout: None,
        selections: Selections::default(),
        grid: GridSpec::new(1, 1),
        placements: vec![Placement {
            region: CellRegion::unit(0, 0),
            style,
        }],
        cols: vec![1.0],
        rows: vec![1.0],
        backdrop: Backdrop::fixed(Rgb::BLACK, 0.0, 10.0),
    }
}

fn studio(mode: LayoutMode) -> VisualState {
    let mut studio = Studio::with_seed(RecordingSink::new(), 42);
    studio.select_layout(mode);
    studio.snapshot()
}

#[test]
fn svg_has_one_rect_per_empty_region() {
    let mut studio = Studio::with_seed(RecordingSink::new(), 0);
    studio.clear();
    let svg = Exporter::new(120.0).vectorize(&studio.snapshot()).unwrap();
    assert_eq!(svg.matches("<rect").count(), 145);
    assert!(svg.contains("width=\"120\" height=\"120\""));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn svg_defines_each_gradient_once() {
    let gradient = Palette::find_gradient("modern-sky").unwrap();
    let mut state = single(CellStyle::from(Fill::Gradient(gradient)));
    state.placements.push(state.placements[0]);
    let svg = Exporter::new(100.0).vectorize(&state).unwrap();
    assert_eq!(svg.matches("<linearGradient id=\"g-modern-sky\"").count(), 1);
    assert_eq!(svg.matches("url(#g-modern-sky)").count(), 2);
}

#[test]
fn svg_patterns_and_shapes() {
    let color = Rgb::from_u32(0x0000B8);
    let svg = Exporter::new(100.0)
        .vectorize(&single(CellStyle::from(Fill::Pattern {
            pattern: PatternKind::Grid,
            color,
        })))
        .unwrap();
    assert!(svg.contains("<pattern id=\"p-grid-0000b8\" width=\"20\" height=\"20\""));
    assert!(svg.contains("stroke-width=\"4\""));

    let svg = Exporter::new(100.0)
        .vectorize(&single(CellStyle::from(Fill::Shape {
            shape: ShapeKind::Rhombus,
            color,
        })))
        .unwrap();
    assert!(svg.contains("viewBox=\"0 0 100 100\" preserveAspectRatio=\"xMidYMid meet\""));
    assert!(svg.contains("points=\"50,10 90,50 50,90 10,50\""));
}

#[test]
fn svg_escapes_glyphs() {
    let svg = Exporter::new(100.0)
        .vectorize(&single(CellStyle::from(Fill::Glyph {
            glyph: '&',
            color: Rgb::BLACK,
        })))
        .unwrap();
    assert!(svg.contains(">&amp;</text>"));
    assert!(svg.contains("font-size=\"48\""));
}

#[test]
fn aspect_ratio_sets_height() {
    let mut state = studio(LayoutMode::Chess);
    state.selections.ratio = AspectRatio::Widescreen;
    let canvas = Canvas::new(&state, 1600.0).unwrap();
    assert_eq!(canvas.height, 900.0);
    let svg = Exporter::new(1600.0).vectorize(&state).unwrap();
    assert!(svg.contains("height=\"900\""));
}

#[test]
fn theme_changes_line_color() {
    let mut state = studio(LayoutMode::Chess);
    let light = Exporter::new(100.0).vectorize(&state).unwrap();
    state.selections.theme = Theme::Dark;
    let dark = Exporter::new(100.0).vectorize(&state).unwrap();
    assert!(light.contains(&format!("fill=\"{}\"/>", Theme::Light.line())));
    assert!(dark.contains(&format!("fill=\"{}\"/>", Theme::Dark.line())));
}

#[test]
fn png_pixels_follow_geometry() {
    let red = Rgb::from_u32(0xE30022);
    let state = single(CellStyle::from(Fill::Solid(red)));
    let png = Exporter::new(100.0).rasterize(&state).unwrap();
    let image = image::load_from_memory(&png).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (100, 100));
    assert_eq!(image.get_pixel(2, 2).0, [0, 0, 0]);
    assert_eq!(image.get_pixel(50, 50).0, [0xE3, 0x00, 0x22]);
}

#[test]
fn png_scale_multiplies_dimensions() {
    let state = studio(LayoutMode::Mondrian);
    let png = Exporter::new(100.0).with_scale(2.0).rasterize(&state).unwrap();
    let image = image::load_from_memory(&png).unwrap();
    assert_eq!((image.width(), image.height()), (200, 200));
}

#[test]
fn png_empty_region_uses_surface() {
    let state = single(CellStyle::Empty);
    let png = Exporter::new(40.0).rasterize(&state).unwrap();
    let image = image::load_from_memory(&png).unwrap().to_rgb8();
    let s = Theme::Light.surface();
    assert_eq!(image.get_pixel(20, 20).0, [s.r, s.g, s.b]);
}

#[test]
fn degenerate_canvas_is_an_error() {
    let state = studio(LayoutMode::Glyph);
    assert!(matches!(
        Exporter::new(0.0).vectorize(&state),
        Err(ExportError::Degenerate { .. })
    ));
    assert!(matches!(
        Exporter::new(f64::NAN).rasterize(&state),
        Err(ExportError::Degenerate { .. })
    ));
    assert!(matches!(
        Exporter::new(10_000.0).with_scale(4.0).rasterize(&state),
        Err(ExportError::TooLarge { .. })
    ));
}

#[test]
fn export_is_a_pure_read() {
    let mut studio = Studio::with_seed(RecordingSink::new(), 8);
    studio.select_layout(LayoutMode::Cubism);
    let before = studio.snapshot();
    let exporter = Exporter::new(200.0);
    let first = exporter.vectorize(&before).unwrap();
    let second = exporter.vectorize(&studio.snapshot()).unwrap();
    assert_eq!(first, second);
    assert_eq!(studio.snapshot(), before);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn region_rects_stay_inside_canvas(seed in any::<u64>(), mode in 0usize..6, width in 100.0f64..1200.0) {
        let mut studio = Studio::with_seed(RecordingSink::new(), seed);
        studio.select_layout(LayoutMode::ALL[mode]);
        let state = studio.snapshot();
        let canvas = Canvas::new(&state, width).unwrap();
        for p in &state.placements {
            let r = canvas.rect(p.region);
            prop_assert!(r.x >= 0.0 && r.y >= 0.0);
            prop_assert!(r.right() <= canvas.width + 1e-6);
            prop_assert!(r.bottom() <= canvas.height + 1e-6);
        }
    }
}
