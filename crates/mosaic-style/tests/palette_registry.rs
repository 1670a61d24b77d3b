//! Registry-wide checks over every palette and tool.

use mosaic_core::sample::ScriptedSampler;
use mosaic_style::{FillKind, PaletteName, StyleAssigner, Tool};
use proptest::prelude::*;

#[test]
fn every_palette_parses_its_css() {
    for name in PaletteName::ALL {
        let palette = name.palette();
        assert!(!palette.solids.is_empty(), "{name} has no solids");
        for g in palette.gradients {
            assert!(g.css().starts_with("linear-gradient("));
            assert!(g.stops.len() >= 2);
            assert!(g.stops.windows(2).all(|w| w[0].offset <= w[1].offset));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fills_come_from_the_palette(
        draws in proptest::collection::vec(0.0f64..1.0, 1..32),
        palette_idx in 0usize..4,
        tool_idx in 0usize..6,
    ) {
        let palette = PaletteName::ALL[palette_idx].palette();
        let tool = Tool::ALL[tool_idx];
        let assigner = StyleAssigner::default();
        let mut sampler = ScriptedSampler::new(draws);

        for _ in 0..8 {
            let fill = assigner.assign(tool, palette, &mut sampler);
            match fill.kind() {
                FillKind::Gradient => {
                    let paint = fill.paint();
                    prop_assert!(palette.gradients.iter().any(|g| mosaic_style::Paint::Gradient(g) == paint));
                }
                _ => {
                    let color = fill.paint().representative();
                    prop_assert!(palette.solids.contains(&color));
                }
            }
            match tool {
                Tool::Solid => prop_assert_eq!(fill.kind(), FillKind::Solid),
                Tool::Pattern => prop_assert_eq!(fill.kind(), FillKind::Pattern),
                Tool::Glyph => prop_assert_eq!(fill.kind(), FillKind::Glyph),
                Tool::Gradient => prop_assert_eq!(fill.kind(), FillKind::Gradient),
                Tool::Shape => prop_assert!(matches!(fill.kind(), FillKind::Shape | FillKind::Gradient)),
                Tool::Chaos => {}
            }
        }
    }
}
