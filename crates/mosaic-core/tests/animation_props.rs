//! Property checks for interpolation and animator convergence.

use mosaic_core::{AnimatorConfig, Axis, FrameOutcome, GridSpec, ProportionAnimator, lerp};
use proptest::prelude::*;

fn seeded(cols: usize, rows: usize) -> ProportionAnimator {
    let mut animator = ProportionAnimator::new(AnimatorConfig::default());
    animator.seed(GridSpec::new(cols, rows));
    animator
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn lerp_lies_strictly_between(
        a in -1000.0f64..1000.0,
        delta in 0.001f64..1000.0,
        negate in any::<bool>(),
        t in 0.01f64..0.99,
    ) {
        let b = if negate { a - delta } else { a + delta };
        let v = lerp(a, b, t);
        prop_assert!(v > a.min(b) && v < a.max(b), "lerp({a}, {b}, {t}) = {v}");
    }

    #[test]
    fn lerp_fixed_point(a in -1000.0f64..1000.0, t in 0.0f64..1.0) {
        prop_assert_eq!(lerp(a, a, t), a);
    }

    #[test]
    fn current_converges_monotonically(
        bases in proptest::collection::vec(0.1f64..8.0, 1..16),
    ) {
        let mut animator = seeded(bases.len(), 1);
        animator.set_base(Axis::Cols, bases.clone());

        let mut last: Vec<f64> = animator
            .current_cols()
            .iter()
            .zip(&bases)
            .map(|(c, b)| (b - c).abs())
            .collect();

        for _ in 0..400 {
            animator.tick(false);
            let now: Vec<f64> = animator
                .current_cols()
                .iter()
                .zip(&bases)
                .map(|(c, b)| (b - c).abs())
                .collect();
            for (prev, cur) in last.iter().zip(&now) {
                prop_assert!(cur <= prev, "distance grew: {prev} -> {cur}");
            }
            last = now;
        }
        for (c, b) in animator.current_cols().iter().zip(&bases) {
            prop_assert!((c - b).abs() < 0.001);
        }
        prop_assert_eq!(animator.tick(false), FrameOutcome::Settled);
    }

    #[test]
    fn hover_expands_exactly_one_track_per_axis(
        cols in 1usize..14,
        rows in 1usize..14,
        hc in 0usize..14,
        hr in 0usize..14,
    ) {
        let mut animator = seeded(cols, rows);
        animator.set_hover(hr, hc);
        animator.recompute_targets();

        let expanded_cols = animator.axis(Axis::Cols).target.iter().filter(|&&t| t == 3.0).count();
        let expanded_rows = animator.axis(Axis::Rows).target.iter().filter(|&&t| t == 3.0).count();
        prop_assert_eq!(expanded_cols, usize::from(hc < cols));
        prop_assert_eq!(expanded_rows, usize::from(hr < rows));

        animator.clear_hover();
        animator.recompute_targets();
        prop_assert!(animator.axis(Axis::Cols).target.iter().all(|&t| t == 1.0));
        prop_assert!(animator.axis(Axis::Rows).target.iter().all(|&t| t == 1.0));
    }
}
