use multiline_rs::api::nearest_point_at_x;
use multiline_rs::core::{PathGeometry, PixelPoint};
use proptest::prelude::*;

proptest! {
    #[test]
    fn hit_x_stays_within_probe_step_tolerance(
        steps in proptest::collection::vec(0.5f64..30.0, 1..48),
        ys in proptest::collection::vec(-400.0f64..400.0, 2..49),
        pick in any::<prop::sample::Index>()
    ) {
        let count = (steps.len() + 1).min(ys.len());
        prop_assume!(count >= 2);

        let mut x = 0.0;
        let mut vertices = Vec::with_capacity(count);
        for index in 0..count {
            if index > 0 {
                x += steps[index - 1];
            }
            vertices.push(PixelPoint::new(x, ys[index]));
        }

        let geometry = PathGeometry::from_vertices(vertices.clone()).expect("geometry");
        let target = vertices[pick.index(count)];

        let hit = nearest_point_at_x(&geometry, target.x).expect("hit");

        // The search moves in whole arc-length units and x never grows
        // faster than arc length, so the probe-step error bounds the
        // horizontal error.
        prop_assert!((hit.x - target.x).abs() <= 2.0 + 1e-6);
        prop_assert!(hit.length >= 0.0);
        prop_assert!(hit.length <= geometry.total_length());
    }

    #[test]
    fn out_of_extent_queries_clamp(
        steps in proptest::collection::vec(0.5f64..30.0, 1..32),
        ys in proptest::collection::vec(-400.0f64..400.0, 2..33),
        overshoot in 1.0f64..10_000.0
    ) {
        let count = (steps.len() + 1).min(ys.len());
        prop_assume!(count >= 2);

        let mut x = 0.0;
        let mut vertices = Vec::with_capacity(count);
        for index in 0..count {
            if index > 0 {
                x += steps[index - 1];
            }
            vertices.push(PixelPoint::new(x, ys[index]));
        }
        let max_x = x;

        let geometry = PathGeometry::from_vertices(vertices).expect("geometry");

        let low = nearest_point_at_x(&geometry, -overshoot).expect("hit");
        prop_assert!(low.length <= 2.0);

        let high = nearest_point_at_x(&geometry, max_x + overshoot).expect("hit");
        prop_assert!(geometry.total_length() - high.length <= 2.0);
    }
}
