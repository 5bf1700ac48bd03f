use multiline_rs::api::nearest_point_at_x;
use multiline_rs::core::{PathGeometry, PixelPoint};

fn diagonal_path() -> PathGeometry {
    // 45-degree line: x equals y equals length / sqrt(2).
    PathGeometry::from_vertices(vec![
        PixelPoint::new(0.0, 0.0),
        PixelPoint::new(100.0, 100.0),
    ])
    .expect("geometry")
}

#[test]
fn search_lands_within_one_probe_step_of_the_query() {
    let path = diagonal_path();

    for target_x in [0.0, 12.5, 37.0, 63.9, 99.0] {
        let hit = nearest_point_at_x(&path, target_x).expect("hit");
        assert!(
            (hit.x - target_x).abs() <= 1.0,
            "query {target_x} resolved to x={}",
            hit.x
        );
        // On the diagonal the y readout tracks x.
        assert!((hit.y - hit.x).abs() <= 1e-9);
    }
}

#[test]
fn queries_outside_the_extent_clamp_to_the_endpoints() {
    let path = diagonal_path();

    let before = nearest_point_at_x(&path, -50.0).expect("hit");
    assert_eq!(before.length, 0.0);
    assert_eq!(before.x, 0.0);

    let after = nearest_point_at_x(&path, 10_000.0).expect("hit");
    // The floored bisection stops within a couple of length units of
    // the far endpoint.
    assert!(path.total_length() - after.length <= 2.0);
    assert!(after.x > 98.0);
}

#[test]
fn flat_segments_resolve_to_a_point_sharing_the_query_x() {
    let path = PathGeometry::from_vertices(vec![
        PixelPoint::new(0.0, 10.0),
        PixelPoint::new(50.0, 10.0),
        PixelPoint::new(50.0, 60.0),
        PixelPoint::new(120.0, 60.0),
    ])
    .expect("geometry");

    let hit = nearest_point_at_x(&path, 80.0).expect("hit");
    assert!((hit.x - 80.0).abs() <= 1.0);
    assert!((hit.y - 60.0).abs() <= 1e-9);
}

#[test]
fn empty_paths_and_non_finite_queries_miss() {
    let empty = PathGeometry::from_vertices(Vec::new()).expect("empty geometry");
    assert!(nearest_point_at_x(&empty, 10.0).is_none());

    let path = diagonal_path();
    assert!(nearest_point_at_x(&path, f64::NAN).is_none());
}

#[test]
fn single_point_paths_always_return_that_point() {
    let dot = PathGeometry::from_vertices(vec![PixelPoint::new(7.0, 3.0)]).expect("geometry");
    let hit = nearest_point_at_x(&dot, 99.0).expect("hit");
    assert_eq!(hit.x, 7.0);
    assert_eq!(hit.y, 3.0);
}
