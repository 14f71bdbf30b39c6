#![cfg(test)]

use approx::assert_relative_eq;
use std::str::FromStr;

use crate::geo::distance::{haversine, planar};
use crate::geo::{DistanceStrategy, LatLng};
use crate::route::Segment;

fn point(lat: f64, lng: f64) -> LatLng {
    LatLng::from_degree(lat, lng).expect("test coordinate out of range")
}

#[test_log::test]
fn distance_is_zero_for_identical_points() {
    let p = point(43.65, -79.72);
    assert_eq!(haversine::haversine_distance(&p, &p), 0.0);
}

#[test_log::test]
fn distance_is_symmetric() {
    let a = point(43.65, -79.72);
    let b = point(44.0, -80.0);
    assert_eq!(
        haversine::haversine_distance(&a, &b),
        haversine::haversine_distance(&b, &a),
    );
}

#[test_log::test]
fn distance_agrees_with_georust_haversine() {
    use ::geo::{Distance, Haversine};

    let pairs = [
        (point(51.5007, -0.1246), point(48.8567, 2.3508)),
        (point(43.65, -79.72), point(43.7, -79.4)),
        (point(-33.8567844, 151.213108), point(-33.8472767, 151.2188164)),
    ];

    for (a, b) in pairs {
        let ours = haversine::haversine_distance(&a, &b);
        let theirs = Haversine.distance(::geo::Point::from(a), ::geo::Point::from(b));
        // The reference implementation uses a marginally different mean
        // radius, hence the loose relative bound.
        assert_relative_eq!(ours, theirs, max_relative = 1e-4);
    }
}

#[test_log::test]
fn london_to_paris_is_roughly_343_km() {
    let london = point(51.5007, -0.1246);
    let paris = point(48.8567, 2.3508);
    let d = haversine::haversine_distance(&london, &paris);
    assert!((340_000.0..348_000.0).contains(&d), "got {d}m");
}

#[test_log::test]
fn bearing_is_normalized() {
    let centre = point(43.65, -79.72);
    let west = point(43.65, -79.73);
    let b = haversine::initial_bearing(&centre, &west);
    assert!((0.0..360.0).contains(&b));
    assert_relative_eq!(b, 270.0, max_relative = 1e-3);
}

#[test_log::test]
fn bearing_due_east_on_equator() {
    let b = haversine::initial_bearing(&point(0.0, 0.0), &point(0.0, 10.0));
    assert_relative_eq!(b, 90.0, epsilon = 1e-9);
}

#[test_log::test]
fn bearing_agrees_with_georust() {
    use ::geo::{Bearing, Haversine};

    let a = point(43.65, -79.72);
    let b = point(44.1, -80.1);
    let ours = haversine::initial_bearing(&a, &b);
    let theirs = Haversine
        .bearing(::geo::Point::from(a), ::geo::Point::from(b))
        .rem_euclid(360.0);
    assert_relative_eq!(ours, theirs, epsilon = 1e-6);
}

#[test_log::test]
fn cross_track_from_equatorial_segment() {
    let start = point(0.0, 0.0);
    let end = point(0.0, 10.0);
    let off_track = point(1.0, 5.0);

    // The equator is itself a great circle, so the cross-track distance is
    // exactly the meridian distance down to (0, 5).
    let expected = haversine::haversine_distance(&off_track, &point(0.0, 5.0));
    let xt = haversine::cross_track_distance(&start, &end, &off_track);
    assert_relative_eq!(xt, expected, max_relative = 1e-6);
}

#[test_log::test]
fn cross_track_is_absolute() {
    let start = point(0.0, 0.0);
    let end = point(0.0, 10.0);
    let north = haversine::cross_track_distance(&start, &end, &point(1.0, 5.0));
    let south = haversine::cross_track_distance(&start, &end, &point(-1.0, 5.0));
    assert!(north >= 0.0 && south >= 0.0);
    assert_relative_eq!(north, south, max_relative = 1e-9);
}

#[test_log::test]
fn projection_detected_for_point_on_span() {
    let start = point(0.0, 0.0);
    let end = point(0.0, 10.0);
    assert!(haversine::projection_within_segment(
        &start,
        &end,
        &point(0.0, 5.0)
    ));
}

#[test_log::test]
fn projection_rejected_beyond_endpoint() {
    let start = point(0.0, 0.0);
    let end = point(0.0, 10.0);
    assert!(!haversine::projection_within_segment(
        &start,
        &end,
        &point(0.0, 11.0)
    ));
}

#[test_log::test]
fn on_span_point_resolves_to_cross_track() {
    let segment = Segment::new(point(0.0, 0.0), point(0.0, 10.0));
    let on_span = point(0.0, 5.0);
    let d = haversine::point_to_segment_distance(&on_span, &segment);
    assert_relative_eq!(d, 0.0, epsilon = 1e-3);
}

#[test_log::test]
fn off_span_point_resolves_to_nearer_endpoint() {
    let segment = Segment::new(point(0.0, 0.0), point(0.0, 10.0));
    let beyond = point(0.0, 12.0);
    let d = haversine::point_to_segment_distance(&beyond, &segment);
    let to_end = haversine::haversine_distance(&beyond, &segment.end);
    assert_relative_eq!(d, to_end, max_relative = 1e-9);
}

#[test_log::test]
fn segment_distance_never_exceeds_farther_endpoint() {
    let segments = [
        Segment::new(point(43.65, -79.73), point(43.65, -79.71)),
        Segment::new(point(0.0, 0.0), point(5.0, 5.0)),
        Segment::new(point(-33.8567844, 151.213108), point(-33.8472767, 151.2188164)),
    ];
    let probes = [
        point(43.6500, -79.7200),
        point(1.0, 1.0),
        point(-33.860664, 151.208138),
        point(44.0, -80.0),
    ];

    for segment in &segments {
        for probe in &probes {
            let via_segment = haversine::point_to_segment_distance(probe, segment);
            let farther = haversine::haversine_distance(probe, &segment.start)
                .max(haversine::haversine_distance(probe, &segment.end));
            assert!(
                via_segment <= farther + 1e-6,
                "{via_segment} > {farther} for {probe:?} against {segment:?}"
            );
        }
    }
}

#[test_log::test]
fn planar_metric_is_squared_degrees() {
    let d = planar::squared_degree_distance(&point(2.0, 3.0), &point(0.0, 0.0));
    assert_relative_eq!(d, 13.0, epsilon = 1e-12);
}

#[test_log::test]
fn planar_endpoint_distance_pairs_axes_correctly() {
    let segment = Segment::new(point(0.0, 0.0), point(1.0, 1.0));
    let probe = point(2.0, 3.0);
    // start: 4 + 9, end: 1 + 4; the end term must pair lng against lng.
    assert_relative_eq!(planar::endpoint_distance(&probe, &segment), 5.0, epsilon = 1e-12);
}

#[test_log::test]
fn strategy_parses_from_config_names() {
    assert_eq!(
        DistanceStrategy::from_str("geodesic").unwrap(),
        DistanceStrategy::Geodesic
    );
    assert_eq!(
        DistanceStrategy::from_str("planar-approx").unwrap(),
        DistanceStrategy::PlanarApprox
    );
    assert!(DistanceStrategy::from_str("euclidean").is_err());
    assert_eq!(DistanceStrategy::default(), DistanceStrategy::Geodesic);
}

#[test_log::test]
fn strategy_display_matches_wire_names() {
    assert_eq!(DistanceStrategy::Geodesic.to_string(), "geodesic");
    assert_eq!(DistanceStrategy::PlanarApprox.to_string(), "planar-approx");
}

#[test_log::test]
fn strategies_dispatch_their_metrics() {
    let a = point(43.65, -79.72);
    let b = point(43.66, -79.70);

    let geodesic = DistanceStrategy::Geodesic.point_distance(&a, &b);
    let flattened = DistanceStrategy::PlanarApprox.point_distance(&a, &b);

    assert_relative_eq!(geodesic, haversine::haversine_distance(&a, &b));
    assert_relative_eq!(flattened, planar::squared_degree_distance(&a, &b));
}
