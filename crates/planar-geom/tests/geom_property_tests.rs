// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Randomized properties of the bounding volumes and segment queries.

use planar_geom::planar_math::{Prng, Vector};
use planar_geom::{
    bounding_circle, intersection_point, segments_intersect, Aabb, Obb, Particle, Rect, Segment,
};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Vector> {
    (-500.0f32..500.0, -500.0f32..500.0).prop_map(|(x, y)| Vector::xy(x, y))
}

// Small integer coordinates keep every cross product exact in f32.
fn grid_segment() -> impl Strategy<Value = Segment> {
    (-100i16..100, -100i16..100, -100i16..100, -100i16..100).prop_map(|(ax, ay, bx, by)| {
        Segment::new(
            Vector::xy(f32::from(ax), f32::from(ay)),
            Vector::xy(f32::from(bx), f32::from(by)),
        )
    })
}

fn within(value: f32, lo: f32, hi: f32) -> bool {
    let tol = 1e-3 * (1.0 + lo.abs().max(hi.abs()));
    value >= lo - tol && value <= hi + tol
}

proptest! {
    #[test]
    fn aabb_contains_every_source_point(pts in prop::collection::vec(point(), 1..32)) {
        let aabb = Aabb::from_points(&pts).unwrap();
        for p in &pts {
            prop_assert!(aabb.contains(p), "{aabb:?} misses {p:?}");
        }
    }

    #[test]
    fn aabb_overlap_is_symmetric(a in point(), b in point(), c in point(), d in point()) {
        let x = Aabb::spanning(a, b);
        let y = Aabb::spanning(c, d);
        prop_assert_eq!(x.collides_with(&y), y.collides_with(&x));
    }

    #[test]
    fn segment_test_ignores_argument_and_endpoint_order(
        ab in grid_segment(),
        cd in grid_segment(),
    ) {
        let expected = segments_intersect(&ab, &cd);
        prop_assert_eq!(segments_intersect(&cd, &ab), expected);
        prop_assert_eq!(segments_intersect(&ab.reversed(), &cd), expected);
        prop_assert_eq!(segments_intersect(&ab, &cd.reversed()), expected);
    }

    #[test]
    fn intersection_point_lies_on_both_boxes(ab in grid_segment(), cd in grid_segment()) {
        prop_assume!(ab.direction().cross(&cd.direction()).z() != 0.0);
        if let Ok(Some(p)) = intersection_point(&ab, &cd) {
            for s in [&ab, &cd] {
                let (lo, hi) = (s.aabb().min(), s.aabb().max());
                prop_assert!(within(p.x(), lo.x(), hi.x()), "{p:?} outside {s:?}");
                prop_assert!(within(p.y(), lo.y(), hi.y()), "{p:?} outside {s:?}");
            }
        }
    }

    #[test]
    fn longer_obb_scan_never_grows_the_area(
        pts in prop::collection::vec(point(), 1..16),
        short in 1u16..45,
    ) {
        let first = Obb::from_points_with_steps(&pts, 1).unwrap();
        let partial = Obb::from_points_with_steps(&pts, short).unwrap();
        let full = Obb::from_points(&pts).unwrap();
        prop_assert!(partial.quarter_area() <= first.quarter_area());
        prop_assert!(full.quarter_area() <= partial.quarter_area());
    }

    #[test]
    fn bounding_circle_encloses_every_point(
        pts in prop::collection::vec(point(), 1..16),
        seed in any::<u64>(),
    ) {
        let mut rng = Prng::from_seed_u64(seed);
        let domain = Rect::centered(1000.0, 1000.0);
        let circle = bounding_circle(&pts, &domain, 10, &mut rng).unwrap();
        for p in &pts {
            prop_assert!(circle.contains(p), "{circle:?} misses {p:?}");
        }
    }

    #[test]
    fn surface_normal_bounce_keeps_speed(
        wall in grid_segment(),
        vx in -3.0f32..3.0,
        vy in -3.0f32..3.0,
    ) {
        let start = wall.aabb().center().minus(&Vector::xy(vx, vy));
        let mut particle = Particle::new(start, Vector::xy(vx, vy), 1.0).unwrap();
        let speed = particle.velocity().norm();
        let report = particle.step(&[wall]);
        prop_assert!(!report.collisions.is_empty());
        let after = particle.velocity().norm();
        prop_assert!((after - speed).abs() <= 1e-4 * (1.0 + speed), "{speed} -> {after}");
    }
}
