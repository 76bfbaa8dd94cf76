// Property suites for the geometry laws the engine promises.

use curvenet::{intersect, Curve, Point, Tolerances};
use proptest::prelude::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

prop_compose! {
    fn any_curve()(coords in proptest::array::uniform8(-50.0f64..50.0)) -> Curve {
        Curve::from_coords([
            (coords[0], coords[1]),
            (coords[2], coords[3]),
            (coords[4], coords[5]),
            (coords[6], coords[7]),
        ])
    }
}

prop_compose! {
    // Strictly x-monotone cubics: injective, never self-intersecting, so
    // parameter inversion and nearest-point recovery are well posed.
    fn monotone_curve()(
        x1 in 1.0f64..4.0,
        x2 in 5.0f64..9.0,
        y in proptest::array::uniform4(-20.0f64..20.0),
    ) -> Curve {
        Curve::from_coords([(0.0, y[0]), (x1, y[1]), (x2, y[2]), (10.0, y[3])])
    }
}

proptest! {
    #[test]
    fn split_pieces_reproduce_the_parent(c in any_curve(), t in 0.05f64..0.95) {
        let (left, right) = c.split_at(t);
        for i in 0..=10 {
            let u = i as f64 / 10.0;
            prop_assert!(left.eval(u).distance(c.eval(u * t)) < 1e-6);
            prop_assert!(right.eval(u).distance(c.eval(t + u * (1.0 - t))) < 1e-6);
        }
    }

    #[test]
    fn multi_split_concatenation_is_exact(
        c in any_curve(),
        t1 in 0.1f64..0.4,
        t2 in 0.5f64..0.9,
    ) {
        let parts = c.split(&[t2, t1]);
        prop_assert_eq!(parts.len(), 3);
        prop_assert!(parts[0].p0.distance(c.p0) < 1e-9);
        prop_assert!(parts[2].p3.distance(c.p3) < 1e-9);
        prop_assert!(parts[0].p3.distance(parts[1].p0) < 1e-9);
        prop_assert!(parts[1].p3.distance(parts[2].p0) < 1e-9);
        prop_assert!(parts[0].p3.distance(c.eval(t1)) < 1e-6);
        prop_assert!(parts[1].p3.distance(c.eval(t2)) < 1e-6);
    }

    #[test]
    fn fit_reconstructs_interior_control_points(
        c in any_curve(),
        t1 in 0.15f64..0.45,
        t2 in 0.55f64..0.85,
    ) {
        let tol = Tolerances::default();
        let fitted = Curve::fit_through_points(
            c.p0, c.eval(t1), c.eval(t2), c.p3, t1, t2, &tol,
        ).expect("interior distinct parameters give a regular system");
        prop_assert!(fitted.p1.distance(c.p1) < 1e-4);
        prop_assert!(fitted.p2.distance(c.p2) < 1e-4);
    }

    #[test]
    fn parameter_inversion_round_trips(c in monotone_curve(), t in 0.0f64..1.0) {
        let tol = Tolerances::default();
        let got = c.parameter_of(c.eval(t), &tol);
        prop_assume!(got.is_ok());
        prop_assert!((got.unwrap() - t).abs() < 1e-3);
    }

    #[test]
    fn tight_box_is_contained_in_loose_box(c in any_curve()) {
        let tol = Tolerances::default();
        let loose = c.bounding_box();
        let tight = c.bounding_box_tight(&tol);
        prop_assert!(loose.contains(&tight, 1e-9));
        // Sampled curve points stay inside the tight box.
        for i in 0..=16 {
            let p = c.eval(i as f64 / 16.0);
            prop_assert!(tight.min.x <= p.x + 1e-6 && p.x <= tight.max.x + 1e-6);
            prop_assert!(tight.min.y <= p.y + 1e-6 && p.y <= tight.max.y + 1e-6);
        }
    }

    #[test]
    fn far_translation_kills_all_intersections(c in any_curve(), d in 250.0f64..1000.0) {
        let tol = Tolerances::default();
        let moved = c.translated(pt(d, d));
        prop_assert!(intersect(&c, &moved, &tol).unwrap().is_empty());
    }

    #[test]
    fn nearest_point_recovers_on_curve_points(c in monotone_curve(), t0 in 0.0f64..1.0) {
        let tol = Tolerances::default();
        let p = c.eval(t0);
        let (q, t) = c.nearest_point(p, &tol);
        prop_assert!(q.distance(p) < 1e-4);
        prop_assert!((t - t0).abs() < 1e-3);
    }

    #[test]
    fn self_intersection_points_coincide(c in any_curve()) {
        let tol = Tolerances::default();
        if let Some((t1, t2)) = c.self_intersection(&tol) {
            prop_assert!(t1 < t2);
            prop_assert!((0.0..=1.0).contains(&t1) && (0.0..=1.0).contains(&t2));
            prop_assert!(c.eval(t1).distance(c.eval(t2)) < 1e-3);
        }
    }
}
