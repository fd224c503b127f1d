use encircle::encircle2d::Circle2D;
use encircle::Circle;
use glam::DVec2;

#[test]
fn diameter_circle_has_both_points_on_boundary() {
    let pairs = [
        (DVec2::new(0.0, 0.0), DVec2::new(2.0, 0.0)),
        (DVec2::new(-3.5, 1.0), DVec2::new(4.0, -2.25)),
        (DVec2::new(1e3, 1e3), DVec2::new(-1e3, 2e3)),
    ];

    for (p1, p2) in pairs {
        let circle = Circle2D::from_diameter(&p1, &p2);
        assert!((circle.radius - p1.distance(p2) / 2.0).abs() < 1e-9);
        assert!((circle.center.distance(p1) - circle.radius).abs() < 1e-9);
        assert!((circle.center.distance(p2) - circle.radius).abs() < 1e-9);
    }
}

#[test]
fn diameter_circle_of_identical_points_degenerates() {
    let p = DVec2::new(7.0, -3.0);
    let circle = Circle2D::from_diameter(&p, &p);
    assert_eq!(circle.center, p);
    assert_eq!(circle.radius, 0.0);
}

#[test]
fn circumscribing_puts_all_three_points_on_boundary() {
    let triples = [
        (
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(1.0, 1.0),
        ),
        (
            DVec2::new(-1.0, -1.0),
            DVec2::new(4.0, 0.5),
            DVec2::new(0.25, 3.0),
        ),
        (
            DVec2::new(100.0, 200.0),
            DVec2::new(101.0, 200.0),
            DVec2::new(100.0, 201.0),
        ),
    ];

    for (p1, p2, p3) in triples {
        let circle = Circle2D::circumscribing(&p1, &p2, &p3)
            .expect("non-collinear triple must yield a circumcircle");
        for p in [p1, p2, p3] {
            assert!(
                (circle.center.distance(p) - circle.radius).abs() < 1e-9,
                "{p:?} not on the boundary of {circle:?}"
            );
        }
    }
}

#[test]
fn circumscribing_center_matches_hand_computation() {
    // perpendicular bisectors of (0,0)-(2,0) and (0,0)-(1,1) meet at (1,0)
    let circle = Circle2D::circumscribing(
        &DVec2::new(0.0, 0.0),
        &DVec2::new(2.0, 0.0),
        &DVec2::new(1.0, 1.0),
    )
    .expect("non-collinear triple must yield a circumcircle");

    assert!(
        circle.center.distance(DVec2::new(1.0, 0.0)) < 1e-9,
        "center {:?} is off, a sign slip in the closed form mirrors it in x",
        circle.center
    );
    assert!((circle.radius - 1.0).abs() < 1e-9);
}

#[test]
fn circumscribing_rejects_collinear_triples() {
    let collinear = [
        (
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(2.0, 0.0),
        ),
        (
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(2.0, 2.0),
        ),
        // coincident points are collinear too
        (
            DVec2::new(3.0, 3.0),
            DVec2::new(3.0, 3.0),
            DVec2::new(5.0, 1.0),
        ),
    ];

    for (p1, p2, p3) in collinear {
        assert!(Circle2D::circumscribing(&p1, &p2, &p3).is_none());
    }
}

#[test]
fn containment_uses_squared_distance_tolerance() {
    let circle = Circle2D::new(DVec2::new(0.0, 0.0), 1.0);

    // squared distance r^2 + 0.5e-6: inside the tolerance band
    let just_inside = DVec2::new((1.0f64 + 0.5e-6).sqrt(), 0.0);
    assert!(circle.contains(&just_inside));

    // squared distance r^2 + 2e-6: outside it
    let just_outside = DVec2::new((1.0f64 + 2e-6).sqrt(), 0.0);
    assert!(!circle.contains(&just_outside));
}

#[test]
fn containment_is_monotonic_in_radius() {
    let points = vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 2.0),
        DVec2::new(-2.0, 1.5),
        DVec2::new(0.5, -1.0),
    ];
    let center = DVec2::new(0.0, 0.5);

    let mut radius = 0.0;
    let mut previously_contained = false;
    while radius < 5.0 {
        let contained = Circle::new(center, radius).contains_all(&points);
        assert!(
            !previously_contained || contained,
            "growing the radius to {radius} lost containment"
        );
        previously_contained = contained;
        radius += 0.25;
    }
    assert!(previously_contained);
}

#[test]
fn unbounded_sentinel_is_flagged() {
    let sentinel = Circle2D::unbounded();
    assert!(sentinel.is_unbounded());
    assert_eq!(sentinel.center, DVec2::new(0.0, 0.0));

    let real = Circle2D::new(DVec2::new(1.0, 1.0), 2.0);
    assert!(!real.is_unbounded());
}
