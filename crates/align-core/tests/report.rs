// File: crates/align-core/tests/report.rs
// Purpose: Exact text of the comparison report.

use align_core::{compare, Point, Quad, Report};

#[test]
fn a4_example_report_text() {
    let actual = [
        Point::new(30.5, 45.114),
        Point::new(258.921, 20.0),
        Point::new(65.518, 368.167),
        Point::new(294.44, 343.553),
    ];
    let cmp = compare(Quad::a4().points(), &actual).unwrap();
    let text = Report::new(&cmp).to_string();

    let want = "\
Actual working points:
(30.500, 45.114) mm
(258.921, 20.000) mm
(65.518, 368.167) mm
(294.440, 343.553) mm

Actual corners:

Bottom-left corner:
Actual:   (30.500, 45.114) mm
ΔX = +30.500 mm | ΔY = +45.114 mm

Bottom-right corner:
Actual:   (258.921, 20.000) mm
ΔX = +48.921 mm | ΔY = +20.000 mm

Top-left corner:
Actual:   (65.518, 368.167) mm
ΔX = +65.518 mm | ΔY = +71.167 mm

Top-right corner:
Actual:   (294.440, 343.553) mm
ΔX = +84.440 mm | ΔY = +46.553 mm

Rotation angle of actual shape: -6.274°
";
    assert_eq!(text, want);
}

#[test]
fn negative_deltas_and_undefined_angle() {
    let p = Point::new(-1.25, 0.0);
    let actual = [p, p, Point::new(0.0, 290.0), Point::new(200.0, 290.0)];
    let report = Report::new(&compare(Quad::a4().points(), &actual).unwrap());

    assert_eq!(report.corners[1], "Bottom-right corner:\nActual:   (-1.250, 0.000) mm\nΔX = -211.250 mm | ΔY = +0.000 mm\n");
    assert_eq!(report.corners[2].lines().nth(2), Some("ΔX = +0.000 mm | ΔY = -7.000 mm"));
    assert!(report.rotation.ends_with("undefined (degenerate bottom edge)"));
}

#[test]
fn positive_angle_has_explicit_sign() {
    let actual = [
        Point::new(0.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(0.0, 297.0),
        Point::new(210.0, 297.0),
    ];
    let report = Report::new(&compare(Quad::a4().points(), &actual).unwrap());
    assert_eq!(report.rotation, "Rotation angle of actual shape: +45.000°");
}
