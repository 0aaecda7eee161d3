// File: crates/align-core/src/compare.rs
// Summary: Per-corner deltas, bottom-edge rotation angle, and closed outline paths.

use log::{debug, warn};

use crate::error::{CompareError, Shape};
use crate::geometry::{Corner, Point, Quad};

/// Offset of an actual corner from its design corner, in millimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

/// Result of comparing an actual quadrilateral against its design.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub design: Quad,
    pub actual: Quad,
    /// Indexed like the input corners.
    pub deltas: [Delta; 4],
    /// Degrees in (-180, 180]. `None` when either bottom edge has zero length.
    pub rotation_deg: Option<f64>,
}

impl Comparison {
    pub fn delta(&self, c: Corner) -> Delta {
        self.deltas[c.index()]
    }
}

/// Validate both inputs, then derive deltas and the rotation angle.
///
/// Both lengths are checked before anything is computed.
pub fn compare(design: &[Point], actual: &[Point]) -> Result<Comparison, CompareError> {
    let design = Quad::try_from_points(design, Shape::Design)?;
    let actual = Quad::try_from_points(actual, Shape::Actual)?;
    Ok(compare_quads(&design, &actual))
}

pub fn compare_quads(design: &Quad, actual: &Quad) -> Comparison {
    let deltas = deltas(design, actual);
    let rotation_deg = rotation_angle(design, actual);
    match rotation_deg {
        Some(a) => debug!("rotation {a:.3} deg, deltas {deltas:?}"),
        None => warn!("rotation undefined: zero-length bottom edge"),
    }
    Comparison { design: *design, actual: *actual, deltas, rotation_deg }
}

/// Element-wise `actual - design`; corners are matched by index only.
pub fn deltas(design: &Quad, actual: &Quad) -> [Delta; 4] {
    let d = design.points();
    let a = actual.points();
    std::array::from_fn(|i| Delta { dx: a[i].x - d[i].x, dy: a[i].y - d[i].y })
}

/// Angle of `v` from the positive X axis, radians in (-pi, pi].
#[inline]
pub fn edge_angle(v: Point) -> f64 {
    v.y.atan2(v.x)
}

/// Wrap any angle in degrees into (-180, 180].
pub fn normalize_degrees(raw: f64) -> f64 {
    let a = (raw + 360.0).rem_euclid(360.0);
    if a > 180.0 { a - 360.0 } else { a }
}

/// Signed rotation of `actual` relative to `design`, measured on the
/// bottom-left -> bottom-right edge of each.
///
/// Returns `None` if either edge is zero length: `atan2(0, 0)` would report 0
/// which is not a meaningful direction.
pub fn rotation_angle(design: &Quad, actual: &Quad) -> Option<f64> {
    let vd = design.bottom_edge();
    let va = actual.bottom_edge();
    if is_zero(vd) || is_zero(va) {
        return None;
    }
    let raw = (edge_angle(va) - edge_angle(vd)).to_degrees();
    Some(normalize_degrees(raw))
}

#[inline]
fn is_zero(v: Point) -> bool {
    v.x == 0.0 && v.y == 0.0
}

/// Closed outline `[BL, TL, TR, BR, BL]` as parallel X/Y arrays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosedPath {
    pub xs: [f64; 5],
    pub ys: [f64; 5],
}

/// Canonical index order walked when drawing a quad's perimeter.
pub const PERIMETER_ORDER: [usize; 5] = [0, 2, 3, 1, 0];

impl ClosedPath {
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.xs.iter().zip(self.ys.iter()).map(|(&x, &y)| Point::new(x, y))
    }

    /// The four corners, without the closing repeat.
    pub fn markers(&self) -> impl Iterator<Item = Point> + '_ {
        self.points().take(4)
    }
}

/// Always 5 points, whether or not `quad` is actually a rectangle.
pub fn rectangle_path(quad: &Quad) -> ClosedPath {
    let p = quad.points();
    ClosedPath {
        xs: PERIMETER_ORDER.map(|i| p[i].x),
        ys: PERIMETER_ORDER.map(|i| p[i].y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_into_half_open_range() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(180.0), 180.0);
        assert_eq!(normalize_degrees(-180.0), 180.0);
        assert!((normalize_degrees(270.0) + 90.0).abs() < 1e-12);
        assert!((normalize_degrees(-270.0) - 90.0).abs() < 1e-12);
        assert!((normalize_degrees(725.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_bottom_edge_has_no_angle() {
        let p = Point::new(5.0, 5.0);
        let actual = Quad::new([p, p, Point::new(0.0, 1.0), Point::new(1.0, 1.0)]);
        assert_eq!(rotation_angle(&Quad::a4(), &actual), None);
        assert_eq!(rotation_angle(&actual, &Quad::a4()), None);
    }

    #[test]
    fn edge_angle_quadrants() {
        assert_eq!(edge_angle(Point::new(1.0, 0.0)), 0.0);
        assert!((edge_angle(Point::new(0.0, 1.0)) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((edge_angle(Point::new(-1.0, 0.0)) - std::f64::consts::PI).abs() < 1e-12);
    }
}
