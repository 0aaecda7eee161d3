// File: crates/align-core/src/geometry.rs
// Summary: Points, corner naming, and the 4-corner quadrilateral model (millimetres).

use std::ops::Sub;

use crate::error::{CompareError, Shape};

/// Nominal A4 sheet width in millimetres.
pub const A4_WIDTH_MM: f64 = 210.0;
/// Nominal A4 sheet height in millimetres.
pub const A4_HEIGHT_MM: f64 = 297.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Edge vector from `rhs` to `self`.
impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Measured corners of one sample A4 placement, in canonical corner order.
/// Used by the bundled binaries; nothing runs on it implicitly.
pub const SAMPLE_ACTUAL: [Point; 4] = [
    Point::new(30.500, 45.114),
    Point::new(258.921, 20.000),
    Point::new(65.518, 368.167),
    Point::new(294.440, 343.553),
];

/// Corner names in canonical input order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::BottomLeft,
        Corner::BottomRight,
        Corner::TopLeft,
        Corner::TopRight,
    ];

    pub const fn index(self) -> usize {
        match self {
            Corner::BottomLeft => 0,
            Corner::BottomRight => 1,
            Corner::TopLeft => 2,
            Corner::TopRight => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Corner::BottomLeft => "Bottom-left corner",
            Corner::BottomRight => "Bottom-right corner",
            Corner::TopLeft => "Top-left corner",
            Corner::TopRight => "Top-right corner",
        }
    }
}

/// Four corners in the order [bottom-left, bottom-right, top-left, top-right].
///
/// Contract: the order is positional only. Points supplied out of order are
/// accepted and simply produce a meaningless comparison; no convexity or
/// planarity check is made.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    points: [Point; 4],
}

impl Quad {
    pub const fn new(points: [Point; 4]) -> Self {
        Self { points }
    }

    /// Validate a caller-supplied slice. `which` only feeds the error message.
    pub fn try_from_points(points: &[Point], which: Shape) -> Result<Self, CompareError> {
        let points: [Point; 4] = points
            .try_into()
            .map_err(|_| CompareError::InvalidInputLength { which, found: points.len() })?;
        Ok(Self { points })
    }

    /// The design sheet: axis-aligned A4 with its bottom-left corner at the origin.
    pub const fn a4() -> Self {
        Self::new([
            Point::new(0.0, 0.0),
            Point::new(A4_WIDTH_MM, 0.0),
            Point::new(0.0, A4_HEIGHT_MM),
            Point::new(A4_WIDTH_MM, A4_HEIGHT_MM),
        ])
    }

    #[inline]
    pub fn corner(&self, c: Corner) -> Point {
        self.points[c.index()]
    }

    #[inline]
    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }

    /// Reference edge used for rotation: bottom-left -> bottom-right.
    #[inline]
    pub fn bottom_edge(&self) -> Point {
        self.corner(Corner::BottomRight) - self.corner(Corner::BottomLeft)
    }
}
