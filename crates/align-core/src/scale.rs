// File: crates/align-core/src/scale.rs
// Summary: Millimetre -> pixel transform for the plot area (Y grows upward in data space).

use crate::geometry::Point;
use crate::view::PlotView;

/// Pixel rectangle of the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
    pub fn to_skia(self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PlotScale {
    pub rect: PlotRect,
    pub view: PlotView,
}

impl PlotScale {
    pub fn new(rect: PlotRect, view: PlotView) -> Self {
        Self { rect, view }
    }
    #[inline]
    pub fn to_px_x(&self, x: f64) -> f32 {
        let span = (self.view.x_max - self.view.x_min).max(1e-12);
        self.rect.left + ((x - self.view.x_min) / span) as f32 * self.rect.width()
    }
    #[inline]
    pub fn to_px_y(&self, y: f64) -> f32 {
        let span = (self.view.y_max - self.view.y_min).max(1e-12);
        self.rect.bottom - ((y - self.view.y_min) / span) as f32 * self.rect.height()
    }
    #[inline]
    pub fn to_px(&self, p: Point) -> (f32, f32) {
        (self.to_px_x(p.x), self.to_px_y(p.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_axis_points_up() {
        let rect = PlotRect::from_ltrb(10.0, 20.0, 110.0, 220.0);
        let view = PlotView { x_min: 0.0, x_max: 50.0, y_min: 0.0, y_max: 100.0 };
        let s = PlotScale::new(rect, view);
        assert_eq!(s.to_px(Point::new(0.0, 0.0)), (10.0, 220.0));
        assert_eq!(s.to_px(Point::new(50.0, 100.0)), (110.0, 20.0));
        assert_eq!(s.to_px_y(50.0), 120.0);
    }
}
