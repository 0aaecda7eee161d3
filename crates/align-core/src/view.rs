// File: crates/align-core/src/view.rs
// Summary: Visible data ranges: autoscale to the plotted points, then equalise the aspect ratio.

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotView {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotView {
    /// Bounding box of `points` padded by `margin` (fraction of each span).
    pub fn fit<I: IntoIterator<Item = Point>>(points: I, margin: f64) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for p in points {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_min -= 0.5; x_max += 0.5; }
        if (y_max - y_min).abs() < 1e-9 { y_min -= 0.5; y_max += 0.5; }
        let xm = (x_max - x_min) * margin;
        let ym = (y_max - y_min) * margin;
        Self { x_min: x_min - xm, x_max: x_max + xm, y_min: y_min - ym, y_max: y_max + ym }
    }

    pub fn x_span(&self) -> f64 { self.x_max - self.x_min }
    pub fn y_span(&self) -> f64 { self.y_max - self.y_min }

    /// Widen whichever range is tighter so one millimetre covers the same
    /// number of pixels on both axes. The view centre is kept.
    pub fn equalize_aspect(&self, plot_w_px: f32, plot_h_px: f32) -> Self {
        let w = (plot_w_px as f64).max(1.0);
        let h = (plot_h_px as f64).max(1.0);
        let per_px = (self.x_span() / w).max(self.y_span() / h);
        let cx = (self.x_min + self.x_max) * 0.5;
        let cy = (self.y_min + self.y_max) * 0.5;
        let hx = per_px * w * 0.5;
        let hy = per_px * h * 0.5;
        Self { x_min: cx - hx, x_max: cx + hx, y_min: cy - hy, y_max: cy + hy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_each_side() {
        let v = PlotView::fit([Point::new(0.0, 0.0), Point::new(100.0, 200.0)], 0.05);
        assert_eq!(v, PlotView { x_min: -5.0, x_max: 105.0, y_min: -10.0, y_max: 210.0 });
    }

    #[test]
    fn fit_of_nothing_is_unit_box() {
        let v = PlotView::fit(std::iter::empty(), 0.05);
        assert_eq!(v, PlotView { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 });
    }

    #[test]
    fn equalized_view_has_square_pixels() {
        let v = PlotView { x_min: 0.0, x_max: 100.0, y_min: 0.0, y_max: 300.0 };
        let e = v.equalize_aspect(800.0, 600.0);
        assert!((e.x_span() / 800.0 - e.y_span() / 600.0).abs() < 1e-12);
        // Y was the binding range, so it is unchanged
        assert!((e.y_min - 0.0).abs() < 1e-12 && (e.y_max - 300.0).abs() < 1e-12);
        assert!((e.x_min + e.x_max - 100.0).abs() < 1e-9);
    }
}
