// File: crates/align-core/tests/rgba.rs
// Purpose: Validate RGBA buffer shape and sample the outlines along their edges.

use align_core::scale::PlotScale;
use align_core::{compare, Figure, FigureOptions, Point, Quad, Theme, SAMPLE_ACTUAL};

fn figure() -> Figure {
    Figure::new(&compare(Quad::a4().points(), &SAMPLE_ACTUAL).unwrap())
}

fn opts() -> FigureOptions {
    FigureOptions { width: 800, height: 800, draw_labels: false, ..FigureOptions::default() }
}

struct Pixels {
    px: Vec<u8>,
    w: usize,
    h: usize,
    stride: usize,
}

impl Pixels {
    fn render(fig: &Figure, opts: &FigureOptions) -> Self {
        let (px, w, h, stride) = fig.render_to_rgba8(opts).expect("rgba render");
        Self { px, w: w as usize, h: h as usize, stride }
    }

    fn at(&self, x: usize, y: usize) -> [u8; 4] {
        let i = y * self.stride + x * 4;
        [self.px[i], self.px[i + 1], self.px[i + 2], self.px[i + 3]]
    }

    /// Any pixel within +-2 columns of `x` on row `y` that passes `pred`.
    fn row_hit(&self, x: f32, y: usize, pred: impl Fn([u8; 4]) -> bool) -> bool {
        let x0 = (x.floor() as i64 - 2).max(0) as usize;
        let x1 = ((x.floor() as i64 + 2) as usize).min(self.w - 1);
        (x0..=x1).any(|xx| pred(self.at(xx, y)))
    }
}

fn reddish(p: [u8; 4]) -> bool {
    p[0] > 200 && p[1] < 90 && p[2] < 90
}

fn bluish(p: [u8; 4]) -> bool {
    p[2] > 200 && p[0] < 90 && p[1] < 90
}

/// Pixel rows between two points plus the outline's x on each row.
fn edge_rows(scale: &PlotScale, a: Point, b: Point, t0: f64, t1: f64) -> Vec<(f32, usize)> {
    let (ax, ay) = scale.to_px(a);
    let (bx, by) = scale.to_px(b);
    let y_start = (ay + (by - ay) * t0 as f32).min(ay + (by - ay) * t1 as f32).ceil() as usize;
    let y_end = (ay + (by - ay) * t0 as f32).max(ay + (by - ay) * t1 as f32).floor() as usize;
    (y_start..=y_end)
        .map(|y| {
            let t = (y as f32 + 0.5 - ay) / (by - ay);
            (ax + (bx - ax) * t, y)
        })
        .collect()
}

#[test]
fn render_rgba8_buffer() {
    let o = opts();
    let (px, w, h, stride) = figure().render_to_rgba8(&o).expect("rgba render");
    assert_eq!((w, h), (800, 800));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is opaque figure background
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn actual_left_edge_is_solid() {
    let fig = figure();
    let o = opts();
    let px = Pixels::render(&fig, &o);
    let scale = fig.scale_for(&o);

    // middle of BL -> TL, well away from the corner markers
    let rows = edge_rows(&scale, SAMPLE_ACTUAL[0], SAMPLE_ACTUAL[2], 0.3, 0.7);
    assert!(rows.len() > 20, "edge too short to sample: {}", rows.len());
    for &(x, y) in &rows {
        assert!(px.row_hit(x, y, reddish), "gap in actual outline at row {y}");
    }
}

#[test]
fn design_left_edge_is_dashed() {
    let fig = figure();
    let o = opts();
    let px = Pixels::render(&fig, &o);
    let scale = fig.scale_for(&o);

    // design x = 0 between y = 100 and 200 mm
    let rows = edge_rows(&scale, Point::new(0.0, 100.0), Point::new(0.0, 200.0), 0.0, 1.0);
    assert!(rows.len() > 20, "edge too short to sample: {}", rows.len());
    let inked = rows.iter().filter(|&&(x, y)| px.row_hit(x, y, bluish)).count();
    assert!(inked > rows.len() / 3, "design outline missing ({inked}/{})", rows.len());
    assert!(inked < rows.len(), "design outline has no dash gaps");
}

#[test]
fn text_panel_uses_theme_fill() {
    let o = FigureOptions { width: 600, height: 500, ..opts() };
    let px = Pixels::render(&figure(), &o);
    let (_, panel) = o.panels();
    let x = (panel.left + panel.right) as usize / 2;
    let y = (panel.top + panel.bottom) as usize / 2;
    assert!(x < px.w && y < px.h);
    assert_eq!(px.at(x, y), [0xf0, 0xf0, 0xf0, 255]);
}

#[test]
fn dark_theme_background() {
    let o = FigureOptions { width: 300, height: 300, theme: Theme::dark(), ..opts() };
    let px = Pixels::render(&figure(), &o);
    assert_eq!(px.at(0, 0), [18, 18, 20, 255]);
}
