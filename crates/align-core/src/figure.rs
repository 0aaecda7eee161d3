// File: crates/align-core/src/figure.rs
// Summary: Comparison figure and headless rendering pipeline using Skia CPU raster surfaces.
// Layout: plot panel (design/actual outlines, grid, legend) stacked over a
// text panel holding the report; the plot gets `panel_ratio` times the height.

use anyhow::{Context, Result};
use log::{debug, info};
use skia_safe as skia;

use crate::compare::{compare, rectangle_path, ClosedPath, Comparison};
use crate::geometry::Point;
use crate::grid::{nice_step, nice_ticks};
use crate::report::Report;
use crate::scale::{PlotRect, PlotScale};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, DATA_MARGIN, HEIGHT, LINE_WIDTH, MARKER_RADIUS, WIDTH};
use crate::view::PlotView;

pub const TITLE: &str = "Design vs actual position\n(A4 format: 210 × 297 mm)";
pub const X_LABEL: &str = "X coordinate (mm)";
pub const Y_LABEL: &str = "Y coordinate (mm)";
pub const DESIGN_LABEL: &str = "Design shape (A4)";
pub const ACTUAL_LABEL: &str = "Actual position";

/// Outer padding around and between the two panels.
const PAD: f32 = 16.0;
const LEGEND_PAD: f32 = 10.0;
const LEGEND_SWATCH: f32 = 32.0;
const REPORT_FONT: f32 = 13.0;

#[derive(Clone, Copy, Debug)]
pub struct FigureOptions {
    pub width: i32,
    pub height: i32,
    /// Margins of the plot area inside the plot panel.
    pub insets: Insets,
    pub theme: Theme,
    /// When false no text is drawn at all (titles, ticks, legend text, report).
    pub draw_labels: bool,
    /// Plot panel height : text panel height.
    pub panel_ratio: (u32, u32),
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            panel_ratio: (3, 1),
        }
    }
}

impl FigureOptions {
    /// Pixel rects of (plot panel, text panel).
    pub fn panels(&self) -> (PlotRect, PlotRect) {
        let w = self.width as f32;
        let h = self.height as f32;
        let (top, bottom) = self.panel_ratio;
        let total = (top + bottom).max(1) as f32;
        let usable = (h - PAD * 3.0).max(2.0);
        let plot_h = usable * top as f32 / total;
        let plot = PlotRect::from_ltrb(0.0, 0.0, w, PAD + plot_h);
        let text = PlotRect::from_ltrb(PAD, plot.bottom + PAD, w - PAD, h - PAD);
        (plot, text)
    }

    /// Plot area: the plot panel shrunk by `insets`.
    pub fn plot_area(&self) -> PlotRect {
        let (panel, _) = self.panels();
        let i = self.insets;
        PlotRect::from_ltrb(
            panel.left + i.left as f32,
            panel.top + i.top as f32,
            (panel.right - i.right as f32).max(panel.left + i.left as f32 + 1.0),
            (panel.bottom - i.bottom as f32).max(panel.top + i.top as f32 + 1.0),
        )
    }
}

/// A renderable comparison: both outlines plus the text report.
pub struct Figure {
    pub comparison: Comparison,
    pub design_path: ClosedPath,
    pub actual_path: ClosedPath,
    pub report: Report,
}

impl Figure {
    pub fn new(cmp: &Comparison) -> Self {
        Self {
            comparison: cmp.clone(),
            design_path: rectangle_path(&cmp.design),
            actual_path: rectangle_path(&cmp.actual),
            report: Report::new(cmp),
        }
    }

    /// Equal-aspect view covering both shapes for the given plot area.
    pub fn view_for(&self, area: &PlotRect) -> PlotView {
        let pts = self.design_path.markers().chain(self.actual_path.markers());
        PlotView::fit(pts, DATA_MARGIN).equalize_aspect(area.width(), area.height())
    }

    /// Data -> pixel mapping used when drawing with `opts`.
    pub fn scale_for(&self, opts: &FigureOptions) -> PlotScale {
        let area = opts.plot_area();
        PlotScale::new(area, self.view_for(&area))
    }

    fn render_surface(&self, opts: &FigureOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    /// Render into a tightly packed RGBA8 buffer. Returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &FigureOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            anyhow::bail!("reading back surface pixels failed");
        }
        Ok((px, w as u32, h as u32, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &FigureOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the figure to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &FigureOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    pub fn draw(&self, canvas: &skia::Canvas, opts: &FigureOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let shaper = opts.draw_labels.then(TextShaper::new);
        let scale = self.scale_for(opts);
        let area = scale.rect;
        debug!("plot area {area:?}, view {:?}", scale.view);

        draw_grid(canvas, &scale, theme);

        canvas.save();
        canvas.clip_rect(area.to_skia(), None, Some(true));
        draw_outline(canvas, &scale, &self.design_path, theme.design_stroke, true);
        draw_outline(canvas, &scale, &self.actual_path, theme.actual_stroke, false);
        draw_markers(canvas, &scale, &self.design_path, theme.design_stroke, theme.marker_edge);
        draw_markers(canvas, &scale, &self.actual_path, theme.actual_stroke, theme.marker_edge);
        canvas.restore();

        draw_frame(canvas, &area, theme);
        if let Some(shaper) = &shaper {
            draw_tick_labels(canvas, shaper, &scale, theme);
            draw_titles(canvas, shaper, &area, theme);
        }

        let occupied: Vec<(f32, f32)> = self
            .design_path
            .markers()
            .chain(self.actual_path.markers())
            .map(|p| scale.to_px(p))
            .collect();
        draw_legend(canvas, shaper.as_ref(), &area, &occupied, theme);

        let (_, text_panel) = opts.panels();
        draw_report(canvas, shaper.as_ref(), &text_panel, &self.report, theme);
    }
}

/// Validate, compare, and render the figure to PNG bytes.
///
/// Input length is checked before anything is rendered. Writing or showing
/// the bytes is left to the caller.
pub fn draw_comparison(design: &[Point], actual: &[Point], opts: &FigureOptions) -> Result<(Figure, Vec<u8>)> {
    let cmp = compare(design, actual)?;
    let figure = Figure::new(&cmp);
    let png = figure.render_to_png_bytes(opts)?;
    Ok((figure, png))
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn dashed(mut paint: skia::Paint, intervals: &[f32]) -> skia::Paint {
    paint.set_path_effect(skia::PathEffect::dash(intervals, 0.0));
    paint
}

fn tick_targets(area: &PlotRect) -> (usize, usize) {
    (((area.width() / 90.0) as usize).max(2), ((area.height() / 70.0) as usize).max(2))
}

fn draw_grid(canvas: &skia::Canvas, scale: &PlotScale, theme: &Theme) {
    let a = scale.rect;
    let v = scale.view;
    let (tx, ty) = tick_targets(&a);
    let paint = dashed(stroke_paint(theme.grid, 1.0), &[1.0, 3.0]);

    for x in nice_ticks(v.x_min, v.x_max, tx) {
        let px = scale.to_px_x(x);
        canvas.draw_line((px, a.top), (px, a.bottom), &paint);
    }
    for y in nice_ticks(v.y_min, v.y_max, ty) {
        let py = scale.to_px_y(y);
        canvas.draw_line((a.left, py), (a.right, py), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, area: &PlotRect, theme: &Theme) {
    canvas.draw_rect(area.to_skia(), &stroke_paint(theme.axis_line, 1.0));
}

fn draw_outline(canvas: &skia::Canvas, scale: &PlotScale, outline: &ClosedPath, color: skia::Color, dash: bool) {
    let mut path = skia::Path::new();
    let mut pts = outline.points().map(|p| scale.to_px(p));
    let Some(first) = pts.next() else { return };
    path.move_to(first);
    for p in pts {
        path.line_to(p);
    }

    let paint = stroke_paint(color, LINE_WIDTH);
    let paint = if dash { dashed(paint, &[8.0, 5.0]) } else { paint };
    canvas.draw_path(&path, &paint);
}

fn draw_markers(canvas: &skia::Canvas, scale: &PlotScale, outline: &ClosedPath, fill: skia::Color, edge: skia::Color) {
    let body = fill_paint(fill);
    let ring = stroke_paint(edge, 1.0);
    for p in outline.markers() {
        let c = scale.to_px(p);
        canvas.draw_circle(c, MARKER_RADIUS, &body);
        canvas.draw_circle(c, MARKER_RADIUS, &ring);
    }
}

fn tick_text(v: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()).max(0.0) as usize };
    let s = format!("{v:.decimals$}");
    // "-0" reads oddly on an axis
    if s.trim_start_matches(['-', '0', '.']).is_empty() && s.starts_with('-') {
        s[1..].to_string()
    } else {
        s
    }
}

fn draw_tick_labels(canvas: &skia::Canvas, shaper: &TextShaper, scale: &PlotScale, theme: &Theme) {
    let a = scale.rect;
    let v = scale.view;
    let (tx, ty) = tick_targets(&a);
    let size = 12.0;
    let tick = stroke_paint(theme.axis_line, 1.0);

    let x_step = nice_step(v.x_span(), tx);
    for x in nice_ticks(v.x_min, v.x_max, tx) {
        let px = scale.to_px_x(x);
        canvas.draw_line((px, a.bottom), (px, a.bottom + 4.0), &tick);
        shaper.draw_centered(canvas, &tick_text(x, x_step), px, a.bottom + 6.0, size, theme.tick);
    }

    let y_step = nice_step(v.y_span(), ty);
    for y in nice_ticks(v.y_min, v.y_max, ty) {
        let py = scale.to_px_y(y);
        canvas.draw_line((a.left - 4.0, py), (a.left, py), &tick);
        let label = tick_text(y, y_step);
        let (w, h) = shaper.measure(&label, size, false);
        shaper.draw_block(canvas, &label, a.left - 8.0 - w, py - h * 0.5, size, theme.tick, false);
    }
}

fn draw_titles(canvas: &skia::Canvas, shaper: &TextShaper, area: &PlotRect, theme: &Theme) {
    let cx = (area.left + area.right) * 0.5;
    let (_, title_h) = shaper.measure(TITLE, 18.0, false);
    shaper.draw_centered(canvas, TITLE, cx, (area.top - title_h - 10.0).max(2.0), 18.0, theme.axis_label);
    shaper.draw_centered(canvas, X_LABEL, cx, area.bottom + 28.0, 15.0, theme.axis_label);

    let cy = (area.top + area.bottom) * 0.5;
    canvas.save();
    canvas.translate((area.left - 72.0, cy));
    canvas.rotate(-90.0, None);
    shaper.draw_centered(canvas, Y_LABEL, 0.0, 0.0, 15.0, theme.axis_label);
    canvas.restore();
}

/// Top-left corner for a `size` box in the plot corner covering the fewest of
/// `occupied` pixels. Ties go to the earlier candidate (upper right first).
pub fn legend_anchor(area: &PlotRect, size: (f32, f32), occupied: &[(f32, f32)]) -> (f32, f32) {
    let (w, h) = size;
    let right = area.right - LEGEND_PAD - w;
    let bottom = area.bottom - LEGEND_PAD - h;
    let left = area.left + LEGEND_PAD;
    let top = area.top + LEGEND_PAD;
    let candidates = [(right, top), (left, top), (left, bottom), (right, bottom)];

    let covered = |(x, y): (f32, f32)| {
        let r = MARKER_RADIUS;
        let bx = PlotRect::from_ltrb(x - r, y - r, x + w + r, y + h + r);
        occupied.iter().filter(|&&(px, py)| bx.contains(px, py)).count()
    };

    let mut best = candidates[0];
    let mut best_n = covered(best);
    for &c in &candidates[1..] {
        let n = covered(c);
        if n < best_n {
            best = c;
            best_n = n;
        }
    }
    best
}

fn draw_legend(canvas: &skia::Canvas, shaper: Option<&TextShaper>, area: &PlotRect, occupied: &[(f32, f32)], theme: &Theme) {
    let size = 13.0;
    let row_h = 22.0;
    let text_w = match shaper {
        Some(s) => s.measure(DESIGN_LABEL, size, false).0.max(s.measure(ACTUAL_LABEL, size, false).0),
        None => 120.0,
    };
    let box_w = 8.0 + LEGEND_SWATCH + 8.0 + text_w + 10.0;
    let box_h = row_h * 2.0 + 8.0;
    let (x, y) = legend_anchor(area, (box_w, box_h), occupied);

    let rect = skia::Rect::from_xywh(x, y, box_w, box_h);
    canvas.draw_round_rect(rect, 4.0, 4.0, &fill_paint(theme.legend_fill));
    canvas.draw_round_rect(rect, 4.0, 4.0, &stroke_paint(theme.legend_edge, 1.0));

    let entries = [(DESIGN_LABEL, theme.design_stroke, true), (ACTUAL_LABEL, theme.actual_stroke, false)];
    for (i, (label, color, dash)) in entries.into_iter().enumerate() {
        let cy = y + 4.0 + row_h * (i as f32 + 0.5);
        let sx = x + 8.0;
        let line = stroke_paint(color, LINE_WIDTH);
        let line = if dash { dashed(line, &[8.0, 5.0]) } else { line };
        canvas.draw_line((sx, cy), (sx + LEGEND_SWATCH, cy), &line);
        if let Some(s) = shaper {
            let (_, h) = s.measure(label, size, false);
            s.draw_block(canvas, label, sx + LEGEND_SWATCH + 8.0, cy - h * 0.5, size, theme.axis_label, false);
        }
    }
}

fn draw_report(canvas: &skia::Canvas, shaper: Option<&TextShaper>, panel: &PlotRect, report: &Report, theme: &Theme) {
    canvas.draw_round_rect(panel.to_skia(), 6.0, 6.0, &fill_paint(theme.panel_fill));
    let Some(shaper) = shaper else { return };

    // Three columns: points + rotation, then two corners per column.
    let columns = [
        format!("{}\n{}", report.points, report.rotation),
        format!("Actual corners:\n\n{}\n{}", report.corners[0], report.corners[1]),
        format!("\n\n{}\n{}", report.corners[2], report.corners[3]),
    ];
    let tallest = columns
        .iter()
        .map(|c| shaper.measure(c.trim_end(), REPORT_FONT, true).1)
        .fold(0.0f32, f32::max);
    let top = panel.top + ((panel.height() - tallest) * 0.5).max(8.0);
    let col_w = (panel.width() - 24.0) / columns.len() as f32;
    for (i, text) in columns.iter().enumerate() {
        let x = panel.left + 12.0 + col_w * i as f32;
        shaper.draw_block(canvas, text.trim_end(), x, top, REPORT_FONT, theme.panel_text, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_split_three_to_one() {
        let opts = FigureOptions::default();
        let (plot, text) = opts.panels();
        let plot_h = plot.height() - PAD;
        assert!((plot_h / text.height() - 3.0).abs() < 1e-3);
        assert!(text.top > plot.bottom);
        assert_eq!(text.bottom, opts.height as f32 - PAD);
    }

    #[test]
    fn legend_avoids_occupied_corner() {
        let area = PlotRect::from_ltrb(0.0, 0.0, 400.0, 300.0);
        let size = (100.0, 50.0);
        // nothing in the way: upper right
        assert_eq!(legend_anchor(&area, size, &[]), (290.0, 10.0));
        // marker in upper right pushes it to upper left
        assert_eq!(legend_anchor(&area, size, &[(350.0, 30.0)]), (10.0, 10.0));
        // both upper corners busy -> lower left
        assert_eq!(legend_anchor(&area, size, &[(350.0, 30.0), (40.0, 30.0)]), (10.0, 240.0));
    }

    #[test]
    fn tick_text_drops_negative_zero() {
        assert_eq!(tick_text(-0.0, 50.0), "0");
        assert_eq!(tick_text(150.0, 50.0), "150");
        assert_eq!(tick_text(0.4, 0.2), "0.4");
        assert_eq!(tick_text(-5.0, 5.0), "-5");
    }
}
