// File: crates/align-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout for titles, legend entries and the report block.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

const SANS: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];
const MONO: &[&str] = &["DejaVu Sans Mono", "Consolas", "Menlo", "Roboto Mono", "monospace"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, mono: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(if mono { MONO } else { SANS });
        ts
    }

    /// Lay out (possibly multi-line) `text` with the given alignment inside `width`.
    pub fn layout(&self, text: &str, size: f32, color: skia::Color, mono: bool, align: TextAlign, width: f32) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(align);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, mono));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(width.max(1.0));
        paragraph
    }

    /// (width of the longest line, total height).
    pub fn measure(&self, text: &str, size: f32, mono: bool) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::TRANSPARENT, mono, TextAlign::Left, 10_000.0);
        (p.longest_line(), p.height())
    }

    /// Draw with the block's top-left corner at (x, y).
    pub fn draw_block(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, mono: bool) -> f32 {
        let p = self.layout(text, size, color, mono, TextAlign::Left, 10_000.0);
        p.paint(canvas, (x, y));
        p.height()
    }

    /// Draw centred horizontally on `cx`, top edge at `y`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color) -> f32 {
        let width = self.measure(text, size, false).0 + 2.0;
        let p = self.layout(text, size, color, false, TextAlign::Center, width);
        p.paint(canvas, (cx - width * 0.5, y));
        p.height()
    }
}
