// File: crates/align-core/src/theme.rs
// Summary: Light/Dark colour palettes for the comparison figure.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub design_stroke: skia::Color,
    pub actual_stroke: skia::Color,
    pub marker_edge: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_edge: skia::Color,
    pub panel_fill: skia::Color,
    pub panel_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            // ':' grid at alpha 0.7 over white
            grid: skia::Color::from_argb(178, 176, 176, 176),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 60, 60, 70),
            design_stroke: skia::Color::from_argb(255, 0, 0, 255),
            actual_stroke: skia::Color::from_argb(255, 255, 0, 0),
            marker_edge: skia::Color::from_argb(255, 0, 0, 0),
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
            legend_edge: skia::Color::from_argb(255, 204, 204, 204),
            panel_fill: skia::Color::from_argb(255, 0xf0, 0xf0, 0xf0),
            panel_text: skia::Color::from_argb(255, 0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 52, 52, 58),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            design_stroke: skia::Color::from_argb(255, 64, 160, 255),
            actual_stroke: skia::Color::from_argb(255, 240, 80, 80),
            marker_edge: skia::Color::from_argb(255, 235, 235, 245),
            legend_fill: skia::Color::from_argb(204, 30, 30, 34),
            legend_edge: skia::Color::from_argb(255, 80, 80, 88),
            panel_fill: skia::Color::from_argb(255, 34, 34, 38),
            panel_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}
