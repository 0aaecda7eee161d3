// File: crates/align-core/src/types.rs
// Summary: Shared figure constants (sizes, paddings, marker and line metrics).

/// Default figure width in pixels (12 in at 100 dpi).
pub const WIDTH: i32 = 1200;
/// Default figure height in pixels (10 in at 100 dpi).
pub const HEIGHT: i32 = 1000;

/// Outline stroke width for both shapes.
pub const LINE_WIDTH: f32 = 2.0;
/// Corner marker radius.
pub const MARKER_RADIUS: f32 = 5.0;
/// Fraction of the data span added on each side before aspect equalisation.
pub const DATA_MARGIN: f64 = 0.05;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Room for the two-line title above and tick labels plus axis titles around.
    fn default() -> Self {
        Self::new(90, 40, 80, 64)
    }
}
