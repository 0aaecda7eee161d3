// File: crates/align-core/src/lib.rs
// Summary: Core library entry point; exports the corner comparison model and figure rendering.

pub mod error;
pub mod geometry;
pub mod compare;
pub mod report;
pub mod types;
pub mod grid;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod figure;

pub use error::{CompareError, Shape};
pub use geometry::{Corner, Point, Quad, A4_HEIGHT_MM, A4_WIDTH_MM, SAMPLE_ACTUAL};
pub use compare::{compare, compare_quads, deltas, normalize_degrees, rectangle_path, rotation_angle, ClosedPath, Comparison, Delta};
pub use report::Report;
pub use figure::{draw_comparison, Figure, FigureOptions};
pub use theme::Theme;
pub use text::TextShaper;
