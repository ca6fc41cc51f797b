#![forbid(unsafe_code)]

//! Plotting helpers that turn `(x, y)` samples into a scaled SVG line plot.
//!
//! The entry point is [`render_line`], which rescales the samples into pixel space, draws one
//! path through them, and overlays a fixed-stride background grid. [`extrema`], [`sample`] and
//! [`reverse`] are the numeric building blocks it (and callers preparing data) use.

pub mod grid;
pub mod line;
pub mod options;
pub mod point;
pub mod series;

pub use grid::{MAX_GRID_LINES, grid_lines};
pub use line::{Projection, render_line, render_line_with};
pub use options::{GridStyle, PlotOptions};
pub use point::PlotPoint;
pub use series::{Extrema, extrema, reverse, sample};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("point sequence is empty")]
    EmptyPoints,
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },
    #[error("sample stride must be at least 1")]
    InvalidSampleStride,
    #[error(
        "grid stride {stride} must be finite, positive, and yield at most {max} lines",
        max = grid::MAX_GRID_LINES
    )]
    InvalidGridStride { stride: f64 },
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvasSize { width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
