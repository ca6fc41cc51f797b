#![forbid(unsafe_code)]

//! `svgplot` renders simple 2D vector graphics as SVG markup.
//!
//! The markup primitives live at the crate root (re-exported from `svgplot-core`); the line
//! plotting helpers live under [`plot`].
//!
//! # Features
//!
//! - `render` (default): enable the plotting helpers (`svgplot::plot`)

pub use svgplot_core::*;

#[cfg(feature = "render")]
pub mod plot {
    pub use svgplot_render::{
        Error, Extrema, GridStyle, MAX_GRID_LINES, PlotOptions, PlotPoint, Projection, Result,
        extrema, grid_lines, render_line, render_line_with, reverse, sample,
    };
    pub use svgplot_render::options::DEFAULT_GRID_STRIDE;

    use svgplot_core::Encode;

    /// Renders `points` with `options` and returns the encoded SVG document.
    pub fn render_line_svg<P: PlotPoint>(
        points: &[P],
        width: f64,
        height: f64,
        options: &PlotOptions,
    ) -> Result<String> {
        Ok(render_line_with(points, width, height, options)?.to_svg_string())
    }
}
