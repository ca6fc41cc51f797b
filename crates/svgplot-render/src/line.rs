//! Line plots.

use crate::grid::grid_lines;
use crate::options::PlotOptions;
use crate::point::PlotPoint;
use crate::series::{Extrema, extrema};
use crate::{Error, Result};
use svgplot_core::{Canvas, Path, Point, point};

/// Linear mapping from data space into a `width` x `height` pixel box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub extrema: Extrema,
    /// Pixels per data unit on x; 0 for a zero span, and may round to 0 for a span that
    /// overflows `f64`. Not used by [`Projection::project`].
    pub x_unit: f64,
    pub y_unit: f64,
    pub width: f64,
    pub height: f64,
}

impl Projection {
    /// Fits `extrema` into the pixel box.
    ///
    /// An axis whose data span is zero gets a unit of 0; [`Projection::project`] then places
    /// every sample in the middle of that axis.
    pub fn fit(extrema: Extrema, width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(Error::InvalidCanvasSize { width, height });
        }
        let unit = |span: f64, size: f64| if span > 0.0 { size / span } else { 0.0 };
        Ok(Self {
            extrema,
            x_unit: unit(extrema.x_span(), width),
            y_unit: unit(extrema.y_span(), height),
            width,
            height,
        })
    }

    /// Maps `p` into pixel space.
    ///
    /// Offsets are taken on halved coordinates so `max - min` stays finite for any pair of
    /// finite extrema.
    pub fn project<P: PlotPoint>(&self, p: &P) -> Point {
        let axis = |v: f64, min: f64, max: f64, size: f64| {
            if max == min {
                size / 2.0
            } else {
                (v / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0) * size
            }
        };
        let e = &self.extrema;
        point(
            axis(p.x(), e.min_x, e.max_x, self.width),
            axis(p.y(), e.min_y, e.max_y, self.height),
        )
    }
}

/// Renders `points` as a line plot with the default [`PlotOptions`].
pub fn render_line<P: PlotPoint>(points: &[P], width: f64, height: f64) -> Result<Canvas> {
    render_line_with(points, width, height, &PlotOptions::default())
}

/// Renders `points` as a line plot.
///
/// The samples are rescaled so their extrema fill the canvas, joined by one path (move to the
/// first point, line to each subsequent one), and drawn above the background grid lines.
pub fn render_line_with<P: PlotPoint>(
    points: &[P],
    width: f64,
    height: f64,
    options: &PlotOptions,
) -> Result<Canvas> {
    let bounds = extrema(points)?;
    let projection = Projection::fit(bounds, width, height)?;
    if bounds.x_span() == 0.0 || bounds.y_span() == 0.0 {
        tracing::debug!(
            x_span = bounds.x_span(),
            y_span = bounds.y_span(),
            "zero data span; centering samples on the flat axis"
        );
    }
    tracing::debug!(
        points = points.len(),
        min_x = bounds.min_x,
        min_y = bounds.min_y,
        max_x = bounds.max_x,
        max_y = bounds.max_y,
        x_unit = projection.x_unit,
        y_unit = projection.y_unit,
        "rendering line plot"
    );

    let path = Path::through(points.iter().map(|p| projection.project(p)))
        .with_presentation(options.line.clone());

    let mut canvas = Canvas::new(width, height).with_presentation(options.canvas.clone());
    canvas.push(path);
    canvas.extend(grid_lines(width, height, &options.grid)?);
    Ok(canvas)
}
