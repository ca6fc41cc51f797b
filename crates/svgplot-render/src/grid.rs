//! Background guide lines.

use crate::options::GridStyle;
use crate::{Error, Result};
use svgplot_core::{Element, Line};

/// Upper bound on the number of lines [`grid_lines`] will emit for one canvas.
pub const MAX_GRID_LINES: usize = 10_000;

/// Emits the background grid for a `width` x `height` canvas.
///
/// Horizontal lines come first, one per stride from `stride` up to (not including) `height`,
/// each spanning the full width. Vertical lines follow, one per stride up to `width`, each
/// spanning the full height. Every line shares `grid.presentation`.
///
/// A stride that is not positive, or so small that the grid would exceed [`MAX_GRID_LINES`],
/// is rejected with [`Error::InvalidGridStride`].
pub fn grid_lines(width: f64, height: f64, grid: &GridStyle) -> Result<Vec<Element>> {
    if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
        return Err(Error::InvalidCanvasSize { width, height });
    }
    let stride = grid.stride;
    if !(stride.is_finite() && stride > 0.0) || (width + height) / stride > MAX_GRID_LINES as f64
    {
        return Err(Error::InvalidGridStride { stride });
    }

    let styled = |x1, y1, x2, y2| {
        Element::Line(Line::new(x1, y1, x2, y2).with_presentation(grid.presentation.clone()))
    };

    let mut out: Vec<Element> = offsets(stride, height)
        .map(|y| styled(0.0, y, width, y))
        .collect();
    out.extend(offsets(stride, width).map(|x| styled(x, 0.0, x, height)));
    Ok(out)
}

fn offsets(stride: f64, limit: f64) -> impl Iterator<Item = f64> {
    (1u64..)
        .map(move |i| stride * i as f64)
        .take_while(move |&v| v < limit)
}
