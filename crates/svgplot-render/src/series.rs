//! Whole-sequence helpers: reversal, bounding extrema, and stride sampling.

use crate::point::PlotPoint;
use crate::{Error, Result};

/// Reverses `points` in place and hands the same slice back.
pub fn reverse<P>(points: &mut [P]) -> &mut [P] {
    points.reverse();
    points
}

/// Bounding box of a point sequence in data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extrema {
    pub fn x_span(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn y_span(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Computes the extrema of `points` in a single pass.
///
/// Empty input and non-finite coordinates are rejected: either would leave the plot scale
/// undefined.
pub fn extrema<P: PlotPoint>(points: &[P]) -> Result<Extrema> {
    let (first, rest) = points.split_first().ok_or(Error::EmptyPoints)?;
    check_finite(0, first)?;

    let mut e = Extrema {
        min_x: first.x(),
        min_y: first.y(),
        max_x: first.x(),
        max_y: first.y(),
    };
    for (i, p) in rest.iter().enumerate() {
        check_finite(i + 1, p)?;
        let (x, y) = (p.x(), p.y());
        e.min_x = e.min_x.min(x);
        e.min_y = e.min_y.min(y);
        e.max_x = e.max_x.max(x);
        e.max_y = e.max_y.max(y);
    }
    Ok(e)
}

fn check_finite<P: PlotPoint>(index: usize, p: &P) -> Result<()> {
    let (x, y) = (p.x(), p.y());
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteCoordinate { index, x, y })
    }
}

/// Keeps every `n`-th point starting at index 0.
///
/// The result holds `ceil(len / n)` points. Use it to thin out dense (sub-second) series before
/// plotting.
pub fn sample<P: Clone>(points: &[P], n: usize) -> Result<Vec<P>> {
    if n == 0 {
        return Err(Error::InvalidSampleStride);
    }
    Ok(points.iter().step_by(n).cloned().collect())
}
