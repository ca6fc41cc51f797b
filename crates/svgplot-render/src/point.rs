use svgplot_core::Point;

/// Read access to the coordinates of a plot sample.
///
/// Implemented for [`Point`], `(f64, f64)`, `[f64; 2]`, `euclid::Point2D<f64, U>`, and references
/// to any implementor, so callers can plot their own sample types without copying them first.
pub trait PlotPoint {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl PlotPoint for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl PlotPoint for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl PlotPoint for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }
}

impl<U> PlotPoint for euclid::Point2D<f64, U> {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl<T: PlotPoint + ?Sized> PlotPoint for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}
