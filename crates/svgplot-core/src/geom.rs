use serde::{Deserialize, Serialize};

/// A 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl<U> From<euclid::Point2D<f64, U>> for Point {
    fn from(p: euclid::Point2D<f64, U>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl<U> From<Point> for euclid::Point2D<f64, U> {
    fn from(p: Point) -> Self {
        euclid::point2(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_from_euclid_and_back() {
        let p: Point = euclid::default::Point2D::new(1.5, -2.0).into();
        assert_eq!(p, point(1.5, -2.0));

        let back: euclid::default::Point2D<f64> = p.into();
        assert_eq!(back.x, 1.5);
        assert_eq!(back.y, -2.0);
    }

    #[test]
    fn deserializes_from_object() {
        let p: Point = serde_json::from_str(r#"{"x": 3, "y": 4.5}"#).expect("point json");
        assert_eq!(p, point(3.0, 4.5));
    }

    #[test]
    fn non_finite_points_are_detected() {
        assert!(point(0.0, 1.0).is_finite());
        assert!(!point(f64::NAN, 1.0).is_finite());
        assert!(!point(0.0, f64::INFINITY).is_finite());
    }
}
