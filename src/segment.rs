use nalgebra::Vector2;

use crate::Point;

/// Cubic Bezier arc between two consecutive knots of a spline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BezierSegment {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl BezierSegment {

    pub fn new(start: Point, control1: Point, control2: Point, end: Point) -> Self {
        BezierSegment { start, control1, control2, end }
    }

    /// Point on the arc at parameter `t`, `t = 0` gives `start` and `t = 1` gives `end`.
    /// Values of `t` outside of `[0, 1]` are not clamped.
    pub fn evaluate(&self, t: f64) -> Point {
        let s = 1.0 - t;
        let coords = self.start.coords * (s * s * s)
            + self.control1.coords * (3.0 * s * s * t)
            + self.control2.coords * (3.0 * s * t * t)
            + self.end.coords * (t * t * t);
        Point::from(coords)
    }

    pub fn derivative(&self, t: f64) -> Vector2<f64> {
        let s = 1.0 - t;
        (self.control1 - self.start) * (3.0 * s * s)
            + (self.control2 - self.control1) * (6.0 * s * t)
            + (self.end - self.control2) * (3.0 * t * t)
    }

    pub fn second_derivative(&self, t: f64) -> Vector2<f64> {
        let first_difference = self.control1 - self.start;
        let middle_difference = self.control2 - self.control1;
        let last_difference = self.end - self.control2;
        (middle_difference - first_difference) * (6.0 * (1.0 - t))
            + (last_difference - middle_difference) * (6.0 * t)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;

    fn segment() -> BezierSegment {
        BezierSegment::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(3.0, 2.0),
            Point::new(4.0, 0.0),
        )
    }

    #[test]
    fn evaluate() {
        let eps = 1e-12;
        let segment = segment();

        assert_eq!(segment.evaluate(0.0), segment.start);
        assert_eq!(segment.evaluate(1.0), segment.end);

        let middle = segment.evaluate(0.5);
        assert_approx_eq!(middle.x, 2.0, eps);
        assert_approx_eq!(middle.y, 1.5, eps);

        let quarter = segment.evaluate(0.25);
        assert_approx_eq!(quarter.x, 0.90625, eps);
        assert_approx_eq!(quarter.y, 1.125, eps);
    }

    #[test]
    fn derivative() {
        let eps = 1e-12;
        let segment = segment();

        let start = segment.derivative(0.0);
        assert_approx_eq!(start.x, 3.0, eps);
        assert_approx_eq!(start.y, 6.0, eps);

        let middle = segment.derivative(0.5);
        assert_approx_eq!(middle.x, 4.5, eps);
        assert_approx_eq!(middle.y, 0.0, eps);

        let end = segment.derivative(1.0);
        assert_approx_eq!(end.x, 3.0, eps);
        assert_approx_eq!(end.y, -6.0, eps);
    }

    #[test]
    fn second_derivative() {
        let eps = 1e-12;
        let segment = segment();

        let start = segment.second_derivative(0.0);
        assert_approx_eq!(start.x, 6.0, eps);
        assert_approx_eq!(start.y, -12.0, eps);

        let end = segment.second_derivative(1.0);
        assert_approx_eq!(end.x, -6.0, eps);
        assert_approx_eq!(end.y, -12.0, eps);
    }
}
