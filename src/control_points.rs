use nalgebra::DVector;

use crate::{error::SplineError, Point};

/// Computes Bezier control points of a smooth spline passing through all `points`.
///
/// For `K` points the result has `2 * (K - 1)` control points. Segment `i`, which goes from
/// `points[i]` to `points[i + 1]`, uses control points at indices `2 * i` and `2 * i + 1`.
///
/// First control points are obtained by solving a tridiagonal system separately for x and y
/// coordinates. Second control points follow from first derivative continuity at shared knots
/// and from zero second derivative at the last knot.
///
/// Intermediate sums scale knot coordinates by up to 8, so coordinates above roughly
/// `f64::MAX / 8` overflow to infinite control points.
///
/// # Example
/// ```
/// use spline_series::{compute, Point};
///
/// let control_points = compute(&[Point::new(0.0, 0.0), Point::new(3.0, 3.0)]).unwrap();
///
/// assert_eq!(control_points, vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
/// ```
/// # Errors
/// [SplineError::InvalidInput] is returned when less than 2 points are given.
/// ```
/// use spline_series::{compute, Point, SplineError};
///
/// assert_eq!(compute(&[Point::new(1.0, 2.0)]), Err(SplineError::InvalidInput(1)));
/// ```
pub fn compute(points: &[Point]) -> Result<Vec<Point>, SplineError> {
    if points.len() < 2 {
        return Err(SplineError::InvalidInput(points.len()));
    }

    let number_of_segments = points.len() - 1;

    if number_of_segments == 1 {
        let first = Point::from((points[0].coords * 2.0 + points[1].coords) / 3.0);
        let second = Point::from(first.coords * 2.0 - points[0].coords);
        return Ok(vec![first, second]);
    }

    let x_control = first_control_points(&right_hand_side(points, 0));
    let y_control = first_control_points(&right_hand_side(points, 1));

    let n = number_of_segments;
    let mut control_points = Vec::with_capacity(2 * n);

    for i in 0..n {
        control_points.push(Point::new(x_control[i], y_control[i]));

        if i < n - 1 {
            control_points.push(Point::new(
                2.0 * points[i + 1].x - x_control[i + 1],
                2.0 * points[i + 1].y - y_control[i + 1],
            ));
        } else {
            control_points.push(Point::new(
                (points[n].x + x_control[n - 1]) / 2.0,
                (points[n].y + y_control[n - 1]) / 2.0,
            ));
        }
    }
    Ok(control_points)
}

/// Right hand side of the system for one coordinate axis (0 for x, 1 for y).
///
/// Coefficient matrix rows are `[2, 1]`, then `[1, 4, 1]`, and `[1, 3.5]` for the last one,
/// which is why the last entry is halved.
fn right_hand_side(points: &[Point], axis: usize) -> DVector<f64> {
    let n = points.len() - 1;

    DVector::from_fn(n, |i, _| {
        if i == 0 {
            points[0][axis] + 2.0 * points[1][axis]
        } else if i == n - 1 {
            (8.0 * points[n - 1][axis] + points[n][axis]) / 2.0
        } else {
            4.0 * points[i][axis] + 2.0 * points[i + 1][axis]
        }
    })
}

/// Thomas algorithm for the tridiagonal system described in [right_hand_side].
fn first_control_points(rhs: &DVector<f64>) -> DVector<f64> {
    let count = rhs.len();
    let mut result = DVector::<f64>::zeros(count);
    let mut factors = DVector::<f64>::zeros(count);

    let mut b = 2.0;
    result[0] = rhs[0] / b;

    for i in 1..count {
        factors[i] = 1.0 / b;
        b = (if i < count - 1 { 4.0 } else { 3.5 }) - factors[i];
        result[i] = (rhs[i] - result[i - 1]) / b;
    }

    for i in (0..count - 1).rev() {
        result[i] -= factors[i + 1] * result[i + 1];
    }
    result
}
