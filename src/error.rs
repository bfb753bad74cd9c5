use thiserror::Error;

/// Errors returned by the control point solver and by [SplineSeries](crate::SplineSeries) mutations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Fewer than 2 knots were given, there is no segment to compute control points for.
    #[error("spline must have at least 2 knots, got {0}")]
    InvalidInput(usize),

    #[error("knot index {index} is out of range for series with {count} knots")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("knot ({x}, {y}) is not part of the series")]
    KnotNotFound { x: f64, y: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            SplineError::InvalidInput(1).to_string(),
            "spline must have at least 2 knots, got 1"
        );
        assert_eq!(
            SplineError::IndexOutOfRange { index: 4, count: 3 }.to_string(),
            "knot index 4 is out of range for series with 3 knots"
        );
        assert_eq!(
            SplineError::KnotNotFound { x: 1.5, y: -2.0 }.to_string(),
            "knot (1.5, -2) is not part of the series"
        );
    }
}
