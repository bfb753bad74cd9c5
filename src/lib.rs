//! Spline chart series. Computes Bezier control points of a smooth curve passing through
//! an ordered sequence of 2D points, so that every segment between two consecutive points can
//! be drawn as a single cubic Bezier arc.
//!
//! # Example
//! ```
//! use spline_series::{Point, SplineSeries};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let mut series = SplineSeries::new();
//! series.append(Point::new(0.0, 6.0));
//! series.append(Point::new(2.0, 4.0));
//! series.append(Point::new(4.0, 8.0));
//!
//! assert_eq!(series.control_points().len(), 4);
//!
//! let first = series.segment(0).unwrap();
//! assert_approx_eq!(first.control1.x, 2.0 / 3.0, 1e-9);
//! assert_approx_eq!(first.control1.y, 29.0 / 6.0, 1e-9);
//! ```

mod control_points;
mod error;
mod segment;
mod series;

/// Point in the chart plane, used both for knots and for control points.
pub type Point = nalgebra::Point2<f64>;

pub use control_points::compute;
pub use error::SplineError;
pub use segment::BezierSegment;
pub use series::SplineSeries;
