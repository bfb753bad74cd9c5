use log::{debug, trace};

use crate::{control_points::compute, error::SplineError, segment::BezierSegment, Point};

/// Ordered sequence of spline knots together with Bezier control points of the smooth curve
/// passing through them.
///
/// Control points are recomputed from scratch after every mutation. While the series has less
/// than 2 knots it has no control points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplineSeries {
    points: Vec<Point>,
    control_points: Vec<Point>,
}

impl SplineSeries {
    pub fn new() -> Self {
        SplineSeries::default()
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        let mut series = SplineSeries { points, control_points: Vec::new() };
        series.update_control_points();
        series
    }

    pub fn append(&mut self, point: Point) {
        self.points.push(point);
        self.update_control_points();
    }

    /// Appends all points and recomputes control points once.
    pub fn extend<I: IntoIterator<Item = Point>>(&mut self, points: I) {
        self.points.extend(points);
        self.update_control_points();
    }

    /// Inserts `point` before knot at `index`. `index` equal to [SplineSeries::count] appends.
    pub fn insert(&mut self, index: usize, point: Point) -> Result<(), SplineError> {
        if index > self.points.len() {
            return Err(self.index_error(index));
        }
        self.points.insert(index, point);
        self.update_control_points();
        Ok(())
    }

    /// Replaces the first knot equal to `old` with `new`.
    pub fn replace(&mut self, old: Point, new: Point) -> Result<(), SplineError> {
        let index = self.find(old)?;
        self.points[index] = new;
        self.update_control_points();
        Ok(())
    }

    pub fn replace_at(&mut self, index: usize, point: Point) -> Result<(), SplineError> {
        match self.points.get_mut(index) {
            Some(knot) => *knot = point,
            None => return Err(self.index_error(index)),
        }
        self.update_control_points();
        Ok(())
    }

    pub fn replace_all(&mut self, points: Vec<Point>) {
        self.points = points;
        self.update_control_points();
    }

    /// Removes the first knot equal to `point`.
    pub fn remove(&mut self, point: Point) -> Result<(), SplineError> {
        let index = self.find(point)?;
        self.remove_at(index)?;
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Point, SplineError> {
        if index >= self.points.len() {
            return Err(self.index_error(index));
        }
        let removed = self.points.remove(index);
        self.update_control_points();
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.update_control_points();
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Control points of all segments, segment `i` uses indices `2 * i` and `2 * i + 1`.
    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    pub fn control_point(&self, index: usize) -> Option<Point> {
        self.control_points.get(index).copied()
    }

    /// Bezier arc from knot `index` to knot `index + 1`.
    pub fn segment(&self, index: usize) -> Option<BezierSegment> {
        if index >= self.points.len().saturating_sub(1) {
            return None;
        }
        Some(BezierSegment::new(
            self.points[index],
            self.control_points[2 * index],
            self.control_points[2 * index + 1],
            self.points[index + 1],
        ))
    }

    pub fn segments(&self) -> impl Iterator<Item = BezierSegment> + '_ {
        (0..self.points.len().saturating_sub(1)).filter_map(move |index| self.segment(index))
    }

    /// Approximates the curve with a polyline of `samples_per_segment` evenly spaced (in curve
    /// parameter) points per segment, followed by the last knot.
    ///
    /// `samples_per_segment` of 0 is treated as 1, which gives back the knots.
    /// # Example
    /// ```
    /// use spline_series::{Point, SplineSeries};
    ///
    /// let series = SplineSeries::from_points(vec![
    ///     Point::new(0.0, 6.0),
    ///     Point::new(2.0, 4.0),
    ///     Point::new(4.0, 8.0),
    /// ]);
    /// let polyline = series.flatten(10);
    ///
    /// assert_eq!(polyline.len(), 21);
    /// assert_eq!(polyline[10], Point::new(2.0, 4.0));
    /// ```
    pub fn flatten(&self, samples_per_segment: usize) -> Vec<Point> {
        if self.points.len() < 2 {
            return self.points.clone();
        }

        let samples = samples_per_segment.max(1);
        let mut polyline = Vec::with_capacity(samples * (self.points.len() - 1) + 1);

        for segment in self.segments() {
            polyline.push(segment.start);
            for sample in 1..samples {
                polyline.push(segment.evaluate(sample as f64 / samples as f64));
            }
        }
        polyline.push(self.points[self.points.len() - 1]);
        polyline
    }

    fn update_control_points(&mut self) {
        if self.points.len() < 2 {
            debug!("spline series has {} knots, control points cleared", self.points.len());
            self.control_points.clear();
            return;
        }

        match compute(&self.points) {
            Ok(control_points) => self.control_points = control_points,
            Err(error) => {
                debug!("control points not computed: {}", error);
                self.control_points.clear();
                return;
            }
        }
        trace!(
            "recomputed {} control points for {} knots",
            self.control_points.len(),
            self.points.len()
        );
    }

    fn find(&self, point: Point) -> Result<usize, SplineError> {
        self.points
            .iter()
            .position(|knot| *knot == point)
            .ok_or(SplineError::KnotNotFound { x: point.x, y: point.y })
    }

    fn index_error(&self, index: usize) -> SplineError {
        SplineError::IndexOutOfRange { index, count: self.points.len() }
    }
}
