extern crate spline_series;

use spline_series::{Point, SplineSeries};

fn main() {

    let series = SplineSeries::from_points(vec![
        Point::new(0.0, 1.0),
        Point::new(1.0, -1.0),
        Point::new(2.0, 0.0),
        Point::new(4.0, 3.0),
        Point::new(5.0, 1.0),
        Point::new(6.0, 1.0),
    ]);

    println!("x;y");
    for point in series.flatten(12) {
        println!("{:.2};{:.2}", point.x, point.y);
    }
}
