extern crate spline_series;

use spline_series::{compute, Point};

fn main() {

    let points = vec![
        Point::new(0.0, 6.0),
        Point::new(2.0, 4.0),
        Point::new(3.0, 8.0),
        Point::new(7.0, 4.0),
        Point::new(10.0, 5.0),
    ];

    let control_points = compute(&points).unwrap();

    println!("segment;x1;y1;x2;y2");
    for (i, pair) in control_points.chunks(2).enumerate() {
        println!("{};{:.3};{:.3};{:.3};{:.3}", i, pair[0].x, pair[0].y, pair[1].x, pair[1].y);
    }
}
