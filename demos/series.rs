extern crate spline_series;

use spline_series::{Point, SplineSeries};

fn print_segments(series: &SplineSeries) {
    for (i, segment) in series.segments().enumerate() {
        println!(
            "{}: ({:.2}, {:.2}) -> ({:.2}, {:.2}) via ({:.2}, {:.2}) ({:.2}, {:.2})",
            i,
            segment.start.x, segment.start.y,
            segment.end.x, segment.end.y,
            segment.control1.x, segment.control1.y,
            segment.control2.x, segment.control2.y
        );
    }
}

fn main() {

    let mut series = SplineSeries::new();
    series.append(Point::new(0.0, 6.0));
    series.append(Point::new(2.0, 4.0));
    series.append(Point::new(3.0, 8.0));
    series.append(Point::new(7.0, 4.0));
    series.append(Point::new(10.0, 5.0));
    print_segments(&series);

    series.replace(Point::new(3.0, 8.0), Point::new(3.0, 2.0)).unwrap();
    series.remove_at(0).unwrap();
    println!();
    print_segments(&series);
}
