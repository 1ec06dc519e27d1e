//! Built-in demo scenario
//!
//! A rectangle on its own plus a calculator over a square, the same rectangle
//! and a circle.

use std::rc::Rc;

use anyhow::Result;

use super::output::Output;
use super::report::Record;
use crate::domain::{Circle, Operation, Rectangle, Shape, ShapeSumCalculator, Square};

/// Builds the demo records in print order
pub fn records(precision: usize) -> Vec<Record> {
    let rectangle: Rc<dyn Shape> = Rc::new(Rectangle::new(2.0, 3.0));
    let circle: Rc<dyn Shape> = Rc::new(Circle::new(2.0));
    let square: Rc<dyn Shape> = Rc::new(Square::new(4.0));

    let calculator = ShapeSumCalculator::new(vec![square, rectangle.clone(), circle]);

    vec![
        Record::summary(&*rectangle, precision),
        Record::measurement(&*rectangle, &Operation::area("Area"), precision),
        Record::measurement(&calculator, &Operation::area("Total area"), precision),
        Record::measurement(&*rectangle, &Operation::perimeter("Perimeter"), precision),
        Record::measurement(&calculator, &Operation::perimeter("Total perimeter"), precision),
    ]
}

pub fn run(output: &Output, precision: usize) -> Result<()> {
    output.verbose_ctx("demo", &format!("Running demo scenario, precision={}", precision));
    output.records(&records(precision));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_lines() {
        let lines: Vec<String> = records(2).iter().map(|r| r.formatted().to_string()).collect();

        assert_eq!(
            lines,
            vec![
                "Rectangle with height = 2.0 and width = 3.0 - Perimeter: 10.00, Area: 6.00",
                "Rectangle with height = 2.0 and width = 3.0 - Area: 6.00",
                "Square with side = 4.0, Rectangle with height = 2.0 and width = 3.0, Circle with radius = 2.0 - Total area: 34.57",
                "Rectangle with height = 2.0 and width = 3.0 - Perimeter: 10.00",
                "Square with side = 4.0, Rectangle with height = 2.0 and width = 3.0, Circle with radius = 2.0 - Total perimeter: 38.57",
            ]
        );
    }
}
