//! Operation selector and value formatting
//!
//! An [`Operation`] picks which measurement to take and carries the label
//! shown next to it. Formatting produces lines such as:
//!
//! ```text
//! Rectangle with height = 2.0 and width = 3.0 - Area: 6.00
//! ```

use super::shape::Shape;

/// Fractional digits used when no precision is given
pub const DEFAULT_PRECISION: usize = 2;

/// Which measurement to take, with its display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Area of the shape
    Area { label: String },
    /// Perimeter of the shape
    Perimeter { label: String },
}

impl Operation {
    pub fn area(label: impl Into<String>) -> Self {
        Operation::Area { label: label.into() }
    }

    pub fn perimeter(label: impl Into<String>) -> Self {
        Operation::Perimeter { label: label.into() }
    }

    /// Returns the caller-supplied label
    pub fn label(&self) -> &str {
        match self {
            Operation::Area { label } | Operation::Perimeter { label } => label,
        }
    }

    /// Returns the operation name (`area` or `perimeter`)
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Area { .. } => "area",
            Operation::Perimeter { .. } => "perimeter",
        }
    }

    /// Takes the measurement on `shape`
    pub fn apply<S: Shape + ?Sized>(&self, shape: &S) -> f64 {
        match self {
            Operation::Area { .. } => shape.area(),
            Operation::Perimeter { .. } => shape.perimeter(),
        }
    }
}

/// Renders a value with a fixed number of fractional digits
pub fn fixed(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Formats `"<description> - <label>: <value>"` with two fractional digits
pub fn formatted_value<S: Shape + ?Sized>(shape: &S, operation: &Operation) -> String {
    formatted_value_with_precision(shape, operation, DEFAULT_PRECISION)
}

/// Formats `"<description> - <label>: <value>"` with `precision` fractional digits
pub fn formatted_value_with_precision<S: Shape + ?Sized>(
    shape: &S,
    operation: &Operation,
    precision: usize,
) -> String {
    let value = operation.apply(shape);
    labeled_line(&shape.describe(), operation.label(), value, precision)
}

/// Formats an already computed value as `"<description> - <label>: <value>"`
pub fn labeled_line(description: &str, label: &str, value: f64, precision: usize) -> String {
    format!("{} - {}: {}", description, label, fixed(value, precision))
}

/// Formats `"<description> - Perimeter: <p>, Area: <a>"`
pub fn summary_line<S: Shape + ?Sized>(shape: &S, precision: usize) -> String {
    summary_from(&shape.describe(), shape.perimeter(), shape.area(), precision)
}

/// Formats already computed values as `"<description> - Perimeter: <p>, Area: <a>"`
pub fn summary_from(description: &str, perimeter: f64, area: f64, precision: usize) -> String {
    format!(
        "{} - Perimeter: {}, Area: {}",
        description,
        fixed(perimeter, precision),
        fixed(area, precision)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calculator::ShapeSumCalculator;
    use crate::domain::shape::{Circle, Rectangle, Square};
    use std::rc::Rc;

    #[test]
    fn operation_label_and_dispatch() {
        let rect = Rectangle::new(2.0, 3.0);

        let area = Operation::area("Area");
        assert_eq!(area.label(), "Area");
        assert_eq!(area.name(), "area");
        assert_eq!(area.apply(&rect), 6.0);

        let perimeter = Operation::perimeter("Total perimeter");
        assert_eq!(perimeter.label(), "Total perimeter");
        assert_eq!(perimeter.name(), "perimeter");
        assert_eq!(perimeter.apply(&rect), 10.0);
    }

    #[test]
    fn format_rectangle_area() {
        let rect = Rectangle::new(2.0, 3.0);
        assert_eq!(
            formatted_value(&rect, &Operation::area("Area")),
            "Rectangle with height = 2.0 and width = 3.0 - Area: 6.00"
        );
    }

    #[test]
    fn format_with_precision() {
        let circle = Circle::new(1.0);
        let op = Operation::area("Area");
        assert_eq!(
            formatted_value_with_precision(&circle, &op, 4),
            "Circle with radius = 1.0 - Area: 3.1416"
        );
        assert_eq!(
            formatted_value_with_precision(&circle, &op, 0),
            "Circle with radius = 1.0 - Area: 3"
        );
    }

    #[test]
    fn format_calculator_through_trait_object() {
        let calc: Rc<dyn Shape> = Rc::new(ShapeSumCalculator::new(vec![
            Rc::new(Square::new(4.0)),
            Rc::new(Rectangle::new(2.0, 3.0)),
            Rc::new(Circle::new(2.0)),
        ]));

        assert_eq!(
            formatted_value(&*calc, &Operation::area("Total area")),
            "Square with side = 4.0, Rectangle with height = 2.0 and width = 3.0, \
             Circle with radius = 2.0 - Total area: 34.57"
        );
        assert_eq!(
            formatted_value(&*calc, &Operation::perimeter("Total perimeter")),
            "Square with side = 4.0, Rectangle with height = 2.0 and width = 3.0, \
             Circle with radius = 2.0 - Total perimeter: 38.57"
        );
    }

    #[test]
    fn summary_line_for_rectangle() {
        let rect = Rectangle::new(2.0, 3.0);
        assert_eq!(
            summary_line(&rect, DEFAULT_PRECISION),
            "Rectangle with height = 2.0 and width = 3.0 - Perimeter: 10.00, Area: 6.00"
        );
    }

    #[test]
    fn fixed_rounding() {
        assert_eq!(fixed(34.566_370_6, 2), "34.57");
        assert_eq!(fixed(0.0, 2), "0.00");
        assert_eq!(fixed(-1.5, 1), "-1.5");
    }

    #[test]
    fn lines_from_computed_values() {
        assert_eq!(
            labeled_line("Circle with radius = 1.0", "Area", 3.456, 2),
            "Circle with radius = 1.0 - Area: 3.46"
        );
        assert_eq!(
            summary_from("Square with side = 4.0", 16.0, 16.0, 1),
            "Square with side = 4.0 - Perimeter: 16.0, Area: 16.0"
        );
    }
}
