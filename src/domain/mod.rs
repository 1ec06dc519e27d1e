//! Domain models for shape calculations
//!
//! Contains the geometry and formatting logic without any I/O concerns.

mod shape;
mod calculator;
mod operation;
mod definition;

pub use shape::{describe_kind, dimension, Circle, Rectangle, Shape, ShapeKind, Square};
pub use calculator::ShapeSumCalculator;
pub use operation::{
    fixed, formatted_value, formatted_value_with_precision, labeled_line, summary_from,
    summary_line, Operation, DEFAULT_PRECISION,
};
pub use definition::{calculator_from, ShapeDefinition};
