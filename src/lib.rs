//! Shape Calc - perimeter and area of flat geometric shapes
//!
//! Concrete figures implement the [`Shape`] capability. A
//! [`ShapeSumCalculator`] implements the same capability by summing over its
//! members, so the formatter treats single shapes and collections alike.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{
    formatted_value, formatted_value_with_precision, Circle, Operation, Rectangle, Shape,
    ShapeSumCalculator, Square,
};
