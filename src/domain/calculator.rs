//! Aggregate calculator over a fixed collection of shapes
//!
//! [`ShapeSumCalculator`] is itself a [`Shape`], so anything that formats a
//! single shape also formats a whole collection.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use super::shape::Shape;

/// Sums areas and perimeters over an ordered collection of shapes
///
/// Members are shared and never mutated. Totals are recomputed on every call
/// and the most recent result is kept in `total_area` / `total_perimeter`.
pub struct ShapeSumCalculator {
    shapes: Vec<Rc<dyn Shape>>,
    total_area: Cell<Option<f64>>,
    total_perimeter: Cell<Option<f64>>,
}

impl ShapeSumCalculator {
    pub fn new(shapes: Vec<Rc<dyn Shape>>) -> Self {
        Self {
            shapes,
            total_area: Cell::new(None),
            total_perimeter: Cell::new(None),
        }
    }

    /// Returns the members in construction order
    pub fn shapes(&self) -> &[Rc<dyn Shape>] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Last computed total area, `None` until [`Shape::area`] is called
    pub fn total_area(&self) -> Option<f64> {
        self.total_area.get()
    }

    /// Last computed total perimeter, `None` until [`Shape::perimeter`] is called
    pub fn total_perimeter(&self) -> Option<f64> {
        self.total_perimeter.get()
    }

    // Left fold from +0.0 in member order keeps the sum reproducible and an
    // empty collection at positive zero.
    fn sum_by(&self, measure: impl Fn(&dyn Shape) -> f64) -> f64 {
        self.shapes
            .iter()
            .fold(0.0, |total, shape| total + measure(shape.as_ref()))
    }
}

impl Shape for ShapeSumCalculator {
    fn area(&self) -> f64 {
        let total = self.sum_by(|shape| shape.area());
        self.total_area.set(Some(total));
        total
    }

    fn perimeter(&self) -> f64 {
        let total = self.sum_by(|shape| shape.perimeter());
        self.total_perimeter.set(Some(total));
        total
    }

    fn describe(&self) -> String {
        self.shapes
            .iter()
            .map(|shape| shape.describe())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Debug for ShapeSumCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeSumCalculator")
            .field("shapes", &self.describe())
            .field("total_area", &self.total_area.get())
            .field("total_perimeter", &self.total_perimeter.get())
            .finish()
    }
}

impl fmt::Display for ShapeSumCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
