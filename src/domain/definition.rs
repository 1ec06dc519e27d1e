//! Serializable shape definitions
//!
//! A definition is the tagged, on-disk form of a figure:
//!
//! ```json
//! {"kind": "rectangle", "height": 2.0, "width": 3.0}
//! ```
//!
//! Omitted dimensions deserialize as `0.0`.

use std::rc::Rc;

use serde::Deserialize;

use super::calculator::ShapeSumCalculator;
use super::shape::{Circle, Rectangle, Shape, ShapeKind, Square};

/// Tagged definition of a concrete figure
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeDefinition {
    Rectangle(Rectangle),
    Circle(Circle),
    Square(Square),
}

impl ShapeDefinition {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeDefinition::Rectangle(_) => ShapeKind::Rectangle,
            ShapeDefinition::Circle(_) => ShapeKind::Circle,
            ShapeDefinition::Square(_) => ShapeKind::Square,
        }
    }

    /// Converts into a shared shape suitable for a [`ShapeSumCalculator`]
    pub fn into_shape(self) -> Rc<dyn Shape> {
        match self {
            ShapeDefinition::Rectangle(rect) => Rc::new(rect),
            ShapeDefinition::Circle(circle) => Rc::new(circle),
            ShapeDefinition::Square(square) => Rc::new(square),
        }
    }
}

impl From<Rectangle> for ShapeDefinition {
    fn from(rect: Rectangle) -> Self {
        ShapeDefinition::Rectangle(rect)
    }
}

impl From<Circle> for ShapeDefinition {
    fn from(circle: Circle) -> Self {
        ShapeDefinition::Circle(circle)
    }
}

impl From<Square> for ShapeDefinition {
    fn from(square: Square) -> Self {
        ShapeDefinition::Square(square)
    }
}

/// Builds a calculator over `definitions`, keeping their order
pub fn calculator_from(
    definitions: impl IntoIterator<Item = ShapeDefinition>,
) -> ShapeSumCalculator {
    ShapeSumCalculator::new(
        definitions
            .into_iter()
            .map(ShapeDefinition::into_shape)
            .collect(),
    )
}
