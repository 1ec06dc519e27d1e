//! Shape capability and the concrete figures
//!
//! Every figure implements [`Shape`] with closed-form formulas. Descriptions
//! are composed from a shared base step (the kind name) extended with the
//! figure's own attributes:
//!
//! ```text
//! Rectangle with height = 2.0 and width = 3.0
//! ^^^^^^^^^ base step
//!           ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ attributes
//! ```
//!
//! Missing dimensions default to `0.0`. Negative dimensions are accepted
//! as-is and produce negative or zero results.

use serde::Deserialize;
use std::f64::consts::PI;
use std::fmt;

/// Something with an area and a perimeter
///
/// Both computations are mandatory; there is no default implementation.
pub trait Shape {
    /// Area of the shape
    fn area(&self) -> f64;

    /// Perimeter of the shape
    fn perimeter(&self) -> f64;

    /// Human-readable description, e.g. `Circle with radius = 2.0`
    fn describe(&self) -> String;
}

/// Kind of a concrete figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Square,
}

impl ShapeKind {
    /// Returns the display name of the kind
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Base description step shared by all figures: the kind name alone
pub fn describe_kind(kind: ShapeKind) -> String {
    kind.name().to_string()
}

/// Smallest magnitude rendered in exponent form
const EXPONENT_ABOVE: f64 = 1e16;

/// Non-zero magnitudes below this are rendered in exponent form
const EXPONENT_BELOW: f64 = 1e-4;

/// Renders a dimension
///
/// Plain values keep at least one fractional digit (`2.0`, `0.25`). Non-zero
/// magnitudes of at least `1e16` or below `1e-4` use a signed exponent with
/// at least two digits (`1e+16`, `2.5e-05`).
pub fn dimension(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let magnitude = value.abs();
    if value.is_infinite()
        || magnitude == 0.0
        || (EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude)
    {
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or_default();
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => scientific,
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Rectangle {
    height: f64,
    width: f64,
}

impl Rectangle {
    pub fn new(height: f64, width: f64) -> Self {
        Self { height, width }
    }

    /// Creates a rectangle where absent dimensions become `0.0`
    pub fn from_optional(height: Option<f64>, width: Option<f64>) -> Self {
        Self::new(height.unwrap_or_default(), width.unwrap_or_default())
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.height * self.width
    }

    fn perimeter(&self) -> f64 {
        (self.height + self.width) * 2.0
    }

    fn describe(&self) -> String {
        format!(
            "{} with height = {} and width = {}",
            describe_kind(ShapeKind::Rectangle),
            dimension(self.height),
            dimension(self.width)
        )
    }
}

/// Circle given by its radius
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Creates a circle where an absent radius becomes `0.0`
    pub fn from_optional(radius: Option<f64>) -> Self {
        Self::new(radius.unwrap_or_default())
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn describe(&self) -> String {
        format!(
            "{} with radius = {}",
            describe_kind(ShapeKind::Circle),
            dimension(self.radius)
        )
    }
}

/// Square given by its side
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }

    /// Creates a square where an absent side becomes `0.0`
    pub fn from_optional(side: Option<f64>) -> Self {
        Self::new(side.unwrap_or_default())
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn perimeter(&self) -> f64 {
        4.0 * self.side
    }

    fn describe(&self) -> String {
        format!(
            "{} with side = {}",
            describe_kind(ShapeKind::Square),
            dimension(self.side)
        )
    }
}

macro_rules! display_via_describe {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.describe())
                }
            }
        )*
    };
}

display_via_describe!(Rectangle, Circle, Square);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_formulas() {
        let rect = Rectangle::new(2.0, 3.0);
        assert_eq!(rect.area(), 6.0);
        assert_eq!(rect.perimeter(), 10.0);
    }

    #[test]
    fn circle_formulas() {
        let circle = Circle::new(2.0);
        assert_eq!(circle.area(), PI * 2.0 * 2.0);
        assert_eq!(circle.perimeter(), 2.0 * PI * 2.0);
    }

    #[test]
    fn square_formulas() {
        let square = Square::new(4.0);
        assert_eq!(square.area(), 16.0);
        assert_eq!(square.perimeter(), 16.0);
    }

    #[test]
    fn describe_rectangle() {
        let rect = Rectangle::new(2.0, 3.0);
        assert_eq!(rect.describe(), "Rectangle with height = 2.0 and width = 3.0");
        assert_eq!(rect.to_string(), rect.describe());
    }

    #[test]
    fn describe_circle_and_square() {
        assert_eq!(Circle::new(2.0).describe(), "Circle with radius = 2.0");
        assert_eq!(Square::new(4.0).describe(), "Square with side = 4.0");
        assert_eq!(Circle::new(0.25).describe(), "Circle with radius = 0.25");
    }

    #[test]
    fn describe_extends_base_step() {
        let kinds = [
            (ShapeKind::Rectangle, Rectangle::default().describe()),
            (ShapeKind::Circle, Circle::default().describe()),
            (ShapeKind::Square, Square::default().describe()),
        ];

        for (kind, description) in kinds {
            assert!(description.starts_with(&format!("{} with ", describe_kind(kind))));
        }
    }

    #[test]
    fn missing_dimensions_default_to_zero() {
        assert_eq!(Rectangle::from_optional(None, Some(3.0)), Rectangle::new(0.0, 3.0));
        assert_eq!(Circle::from_optional(None), Circle::new(0.0));
        assert_eq!(Square::from_optional(None), Square::default());

        let rect = Rectangle::from_optional(None, Some(3.0));
        assert_eq!(rect.area(), 0.0);
        assert_eq!(rect.perimeter(), 6.0);
    }

    #[test]
    fn negative_dimensions_are_not_rejected() {
        let square = Square::new(-2.0);
        assert_eq!(square.perimeter(), -8.0);
        assert_eq!(square.area(), 4.0);
        assert_eq!(square.describe(), "Square with side = -2.0");
    }

    #[test]
    fn deserialize_with_missing_fields() {
        let rect: Rectangle = serde_json::from_str(r#"{"width": 3.0}"#).unwrap();
        assert_eq!(rect, Rectangle::new(0.0, 3.0));
    }

    #[test]
    fn kind_display() {
        assert_eq!(ShapeKind::Circle.to_string(), "Circle");
        assert_eq!(ShapeKind::Rectangle.name(), "Rectangle");
    }

    #[test]
    fn dimension_plain_range() {
        assert_eq!(dimension(2.0), "2.0");
        assert_eq!(dimension(0.0), "0.0");
        assert_eq!(dimension(-0.5), "-0.5");
        assert_eq!(dimension(0.0001), "0.0001");
        assert_eq!(dimension(1e15), "1000000000000000.0");
    }

    #[test]
    fn dimension_exponent_range() {
        assert_eq!(dimension(1e16), "1e+16");
        assert_eq!(dimension(2.5e20), "2.5e+20");
        assert_eq!(dimension(1e300), "1e+300");
        assert_eq!(dimension(0.00001), "1e-05");
        assert_eq!(dimension(-2.5e-7), "-2.5e-07");
    }

    #[test]
    fn dimension_non_finite() {
        assert_eq!(dimension(f64::INFINITY), "inf");
        assert_eq!(dimension(f64::NEG_INFINITY), "-inf");
        assert_eq!(dimension(f64::NAN), "nan");
    }

    #[test]
    fn describe_extreme_dimensions() {
        assert_eq!(
            Rectangle::new(1e16, 3.0).describe(),
            "Rectangle with height = 1e+16 and width = 3.0"
        );
        assert_eq!(Circle::new(0.00001).describe(), "Circle with radius = 1e-05");
    }
}
