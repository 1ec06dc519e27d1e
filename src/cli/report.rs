//! Report records shared by the CLI commands
//!
//! Each record keeps both the raw values and the formatted line, so text and
//! JSON output stay consistent.

use serde::Serialize;

use crate::domain::{labeled_line, summary_from, Operation, Shape};

/// One line of command output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    /// Perimeter and area of a shape on one line
    Summary {
        description: String,
        perimeter: f64,
        area: f64,
        formatted: String,
    },
    /// A single labeled measurement
    Measurement {
        description: String,
        operation: &'static str,
        label: String,
        value: f64,
        formatted: String,
    },
}

impl Record {
    /// Measures `shape` once and keeps the values with their line
    pub fn summary<S: Shape + ?Sized>(shape: &S, precision: usize) -> Self {
        let description = shape.describe();
        let perimeter = shape.perimeter();
        let area = shape.area();
        let formatted = summary_from(&description, perimeter, area, precision);

        Record::Summary {
            description,
            perimeter,
            area,
            formatted,
        }
    }

    pub fn measurement<S: Shape + ?Sized>(
        shape: &S,
        operation: &Operation,
        precision: usize,
    ) -> Self {
        let description = shape.describe();
        let value = operation.apply(shape);
        let formatted = labeled_line(&description, operation.label(), value, precision);

        Record::Measurement {
            description,
            operation: operation.name(),
            label: operation.label().to_string(),
            value,
            formatted,
        }
    }

    /// Returns the human-readable line
    pub fn formatted(&self) -> &str {
        match self {
            Record::Summary { formatted, .. } | Record::Measurement { formatted, .. } => formatted,
        }
    }
}
