//! Measure a single shape given on the command line

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use super::report::Record;
use crate::domain::{Circle, Operation, Rectangle, Shape, Square};

#[derive(Subcommand)]
pub enum MeasureCommands {
    /// Measure a rectangle
    Rectangle {
        /// Height (defaults to 0)
        #[arg(long, allow_negative_numbers = true)]
        height: Option<f64>,

        /// Width (defaults to 0)
        #[arg(long, allow_negative_numbers = true)]
        width: Option<f64>,
    },

    /// Measure a circle
    Circle {
        /// Radius (defaults to 0)
        #[arg(long, allow_negative_numbers = true)]
        radius: Option<f64>,
    },

    /// Measure a square
    Square {
        /// Side length (defaults to 0)
        #[arg(long, allow_negative_numbers = true)]
        side: Option<f64>,
    },
}

impl MeasureCommands {
    /// Builds the shape, defaulting missing dimensions to zero
    pub fn shape(&self) -> Box<dyn Shape> {
        match *self {
            MeasureCommands::Rectangle { height, width } => {
                Box::new(Rectangle::from_optional(height, width))
            }
            MeasureCommands::Circle { radius } => Box::new(Circle::from_optional(radius)),
            MeasureCommands::Square { side } => Box::new(Square::from_optional(side)),
        }
    }
}

/// Builds the summary, area and perimeter records for `shape`
pub fn records(shape: &dyn Shape, precision: usize) -> Vec<Record> {
    vec![
        Record::summary(shape, precision),
        Record::measurement(shape, &Operation::area("Area"), precision),
        Record::measurement(shape, &Operation::perimeter("Perimeter"), precision),
    ]
}

pub fn run(cmd: MeasureCommands, output: &Output, precision: usize) -> Result<()> {
    let shape = cmd.shape();
    output.verbose_ctx("measure", &format!("Measuring {}", shape.describe()));

    output.records(&records(shape.as_ref(), precision));
    Ok(())
}
