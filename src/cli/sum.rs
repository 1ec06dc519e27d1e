//! Total area and perimeter over a collection file

use std::path::Path;

use anyhow::{Context, Result};

use super::output::Output;
use super::report::Record;
use crate::domain::{Operation, ShapeSumCalculator};
use crate::storage::ShapeCollection;

/// Builds the total area and total perimeter records
pub fn records(calculator: &ShapeSumCalculator, precision: usize) -> Vec<Record> {
    vec![
        Record::measurement(calculator, &Operation::area("Total area"), precision),
        Record::measurement(calculator, &Operation::perimeter("Total perimeter"), precision),
    ]
}

pub fn run(output: &Output, file: &Path, precision: usize) -> Result<()> {
    output.verbose_ctx("sum", &format!("Loading collection: {}", file.display()));

    let collection = ShapeCollection::load(file)
        .with_context(|| format!("Failed to load shapes from {}", file.display()))?;
    output.verbose_ctx("sum", &format!("Loaded {} shapes", collection.len()));

    let calculator = collection.calculator();
    output.records(&records(&calculator, precision));
    Ok(())
}
