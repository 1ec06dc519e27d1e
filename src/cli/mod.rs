//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose | Example |
//! |---------|---------|---------|
//! | `demo` (default) | Built-in scenario | `shapes` |
//! | `measure` | One shape from flags | `shapes measure circle --radius 2` |
//! | `sum` | Totals over a collection file | `shapes sum shapes.toml` |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - One formatted line per value
//! - `json` - Array of records with raw and formatted values
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! shapes --verbose sum shapes.toml
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod report;
mod demo;
mod measure;
mod sum;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
pub use report::Record;
pub use measure::MeasureCommands;
