//! Output formatting for CLI commands

use super::report::Record;
use crate::storage::DefaultFormat;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<DefaultFormat> for OutputFormat {
    fn from(format: DefaultFormat) -> Self {
        match format {
            DefaultFormat::Text => OutputFormat::Text,
            DefaultFormat::Json => OutputFormat::Json,
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints report records: one formatted line each, or a JSON array
    pub fn records(&self, records: &[Record]) {
        match self.format {
            OutputFormat::Text => {
                for record in records {
                    println!("{}", record.formatted());
                }
            }
            OutputFormat::Json => {
                if let Ok(json) = serde_json::to_string(records) {
                    println!("{}", json);
                }
            }
        }
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}
