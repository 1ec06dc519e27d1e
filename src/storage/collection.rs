//! Shape collection files
//!
//! A collection file lists shape definitions under a top-level `shapes` key.
//! The file extension selects the codec (`.toml`, `.yaml`/`.yml`, `.json`).

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{calculator_from, ShapeDefinition, ShapeSumCalculator};

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("Unsupported collection format '{0}': expected .toml, .yaml, .yml or .json")]
    UnsupportedFormat(String),

    #[error("Failed to parse collection: {0}")]
    Parse(String),

    #[error("Failed to read collection {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Codec used for a collection file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionFormat {
    Toml,
    Yaml,
    Json,
}

impl CollectionFormat {
    /// Picks the codec from the file extension
    pub fn from_path(path: &Path) -> Result<Self, CollectionError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "toml" => Ok(CollectionFormat::Toml),
            "yaml" | "yml" => Ok(CollectionFormat::Yaml),
            "json" => Ok(CollectionFormat::Json),
            _ => Err(CollectionError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Ordered list of shape definitions
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ShapeCollection {
    #[serde(default)]
    pub shapes: Vec<ShapeDefinition>,
}

impl ShapeCollection {
    pub fn new(shapes: Vec<ShapeDefinition>) -> Self {
        Self { shapes }
    }

    /// Reads a collection file, choosing the codec by extension
    pub fn load(path: &Path) -> Result<Self, CollectionError> {
        let format = CollectionFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|source| CollectionError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::parse(&content, format)
    }

    /// Parses collection text in the given format
    pub fn parse(content: &str, format: CollectionFormat) -> Result<Self, CollectionError> {
        match format {
            CollectionFormat::Toml => {
                toml::from_str(content).map_err(|e| CollectionError::Parse(e.to_string()))
            }
            CollectionFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| CollectionError::Parse(e.to_string()))
            }
            CollectionFormat::Json => {
                serde_json::from_str(content).map_err(|e| CollectionError::Parse(e.to_string()))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Builds a calculator over the collection in file order
    pub fn calculator(&self) -> ShapeSumCalculator {
        calculator_from(self.shapes.iter().copied())
    }
}
