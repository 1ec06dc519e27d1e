//! # Storage Layer
//!
//! File formats read by the shapes CLI.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Config | TOML | `<config dir>/config.toml` or `--config` |
//! | Collections | TOML, YAML or JSON | any path passed to `shapes sum` |
//!
//! ## Key Types
//!
//! - [`Config`] - User configuration
//! - [`ShapeCollection`] - Ordered shape definitions loaded from disk

mod config;
mod collection;

pub use config::{Config, ConfigError, DefaultFormat, MAX_PRECISION};
pub use collection::{CollectionError, CollectionFormat, ShapeCollection};
