//! chart-deps - print the repository locations of a chart's dependencies
//!
//! Reads a YAML dependency manifest, takes the `repository` of every entry under
//! `dependencies`, drops the `file://` marker from local paths and prints one
//! location per line.
//!
//! # Architecture
//!
//! - **manifest**: Typed model of the manifest document
//! - **extract**: Prefix stripping and the streaming output loop
//! - **logging**: tracing setup (stderr only)

pub mod error;
pub mod extract;
pub mod logging;
pub mod manifest;

// Re-exports
pub use error::{ChartDepsError, Result};
pub use extract::{
    extract_locations, resolve_location, strip_file_prefix, write_locations, ExtractOptions,
    Location, PrefixMode,
};
pub use manifest::{Dependency, Manifest};
