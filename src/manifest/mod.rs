//! Manifest parsing for chart dependency lists
//!
//! Parses the YAML dependency manifest that sits next to a chart
//! (`requirements.yaml`, or the `dependencies` block of `Chart.yaml`).
//! Only the `dependencies` list and each entry's `repository` are read;
//! every other key is ignored.
//!
//! # Example Manifest
//!
//! ```yaml
//! dependencies:
//!   - name: presto
//!     version: 0.1.0
//!     repository: file://../presto
//!   - name: hdfs
//!     version: 0.1.0
//!     repository: https://charts.example.com/stable
//! ```

mod parser;

pub use parser::{Dependency, Manifest};
