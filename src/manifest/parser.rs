//! YAML parser for chart dependency manifests

use crate::{ChartDepsError, Result};
use serde::Deserialize;
use serde_yaml::Value;
use std::path::Path;

/// A parsed manifest file
///
/// Every entry must be a mapping; a non-mapping entry fails the whole parse, before any output.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Dependency entries in document order
    pub dependencies: Option<Vec<Dependency>>,
}

/// A single entry of the `dependencies` list
#[derive(Debug, Clone, Deserialize)]
pub struct Dependency {
    /// Chart name, used only for diagnostics
    pub name: Option<Value>,

    /// Repository location (`file://` path or remote URL)
    pub repository: Option<Value>,
}

impl Dependency {
    /// Get the repository location as text
    ///
    /// `index` is the entry's position in the list and only feeds error messages.
    pub fn repository(&self, index: usize) -> Result<&str> {
        match self.repository {
            Some(Value::String(ref location)) => Ok(location.as_str()),
            Some(_) => Err(ChartDepsError::RepositoryNotText {
                index,
                name: self.display_name(),
            }),
            None => Err(ChartDepsError::MissingRepository {
                index,
                name: self.display_name(),
            }),
        }
    }

    /// Name to show in diagnostics
    pub fn display_name(&self) -> String {
        match self.name {
            Some(Value::String(ref name)) => name.clone(),
            Some(Value::Number(ref n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => "<unnamed>".to_string(),
        }
    }
}

impl Manifest {
    /// Parse a manifest from YAML content
    pub fn parse(yaml: &str) -> Result<Self> {
        Ok(Self::from_yaml(yaml)?)
    }

    /// Parse a manifest from a file
    ///
    /// The whole file is read and closed before parsing starts.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ChartDepsError::ManifestRead {
                path: path.to_path_buf(),
                source,
            })?;

        let manifest =
            Self::from_yaml(&content).map_err(|source| ChartDepsError::InvalidManifest {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(
            path = %path.display(),
            dependencies = ?manifest.dependencies.as_ref().map(Vec::len),
            "Manifest loaded"
        );

        Ok(manifest)
    }

    /// Deserialize with `<<` merge keys expanded
    fn from_yaml(yaml: &str) -> serde_yaml::Result<Self> {
        let mut value: Value = serde_yaml::from_str(yaml)?;
        value.apply_merge()?;
        serde_yaml::from_value(value)
    }

    /// Get the dependency entries
    ///
    /// An explicit empty list is valid; a missing or null key is not.
    pub fn dependencies(&self) -> Result<&[Dependency]> {
        self.dependencies
            .as_deref()
            .ok_or(ChartDepsError::MissingDependencies)
    }
}
