//! Repository location extraction
//!
//! Turns each dependency's `repository` into an output line: local `file://`
//! locations lose their scheme marker, everything else passes through unchanged.

use crate::manifest::Manifest;
use crate::Result;
use std::borrow::Cow;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Marker that identifies a local chart directory
pub const FILE_PREFIX: &str = "file://";

/// How the `file://` marker is removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PrefixMode {
    /// Remove the marker only when the location starts with it
    #[default]
    Anchored,
    /// Remove every occurrence of the marker, wherever it appears
    Anywhere,
}

/// Extraction settings
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Prefix removal strategy
    pub prefix_mode: PrefixMode,

    /// Join relative local paths onto this directory
    pub base_dir: Option<PathBuf>,
}

impl ExtractOptions {
    /// Options that resolve local paths against the manifest's own directory
    pub fn resolving_against(mut self, manifest_path: &Path) -> Self {
        let dir = manifest_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        self.base_dir = Some(dir.to_path_buf());
        self
    }
}

/// One extracted repository location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Text exactly as written in the manifest
    pub raw: String,

    /// Text to print
    pub value: String,

    /// Whether the manifest marked this as a local path
    pub local: bool,
}

/// Remove the `file://` marker from a location
pub fn strip_file_prefix(location: &str, mode: PrefixMode) -> Cow<'_, str> {
    match mode {
        PrefixMode::Anchored => match location.strip_prefix(FILE_PREFIX) {
            Some(rest) => Cow::Borrowed(rest),
            None => Cow::Borrowed(location),
        },
        PrefixMode::Anywhere => {
            if location.contains(FILE_PREFIX) {
                Cow::Owned(location.replace(FILE_PREFIX, ""))
            } else {
                Cow::Borrowed(location)
            }
        }
    }
}

/// Turn a raw `repository` value into the text that gets printed
pub fn resolve_location(raw: &str, options: &ExtractOptions) -> Location {
    let local = raw.starts_with(FILE_PREFIX);
    let stripped = strip_file_prefix(raw, options.prefix_mode);

    let value = match options.base_dir {
        Some(ref base) if local && Path::new(&*stripped).is_relative() => {
            base.join(&*stripped).display().to_string()
        }
        _ => stripped.into_owned(),
    };

    Location {
        raw: raw.to_string(),
        value,
        local,
    }
}

/// Write one location per line, in manifest order
///
/// Stops at the first entry that fails; lines written before it are left in `out`.
/// Returns the number of lines written.
pub fn write_locations<W: Write>(
    manifest: &Manifest,
    options: &ExtractOptions,
    mut out: W,
) -> Result<usize> {
    let dependencies = manifest.dependencies()?;

    let mut written = 0;
    for (index, dependency) in dependencies.iter().enumerate() {
        let location = resolve_location(dependency.repository(index)?, options);

        tracing::debug!(
            index,
            name = %dependency.display_name(),
            local = location.local,
            location = %location.value,
            "Extracted repository"
        );

        writeln!(out, "{}", location.value)?;
        written += 1;
    }

    out.flush()?;
    Ok(written)
}

/// Collect every location, failing on the first bad entry
pub fn extract_locations(manifest: &Manifest, options: &ExtractOptions) -> Result<Vec<Location>> {
    manifest
        .dependencies()?
        .iter()
        .enumerate()
        .map(|(index, dependency)| {
            dependency
                .repository(index)
                .map(|raw| resolve_location(raw, options))
        })
        .collect()
}

/// Load a manifest file and stream its locations to `out`
pub fn run<W: Write>(path: &Path, options: &ExtractOptions, out: W) -> Result<usize> {
    let manifest = Manifest::from_file(path)?;
    let written = write_locations(&manifest, options, out)?;

    tracing::info!(path = %path.display(), written, "Extraction complete");

    Ok(written)
}
