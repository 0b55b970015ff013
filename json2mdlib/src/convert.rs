//! High-level conversion API.
//!
//! This module provides the main entry point for turning a decoded query
//! result file into a Markdown table file.

use std::fs;
use std::path::Path;

use crate::error::Json2mdError;
use crate::render::render_table;
use crate::resultset::load_results;
use crate::Result;

/// Options for a conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Repository "name with owner" (e.g. `acme/widget`), used in the
    /// heading and in generated permalinks. Empty by default.
    pub nwo: String,
    /// Absolute path prefix of the analyzed source tree on the machine
    /// that produced the input. `None` disables permalink rewriting.
    pub source_prefix: Option<String>,
    /// Revision embedded in generated permalinks.
    pub git_ref: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            nwo: String::new(),
            source_prefix: None,
            git_ref: "HEAD".to_string(),
        }
    }
}

impl ConvertOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the repository nwo.
    pub fn nwo(mut self, nwo: impl Into<String>) -> Self {
        self.nwo = nwo.into();
        self
    }

    /// Set the source location prefix to rewrite into permalinks.
    pub fn source_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.source_prefix = Some(prefix.into());
        self
    }

    /// Set the revision for permalinks (defaults to `HEAD`).
    pub fn git_ref(mut self, git_ref: impl Into<String>) -> Self {
        self.git_ref = git_ref.into();
        self
    }
}

/// Convert a decoded query result file into a Markdown table file.
///
/// Reads and parses `input`, renders the Markdown document, and writes it
/// to `output` (created or overwritten). The output file is not touched
/// when loading fails.
///
/// # Example
///
/// ```rust,ignore
/// use json2mdlib::{convert_file, ConvertOptions};
///
/// let options = ConvertOptions::new()
///     .nwo("acme/widget")
///     .source_prefix("/home/runner/work/widget/widget");
/// convert_file("results.json", "results.md", &options)?;
/// ```
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<()> {
    let results = load_results(input)?;
    let markdown = render_table(&results, options);

    let output = output.as_ref();
    fs::write(output, markdown).map_err(|source| Json2mdError::FileWrite {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(())
}
