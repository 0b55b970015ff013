//! # json2mdlib
//!
//! Convert decoded CodeQL query results (the JSON produced by
//! `codeql bqrs decode --format=json --entities=all`) into GitHub-flavored
//! Markdown tables.
//!
//! ## Overview
//!
//! The input is a result set: named columns plus row tuples, where each
//! cell is either a plain value or an entity carrying a display label and
//! a source location. The library renders one Markdown table per result
//! set and rewrites `file:` scheme locations under the analyzed source
//! tree into `https://github.com/{nwo}/blob/{ref}/...` permalinks, so the
//! table can be posted somewhere the original filesystem paths mean
//! nothing (an issue, a PR comment, a results index).
//!
//! Conversion is a single read-transform-write pass: no state is retained
//! between invocations and rewriting is purely textual (no network calls).
//!
//! ## Example
//!
//! ```rust
//! use json2mdlib::{convert_file, ConvertOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let input = dir.path().join("results.json");
//! let output = dir.path().join("results.md");
//! fs::write(&input, r##"{"#select":{"columns":[{"name":"x"}],"tuples":[[1],[2]]}}"##).unwrap();
//!
//! let options = ConvertOptions::new().nwo("acme/widget");
//! convert_file(&input, &output, &options).unwrap();
//!
//! let markdown = fs::read_to_string(&output).unwrap();
//! assert!(markdown.starts_with("## acme/widget"));
//! ```

pub mod convert;
pub mod error;
pub mod render;
pub mod resultset;

pub use convert::{convert_file, ConvertOptions};
pub use error::Json2mdError;
pub use render::{render_cell, render_table};
pub use resultset::{
    load_results, Cell, Column, LocationRecord, QueryResults, ResultSet, SourceUrl,
};

/// Result type for json2mdlib operations
pub type Result<T> = std::result::Result<T, Json2mdError>;
