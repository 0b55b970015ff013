//! Data model for decoded query results.
//!
//! The input is the JSON emitted by `codeql bqrs decode --format=json
//! --entities=all`: a top-level object whose `#select` key holds the result
//! set of the query's select clause. Columns carry an optional name, tuples
//! are arrays of cells, and each cell is either a plain JSON value or an
//! entity with a display label and a source location.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Json2mdError;
use crate::Result;

/// Top-level wrapper around the decoded query output.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResults {
    /// The result set of the query's select clause
    #[serde(rename = "#select")]
    pub select: ResultSet,
}

/// The column/row structure of one result set.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    /// Ordered column descriptors
    pub columns: Vec<Column>,
    /// Ordered rows; each row is an ordered sequence of cells
    pub tuples: Vec<Vec<Cell>>,
}

impl ResultSet {
    /// Number of result rows in this set.
    pub fn result_count(&self) -> usize {
        self.tuples.len()
    }
}

/// A column descriptor from the select clause.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Column {
    /// Column name; absent for unnamed select expressions
    pub name: Option<String>,
    /// Column kind reported by the decoder (e.g. "Entity", "String")
    pub kind: Option<String>,
}

impl Column {
    /// Display name for table headers; unnamed columns render as `-`.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("-")
    }
}

/// A single cell value.
///
/// The shape is decided once at deserialization time: an object carrying
/// `label` and `url` is a source location, anything else is kept as a plain
/// JSON value and rendered via its natural string form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// An entity with a display label and a source location
    Location(LocationRecord),
    /// Any other JSON value (number, string, boolean, ...)
    Value(serde_json::Value),
}

/// An entity cell pointing at a source-code location.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationRecord {
    /// Entity id assigned by the decoder
    pub id: Option<u64>,
    /// Display text for the entity
    pub label: String,
    /// Where the entity lives in the analyzed source
    pub url: SourceUrl,
}

/// A source location as a URI plus line/column range.
///
/// Only `uri` and `startLine` take part in rendering; the remaining fields
/// are present in decoder output and carried through for completeness.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceUrl {
    /// Location URI, typically using a `file:` scheme
    pub uri: String,
    /// 1-based start line
    #[serde(rename = "startLine")]
    pub start_line: u64,
    /// 1-based start column
    #[serde(rename = "startColumn")]
    pub start_column: Option<u64>,
    /// 1-based end line
    #[serde(rename = "endLine")]
    pub end_line: Option<u64>,
    /// 1-based end column
    #[serde(rename = "endColumn")]
    pub end_column: Option<u64>,
}

/// Load a decoded result file and extract its `#select` result set.
///
/// Distinguishes three failure tiers: an unreadable file, a file that is
/// not valid JSON, and valid JSON that lacks the expected result-set shape.
pub fn load_results(path: impl AsRef<Path>) -> Result<ResultSet> {
    let path = path.as_ref();

    let text = fs::read_to_string(path).map_err(|source| Json2mdError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|source| Json2mdError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let results: QueryResults =
        serde_json::from_value(value).map_err(|source| Json2mdError::Schema {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(results.select)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    // Shape taken from real `bqrs decode` output: an entity column plus a
    // message column.
    const SAMPLE: &str = r##"{
        "#select": {
            "columns": [
                { "name": "e", "kind": "Entity" },
                { "kind": "String" }
            ],
            "tuples": [
                [
                    {
                        "id": 7661,
                        "label": "CERTSTORE_DOESNT_WORK_ON_LINIX",
                        "url": {
                            "uri": "file:/home/runner/work/certstore/certstore/certstore_linux.go",
                            "startLine": 8,
                            "startColumn": 2,
                            "endLine": 8,
                            "endColumn": 31
                        }
                    },
                    "This expression has no effect."
                ]
            ]
        }
    }"##;

    #[test]
    fn test_parse_sample() {
        let results: QueryResults = serde_json::from_str(SAMPLE).unwrap();
        let select = results.select;

        assert_eq!(select.columns.len(), 2);
        assert_eq!(select.columns[0].display_name(), "e");
        assert_eq!(select.columns[0].kind.as_deref(), Some("Entity"));
        assert_eq!(select.columns[1].display_name(), "-");
        assert_eq!(select.result_count(), 1);

        match &select.tuples[0][0] {
            Cell::Location(loc) => {
                assert_eq!(loc.id, Some(7661));
                assert_eq!(loc.label, "CERTSTORE_DOESNT_WORK_ON_LINIX");
                assert_eq!(loc.url.start_line, 8);
                assert_eq!(loc.url.start_column, Some(2));
                assert_eq!(loc.url.end_column, Some(31));
            }
            Cell::Value(v) => panic!("expected a location cell, got {v}"),
        }

        match &select.tuples[0][1] {
            Cell::Value(v) => assert_eq!(v.as_str(), Some("This expression has no effect.")),
            Cell::Location(_) => panic!("expected a plain value cell"),
        }
    }

    #[test]
    fn test_primitive_cells() {
        let json = r##"{"#select":{"columns":[{"name":"x"}],"tuples":[[1],[2]]}}"##;
        let results: QueryResults = serde_json::from_str(json).unwrap();
        assert_eq!(results.select.result_count(), 2);
        assert!(matches!(results.select.tuples[0][0], Cell::Value(_)));
    }

    #[test]
    fn test_object_without_url_is_plain_value() {
        // An object that lacks the label/url pair is not a location.
        let json = r##"{"#select":{"columns":[{}],"tuples":[[{"label":"x"}]]}}"##;
        let results: QueryResults = serde_json::from_str(json).unwrap();
        assert!(matches!(results.select.tuples[0][0], Cell::Value(_)));
    }

    #[test]
    fn test_load_results_missing_file() {
        let err = load_results("/nonexistent/results.json").unwrap_err();
        assert!(matches!(err, Json2mdError::FileRead { .. }));
    }

    #[test]
    fn test_load_results_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.json");
        fs::write(&path, "not json {").unwrap();

        let err = load_results(&path).unwrap_err();
        assert!(matches!(err, Json2mdError::Parse { .. }));
    }

    #[test]
    fn test_load_results_missing_select() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.json");
        fs::write(&path, r#"{"problems": {}}"#).unwrap();

        let err = load_results(&path).unwrap_err();
        assert!(matches!(err, Json2mdError::Schema { .. }));
    }

    #[test]
    fn test_load_results_missing_tuples() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.json");
        fs::write(&path, r##"{"#select": {"columns": []}}"##).unwrap();

        let err = load_results(&path).unwrap_err();
        assert!(matches!(err, Json2mdError::Schema { .. }));
    }

    #[test]
    fn test_load_results_ok() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.json");
        fs::write(&path, SAMPLE).unwrap();

        let select = load_results(&path).unwrap();
        assert_eq!(select.columns.len(), 2);
        assert_eq!(select.result_count(), 1);
    }
}
