//! Markdown table rendering with permalink rewriting.
//!
//! Produces a GitHub-flavored table: a `##` heading with the repository
//! nwo ("name with owner"), a header row from the column names, a `---`
//! separator row, and one row per tuple. Location cells become Markdown
//! links; locators under the analyzed source tree are rewritten into
//! `https://github.com/{nwo}/blob/{ref}/...` permalinks.

use serde_json::Value;

use crate::convert::ConvertOptions;
use crate::resultset::{Cell, ResultSet, SourceUrl};

/// Render a complete Markdown document for a result set.
pub fn render_table(results: &ResultSet, options: &ConvertOptions) -> String {
    let mut out = String::new();

    out.push_str(&format!("## {}\n\n", options.nwo));

    let header: Vec<String> = results
        .columns
        .iter()
        .map(|col| col.display_name().to_string())
        .collect();
    out.push_str(&render_row(&header));

    let separator: Vec<String> = results.columns.iter().map(|_| "---".to_string()).collect();
    out.push_str(&render_row(&separator));

    for tuple in &results.tuples {
        let cells: Vec<String> = tuple
            .iter()
            .map(|cell| render_cell(cell, options))
            .collect();
        out.push_str(&render_row(&cells));
    }

    out
}

/// Join cells into one pipe-delimited table line.
fn render_row(cells: &[String]) -> String {
    format!("|{}|\n", cells.join("|"))
}

/// Render a single cell.
///
/// Plain values use their natural string form (strings as-is, everything
/// else via its JSON text). Location cells become `[label](locator)` with
/// the locator run through the permalink rewrite.
pub fn render_cell(cell: &Cell, options: &ConvertOptions) -> String {
    match cell {
        Cell::Value(value) => render_value(value),
        Cell::Location(loc) => {
            let locator = rewrite_locator(&loc.url, options);
            format!("[{}]({})", loc.label, locator)
        }
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Build the `{uri}#L{line}` locator and rewrite it into a permalink when
/// it points into the analyzed source tree.
///
/// The rewrite is exact-prefix-only: it fires when the locator starts with
/// `file:{source_prefix}` and leaves everything after the prefix (path and
/// line anchor) untouched. Without a configured prefix no locator can
/// match, which disables rewriting. The nwo is substituted as-is even when
/// empty, matching the permissive reference behavior.
fn rewrite_locator(url: &SourceUrl, options: &ConvertOptions) -> String {
    let locator = format!("{}#L{}", url.uri, url.start_line);

    if let Some(prefix) = &options.source_prefix {
        let file_prefix = format!("file:{prefix}");
        if let Some(rest) = locator.strip_prefix(&file_prefix) {
            return format!(
                "https://github.com/{}/blob/{}{}",
                options.nwo, options.git_ref, rest
            );
        }
    }

    locator
}
