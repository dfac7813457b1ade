//! Identifier rewriting and statement segmentation for SQL text.
//!
//! Rewrites SQL from the source-system vocabulary to the target-system
//! vocabulary in two passes: case-insensitive whole-word field substitution,
//! then literal table-name substitution. Substitutions run strictly in
//! mapping order and each one reads the output of the previous, so later
//! replacements win; reordering or parallelizing the passes would change
//! results.
//!
//! Segmentation splits the rewritten text on a semicolon followed by a blank
//! line, trims each piece, and re-terminates it with a semicolon. The
//! resulting statements are opaque blocks handed to downstream formatters.
//!
//! # Example
//!
//! ```
//! use indexmap::IndexMap;
//! use sql_field_mapper::rewrite::{rewrite_identifiers, split_statements};
//!
//! let mut fields = IndexMap::new();
//! fields.insert("OLDNAME".to_string(), "newname".to_string());
//! let tables = IndexMap::new();
//!
//! let sql = rewrite_identifiers("SELECT OLDNAME FROM t", &fields, &tables);
//! assert_eq!(sql, "SELECT newname FROM t");
//!
//! let statements = split_statements("A;\n\nB;");
//! assert_eq!(statements, vec!["A;", "B;"]);
//! ```

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{NoExpand, Regex};

/// Statement boundary: a semicolon followed by a blank line.
static STATEMENT_BOUNDARY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";\s*\n\s*\n").expect("valid regex"));

/// Rewrite source identifiers to target identifiers across SQL text.
///
/// Field mappings are applied first, in their defined order, each as a
/// case-insensitive whole-word replacement over the progressively rewritten
/// text. Table mappings follow as literal substring replacements, also in
/// order. Empty mappings leave the text unchanged.
#[must_use]
pub fn rewrite_identifiers(
    sql: &str,
    field_mappings: &IndexMap<String, String>,
    table_mappings: &IndexMap<String, String>
) -> String {
    let mut content = sql.to_string();

    for (source_field, target_field) in field_mappings {
        let pattern = format!(r"(?i)\b{}\b", regex::escape(source_field));
        let re = Regex::new(&pattern).expect("escaped identifier is a valid pattern");
        content = re.replace_all(&content, NoExpand(target_field)).into_owned();
    }

    for (source_table, target_table) in table_mappings {
        content = content.replace(source_table, target_table);
    }

    content
}

/// Segment SQL text into trimmed, semicolon-terminated statements.
///
/// The boundary pattern consumes the terminating semicolon, so a semicolon
/// is appended to every statement that lost its own. Empty segments are
/// dropped.
#[must_use]
pub fn split_statements(sql: &str) -> Vec<String> {
    STATEMENT_BOUNDARY_REGEX
        .split(sql.trim())
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .map(|statement| {
            if statement.ends_with(';') {
                statement.to_string()
            } else {
                format!("{};", statement)
            }
        })
        .collect()
}
