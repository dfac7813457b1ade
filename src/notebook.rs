//! Databricks notebook packaging for rewritten SQL statements.
//!
//! Consumes the opaque statement blocks produced by
//! [`rewrite::split_statements`](crate::rewrite::split_statements) and wraps
//! them for execution: either a flat script of `spark.sql("""...""")` calls
//! or a full Databricks notebook with `# COMMAND ----------` cell separators.

/// First line every Databricks notebook must carry.
pub const NOTEBOOK_SOURCE_MARKER: &str = "# Databricks notebook source";

/// Cell separator line.
pub const CELL_SEPARATOR: &str = "# COMMAND ----------";

/// Wrap a single statement in a `spark.sql` call.
#[must_use]
pub fn wrap_statement(statement: &str) -> String {
    format!("spark.sql(\"\"\"\n{}\n\"\"\")", statement)
}

/// Render statements as a flat script of `spark.sql` calls.
#[must_use]
pub fn render_script(statements: &[String]) -> String {
    let wrapped: Vec<String> = statements.iter().map(|s| wrap_statement(s)).collect();
    wrapped.join("\n\n")
}

/// Render statements as a Databricks notebook, one cell per statement.
#[must_use]
pub fn render_notebook(statements: &[String]) -> String {
    let mut lines = vec![
        NOTEBOOK_SOURCE_MARKER.to_string(),
        "# MAGIC %md".to_string(),
        "# MAGIC # Converted SQL Statements".to_string(),
        "# MAGIC Statements rewritten from source-system to target-system identifiers".to_string(),
        String::new(),
    ];

    for statement in statements {
        lines.push(CELL_SEPARATOR.to_string());
        lines.push(String::new());
        lines.push(wrap_statement(statement));
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_statement() {
        assert_eq!(
            wrap_statement("SELECT 1;"),
            "spark.sql(\"\"\"\nSELECT 1;\n\"\"\")"
        );
    }

    #[test]
    fn test_render_script_joins_with_blank_line() {
        let statements = vec!["SELECT 1;".to_string(), "SELECT 2;".to_string()];
        let script = render_script(&statements);
        assert_eq!(script.matches("spark.sql").count(), 2);
        assert!(script.contains("\"\"\")\n\nspark.sql("));
    }

    #[test]
    fn test_render_notebook_structure() {
        let statements = vec!["SELECT 1;".to_string(), "SELECT 2;".to_string()];
        let notebook = render_notebook(&statements);
        assert!(notebook.starts_with(NOTEBOOK_SOURCE_MARKER));
        assert_eq!(notebook.matches(CELL_SEPARATOR).count(), 2);
        assert_eq!(notebook.matches("spark.sql").count(), 2);
    }

    #[test]
    fn test_render_notebook_empty_statements() {
        let notebook = render_notebook(&[]);
        assert!(notebook.starts_with(NOTEBOOK_SOURCE_MARKER));
        assert!(!notebook.contains(CELL_SEPARATOR));
    }
}
