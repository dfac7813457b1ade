//! Column-comment injection for SQL schema text.
//!
//! Walks SQL text line by line, recognizes lines that look like column
//! definitions, and appends a `COMMENT('...')` clause carrying the source
//! system's description of the column.
//!
//! # Line classification
//!
//! Classification is a permissive lexical pattern — a leading identifier
//! token, whitespace, and a non-empty remainder — not a SQL grammar. Lines
//! such as `CREATE TABLE foo (` fit the shape and are counted as processed;
//! their lookup then misses and they pass through unchanged. That
//! permissiveness is part of the contract. The classifier sits behind the
//! [`LineClassifier`] trait so a stricter parser can replace it without
//! touching the injection logic.
//!
//! # Example
//!
//! ```
//! use sql_field_mapper::{annotate::CommentInjector, resolver::FieldLookup};
//!
//! let lookup = FieldLookup::from_pairs([("relnr_r", "Relation number")]);
//! let result = CommentInjector::new().process("    relnr_r DECIMAL(5, 0),", &lookup);
//!
//! assert!(result.sql.contains("COMMENT('Relation number')"));
//! assert!(result.sql.ends_with(','));
//! assert_eq!(result.comments_added, 1);
//! assert_eq!(result.fields_processed, 1);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::resolver::FieldLookup;

/// Minimum width the column identifier is padded to in annotated lines.
pub const MIN_IDENTIFIER_WIDTH: usize = 18;

/// Pattern for a column-definition line: identifier, whitespace, remainder,
/// optional trailing comma. Applied to the trimmed line.
static FIELD_DEF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s+(.+?)(?:,\s*)?$").expect("valid regex"));

/// Classification of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A line that lexically declares one column
    FieldDefinition {
        /// The leading identifier token
        name:           String,
        /// Remainder of the line with any trailing comma stripped
        declared_type:  String,
        /// Count of leading whitespace characters, re-emitted as spaces
        indent:         usize,
        /// Whether the original line ended with a comma
        trailing_comma: bool
    },
    /// Anything else; emitted right-trimmed and untouched
    Passthrough
}

/// Line classification seam.
///
/// The default implementation is lexical; implementors may substitute a
/// stricter grammar-backed classifier without changing the injector.
pub trait LineClassifier: Send + Sync {
    /// Classify a single raw input line.
    fn classify(&self, line: &str) -> LineKind;
}

/// Regex-based lexical classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalClassifier;

impl LineClassifier for LexicalClassifier {
    fn classify(&self, line: &str) -> LineKind {
        let trimmed = line.trim();
        match FIELD_DEF_REGEX.captures(trimmed) {
            Some(caps) => {
                let name = caps[1].to_string();
                let declared_type = caps[2].trim_end_matches(',').trim().to_string();
                let indent = line.chars().take_while(|c| c.is_whitespace()).count();
                let trailing_comma = line.trim_end().ends_with(',');
                LineKind::FieldDefinition {
                    name,
                    declared_type,
                    indent,
                    trailing_comma
                }
            }
            None => LineKind::Passthrough
        }
    }
}

/// Outcome of one comment-injection pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotateResult {
    /// The rewritten SQL text
    pub sql:              String,
    /// Lines that received a `COMMENT(...)` clause
    pub comments_added:   usize,
    /// Lines classified as column definitions, annotated or not
    pub fields_processed: usize
}

/// Injects description comments into column-definition lines.
pub struct CommentInjector {
    classifier: Box<dyn LineClassifier>
}

impl Default for CommentInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentInjector {
    /// Create an injector with the default lexical classifier.
    #[must_use]
    pub fn new() -> Self {
        Self::with_classifier(Box::new(LexicalClassifier))
    }

    /// Create an injector with a custom classifier.
    #[must_use]
    pub fn with_classifier(classifier: Box<dyn LineClassifier>) -> Self {
        Self {
            classifier
        }
    }

    /// Annotate column-definition lines with descriptions from the lookup.
    ///
    /// Empty or whitespace-only input is returned unchanged with both
    /// counters at zero. Lines already carrying a `COMMENT(` clause are
    /// counted as processed but never re-annotated, so the pass is
    /// idempotent over its own output. Lookup misses pass through
    /// right-trimmed and still count as processed.
    #[must_use]
    pub fn process(&self, sql: &str, lookup: &FieldLookup) -> AnnotateResult {
        if sql.trim().is_empty() {
            return AnnotateResult {
                sql:              sql.to_string(),
                comments_added:   0,
                fields_processed: 0
            };
        }

        let mut output_lines = Vec::new();
        let mut comments_added = 0;
        let mut fields_processed = 0;

        for line in sql.split('\n') {
            let original = line.trim_end();
            match self.classifier.classify(line) {
                LineKind::FieldDefinition {
                    name,
                    declared_type,
                    indent,
                    trailing_comma
                } => {
                    fields_processed += 1;
                    let already_annotated = declared_type.contains("COMMENT(");
                    let description =
                        if already_annotated { None } else { lookup.resolve(&name) };
                    match description {
                        Some(description) => {
                            output_lines.push(render_annotated(
                                &name,
                                &declared_type,
                                description,
                                indent,
                                trailing_comma
                            ));
                            comments_added += 1;
                        }
                        None => output_lines.push(original.to_string())
                    }
                }
                LineKind::Passthrough => output_lines.push(original.to_string())
            }
        }

        AnnotateResult {
            sql: output_lines.join("\n"),
            comments_added,
            fields_processed
        }
    }
}

/// Render an annotated column line with the identifier left-aligned to the
/// minimum width and the original indentation re-emitted as spaces.
fn render_annotated(
    name: &str,
    declared_type: &str,
    description: &str,
    indent: usize,
    trailing_comma: bool
) -> String {
    let comma = if trailing_comma { "," } else { "" };
    format!(
        "{indent}{name:<width$} {declared_type} COMMENT('{description}'){comma}",
        indent = " ".repeat(indent),
        name = name,
        width = MIN_IDENTIFIER_WIDTH,
        declared_type = declared_type,
        description = description,
        comma = comma
    )
}
