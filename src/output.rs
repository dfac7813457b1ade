//! Result formatting and console reporting.
//!
//! Collaborator-side rendering of core results: fuzzy reports as text, JSON
//! or YAML, and run summaries for the console. Formatting options never feed
//! back into core semantics; `verbose` only widens what gets printed.

use colored::Colorize;

use crate::{annotate::AnnotateResult, fuzzy::FuzzyReport};

/// Output format for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool,
    pub verbose: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true,
            verbose: false
        }
    }
}

/// Format a fuzzy report based on output options
pub fn format_fuzzy_report(report: &FuzzyReport, opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(report).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(report).unwrap_or_default(),
        OutputFormat::Text => format_fuzzy_text(report, opts)
    }
}

fn format_fuzzy_text(report: &FuzzyReport, opts: &OutputOptions) -> String {
    let mut summary = String::from("Fuzzy field-name matches:\n\n");

    for (group, records) in report {
        let header = format!("{} ({} matches):", group, records.len());
        if opts.colored {
            summary.push_str(&header.cyan().bold().to_string());
        } else {
            summary.push_str(&header);
        }
        summary.push('\n');

        for record in records {
            let source = record.entry.source_field.as_deref().unwrap_or_default();
            let target = record.entry.target_field.as_deref().unwrap_or_default();
            summary.push_str(&format!(
                "  {} -> {} (score: {:.3})\n",
                source, target, record.similarity_score
            ));
        }
        summary.push('\n');
    }

    if report.is_empty() {
        summary.push_str("(none)\n");
    }

    summary
}

/// Format the annotate run summary
pub fn format_annotate_summary(result: &AnnotateResult, opts: &OutputOptions) -> String {
    let mut summary = String::new();

    let header = "=== SQL Comment Injection ===";
    if opts.colored {
        summary.push_str(&header.bold().to_string());
    } else {
        summary.push_str(header);
    }
    summary.push('\n');
    summary.push_str(&format!("Fields processed: {}\n", result.fields_processed));
    summary.push_str(&format!("Comments added:   {}\n", result.comments_added));

    if opts.verbose && result.fields_processed > 0 {
        let rate = result.comments_added as f64 / result.fields_processed as f64 * 100.0;
        summary.push_str(&format!("Match rate:       {:.1}%\n", rate));
    }

    summary
}

/// Format the rewrite run summary
pub fn format_rewrite_summary(
    field_count: usize,
    table_count: usize,
    statement_count: usize,
    opts: &OutputOptions
) -> String {
    let mut summary = String::new();

    let header = "=== SQL Identifier Rewrite ===";
    if opts.colored {
        summary.push_str(&header.bold().to_string());
    } else {
        summary.push_str(header);
    }
    summary.push('\n');
    summary.push_str(&format!("Statements produced: {}\n", statement_count));

    if opts.verbose {
        summary.push_str(&format!("Field mappings applied: {}\n", field_count));
        summary.push_str(&format!("Table mappings applied: {}\n", table_count));
    }

    summary
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::{
        fuzzy::{FuzzyRecord, MATCH_TYPE_FUZZY},
        mapping::MappingEntry
    };

    fn sample_report() -> FuzzyReport {
        let record = FuzzyRecord {
            entry:            MappingEntry {
                source_field: Some("RELNR".to_string()),
                target_field: Some("relnr_r".to_string()),
                ..MappingEntry::default()
            },
            similarity_score: 0.9,
            match_type:       MATCH_TYPE_FUZZY
        };
        let mut report = IndexMap::new();
        report.insert("view_1".to_string(), vec![record]);
        report
    }

    fn plain(format: OutputFormat) -> OutputOptions {
        OutputOptions {
            format,
            colored: false,
            verbose: false
        }
    }

    #[test]
    fn test_fuzzy_text_output() {
        let text = format_fuzzy_report(&sample_report(), &plain(OutputFormat::Text));
        assert!(text.contains("view_1 (1 matches):"));
        assert!(text.contains("RELNR -> relnr_r (score: 0.900)"));
    }

    #[test]
    fn test_fuzzy_json_output() {
        let json = format_fuzzy_report(&sample_report(), &plain(OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["view_1"][0]["match_type"], "Fuzzy");
        assert_eq!(value["view_1"][0]["similarity_score"], 0.9);
        assert_eq!(value["view_1"][0]["source_field"], "RELNR");
    }

    #[test]
    fn test_fuzzy_yaml_output() {
        let yaml = format_fuzzy_report(&sample_report(), &plain(OutputFormat::Yaml));
        assert!(yaml.contains("view_1"));
        assert!(yaml.contains("match_type: Fuzzy"));
    }

    #[test]
    fn test_fuzzy_empty_report_text() {
        let text = format_fuzzy_report(&IndexMap::new(), &plain(OutputFormat::Text));
        assert!(text.contains("(none)"));
    }

    #[test]
    fn test_annotate_summary_counts() {
        let result = AnnotateResult {
            sql:              String::new(),
            comments_added:   3,
            fields_processed: 5
        };
        let summary = format_annotate_summary(&result, &plain(OutputFormat::Text));
        assert!(summary.contains("Fields processed: 5"));
        assert!(summary.contains("Comments added:   3"));
        assert!(!summary.contains("Match rate"));
    }

    #[test]
    fn test_annotate_summary_verbose_match_rate() {
        let result = AnnotateResult {
            sql:              String::new(),
            comments_added:   3,
            fields_processed: 5
        };
        let opts = OutputOptions {
            format:  OutputFormat::Text,
            colored: false,
            verbose: true
        };
        let summary = format_annotate_summary(&result, &opts);
        assert!(summary.contains("Match rate:       60.0%"));
    }

    #[test]
    fn test_rewrite_summary_verbose_counts() {
        let opts = OutputOptions {
            format:  OutputFormat::Text,
            colored: false,
            verbose: true
        };
        let summary = format_rewrite_summary(4, 2, 3, &opts);
        assert!(summary.contains("Statements produced: 3"));
        assert!(summary.contains("Field mappings applied: 4"));
        assert!(summary.contains("Table mappings applied: 2"));
    }
}
