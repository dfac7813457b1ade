//! Application logic for the SQL Field Mapper CLI.
//!
//! This module contains the command implementations separated from the
//! binary entry point to enable testing. Each command loads the mapping
//! document, builds the read-only lookups once, runs the core
//! transformation, and hands the result to the output side. Run summaries
//! are printed only in verbose mode, and go to stderr so piped SQL output
//! stays clean.

use std::{
    fs::{read_to_string, write},
    io::{self, Read},
    path::Path
};

use crate::{
    annotate::CommentInjector,
    cli::{Cli, Commands, Format},
    config::Config,
    error::{AppResult, file_read_error, file_write_error, missing_threshold},
    fuzzy::FuzzyMatcher,
    mapping::MappingStore,
    notebook::{render_notebook, render_script},
    output::{
        OutputFormat, OutputOptions, format_annotate_summary, format_fuzzy_report,
        format_rewrite_summary
    },
    resolver::FieldLookup,
    rewrite::{rewrite_identifiers, split_statements}
};

/// Dispatch the parsed command line.
pub fn run(cli: Cli, config: &Config) -> AppResult<()> {
    match cli.command {
        Commands::Annotate {
            mapping,
            sql,
            output,
            verbose,
            no_color
        } => run_annotate(
            &mapping,
            &sql,
            output.as_deref(),
            output_options(OutputFormat::Text, verbose, no_color, config)
        ),
        Commands::Rewrite {
            mapping,
            sql,
            output,
            notebook,
            verbose,
            no_color
        } => run_rewrite(
            &mapping,
            &sql,
            output.as_deref(),
            notebook.as_deref(),
            output_options(OutputFormat::Text, verbose, no_color, config)
        ),
        Commands::Fuzzy {
            mapping,
            threshold,
            output,
            format,
            verbose,
            no_color
        } => {
            let threshold = threshold
                .or(config.processing.fuzzy_similarity_threshold)
                .ok_or_else(missing_threshold)?;
            run_fuzzy(
                &mapping,
                threshold,
                output.as_deref(),
                output_options(convert_format(format), verbose, no_color, config)
            )
        }
    }
}

/// Inject description comments into the SQL input.
pub fn run_annotate(
    mapping_path: &Path,
    sql_path: &Path,
    output_path: Option<&Path>,
    opts: OutputOptions
) -> AppResult<()> {
    let store = load_store(mapping_path)?;
    let lookup = FieldLookup::build(&store);
    let sql = read_sql_input(sql_path)?;

    let result = CommentInjector::new().process(&sql, &lookup);

    write_result(output_path, &result.sql)?;
    if opts.verbose {
        eprint!("{}", format_annotate_summary(&result, &opts));
    }
    Ok(())
}

/// Rewrite identifiers and emit the segmented spark.sql script.
pub fn run_rewrite(
    mapping_path: &Path,
    sql_path: &Path,
    output_path: Option<&Path>,
    notebook_path: Option<&Path>,
    opts: OutputOptions
) -> AppResult<()> {
    let store = load_store(mapping_path)?;
    let field_mappings = store.field_mappings();
    let table_mappings = store.table_mappings();
    let sql = read_sql_input(sql_path)?;

    let rewritten = rewrite_identifiers(&sql, &field_mappings, &table_mappings);
    let statements = split_statements(&rewritten);

    write_result(output_path, &render_script(&statements))?;
    if let Some(notebook_path) = notebook_path {
        write_file(notebook_path, &render_notebook(&statements))?;
    }
    if opts.verbose {
        eprint!(
            "{}",
            format_rewrite_summary(
                field_mappings.len(),
                table_mappings.len(),
                statements.len(),
                &opts
            )
        );
    }
    Ok(())
}

/// Produce the fuzzy field-name report.
pub fn run_fuzzy(
    mapping_path: &Path,
    threshold: f64,
    output_path: Option<&Path>,
    opts: OutputOptions
) -> AppResult<()> {
    let store = load_store(mapping_path)?;
    let matcher = FuzzyMatcher::new(threshold)?;
    let report = matcher.scan(&store);

    write_result(output_path, &format_fuzzy_report(&report, &opts))?;
    if opts.verbose {
        let record_count: usize = report.values().map(Vec::len).sum();
        eprintln!(
            "Fuzzy scan: {} matches across {} of {} groups (threshold {})",
            record_count,
            report.len(),
            store.group_count(),
            threshold
        );
    }
    Ok(())
}

/// Load and parse the mapping document.
fn load_store(path: &Path) -> AppResult<MappingStore> {
    let text =
        read_to_string(path).map_err(|e| file_read_error(&path.display().to_string(), e))?;
    MappingStore::from_json(&text)
}

/// Read SQL input from a file, or from stdin when the path is "-".
fn read_sql_input(path: &Path) -> AppResult<String> {
    if path.to_str() == Some("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| file_read_error("stdin", e))?;
        Ok(buffer)
    } else {
        read_to_string(path).map_err(|e| file_read_error(&path.display().to_string(), e))
    }
}

/// Write to the output file, or to stdout when no path is given.
fn write_result(path: Option<&Path>, content: &str) -> AppResult<()> {
    match path {
        Some(path) => write_file(path, content),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

fn write_file(path: &Path, content: &str) -> AppResult<()> {
    write(path, content).map_err(|e| file_write_error(&path.display().to_string(), e))
}

fn output_options(
    format: OutputFormat,
    verbose: bool,
    no_color: bool,
    config: &Config
) -> OutputOptions {
    OutputOptions {
        format,
        colored: !no_color,
        verbose: verbose || config.processing.verbose_output
    }
}

/// Convert a CLI format enum to the internal output format type.
pub fn convert_format(format: Format) -> OutputFormat {
    match format {
        Format::Text => OutputFormat::Text,
        Format::Json => OutputFormat::Json,
        Format::Yaml => OutputFormat::Yaml
    }
}
