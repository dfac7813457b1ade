use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// SQL Field Mapper - annotate, rewrite and fuzzy-match SQL identifiers
/// using a spreadsheet-derived field mapping
#[derive(Parser, Debug)]
#[command(name = "sql-field-mapper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inject description comments into column-definition lines
    Annotate {
        /// Path to the mapping JSON document
        #[arg(short, long)]
        mapping: PathBuf,

        /// Path to the SQL input file (use - for stdin)
        #[arg(short, long)]
        sql: PathBuf,

        /// Output file for the annotated SQL (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Enable verbose summary output
        #[arg(short, long)]
        verbose: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },

    /// Rewrite source-system identifiers to target-system identifiers
    Rewrite {
        /// Path to the mapping JSON document
        #[arg(short, long)]
        mapping: PathBuf,

        /// Path to the SQL input file (use - for stdin)
        #[arg(short, long)]
        sql: PathBuf,

        /// Output file for the rewritten spark.sql script (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write a Databricks notebook to this path
        #[arg(long)]
        notebook: Option<PathBuf>,

        /// Enable verbose summary output
        #[arg(short, long)]
        verbose: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },

    /// Report likely-equivalent but non-identical field-name pairs
    Fuzzy {
        /// Path to the mapping JSON document
        #[arg(short, long)]
        mapping: PathBuf,

        /// Similarity threshold in [0,1]; required here or in the config
        #[arg(short, long, env = "FIELD_MAPPER_THRESHOLD")]
        threshold: Option<f64>,

        /// Output file for the report (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: Format,

        /// Enable verbose summary output
        #[arg(short, long)]
        verbose: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
