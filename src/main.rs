//! # SQL Field Mapper
//!
//! Mapping-driven annotation, rewriting and fuzzy matching of SQL
//! identifiers.
//!
//! The tool consumes a field-mapping document (JSON, typically exported from
//! a spreadsheet by an upstream step) and applies it to SQL source:
//!
//! ```bash
//! # Add COMMENT('...') clauses to column definitions
//! sql-field-mapper annotate -m field_mapping.json -s schema.sql -o schema_commented.sql
//!
//! # Rewrite source-system identifiers, emit a spark.sql script and notebook
//! sql-field-mapper rewrite -m field_mapping.json -s queries.sql \
//!     -o queries_processed.py --notebook queries_notebook.py
//!
//! # Report near-duplicate field-name pairs (threshold is always explicit)
//! sql-field-mapper fuzzy -m field_mapping.json --threshold 0.8 -f json
//!
//! # Stream SQL from stdin
//! cat schema.sql | sql-field-mapper annotate -m field_mapping.json -s -
//! ```
//!
//! Configuration is loaded from (in order of precedence) command-line
//! arguments, environment variables (`FIELD_MAPPER_THRESHOLD`,
//! `FIELD_MAPPER_VERBOSE`), `.sql-field-mapper.toml` in the current
//! directory, and `~/.config/sql-field-mapper/config.toml`.
//!
//! The process exits with code 1 on any error (unreadable input, malformed
//! mapping document, missing or out-of-range threshold) and 0 otherwise.

use std::process;

use clap::Parser;
use sql_field_mapper::{app, cli::Cli, config::Config, error::AppResult};

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            // AppError renders only its kind through Display; the detail
            // lives in the attached message.
            match e.message.as_deref() {
                Some(message) => eprintln!("Error: {}", message),
                None => eprintln!("Error: {}", e)
            }
            process::exit(1);
        }
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    app::run(cli, &config)
}
