//! # SQL Field Mapper Library
//!
//! Mapping-driven SQL text transformation.
//!
//! The crate turns a spreadsheet-derived field-mapping table (persisted as
//! JSON) into two transformations on SQL source plus one report:
//!
//! 1. **Annotation** - column-definition lines gain `COMMENT('...')` clauses
//!    carrying the source system's field descriptions ([`annotate`]).
//! 2. **Rewriting** - source-system field and table identifiers are
//!    substituted with their target-system equivalents and the result is
//!    segmented into statements ([`rewrite`]).
//! 3. **Fuzzy matching** - likely-equivalent but non-identical field-name
//!    pairs are surfaced with a heuristic similarity score ([`fuzzy`]).
//!
//! Lookup tables are built once per run from a [`mapping::MappingStore`] and
//! are read-only afterwards; every transformation is a pure function over
//! in-memory strings and ordered maps.
//!
//! # Modules
//!
//! - [`mapping`] - Mapping records, JSON loading, derived identifier tables
//! - [`resolver`] - Field-name to description lookup
//! - [`similarity`] - Heuristic string-similarity scoring
//! - [`fuzzy`] - Fuzzy field-name pair detection
//! - [`annotate`] - Column-comment injection
//! - [`rewrite`] - Identifier substitution and statement segmentation
//! - [`notebook`] - Databricks notebook packaging
//! - [`output`] - Result formatting for console, JSON and YAML
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types and constructors

pub mod annotate;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod mapping;
pub mod notebook;
pub mod output;
pub mod resolver;
pub mod rewrite;
pub mod similarity;
