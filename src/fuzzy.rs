//! Fuzzy matching of source and target field names.
//!
//! Scans every mapping record whose source and target field names are both
//! present and keeps the ones whose similarity score lands in
//! `threshold..1.0` — likely-equivalent pairs that are not identical.
//! Exact matches (score `1.0`) are by definition not fuzzy and are excluded.
//!
//! Groups carry no shared state, so the scan runs per group in parallel via
//! [`rayon`]; record order within a group and group order in the result both
//! follow the store.
//!
//! The threshold is always caller-supplied. There is deliberately no default:
//! historical call sites disagreed on one (0.6 vs 0.8), so the value must be
//! explicit end to end.

use indexmap::IndexMap;
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    error::{AppResult, invalid_threshold},
    mapping::{MappingEntry, MappingStore},
    similarity::{round_score, score}
};

/// Tag attached to every fuzzy record.
pub const MATCH_TYPE_FUZZY: &str = "Fuzzy";

/// A mapping record flagged as a likely-equivalent field-name pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzyRecord {
    /// The originating mapping record
    #[serde(flatten)]
    pub entry:            MappingEntry,
    /// Similarity score rounded to three decimals
    pub similarity_score: f64,
    /// Match classification, always [`MATCH_TYPE_FUZZY`]
    pub match_type:       &'static str
}

/// Per-group fuzzy match results, in store order.
pub type FuzzyReport = IndexMap<String, Vec<FuzzyRecord>>;

/// Fuzzy matcher with a validated similarity threshold.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher {
    threshold: f64
}

impl FuzzyMatcher {
    /// Create a matcher with an explicit threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is not within `0.0..=1.0`.
    pub fn new(threshold: f64) -> AppResult<Self> {
        if !(0.0..=1.0).contains(&threshold) || threshold.is_nan() {
            return Err(invalid_threshold(threshold));
        }
        Ok(Self {
            threshold
        })
    }

    /// The configured similarity threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Scan the store and collect fuzzy records per group.
    ///
    /// Groups that produce no records are omitted from the report.
    #[must_use]
    pub fn scan(&self, store: &MappingStore) -> FuzzyReport {
        let groups: Vec<(&str, &[MappingEntry])> = store.groups().collect();

        groups
            .par_iter()
            .filter_map(|(key, entries)| {
                let records = self.scan_group(entries);
                if records.is_empty() {
                    None
                } else {
                    Some((key.to_string(), records))
                }
            })
            .collect::<Vec<_>>()
            .into_iter()
            .collect()
    }

    fn scan_group(&self, entries: &[MappingEntry]) -> Vec<FuzzyRecord> {
        entries
            .iter()
            .filter_map(|entry| {
                let source = entry.source_field.as_deref().unwrap_or_default();
                let target = entry.target_field.as_deref().unwrap_or_default();
                if source.is_empty() || target.is_empty() {
                    return None;
                }

                let similarity = score(source, target);
                if similarity >= self.threshold && similarity < 1.0 {
                    Some(FuzzyRecord {
                        entry:            entry.clone(),
                        similarity_score: round_score(similarity),
                        match_type:       MATCH_TYPE_FUZZY
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}
