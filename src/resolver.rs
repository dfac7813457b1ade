//! Field-name to description lookup.
//!
//! The lookup maps lower-cased destination field names to their source-system
//! descriptions. Resolution tries an exact match first and falls back to an
//! underscore-insensitive comparison, taking the first key in insertion order
//! that matches. First-match-wins over insertion order is a documented
//! contract, not an accident of map iteration.
//!
//! # Example
//!
//! ```
//! use sql_field_mapper::resolver::FieldLookup;
//!
//! let lookup = FieldLookup::from_pairs([("relnr_r", "Relation number")]);
//!
//! assert_eq!(lookup.resolve("RELNR_R"), Some("Relation number"));
//! assert_eq!(lookup.resolve("relnrr"), Some("Relation number"));
//! assert_eq!(lookup.resolve("volgnr"), None);
//! ```

use indexmap::IndexMap;

use crate::mapping::MappingStore;

/// Ordered lookup from lower-cased target field name to source description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldLookup {
    entries: IndexMap<String, String>
}

impl FieldLookup {
    /// Build the lookup from a mapping store.
    ///
    /// Only records carrying both a target field and a source description
    /// contribute. Keys are lower-cased target field names; on duplicate
    /// keys the later record overwrites the earlier one, in processing
    /// order.
    #[must_use]
    pub fn build(store: &MappingStore) -> Self {
        let mut entries = IndexMap::new();
        for entry in store.entries() {
            if let (Some(target_field), Some(description)) =
                (&entry.target_field, &entry.source_description)
            {
                entries.insert(target_field.to_lowercase(), description.clone());
            }
        }
        Self {
            entries
        }
    }

    /// Build a lookup directly from key/description pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(key, description)| (key.to_lowercase(), description.to_string()))
            .collect();
        Self {
            entries
        }
    }

    /// Resolve a field name to its description.
    ///
    /// Tries an exact match on the lower-cased, trimmed name, then compares
    /// with all underscores removed against each key in insertion order and
    /// returns the first hit. `None` means the field stays unannotated; a
    /// miss is not an error.
    #[must_use]
    pub fn resolve(&self, field_name: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }

        let field_lower = field_name.to_lowercase().trim().to_string();
        if let Some(description) = self.entries.get(&field_lower) {
            return Some(description);
        }

        let field_flat = field_lower.replace('_', "");
        self.entries
            .iter()
            .find(|(key, _)| key.replace('_', "") == field_flat)
            .map(|(_, description)| description.as_str())
    }

    /// Number of keys in the lookup.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the lookup holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::mapping::{MappingEntry, MappingStore};

    fn described(target: &str, description: &str) -> MappingEntry {
        MappingEntry {
            target_field: Some(target.to_string()),
            source_description: Some(description.to_string()),
            ..MappingEntry::default()
        }
    }

    #[test]
    fn test_build_lowercases_keys() {
        let mut groups = IndexMap::new();
        groups.insert("v".to_string(), vec![described("RELNR_R", "Relation")]);
        let lookup = FieldLookup::build(&MappingStore::new(groups));
        assert_eq!(lookup.resolve("relnr_r"), Some("Relation"));
    }

    #[test]
    fn test_build_skips_incomplete_records() {
        let mut groups = IndexMap::new();
        groups.insert(
            "v".to_string(),
            vec![
                MappingEntry {
                    target_field: Some("orphan".to_string()),
                    ..MappingEntry::default()
                },
                described("relnr_r", "Relation"),
            ]
        );
        let lookup = FieldLookup::build(&MappingStore::new(groups));
        assert_eq!(lookup.len(), 1);
    }

    #[test]
    fn test_build_later_duplicate_overwrites() {
        let mut groups = IndexMap::new();
        groups.insert(
            "v".to_string(),
            vec![described("relnr_r", "first"), described("RELNR_R", "second")]
        );
        let lookup = FieldLookup::build(&MappingStore::new(groups));
        assert_eq!(lookup.resolve("relnr_r"), Some("second"));
    }

    #[test]
    fn test_resolve_trims_and_case_folds() {
        let lookup = FieldLookup::from_pairs([("relnr_r", "Relation")]);
        assert_eq!(lookup.resolve("  RELNR_R  "), Some("Relation"));
    }

    #[test]
    fn test_resolve_normalized_first_match_wins() {
        let lookup = FieldLookup::from_pairs([("rel_nr", "first"), ("re_lnr", "second")]);
        assert_eq!(lookup.resolve("relnr"), Some("first"));
    }

    #[test]
    fn test_resolve_exact_beats_normalized() {
        let lookup = FieldLookup::from_pairs([("re_lnr", "normalized"), ("relnr", "exact")]);
        assert_eq!(lookup.resolve("relnr"), Some("exact"));
    }

    #[test]
    fn test_resolve_miss_returns_none() {
        let lookup = FieldLookup::from_pairs([("relnr_r", "Relation")]);
        assert_eq!(lookup.resolve("volgnr"), None);
    }

    #[test]
    fn test_empty_lookup_resolves_nothing() {
        let lookup = FieldLookup::default();
        assert!(lookup.is_empty());
        assert_eq!(lookup.resolve("relnr_r"), None);
    }
}
