//! In-memory field-mapping records and derived identifier tables.
//!
//! The mapping store holds the normalized records produced by the ingestion
//! side (spreadsheet extraction lives outside this crate; the persisted JSON
//! document is the interchange format). Records are grouped under an
//! arbitrary group key, one group per logical source object such as a
//! calculation view or table.
//!
//! The store is built once per run and read-only afterwards. All derived
//! tables ([`MappingStore::field_mappings`], [`MappingStore::table_mappings`])
//! are ordered `IndexMap`s: iteration order is the record processing order,
//! and both the resolver's first-match-wins lookup and the rewriter's
//! later-replacement-wins substitution depend on it.
//!
//! # Document format
//!
//! ```json
//! {
//!     "calculation_view_1": [
//!         {
//!             "source_field": "RELNR",
//!             "source_description": "Relation number",
//!             "source_table": "CV_POST",
//!             "target_table": "gold.md_post",
//!             "target_field": "relnr_r"
//!         }
//!     ]
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{AppResult, mapping_parse_error};

/// One field-mapping record.
///
/// Any field may be absent in the source document; consumers skip records
/// missing the fields they need rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Column identifier in the origin system
    #[serde(default)]
    pub source_field:       Option<String>,
    /// Human-readable description of the source column
    #[serde(default)]
    pub source_description: Option<String>,
    /// Table or view name in the origin system
    #[serde(default)]
    pub source_table:       Option<String>,
    /// Table name in the destination system
    #[serde(default)]
    pub target_table:       Option<String>,
    /// Column identifier in the destination system
    #[serde(default)]
    pub target_field:       Option<String>
}

/// Grouped mapping records, immutable after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingStore {
    groups: IndexMap<String, Vec<MappingEntry>>
}

impl MappingStore {
    /// Create a store from already-grouped records.
    #[must_use]
    pub fn new(groups: IndexMap<String, Vec<MappingEntry>>) -> Self {
        Self {
            groups
        }
    }

    /// Parse a store from its persisted JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a JSON object mapping group
    /// keys to arrays of mapping records. A missing field inside a record is
    /// not an error; a structurally wrong document is.
    pub fn from_json(text: &str) -> AppResult<Self> {
        let groups: IndexMap<String, Vec<MappingEntry>> =
            serde_json::from_str(text).map_err(|e| mapping_parse_error(e.to_string()))?;
        Ok(Self::new(groups))
    }

    /// Iterate groups in document order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[MappingEntry])> {
        self.groups
            .iter()
            .map(|(key, entries)| (key.as_str(), entries.as_slice()))
    }

    /// Iterate all records in document order, ignoring group boundaries.
    pub fn entries(&self) -> impl Iterator<Item = &MappingEntry> {
        self.groups.values().flatten()
    }

    /// Number of groups in the store.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of records across all groups.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// True when the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Derive the ordered source-to-target field identifier table.
    ///
    /// Source identifiers are upper-cased; later records overwrite earlier
    /// ones on collision. Records missing either side are skipped.
    #[must_use]
    pub fn field_mappings(&self) -> IndexMap<String, String> {
        let mut mappings = IndexMap::new();
        for entry in self.entries() {
            let source = entry.source_field.as_deref().map(str::trim);
            let target = entry.target_field.as_deref().map(str::trim);
            if let (Some(source), Some(target)) = (source, target)
                && !source.is_empty()
                && !target.is_empty()
            {
                mappings.insert(source.to_uppercase(), target.to_string());
            }
        }
        mappings
    }

    /// Derive the ordered source-to-target table name table.
    ///
    /// One-to-one, last write wins.
    #[must_use]
    pub fn table_mappings(&self) -> IndexMap<String, String> {
        let mut mappings = IndexMap::new();
        for entry in self.entries() {
            let source = entry.source_table.as_deref().map(str::trim);
            let target = entry.target_table.as_deref().map(str::trim);
            if let (Some(source), Some(target)) = (source, target)
                && !source.is_empty()
                && !target.is_empty()
            {
                mappings.insert(source.to_string(), target.to_string());
            }
        }
        mappings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(source: &str, target: &str) -> MappingEntry {
        MappingEntry {
            source_field: Some(source.to_string()),
            target_field: Some(target.to_string()),
            ..MappingEntry::default()
        }
    }

    #[test]
    fn test_from_json_groups_in_document_order() {
        let doc = r#"{
            "view_b": [{"source_field": "B", "target_field": "b"}],
            "view_a": [{"source_field": "A", "target_field": "a"}]
        }"#;
        let store = MappingStore::from_json(doc).unwrap();
        let keys: Vec<&str> = store.groups().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["view_b", "view_a"]);
    }

    #[test]
    fn test_from_json_rejects_wrong_shape() {
        assert!(MappingStore::from_json(r#"["not", "an", "object"]"#).is_err());
        assert!(MappingStore::from_json(r#"{"view": "not an array"}"#).is_err());
    }

    #[test]
    fn test_missing_record_fields_are_allowed() {
        let doc = r#"{"view": [{"source_field": "RELNR"}]}"#;
        let store = MappingStore::from_json(doc).unwrap();
        assert_eq!(store.entry_count(), 1);
        assert!(store.field_mappings().is_empty());
    }

    #[test]
    fn test_field_mappings_uppercase_source() {
        let mut groups = IndexMap::new();
        groups.insert("v".to_string(), vec![entry("relnr", "relnr_r")]);
        let store = MappingStore::new(groups);
        let mappings = store.field_mappings();
        assert_eq!(mappings.get("RELNR"), Some(&"relnr_r".to_string()));
    }

    #[test]
    fn test_field_mappings_later_entry_wins() {
        let mut groups = IndexMap::new();
        groups.insert(
            "v".to_string(),
            vec![entry("RELNR", "first"), entry("RELNR", "second")]
        );
        let store = MappingStore::new(groups);
        assert_eq!(
            store.field_mappings().get("RELNR"),
            Some(&"second".to_string())
        );
    }

    #[test]
    fn test_table_mappings_skip_blank_values() {
        let mut groups = IndexMap::new();
        groups.insert(
            "v".to_string(),
            vec![MappingEntry {
                source_table: Some("  ".to_string()),
                target_table: Some("gold.md_post".to_string()),
                ..MappingEntry::default()
            }]
        );
        let store = MappingStore::new(groups);
        assert!(store.table_mappings().is_empty());
    }

    #[test]
    fn test_empty_store() {
        let store = MappingStore::default();
        assert!(store.is_empty());
        assert_eq!(store.group_count(), 0);
        assert!(store.field_mappings().is_empty());
        assert!(store.table_mappings().is_empty());
    }
}
