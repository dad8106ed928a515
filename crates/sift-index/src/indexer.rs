//! Index construction.
//!
//! A [`SearchIndex`] holds one [`IndexEntry`] per record of a single kind, with the raw and
//! normalized value of every declared field the record actually has. Indexes are built in
//! one pass and never modified afterwards; a refresh builds a new [`IndexSet`] and replaces
//! the old one wholesale.

use std::collections::BTreeMap;

use sift_config::{EngineConfig, EntityKind, FieldSet};
use sift_query::NormalizedText;
use tracing::debug;

use crate::{Record, Snapshot, config_hash::fingerprint};

/// Searchable data for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Record identifier.
    pub id: String,
    /// Record kind.
    pub kind: EntityKind,
    /// Position of the record in its collection.
    pub position: usize,
    /// Whether the record is soft-deleted.
    pub deleted: bool,
    /// Raw values of declared fields, used for span extraction and display.
    pub raw: BTreeMap<String, String>,
    /// Normalized values of declared fields, used for matching.
    pub normalized: BTreeMap<String, NormalizedText>,
}

impl IndexEntry {
    /// Builds the entry for one record.
    ///
    /// Declared fields the record lacks, or whose value is blank, are omitted.
    /// Normalized values are capped at `max_field_chars` characters.
    pub fn build(
        kind: EntityKind,
        position: usize,
        record: &Record,
        fields: &FieldSet,
        max_field_chars: usize,
    ) -> Self {
        let mut raw = BTreeMap::new();
        let mut normalized = BTreeMap::new();

        for field in fields {
            let Some(value) = record.field(&field.key) else {
                continue;
            };
            let text = NormalizedText::truncated(value, max_field_chars);
            if text.is_empty() {
                continue;
            }
            raw.insert(field.key.clone(), value.to_string());
            normalized.insert(field.key.clone(), text);
        }

        Self {
            id: record.id.clone(),
            kind,
            position,
            deleted: record.deleted,
            raw,
            normalized,
        }
    }

    /// Returns the raw value of a field, if indexed.
    pub fn raw_value(&self, key: &str) -> Option<&str> {
        self.raw.get(key).map(String::as_str)
    }

    /// Returns the normalized value of a field, if indexed.
    pub fn normalized_value(&self, key: &str) -> Option<&NormalizedText> {
        self.normalized.get(key)
    }
}

/// The immutable index of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIndex {
    /// Kind of every entry.
    kind: EntityKind,
    /// Entries in collection order.
    entries: Vec<IndexEntry>,
    /// Fingerprint of the build inputs.
    fingerprint: u64,
}

impl SearchIndex {
    /// Builds the index for one kind.
    ///
    /// Runs in time proportional to records times declared fields. An empty record list
    /// yields an empty index.
    pub fn build(
        kind: EntityKind,
        records: &[Record],
        fields: &FieldSet,
        max_field_chars: usize,
    ) -> Self {
        let entries = records
            .iter()
            .enumerate()
            .map(|(position, record)| {
                IndexEntry::build(kind, position, record, fields, max_field_chars)
            })
            .collect();

        Self {
            kind,
            entries,
            fingerprint: fingerprint(kind, records, fields, max_field_chars),
        }
    }

    /// Returns the kind of this index.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Returns the entries in collection order.
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Looks up an entry by record id.
    pub fn get(&self, id: &str) -> Option<&IndexEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the fingerprint of the inputs this index was built from.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

/// One index per kind, built together from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSet {
    /// Work item index.
    work_items: SearchIndex,
    /// Container index.
    containers: SearchIndex,
    /// Tag index.
    tags: SearchIndex,
}

impl IndexSet {
    /// Builds indexes for every kind from a snapshot.
    pub fn build(snapshot: &Snapshot, config: &EngineConfig) -> Self {
        let max_chars = config.settings().max_field_chars;
        let build = |kind| {
            SearchIndex::build(kind, snapshot.records(kind), config.fields(kind), max_chars)
        };

        let set = Self {
            work_items: build(EntityKind::WorkItem),
            containers: build(EntityKind::Container),
            tags: build(EntityKind::Tag),
        };
        debug!(
            work_items = set.work_items.len(),
            containers = set.containers.len(),
            tags = set.tags.len(),
            "built search index"
        );
        set
    }

    /// Returns the index of one kind.
    pub fn get(&self, kind: EntityKind) -> &SearchIndex {
        match kind {
            EntityKind::WorkItem => &self.work_items,
            EntityKind::Container => &self.containers,
            EntityKind::Tag => &self.tags,
        }
    }

    /// Total entries across all kinds.
    pub fn len(&self) -> usize {
        self.work_items.len() + self.containers.len() + self.tags.len()
    }

    /// True when no kind has entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when every kind was built from identical inputs.
    pub fn same_inputs(&self, other: &Self) -> bool {
        EntityKind::ALL
            .iter()
            .all(|kind| self.get(*kind).fingerprint() == other.get(*kind).fingerprint())
    }
}
