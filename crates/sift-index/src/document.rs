//! Record types consumed by the index.
//!
//! The engine never owns application data: the host hands it a [`Snapshot`] of the three
//! record collections and rebuilds the index whenever those collections change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sift_config::EntityKind;

use crate::SearchError;

/// A single record of any kind.
///
/// Attribute values are plain strings keyed by field name. Attributes that are not
/// declared searchable for the record's kind are ignored at index time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Identifier, unique within its collection.
    pub id: String,
    /// Attribute values keyed by field name.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    /// Soft-deleted records stay indexed but are hidden from results by default.
    #[serde(default)]
    pub deleted: bool,
}

impl Record {
    /// Creates a record with no attributes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets an attribute value.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Marks the record as soft-deleted.
    pub fn soft_deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Returns an attribute value, if present.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

/// The current contents of all three record collections.
///
/// Collection order is significant: it is the final tie-break between equally scored
/// results of the same kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Work items, in collection order.
    #[serde(default)]
    pub work_items: Vec<Record>,
    /// Containers, in collection order.
    #[serde(default)]
    pub containers: Vec<Record>,
    /// Tags, in collection order.
    #[serde(default)]
    pub tags: Vec<Record>,
}

impl Snapshot {
    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, SearchError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the records of one kind.
    pub fn records(&self, kind: EntityKind) -> &[Record] {
        match kind {
            EntityKind::WorkItem => &self.work_items,
            EntityKind::Container => &self.containers,
            EntityKind::Tag => &self.tags,
        }
    }

    /// Returns a mutable handle to the records of one kind.
    pub fn records_mut(&mut self, kind: EntityKind) -> &mut Vec<Record> {
        match kind {
            EntityKind::WorkItem => &mut self.work_items,
            EntityKind::Container => &mut self.containers,
            EntityKind::Tag => &mut self.tags,
        }
    }

    /// Total number of records across all kinds.
    pub fn len(&self) -> usize {
        self.work_items.len() + self.containers.len() + self.tags.len()
    }

    /// True when every collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
