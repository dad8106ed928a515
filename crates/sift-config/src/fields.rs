//! The field model: which entity kinds exist and which of their attributes are searchable.

use std::{fmt, slice, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One of the three searchable record kinds.
///
/// The declaration order here is also the default result priority: work items rank
/// ahead of containers, which rank ahead of tags, when scores tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    /// An actionable work item (a task).
    WorkItem,
    /// A container grouping work items (a project).
    Container,
    /// A free-form label attached to work items.
    Tag,
}

impl EntityKind {
    /// Every kind, in default priority order.
    pub const ALL: [Self; 3] = [Self::WorkItem, Self::Container, Self::Tag];

    /// Returns the canonical name used in config files and output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WorkItem => "work-item",
            Self::Container => "container",
            Self::Tag => "tag",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "work-item" | "work_item" | "workitem" | "task" | "tasks" => Ok(Self::WorkItem),
            "container" | "containers" | "project" | "projects" => Ok(Self::Container),
            "tag" | "tags" => Ok(Self::Tag),
            _ => Err(ConfigError::UnknownKind {
                name: s.to_string(),
            }),
        }
    }
}

/// A record attribute that participates in search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchableField {
    /// Attribute name on the record.
    pub key: String,
    /// Multiplier on the field's match quality; must be greater than zero.
    pub weight: f32,
}

impl SearchableField {
    /// Creates a field declaration.
    pub fn new(key: impl Into<String>, weight: f32) -> Self {
        Self {
            key: key.into(),
            weight,
        }
    }
}

/// Field set returned for kinds that have no declaration.
pub static EMPTY_FIELDS: FieldSet = FieldSet(Vec::new());

/// Ordered searchable fields for one entity kind.
///
/// Field order is significant: it decides the order spans are reported in and which field
/// a suggestion is drawn from first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet(Vec<SearchableField>);

impl FieldSet {
    /// Creates a field set from declarations, preserving their order.
    pub fn new(fields: Vec<SearchableField>) -> Self {
        Self(fields)
    }

    /// Iterates the fields in declaration order.
    pub fn iter(&self) -> slice::Iter<'_, SearchableField> {
        self.0.iter()
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no field is declared.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up a field by key.
    pub fn get(&self, key: &str) -> Option<&SearchableField> {
        self.0.iter().find(|f| f.key == key)
    }

    /// Returns the field keys in declaration order.
    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|f| f.key.as_str()).collect()
    }

    /// Returns the declarations as a slice.
    pub fn as_slice(&self) -> &[SearchableField] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a SearchableField;
    type IntoIter = slice::Iter<'a, SearchableField>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Default searchable fields for a kind.
///
/// Names outweigh descriptions 2:1; tags only have a name.
pub fn default_fields(kind: EntityKind) -> FieldSet {
    match kind {
        EntityKind::WorkItem | EntityKind::Container => FieldSet::new(vec![
            SearchableField::new("name", 2.0),
            SearchableField::new("description", 1.0),
        ]),
        EntityKind::Tag => FieldSet::new(vec![SearchableField::new("name", 1.0)]),
    }
}
