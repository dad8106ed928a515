//! Content fingerprints for index change detection.
//!
//! Each [`SearchIndex`](crate::SearchIndex) stores a fingerprint of everything its build
//! depended on. A refresh with identical inputs produces an identical fingerprint, which
//! lets the engine skip swapping in an equivalent index.
//!
//! Inputs that affect the fingerprint:
//! - Index format version (internal, bumped when entry construction changes)
//! - The entity kind
//! - Declared fields and their weights
//! - The field length cap
//! - Every record's id, deletion flag and declared field values, in order

use std::hash::{Hash, Hasher};

use sift_config::{EntityKind, FieldSet};
use siphasher::sip::SipHasher24;

use crate::Record;

/// Current index format version. Bump this when entry construction changes.
pub const INDEX_VERSION: u32 = 1;

/// Computes the fingerprint of one kind's index inputs.
pub fn fingerprint(
    kind: EntityKind,
    records: &[Record],
    fields: &FieldSet,
    max_field_chars: usize,
) -> u64 {
    let mut hasher = SipHasher24::new();
    INDEX_VERSION.hash(&mut hasher);
    kind.hash(&mut hasher);
    max_field_chars.hash(&mut hasher);

    fields.len().hash(&mut hasher);
    for field in fields {
        field.key.hash(&mut hasher);
        field.weight.to_bits().hash(&mut hasher);
    }

    records.len().hash(&mut hasher);
    for record in records {
        record.id.hash(&mut hasher);
        record.deleted.hash(&mut hasher);
        // Undeclared attributes never reach the index.
        for field in fields {
            record.field(&field.key).hash(&mut hasher);
        }
    }

    hasher.finish()
}

/// Formats a fingerprint as a hex string.
pub fn fingerprint_string(value: u64) -> String {
    format!("{value:016x}")
}

#[cfg(test)]
mod test {
    use sift_config::{SearchableField, default_fields};

    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record::new("1").with_field("name", "Write report"),
            Record::new("2").with_field("name", "Review budget"),
        ]
    }

    fn hash(records: &[Record], fields: &FieldSet) -> u64 {
        fingerprint(EntityKind::WorkItem, records, fields, 4096)
    }

    #[test]
    fn same_inputs_produce_same_fingerprint() {
        let fields = default_fields(EntityKind::WorkItem);
        assert_eq!(hash(&records(), &fields), hash(&records(), &fields));
    }

    #[test]
    fn changed_value_changes_fingerprint() {
        let fields = default_fields(EntityKind::WorkItem);
        let mut changed = records();
        changed[1].fields.insert("name".into(), "Review budgets".into());
        assert_ne!(hash(&records(), &fields), hash(&changed, &fields));
    }

    #[test]
    fn record_order_matters() {
        let fields = default_fields(EntityKind::WorkItem);
        let mut reversed = records();
        reversed.reverse();
        assert_ne!(hash(&records(), &fields), hash(&reversed, &fields));
    }

    #[test]
    fn deletion_flag_matters() {
        let fields = default_fields(EntityKind::WorkItem);
        let mut deleted = records();
        deleted[0].deleted = true;
        assert_ne!(hash(&records(), &fields), hash(&deleted, &fields));
    }

    #[test]
    fn undeclared_attributes_are_ignored() {
        let fields = default_fields(EntityKind::WorkItem);
        let mut extra = records();
        extra[0].fields.insert("color".into(), "blue".into());
        assert_eq!(hash(&records(), &fields), hash(&extra, &fields));
    }

    #[test]
    fn weights_and_kind_matter() {
        let base = default_fields(EntityKind::WorkItem);
        let reweighted = FieldSet::new(vec![
            SearchableField::new("name", 3.0),
            SearchableField::new("description", 1.0),
        ]);
        assert_ne!(hash(&records(), &base), hash(&records(), &reweighted));
        assert_ne!(
            fingerprint(EntityKind::WorkItem, &records(), &base, 4096),
            fingerprint(EntityKind::Container, &records(), &base, 4096)
        );
    }

    #[test]
    fn fingerprint_string_is_hex() {
        let s = fingerprint_string(hash(&records(), &default_fields(EntityKind::Tag)));
        assert_eq!(s.len(), 16);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
