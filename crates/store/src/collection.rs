//! Named entity collections.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use cephas_core::{EntityId, Record};

/// The eight collections the console manages.
///
/// A closed enum rather than free-form string keys: every collection the
/// store can hold is known at compile time, and the `as_str` form matches
/// the backend's wire keys.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectionName {
    Buildings,
    Activations,
    Assurances,
    Splitters,
    Materials,
    ServiceInstallers,
    Orders,
    Invoices,
}

impl CollectionName {
    pub const ALL: [CollectionName; 8] = [
        CollectionName::Buildings,
        CollectionName::Activations,
        CollectionName::Assurances,
        CollectionName::Splitters,
        CollectionName::Materials,
        CollectionName::ServiceInstallers,
        CollectionName::Orders,
        CollectionName::Invoices,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionName::Buildings => "buildings",
            CollectionName::Activations => "activations",
            CollectionName::Assurances => "assurances",
            CollectionName::Splitters => "splitters",
            CollectionName::Materials => "materials",
            CollectionName::ServiceInstallers => "serviceInstallers",
            CollectionName::Orders => "orders",
            CollectionName::Invoices => "invoices",
        }
    }
}

impl core::fmt::Display for CollectionName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered sequence of records plus the collection's id allocator.
///
/// Insertion order is preserved but carries no meaning; the only invariant
/// is id uniqueness within the collection. Ids come from a monotonic counter
/// seeded past the largest hydrated id, so rapid successive creates can
/// never collide (unlike a clock-based scheme).
#[derive(Debug, Clone, Default)]
pub struct Collection {
    records: Vec<Record>,
    next_id: i64,
}

impl Collection {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Whole-collection replacement; partial merges are not performed.
    pub fn replace(&mut self, records: Vec<Record>) {
        self.next_id = records
            .iter()
            .map(|r| r.id.as_i64())
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        self.records = records;
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn find(&self, id: EntityId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn find_mut(&mut self, id: EntityId) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.id == id)
    }

    /// Append a new record with a freshly allocated id.
    pub fn insert(&mut self, fields: Map<String, Value>) -> &Record {
        let id = EntityId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.records.push(Record::new(id, fields));
        // Just pushed, so the collection cannot be empty.
        &self.records[self.records.len() - 1]
    }

    /// Remove a record. Returns whether anything was removed; an absent id
    /// is not an error.
    pub fn remove(&mut self, id: EntityId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
