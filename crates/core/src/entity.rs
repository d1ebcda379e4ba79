//! Generic record entity.
//!
//! Every business object the console manages (buildings, orders, materials,
//! invoices, ...) is a [`Record`]: a required unique id plus a variable bag
//! of domain fields. Identity is scoped to the owning collection; ids are
//! not unique across collections.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a record within its owning collection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub i64);

impl EntityId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A domain record: unique `id` plus an open bag of fields.
///
/// Field names follow the backend's wire shape (camelCase keys such as
/// `serviceInstaller` or `appointmentDate`); the store does not reinterpret
/// them beyond the few it mutates directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: EntityId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn new(id: EntityId, fields: Map<String, Value>) -> Self {
        Self { id, fields }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Field value as a string slice, if it is a JSON string.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Set a single field, replacing any previous value.
    pub fn set_field(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// Merge a patch into this record. Patched fields replace existing ones;
    /// fields absent from the patch are left untouched. The id is never
    /// patchable.
    pub fn merge(&mut self, patch: &Map<String, Value>) {
        for (key, value) in patch {
            if key == "id" {
                continue;
            }
            self.fields.insert(key.clone(), value.clone());
        }
    }
}
