//! Persisted credential surface.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use cephas_auth::User;

/// The one record the console persists between processes: the opaque token
/// together with its user. Written and cleared only as a pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedCredentials {
    pub token: String,
    pub user: User,
}

/// Scoped key/value surface behind the credential record.
///
/// Implementations must keep the record atomic: `save` replaces it whole and
/// `clear` removes it whole. `load` returns `None` for absent *or* malformed
/// state — a half-readable record is treated as no record at all.
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Option<PersistedCredentials>;
    fn save(&self, credentials: &PersistedCredentials);
    fn clear(&self);
}

/// In-memory credential store for tests/dev.
///
/// Holds the serialized form, like a real backing store would, so the
/// malformed-state path is exercised the same way.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    raw: Mutex<Option<String>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed raw (possibly malformed) persisted state.
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.lock() = Some(raw.into());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.raw.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn load(&self) -> Option<PersistedCredentials> {
        let raw = self.lock().clone()?;
        match serde_json::from_str(&raw) {
            Ok(credentials) => Some(credentials),
            Err(err) => {
                tracing::warn!(error = %err, "persisted credentials are malformed; ignoring");
                None
            }
        }
    }

    fn save(&self, credentials: &PersistedCredentials) {
        match serde_json::to_string(credentials) {
            Ok(raw) => *self.lock() = Some(raw),
            Err(err) => tracing::error!(error = %err, "failed to serialize credentials"),
        }
    }

    fn clear(&self) {
        *self.lock() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cephas_auth::Role;
    use cephas_core::EntityId;

    fn admin() -> User {
        User {
            id: EntityId::new(1),
            name: "Admin User".to_string(),
            email: "admin@cephas.com".to_string(),
            role: Role::SuperAdmin,
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = InMemoryCredentialStore::new();
        let credentials = PersistedCredentials {
            token: "mock-jwt-token-for-admin".to_string(),
            user: admin(),
        };

        store.save(&credentials);
        assert_eq!(store.load(), Some(credentials));

        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn malformed_state_loads_as_none() {
        let store = InMemoryCredentialStore::new();
        store.set_raw("{\"token\": \"orphaned-token\"}");
        assert_eq!(store.load(), None);

        store.set_raw("not json at all");
        assert_eq!(store.load(), None);
    }
}
