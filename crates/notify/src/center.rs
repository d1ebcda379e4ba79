//! Notification queue with per-entry cancellable expiry.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

/// How long a notification stays in the queue unless removed earlier.
pub const DEFAULT_TTL: Duration = Duration::from_millis(5000);

/// Monotonic identifier assigned by the center at insertion time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl core::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Outcome class of a notification.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub message: String,
}

struct Entry {
    notification: Notification,
    /// Pending expiry task, if one could be scheduled.
    expiry: Option<AbortHandle>,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Insertion-ordered queue of transient notifications.
///
/// Cheaply cloneable handle; clones share the same queue. Repeated messages
/// are kept as-is — no deduplication or coalescing.
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<Mutex<Inner>>,
    ttl: Duration,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            ttl,
        }
    }

    /// Append a notification and schedule its expiry.
    ///
    /// Expiry needs a tokio runtime on the calling thread; without one the
    /// entry simply lives until [`Self::remove`] or [`Self::clear`].
    pub fn add(
        &self,
        severity: Severity,
        title: Option<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        let message = message.into();
        let mut inner = self.lock();

        inner.next_id += 1;
        let id = NotificationId(inner.next_id);

        let expiry = self.schedule_expiry(id);
        if expiry.is_none() {
            tracing::debug!(%id, "no runtime available; notification will not auto-expire");
        }

        inner.entries.push(Entry {
            notification: Notification {
                id,
                timestamp: Utc::now(),
                severity,
                title,
                message,
            },
            expiry,
        });

        id
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.add(Severity::Success, None, message)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.add(Severity::Error, None, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> NotificationId {
        self.add(Severity::Warning, None, message)
    }

    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.add(Severity::Info, None, message)
    }

    /// Remove an entry and cancel its pending expiry. Idempotent: removing
    /// an unknown or already-expired id does nothing.
    pub fn remove(&self, id: NotificationId) {
        let mut inner = self.lock();
        if let Some(pos) = inner.entries.iter().position(|e| e.notification.id == id) {
            let entry = inner.entries.remove(pos);
            if let Some(expiry) = entry.expiry {
                expiry.abort();
            }
        }
    }

    /// Drop every entry and cancel all outstanding expiry tasks. Used on
    /// session teardown so no timer fires into a torn-down session.
    pub fn clear(&self) {
        let mut inner = self.lock();
        for entry in inner.entries.drain(..) {
            if let Some(expiry) = entry.expiry {
                expiry.abort();
            }
        }
    }

    /// The queue in canonical insertion order.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.lock()
            .entries
            .iter()
            .map(|e| e.notification.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    fn schedule_expiry(&self, id: NotificationId) -> Option<AbortHandle> {
        let handle = Handle::try_current().ok()?;
        let center = self.clone();
        let ttl = self.ttl;
        let task = handle.spawn(async move {
            tokio::time::sleep(ttl).await;
            center.remove(id);
        });
        Some(task.abort_handle())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned queue only means a panicking holder; the data itself
        // stays coherent for this structure.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
