//! `cephas-notify` — the time-bounded notification queue.
//!
//! Mutations signal their outcome by appending a [`Notification`] here; the
//! UI renders the queue in insertion order. Every entry expires automatically
//! after a fixed time-to-live unless removed earlier, and each pending expiry
//! is an explicit abortable task so manual removal (or teardown) can never
//! race a stale timer into a reused id slot.

pub mod center;

pub use center::{
    DEFAULT_TTL, Notification, NotificationCenter, NotificationId, Severity,
};
