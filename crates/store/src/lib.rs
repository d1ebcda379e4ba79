//! `cephas-store` — the client-side domain state layer.
//!
//! [`DomainStore`] owns the entity collections and the dashboard snapshot
//! for the lifetime of a session: it hydrates the role-relevant subset from
//! the data-fetch collaborator, serves synchronous CRUD and specialized
//! mutations, and emits side-effect notifications. [`Console`] wires the
//! store together with the session manager, the notification center, and
//! the permission tables.

pub mod client;
pub mod collection;
pub mod console;
pub mod mock;
pub mod store;

pub use client::{DataClient, FetchError, FetchScope};
pub use collection::{Collection, CollectionName};
pub use console::{Console, ConsoleError};
pub use mock::MockBackend;
pub use store::{DomainStore, StoreError};
