//! Data-fetch collaborator boundary.

use async_trait::async_trait;
use thiserror::Error;

use cephas_core::{DashboardStats, EntityId, Record};

use crate::collection::CollectionName;

/// Failure surfaced by the data-fetch collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// 401-equivalent: the credential is stale or revoked. Forces immediate
    /// session teardown before the error is surfaced — a dead credential is
    /// never silently retried.
    #[error("not authorized")]
    Unauthorized,

    #[error("network error: {0}")]
    Network(String),

    #[error("{0}")]
    Backend(String),
}

/// Which slice of a collection a fetch asks for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FetchScope {
    /// Everything the backend has for the collection.
    All,
    /// Only records assigned to the given installer (jobs, issued materials).
    AssignedTo(EntityId),
}

/// External data-fetch collaborator consumed by hydration.
///
/// The reference environment backs this with canned payloads behind a fixed
/// delay ([`crate::MockBackend`]); a production build swaps in a real network
/// client without touching the store's contract.
#[async_trait]
pub trait DataClient: Send + Sync {
    async fn fetch_collection(
        &self,
        collection: CollectionName,
        scope: FetchScope,
    ) -> Result<Vec<Record>, FetchError>;

    async fn fetch_dashboard_stats(&self) -> Result<DashboardStats, FetchError>;
}
