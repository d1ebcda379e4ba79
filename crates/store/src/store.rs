//! The domain store: collections, hydration, and mutations.

use std::sync::Arc;

use serde_json::{Map, Value};
use thiserror::Error;

use cephas_auth::{Role, User};
use cephas_core::{DashboardStats, EntityId, Record};
use cephas_notify::NotificationCenter;

use crate::client::{DataClient, FetchError, FetchScope};
use crate::collection::{Collection, CollectionName};

/// Status written by [`DomainStore::assign_service_installer`].
pub const ASSIGNED_STATUS: &str = "ASSIGNED";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A mutation addressed a record that is not in the collection.
    #[error("no {collection} record with id {id}")]
    NotFound {
        collection: CollectionName,
        id: EntityId,
    },

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// In-memory store of the console's business entities.
///
/// Exclusively owns all collections and the dashboard snapshot for the
/// lifetime of one session; [`DomainStore::reset`] discards everything back
/// to the initial empty shape on logout. Mutations are synchronous and
/// last-writer-wins — there is exactly one store per client session and no
/// concurrent writers.
pub struct DomainStore {
    client: Arc<dyn DataClient>,
    notifications: NotificationCenter,
    /// One slot per [`CollectionName`] variant, in declaration order.
    collections: [Collection; CollectionName::ALL.len()],
    stats: DashboardStats,
    loading: bool,
}

impl DomainStore {
    pub fn new(client: Arc<dyn DataClient>, notifications: NotificationCenter) -> Self {
        Self {
            client,
            notifications,
            collections: empty_collections(),
            stats: DashboardStats::default(),
            loading: false,
        }
    }

    /// Which collections a role hydrates.
    ///
    /// Collections outside the role's subset stay at their initial empty
    /// value; reads against them are valid and yield no rows.
    fn collections_for(role: Role) -> &'static [CollectionName] {
        use CollectionName::*;
        match role {
            Role::SuperAdmin => &CollectionName::ALL,
            Role::Supervisor => &[Buildings, ServiceInstallers, Activations, Assurances],
            Role::Installer => &[Activations, Assurances, Materials],
            Role::Accountant => &[Invoices],
            Role::Warehouse => &[Materials],
        }
    }

    /// Fetch and fully replace the role-relevant collections plus the
    /// dashboard snapshot. The fetches run concurrently, but nothing is
    /// applied until every request has resolved; the `loading` flag brackets
    /// the whole window and reads during it are provisional.
    pub async fn hydrate(&mut self, user: &User) -> Result<(), StoreError> {
        self.loading = true;
        let result = self.hydrate_inner(user).await;
        self.loading = false;

        if let Err(err) = &result {
            tracing::error!(role = %user.role, error = %err, "hydration failed");
        }
        result
    }

    async fn hydrate_inner(&mut self, user: &User) -> Result<(), StoreError> {
        let names = Self::collections_for(user.role);
        let scope = match user.role {
            Role::Installer => FetchScope::AssignedTo(user.id),
            _ => FetchScope::All,
        };

        let stats_task = {
            let client = Arc::clone(&self.client);
            tokio::spawn(async move { client.fetch_dashboard_stats().await })
        };
        let collection_tasks: Vec<_> = names
            .iter()
            .map(|name| {
                let client = Arc::clone(&self.client);
                let name = *name;
                (
                    name,
                    tokio::spawn(async move { client.fetch_collection(name, scope).await }),
                )
            })
            .collect();

        let stats = stats_task.await.map_err(join_failure)??;
        let mut fetched = Vec::with_capacity(collection_tasks.len());
        for (name, task) in collection_tasks {
            fetched.push((name, task.await.map_err(join_failure)??));
        }

        // All requests resolved; apply as one replacement.
        self.stats = stats;
        for (name, records) in fetched {
            self.collection_mut(name).replace(records);
        }
        Ok(())
    }

    /// Whether a hydration window is open. Reads during it are provisional.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub fn records(&self, collection: CollectionName) -> &[Record] {
        self.collection(collection).records()
    }

    /// Append a new record with a store-generated unique id.
    pub fn add_item(&mut self, collection: CollectionName, fields: Map<String, Value>) -> Record {
        self.collection_mut(collection).insert(fields).clone()
    }

    /// Merge `patch` into the matching record. An unmatched id is a typed
    /// failure, not a fault.
    pub fn update_item(
        &mut self,
        collection: CollectionName,
        id: EntityId,
        patch: &Map<String, Value>,
    ) -> Result<Record, StoreError> {
        let record = self
            .collection_mut(collection)
            .find_mut(id)
            .ok_or(StoreError::NotFound { collection, id })?;
        record.merge(patch);
        Ok(record.clone())
    }

    /// Remove the matching record; an absent id is a no-op.
    pub fn delete_item(&mut self, collection: CollectionName, id: EntityId) {
        self.collection_mut(collection).remove(id);
    }

    pub fn get_item_by_id(&self, collection: CollectionName, id: EntityId) -> Option<&Record> {
        self.collection(collection).find(id)
    }

    /// Assign an installer to a job: sets the record's installer reference
    /// and marks it [`ASSIGNED_STATUS`], then emits a success notification
    /// naming the job and installer. The notification is part of this
    /// operation's contract.
    ///
    /// An unknown installer id leaves everything untouched.
    pub fn assign_service_installer(
        &mut self,
        collection: CollectionName,
        id: EntityId,
        installer_id: EntityId,
    ) -> Result<(), StoreError> {
        let Some(installer) =
            self.get_item_by_id(CollectionName::ServiceInstallers, installer_id)
        else {
            tracing::warn!(%installer_id, "assign skipped: unknown installer");
            return Ok(());
        };
        let installer_name = installer.text("name").unwrap_or("-").to_string();

        let mut patch = Map::new();
        patch.insert("serviceInstaller".to_string(), Value::from(installer_name.clone()));
        patch.insert("status".to_string(), Value::from(ASSIGNED_STATUS));
        self.update_item(collection, id, &patch)?;

        self.notifications
            .success(format!("Job #{id} assigned to {installer_name}"));
        Ok(())
    }

    /// Set the record's status and emit an informational notification.
    ///
    /// Any string is accepted; the console does not know the legal status
    /// transitions, so it cannot validate them. (The backend's own data
    /// already mixes spellings such as `NOT COMPLETED` and `NOT_COMPLETED`.)
    pub fn change_status(
        &mut self,
        collection: CollectionName,
        id: EntityId,
        status: &str,
    ) -> Result<Record, StoreError> {
        let mut patch = Map::new();
        patch.insert("status".to_string(), Value::from(status));
        let record = self.update_item(collection, id, &patch)?;

        self.notifications
            .info(format!("Status changed to {status} for {collection} #{id}"));
        Ok(record)
    }

    /// Discard everything back to the initial empty shape.
    pub fn reset(&mut self) {
        self.collections = empty_collections();
        self.stats = DashboardStats::default();
        self.loading = false;
    }

    fn collection(&self, name: CollectionName) -> &Collection {
        &self.collections[name as usize]
    }

    fn collection_mut(&mut self, name: CollectionName) -> &mut Collection {
        &mut self.collections[name as usize]
    }
}

fn empty_collections() -> [Collection; CollectionName::ALL.len()] {
    core::array::from_fn(|_| Collection::new())
}

fn join_failure(err: tokio::task::JoinError) -> FetchError {
    FetchError::Network(format!("fetch task failed: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cephas_notify::Severity;
    use serde_json::json;

    /// Client for tests that never hydrate.
    struct NoData;

    #[async_trait]
    impl DataClient for NoData {
        async fn fetch_collection(
            &self,
            _collection: CollectionName,
            _scope: FetchScope,
        ) -> Result<Vec<Record>, FetchError> {
            Ok(Vec::new())
        }

        async fn fetch_dashboard_stats(&self) -> Result<DashboardStats, FetchError> {
            Ok(DashboardStats::default())
        }
    }

    fn store() -> DomainStore {
        DomainStore::new(Arc::new(NoData), NotificationCenter::new())
    }

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn add_then_get_round_trips() {
        let mut store = store();
        let input = fields(json!({ "name": "TARA 33", "location": "Kuala Lumpur" }));

        let created = store.add_item(CollectionName::Buildings, input.clone());
        let found = store
            .get_item_by_id(CollectionName::Buildings, created.id)
            .cloned();

        assert_eq!(found, Some(created.clone()));
        assert_eq!(created.fields, input);
    }

    #[test]
    fn delete_then_get_yields_nothing() {
        let mut store = store();
        let created = store.add_item(CollectionName::Orders, fields(json!({ "name": "X" })));

        store.delete_item(CollectionName::Orders, created.id);
        assert!(store.get_item_by_id(CollectionName::Orders, created.id).is_none());

        // Deleting again is a no-op.
        store.delete_item(CollectionName::Orders, created.id);
    }

    #[test]
    fn update_of_a_missing_id_is_a_typed_failure() {
        let mut store = store();
        let err = store
            .update_item(
                CollectionName::Invoices,
                EntityId::new(42),
                &fields(json!({ "paid": "Yes" })),
            )
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::NotFound {
                collection: CollectionName::Invoices,
                id: EntityId::new(42),
            }
        );
    }

    #[test]
    fn ids_are_unique_per_collection_not_globally() {
        let mut store = store();
        let building = store.add_item(CollectionName::Buildings, fields(json!({})));
        let order = store.add_item(CollectionName::Orders, fields(json!({})));
        // Same id in different collections is fine.
        assert_eq!(building.id, order.id);
    }

    #[test]
    fn assign_with_unknown_installer_is_a_silent_no_op() {
        let mut store = store();
        let job = store.add_item(
            CollectionName::Activations,
            fields(json!({ "serviceInstaller": "-", "status": "NOT COMPLETED" })),
        );

        store
            .assign_service_installer(CollectionName::Activations, job.id, EntityId::new(99))
            .unwrap();

        let unchanged = store
            .get_item_by_id(CollectionName::Activations, job.id)
            .unwrap();
        assert_eq!(unchanged.text("status"), Some("NOT COMPLETED"));
        assert!(store.notifications.is_empty());
    }

    #[test]
    fn assign_updates_the_job_and_signals_success() {
        let mut store = store();
        let installer = store.add_item(
            CollectionName::ServiceInstallers,
            fields(json!({ "name": "SARAVANAN A/L I. CHINNIAH @ Solo" })),
        );
        let job = store.add_item(
            CollectionName::Activations,
            fields(json!({ "serviceInstaller": "-", "status": "NOT COMPLETED" })),
        );

        store
            .assign_service_installer(CollectionName::Activations, job.id, installer.id)
            .unwrap();

        let updated = store
            .get_item_by_id(CollectionName::Activations, job.id)
            .unwrap();
        assert_eq!(
            updated.text("serviceInstaller"),
            Some("SARAVANAN A/L I. CHINNIAH @ Solo")
        );
        assert_eq!(updated.text("status"), Some(ASSIGNED_STATUS));

        let queue = store.notifications.snapshot();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].severity, Severity::Success);
        assert!(queue[0].message.contains(&format!("Job #{}", job.id)));
        assert!(queue[0].message.contains("SARAVANAN"));
    }

    #[test]
    fn change_status_accepts_any_string_and_signals_info() {
        let mut store = store();
        let job = store.add_item(
            CollectionName::Assurances,
            fields(json!({ "status": "NOT_COMPLETED" })),
        );

        let updated = store
            .change_status(CollectionName::Assurances, job.id, "COMPLETED")
            .unwrap();
        assert_eq!(updated.text("status"), Some("COMPLETED"));

        let queue = store.notifications.snapshot();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].severity, Severity::Info);
        assert_eq!(
            queue[0].message,
            format!("Status changed to COMPLETED for assurances #{}", job.id)
        );
    }

    #[test]
    fn reset_returns_to_the_initial_empty_shape() {
        let mut store = store();
        store.add_item(CollectionName::Materials, fields(json!({ "sapCode": "X" })));

        store.reset();

        for name in CollectionName::ALL {
            assert!(store.records(name).is_empty());
        }
        assert_eq!(store.stats(), &DashboardStats::default());
        assert!(!store.is_loading());
    }
}
