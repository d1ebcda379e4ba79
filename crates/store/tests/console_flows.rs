//! End-to-end console flows against the simulated backend.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use cephas_auth::{Action, Module, Role, RouteDecision};
use cephas_core::{DashboardStats, EntityId, Record};
use cephas_notify::Severity;
use cephas_query::{Column, QueryState, apply};
use cephas_session::{AuthError, CredentialStore, InMemoryCredentialStore, PersistedCredentials};
use cephas_store::{
    CollectionName, Console, ConsoleError, DataClient, FetchError, FetchScope, MockBackend,
    StoreError,
};

fn console() -> (Console, Arc<InMemoryCredentialStore>) {
    cephas_observability::init();
    let backend = Arc::new(MockBackend::instant());
    let credentials = Arc::new(InMemoryCredentialStore::new());
    (
        Console::new(backend.clone(), backend, credentials.clone()),
        credentials,
    )
}

#[tokio::test]
async fn admin_login_hydrates_everything() {
    let (mut console, credentials) = console();

    console.login("admin@cephas.com", "password").await.unwrap();
    assert!(console.is_authenticated());
    assert_eq!(console.role(), Some(Role::SuperAdmin));

    for collection in CollectionName::ALL {
        assert!(
            !console.store().records(collection).is_empty(),
            "{collection} should be hydrated for the admin"
        );
    }
    assert_eq!(console.store().stats().today.total_jobs, 28);
    assert!(!console.store().is_loading());
    assert!(credentials.load().is_some());
}

#[tokio::test]
async fn wrong_password_leaves_the_console_untouched() {
    let (mut console, credentials) = console();

    let err = console
        .login("admin@cephas.com", "hunter2")
        .await
        .unwrap_err();
    assert_eq!(err, ConsoleError::Auth(AuthError::InvalidCredentials));
    assert!(!console.is_authenticated());
    assert_eq!(credentials.load(), None);
    for collection in CollectionName::ALL {
        assert!(console.store().records(collection).is_empty());
    }
}

#[tokio::test]
async fn installer_login_hydrates_only_its_own_slice() {
    let (mut console, _) = console();

    console
        .login("installer@cephas.com", "password")
        .await
        .unwrap();

    for collection in [
        CollectionName::Activations,
        CollectionName::Assurances,
        CollectionName::Materials,
    ] {
        assert!(!console.store().records(collection).is_empty());
    }
    for collection in [
        CollectionName::Buildings,
        CollectionName::Splitters,
        CollectionName::ServiceInstallers,
        CollectionName::Orders,
        CollectionName::Invoices,
    ] {
        assert!(
            console.store().records(collection).is_empty(),
            "{collection} is outside the installer's subset"
        );
    }

    // The scoped payload carries only jobs already assigned to the caller.
    let jobs = console.store().records(CollectionName::Activations);
    assert!(jobs.iter().all(|job| job.text("status") == Some("ASSIGNED")));
}

#[tokio::test]
async fn assigning_an_installer_patches_the_job_and_notifies() {
    let (mut console, _) = console();
    console.login("admin@cephas.com", "password").await.unwrap();

    console
        .store_mut()
        .assign_service_installer(CollectionName::Activations, EntityId::new(1), EntityId::new(2))
        .unwrap();

    let job = console
        .store()
        .get_item_by_id(CollectionName::Activations, EntityId::new(1))
        .unwrap();
    assert_eq!(
        job.text("serviceInstaller"),
        Some("SARAVANAN A/L I. CHINNIAH @ Solo")
    );
    assert_eq!(job.text("status"), Some("ASSIGNED"));

    let queue = console.notifications().snapshot();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].severity, Severity::Success);
    assert!(queue[0].message.contains("Job #1"));
    assert!(queue[0].message.contains("SARAVANAN"));
}

#[tokio::test]
async fn hydrated_rows_flow_through_the_query_pipeline() {
    let (mut console, _) = console();
    console.login("admin@cephas.com", "password").await.unwrap();

    let columns = [
        Column::new("name"),
        Column::new("building"),
        Column::new("status"),
    ];
    let mut state = QueryState::new();
    state.set_search("solaris");

    let page = apply(
        console.store().records(CollectionName::Activations),
        &columns,
        &state,
        10,
    );
    assert_eq!(page.total_count, 1);
    assert_eq!(page.rows[0].text("name"), Some("TAN PUI YEE"));
}

#[tokio::test]
async fn permission_answers_follow_the_session() {
    let (mut console, _) = console();

    // Unauthenticated: everything is denied and gated views go to login.
    assert!(!console.can_view(Module::Building));
    assert!(!console.can(Action::CreateInvoice));
    assert_eq!(console.guard(Module::Invoice), RouteDecision::RedirectToLogin);

    console
        .login("accountant@cephas.com", "password")
        .await
        .unwrap();
    assert!(console.can_view(Module::Invoice));
    assert!(console.can(Action::CreateInvoice));
    assert!(!console.can_view(Module::Building));
    assert_eq!(console.guard(Module::Invoice), RouteDecision::Render);
    assert_eq!(
        console.guard(Module::Building),
        RouteDecision::RedirectToDashboard
    );
}

#[tokio::test]
async fn logout_tears_everything_down() {
    let (mut console, credentials) = console();
    console.login("admin@cephas.com", "password").await.unwrap();
    console.notifications().info("pending toast");

    console.logout();

    assert!(!console.is_authenticated());
    assert_eq!(credentials.load(), None);
    assert!(console.notifications().is_empty());
    for collection in CollectionName::ALL {
        assert!(console.store().records(collection).is_empty());
    }
    assert_eq!(console.store().stats(), &DashboardStats::default());
}

#[tokio::test]
async fn restore_rebuilds_and_rehydrates() {
    let backend = Arc::new(MockBackend::instant());
    let credentials = Arc::new(InMemoryCredentialStore::new());

    {
        let mut first = Console::new(backend.clone(), backend.clone(), credentials.clone());
        first
            .login("supervisor@cephas.com", "password")
            .await
            .unwrap();
    }

    let mut revived = Console::new(backend.clone(), backend, credentials);
    assert!(revived.restore().await.unwrap());
    assert_eq!(revived.role(), Some(Role::Supervisor));
    assert!(!revived.store().records(CollectionName::Buildings).is_empty());
    assert!(revived.store().records(CollectionName::Invoices).is_empty());
}

#[tokio::test]
async fn restore_with_no_persisted_state_is_a_clean_no() {
    let (mut console, _) = console();
    assert!(!console.restore().await.unwrap());
    assert!(!console.is_authenticated());
}

/// Backend whose data plane rejects every token.
struct RevokedBackend;

#[async_trait]
impl DataClient for RevokedBackend {
    async fn fetch_collection(
        &self,
        _collection: CollectionName,
        _scope: FetchScope,
    ) -> Result<Vec<Record>, FetchError> {
        Err(FetchError::Unauthorized)
    }

    async fn fetch_dashboard_stats(&self) -> Result<DashboardStats, FetchError> {
        Err(FetchError::Unauthorized)
    }
}

#[tokio::test]
async fn rejected_credentials_force_a_full_teardown() {
    let authenticator = Arc::new(MockBackend::instant());
    let credentials = Arc::new(InMemoryCredentialStore::new());
    credentials.save(&PersistedCredentials {
        token: "stale-token".to_string(),
        user: cephas_auth::User {
            id: EntityId::new(1),
            name: "Admin User".to_string(),
            email: "admin@cephas.com".to_string(),
            role: Role::SuperAdmin,
        },
    });
    let mut console = Console::new(authenticator, Arc::new(RevokedBackend), credentials.clone());

    let err = console.restore().await.unwrap_err();
    assert_eq!(
        err,
        ConsoleError::Store(StoreError::Fetch(FetchError::Unauthorized))
    );
    assert!(!console.is_authenticated());
    assert_eq!(credentials.load(), None);
}

#[tokio::test]
async fn created_records_continue_past_hydrated_ids() {
    let (mut console, _) = console();
    console.login("admin@cephas.com", "password").await.unwrap();

    let mut fields = Map::new();
    fields.insert("name".to_string(), Value::from("NEW TOWER"));
    let created = console
        .store_mut()
        .add_item(CollectionName::Buildings, fields);

    // Five demo buildings hydrate as ids 1..=5.
    assert_eq!(created.id, EntityId::new(6));
}
