//! The console facade.
//!
//! Wires the session manager, the domain store, the notification center,
//! and the permission tables into the single surface the UI layer talks to.
//! Authenticated-lifecycle transitions (login, restore, logout, forced
//! teardown on a dead credential) all flow through here so the pieces can
//! never get out of step.

use std::sync::Arc;

use thiserror::Error;

use cephas_auth::{
    AccessPolicy, Action, Module, Role, RouteDecision, Session, User, resolve_route,
};
use cephas_notify::NotificationCenter;
use cephas_session::{AuthError, Authenticator, CredentialStore, SessionManager};

use crate::client::{DataClient, FetchError};
use crate::store::{DomainStore, StoreError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One authenticated console: session, hydrated domain state, notifications,
/// and the permission tables, kept consistent across lifecycle transitions.
pub struct Console {
    policy: AccessPolicy,
    session: SessionManager,
    store: DomainStore,
    notifications: NotificationCenter,
}

impl Console {
    pub fn new(
        authenticator: Arc<dyn Authenticator>,
        client: Arc<dyn DataClient>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        let notifications = NotificationCenter::new();
        Self {
            policy: AccessPolicy::builtin(),
            session: SessionManager::new(authenticator, credentials),
            store: DomainStore::new(client, notifications.clone()),
            notifications,
        }
    }

    /// Replace the built-in permission tables, e.g. with a deserialized
    /// deployment-specific policy. Absent entries deny.
    pub fn with_policy(mut self, policy: AccessPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Authenticate and hydrate. On a credential failure nothing changes;
    /// on a hydration failure the session stands (with empty collections)
    /// unless the backend rejected the fresh token outright, in which case
    /// the console is torn down before the error is surfaced.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ConsoleError> {
        let user = self.session.login(email, password).await?.user().clone();
        self.hydrate_for(&user).await
    }

    /// Rebuild the session from persisted credentials and hydrate. Returns
    /// `Ok(false)` when there is nothing to restore.
    pub async fn restore(&mut self) -> Result<bool, ConsoleError> {
        let Some(session) = self.session.restore() else {
            return Ok(false);
        };
        let user = session.user().clone();
        self.hydrate_for(&user).await?;
        Ok(true)
    }

    async fn hydrate_for(&mut self, user: &User) -> Result<(), ConsoleError> {
        match self.store.hydrate(user).await {
            Err(err @ StoreError::Fetch(FetchError::Unauthorized)) => {
                // The credential is dead; holding onto it would just fail
                // every subsequent fetch the same way.
                tracing::warn!(email = %user.email, "credential rejected, tearing down");
                self.logout();
                Err(err.into())
            }
            result => result.map_err(ConsoleError::from),
        }
    }

    /// The single teardown path: session and persisted credentials cleared,
    /// domain state reset, notification queue drained.
    pub fn logout(&mut self) {
        self.session.logout();
        self.store.reset();
        self.notifications.clear();
    }

    /// Whether the current user may see a module's views. Unauthenticated
    /// means no.
    pub fn can_view(&self, module: Module) -> bool {
        self.session
            .role()
            .is_some_and(|role| self.policy.has_module_access(role, module))
    }

    /// Whether the current user may perform an action.
    pub fn can(&self, action: Action) -> bool {
        self.session
            .role()
            .is_some_and(|role| self.policy.has_action_permission(role, action))
    }

    /// Routing decision for a gated view.
    pub fn guard(&self, module: Module) -> RouteDecision {
        resolve_route(&self.policy, self.session.session(), module)
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.session()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }

    pub fn store(&self) -> &DomainStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DomainStore {
        &mut self.store
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }
}
