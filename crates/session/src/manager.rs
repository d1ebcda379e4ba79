//! Session manager: login, logout, restore.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use cephas_auth::{AuthToken, Role, Session, User};

use crate::credentials::{CredentialStore, PersistedCredentials};

/// Authentication failure, reported to the caller with the session and
/// persisted state unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("authentication service unavailable: {0}")]
    Network(String),
}

/// What a successful credential check hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginGrant {
    pub token: String,
    pub user: User,
}

/// External authentication collaborator.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<LoginGrant, AuthError>;
}

/// Owns the authenticated-identity lifecycle.
///
/// Holds at most one [`Session`]; downstream teardown (domain store,
/// notifications) is orchestrated by the console facade, which calls
/// [`SessionManager::logout`] as the single supported teardown path.
pub struct SessionManager {
    authenticator: Arc<dyn Authenticator>,
    credentials: Arc<dyn CredentialStore>,
    session: Option<Session>,
}

impl SessionManager {
    pub fn new(
        authenticator: Arc<dyn Authenticator>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            authenticator,
            credentials,
            session: None,
        }
    }

    /// Delegate the credential check and, on success, persist the grant and
    /// establish the session. On failure nothing changes.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&Session, AuthError> {
        let grant = self.authenticator.login(email, password).await.map_err(|err| {
            tracing::warn!(email, error = %err, "login failed");
            err
        })?;

        self.credentials.save(&PersistedCredentials {
            token: grant.token.clone(),
            user: grant.user.clone(),
        });
        tracing::info!(email, role = %grant.user.role, "login succeeded");

        let session = Session::new(grant.user, AuthToken::new(grant.token));
        Ok(&*self.session.insert(session))
    }

    /// Clear persisted credentials and drop the in-memory session.
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(email = %session.user().email, "logout");
        }
        self.credentials.clear();
    }

    /// Reconstruct the session from persisted credentials, if present and
    /// well-formed. Malformed or partial state is "no session".
    pub fn restore(&mut self) -> Option<&Session> {
        let persisted = self.credentials.load()?;
        self.session = Some(Session::new(
            persisted.user,
            AuthToken::new(persisted.token),
        ));
        self.session.as_ref()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(Session::user)
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(Session::role)
    }
}
