//! `cephas-session` — the authenticated-identity lifecycle.
//!
//! Login and logout go through an injectable [`Authenticator`] collaborator;
//! the surviving credentials live in a [`CredentialStore`] as one atomic
//! record, so a token can never be read without its matching user.

pub mod credentials;
pub mod manager;

pub use credentials::{CredentialStore, InMemoryCredentialStore, PersistedCredentials};
pub use manager::{AuthError, Authenticator, LoginGrant, SessionManager};
