//! Authenticated session value.

use serde::{Deserialize, Serialize};

use crate::{Role, User};

/// Opaque bearer token handed out by the authentication collaborator.
///
/// The console never inspects the token's contents; it only stores and
/// forwards it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An authenticated identity.
///
/// A `Session` can only be constructed with both a user and a token, so
/// "authenticated iff user and token are both present" holds by
/// construction — there is no partially-authenticated state to represent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
    token: AuthToken,
}

impl Session {
    pub fn new(user: User, token: AuthToken) -> Self {
        Self { user, token }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn token(&self) -> &AuthToken {
        &self.token
    }

    pub fn role(&self) -> Role {
        self.user.role
    }
}
