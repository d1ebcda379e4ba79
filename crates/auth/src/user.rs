//! Console user identity.

use serde::{Deserialize, Serialize};

use cephas_core::EntityId;

use crate::Role;

/// An authenticated console user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: Role,
}
