//! `cephas-auth` — roles, permission tables, and session identity.
//!
//! This crate is intentionally decoupled from transport and storage. The
//! permission engine is a pure lookup against static configuration: it never
//! performs IO, never panics, and never errors — unknown inputs degrade to
//! "denied".

pub mod action;
pub mod guard;
pub mod module;
pub mod policy;
pub mod role;
pub mod session;
pub mod user;

pub use action::Action;
pub use guard::{RouteDecision, resolve_route};
pub use module::Module;
pub use policy::AccessPolicy;
pub use role::Role;
pub use session::{AuthToken, Session};
pub use user::User;
