//! Routing-guard policy.
//!
//! The permission engine itself only answers booleans; this is the one
//! consumer-facing contract built on top of it. The UI layer maps the
//! decision onto its router.

use crate::{AccessPolicy, Module, Session};

/// Outcome of guarding a gated view.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Authenticated and permitted: render the view.
    Render,
    /// No session: go to the login screen.
    RedirectToLogin,
    /// Authenticated but not permitted for this module: fall back to the
    /// default dashboard.
    RedirectToDashboard,
}

/// Decide what to do with a request for a gated view.
pub fn resolve_route(
    policy: &AccessPolicy,
    session: Option<&Session>,
    module: Module,
) -> RouteDecision {
    match session {
        None => RouteDecision::RedirectToLogin,
        Some(session) if policy.has_module_access(session.role(), module) => RouteDecision::Render,
        Some(_) => RouteDecision::RedirectToDashboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AuthToken, Role, User};
    use cephas_core::EntityId;

    fn session_for(role: Role) -> Session {
        let user = User {
            id: EntityId::new(1),
            name: "Test User".to_string(),
            email: "test@cephas.com".to_string(),
            role,
        };
        Session::new(user, AuthToken::new("token"))
    }

    #[test]
    fn unauthenticated_requests_redirect_to_login() {
        let policy = AccessPolicy::builtin();
        for module in Module::ALL {
            assert_eq!(
                resolve_route(&policy, None, module),
                RouteDecision::RedirectToLogin
            );
        }
    }

    #[test]
    fn permitted_modules_render() {
        let policy = AccessPolicy::builtin();
        let session = session_for(Role::Accountant);
        assert_eq!(
            resolve_route(&policy, Some(&session), Module::Invoice),
            RouteDecision::Render
        );
    }

    #[test]
    fn denied_modules_fall_back_to_the_dashboard() {
        let policy = AccessPolicy::builtin();
        let session = session_for(Role::Warehouse);
        assert_eq!(
            resolve_route(&policy, Some(&session), Module::Invoice),
            RouteDecision::RedirectToDashboard
        );
    }
}
