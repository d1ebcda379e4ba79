//! Role-based permission tables and lookups.
//!
//! The tables are configuration data, not code: [`AccessPolicy`] is built
//! once at process start (or deserialized from an alternate table set for
//! tests) and treated as immutable afterwards. Lookups are pure and total —
//! a role absent from a table is simply denied.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{Action, Module, Role};

/// Default hierarchy weight for a role.
///
/// Weights order roles by seniority for coarse "at least as privileged as"
/// comparisons only; module and action gating never consult them.
fn builtin_weight(role: Role) -> u32 {
    match role {
        Role::SuperAdmin => 50,
        Role::Supervisor => 40,
        Role::Accountant => 30,
        Role::Warehouse => 20,
        Role::Installer => 10,
    }
}

/// Default allow-list for a module. Exhaustive over [`Module`].
fn builtin_module_roles(module: Module) -> &'static [Role] {
    use Role::*;
    match module {
        Module::Dashboard => &[SuperAdmin, Supervisor, Accountant, Warehouse, Installer],
        Module::Building => &[SuperAdmin, Supervisor],
        Module::Splitter => &[SuperAdmin, Supervisor],
        Module::Material => &[SuperAdmin, Supervisor, Warehouse, Installer],
        Module::ServiceInstaller => &[SuperAdmin, Supervisor],
        Module::Order => &[SuperAdmin, Supervisor, Installer],
        Module::Invoice => &[SuperAdmin, Accountant, Installer],
        Module::Report => &[SuperAdmin, Supervisor, Accountant],
        Module::Import => &[SuperAdmin],
        Module::Export => &[SuperAdmin, Accountant],
        Module::Search => &[SuperAdmin, Supervisor, Accountant, Warehouse, Installer],
    }
}

/// Default allow-list for an action. Exhaustive over [`Action`].
fn builtin_action_roles(action: Action) -> &'static [Role] {
    use Role::*;
    match action {
        Action::CreateBuilding => &[SuperAdmin],
        Action::CreateSplitter => &[SuperAdmin],
        Action::CreateMaterial => &[SuperAdmin, Warehouse],
        Action::CreateServiceInstaller => &[SuperAdmin],
        Action::CreateOrder => &[SuperAdmin, Supervisor],
        Action::CreateInvoice => &[SuperAdmin, Accountant],
        Action::CreateActivation => &[SuperAdmin, Supervisor],
        Action::CreateAssurance => &[SuperAdmin, Supervisor],

        Action::EditBuilding => &[SuperAdmin, Supervisor],
        Action::EditSplitter => &[SuperAdmin, Supervisor],
        Action::EditMaterial => &[SuperAdmin, Warehouse],
        Action::EditServiceInstaller => &[SuperAdmin],
        Action::EditOrder => &[SuperAdmin, Supervisor],
        Action::EditInvoice => &[SuperAdmin, Accountant],
        Action::EditActivation => &[SuperAdmin, Supervisor],
        Action::EditAssurance => &[SuperAdmin, Supervisor],

        Action::DeleteBuilding => &[SuperAdmin],
        Action::DeleteSplitter => &[SuperAdmin],
        Action::DeleteMaterial => &[SuperAdmin],
        Action::DeleteServiceInstaller => &[SuperAdmin],
        Action::DeleteOrder => &[SuperAdmin],
        Action::DeleteInvoice => &[SuperAdmin],
        Action::DeleteActivation => &[SuperAdmin],
        Action::DeleteAssurance => &[SuperAdmin],

        Action::ViewBuilding => &[SuperAdmin, Supervisor],
        Action::ViewSplitter => &[SuperAdmin, Supervisor],
        Action::ViewMaterial => &[SuperAdmin, Supervisor, Warehouse, Installer],
        Action::ViewServiceInstaller => &[SuperAdmin, Supervisor],
        Action::ViewOrder => &[SuperAdmin, Supervisor, Installer],
        Action::ViewInvoice => &[SuperAdmin, Accountant, Installer],
        Action::ViewReport => &[SuperAdmin, Supervisor, Accountant],
        Action::ViewActivation => &[SuperAdmin, Supervisor, Installer],
        Action::ViewAssurance => &[SuperAdmin, Supervisor, Installer],

        Action::AssignMaterial => &[SuperAdmin, Supervisor, Warehouse],
        Action::AssignJob => &[SuperAdmin, Supervisor],
        Action::CompleteJob => &[SuperAdmin, Supervisor, Installer],
        Action::ApproveReportAccess => &[SuperAdmin],
        Action::ImportData => &[SuperAdmin],
        Action::ExportData => &[SuperAdmin, Accountant],
        Action::ChangeStatus => &[SuperAdmin, Supervisor, Installer],
        Action::UpdateStock => &[SuperAdmin, Warehouse],
    }
}

/// The three permission tables: role weights, module allow-lists, and action
/// allow-lists.
///
/// Deserializable so tests (or a future remote config) can substitute
/// alternate tables without code changes. Missing entries fail closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    role_weights: HashMap<Role, u32>,
    module_access: HashMap<Module, HashSet<Role>>,
    action_access: HashMap<Action, HashSet<Role>>,
}

impl AccessPolicy {
    /// The built-in tables, assembled from the exhaustive `match` tables so
    /// adding an enum variant without an allow-list is a compile error.
    pub fn builtin() -> Self {
        Self {
            role_weights: Role::ALL.iter().map(|r| (*r, builtin_weight(*r))).collect(),
            module_access: Module::ALL
                .iter()
                .map(|m| (*m, builtin_module_roles(*m).iter().copied().collect()))
                .collect(),
            action_access: Action::ALL
                .iter()
                .map(|a| (*a, builtin_action_roles(*a).iter().copied().collect()))
                .collect(),
        }
    }

    /// True iff `module`'s allow-list contains `role`. Fail-closed: a module
    /// absent from an overridden table denies everyone.
    pub fn has_module_access(&self, role: Role, module: Module) -> bool {
        self.module_access
            .get(&module)
            .is_some_and(|roles| roles.contains(&role))
    }

    /// True iff `action`'s allow-list contains `role`. Same contract as
    /// [`Self::has_module_access`], over the action table.
    pub fn has_action_permission(&self, role: Role, action: Action) -> bool {
        self.action_access
            .get(&action)
            .is_some_and(|roles| roles.contains(&role))
    }

    /// True iff `role` is at least as privileged as `required`. A role absent
    /// from an overridden weight table has weight 0.
    pub fn has_minimum_role(&self, role: Role, required: Role) -> bool {
        self.weight(role) >= self.weight(required)
    }

    /// Membership check against an ad-hoc allow-list (used by per-view
    /// guards that carry their own role set).
    pub fn is_authorized(&self, role: Role, allowed: &[Role]) -> bool {
        allowed.contains(&role)
    }

    /// All actions whose allow-list contains `role`.
    pub fn user_permissions(&self, role: Role) -> BTreeSet<Action> {
        self.action_access
            .iter()
            .filter(|(_, roles)| roles.contains(&role))
            .map(|(action, _)| *action)
            .collect()
    }

    fn weight(&self, role: Role) -> u32 {
        self.role_weights.get(&role).copied().unwrap_or(0)
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::builtin()
    }
}
