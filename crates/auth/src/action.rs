//! Fine-grained action enumeration.

use serde::{Deserialize, Serialize};

/// A named fine-grained operation, gated independently of its owning module.
///
/// An action may be permitted to roles that cannot browse the owning module's
/// list, and vice versa; the two tables are deliberately not normalized
/// against each other.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Create
    CreateBuilding,
    CreateSplitter,
    CreateMaterial,
    CreateServiceInstaller,
    CreateOrder,
    CreateInvoice,
    CreateActivation,
    CreateAssurance,

    // Edit
    EditBuilding,
    EditSplitter,
    EditMaterial,
    EditServiceInstaller,
    EditOrder,
    EditInvoice,
    EditActivation,
    EditAssurance,

    // Delete
    DeleteBuilding,
    DeleteSplitter,
    DeleteMaterial,
    DeleteServiceInstaller,
    DeleteOrder,
    DeleteInvoice,
    DeleteActivation,
    DeleteAssurance,

    // View
    ViewBuilding,
    ViewSplitter,
    ViewMaterial,
    ViewServiceInstaller,
    ViewOrder,
    ViewInvoice,
    ViewReport,
    ViewActivation,
    ViewAssurance,

    // Special
    AssignMaterial,
    AssignJob,
    CompleteJob,
    ApproveReportAccess,
    ImportData,
    ExportData,
    ChangeStatus,
    UpdateStock,
}

impl Action {
    pub const ALL: [Action; 41] = [
        Action::CreateBuilding,
        Action::CreateSplitter,
        Action::CreateMaterial,
        Action::CreateServiceInstaller,
        Action::CreateOrder,
        Action::CreateInvoice,
        Action::CreateActivation,
        Action::CreateAssurance,
        Action::EditBuilding,
        Action::EditSplitter,
        Action::EditMaterial,
        Action::EditServiceInstaller,
        Action::EditOrder,
        Action::EditInvoice,
        Action::EditActivation,
        Action::EditAssurance,
        Action::DeleteBuilding,
        Action::DeleteSplitter,
        Action::DeleteMaterial,
        Action::DeleteServiceInstaller,
        Action::DeleteOrder,
        Action::DeleteInvoice,
        Action::DeleteActivation,
        Action::DeleteAssurance,
        Action::ViewBuilding,
        Action::ViewSplitter,
        Action::ViewMaterial,
        Action::ViewServiceInstaller,
        Action::ViewOrder,
        Action::ViewInvoice,
        Action::ViewReport,
        Action::ViewActivation,
        Action::ViewAssurance,
        Action::AssignMaterial,
        Action::AssignJob,
        Action::CompleteJob,
        Action::ApproveReportAccess,
        Action::ImportData,
        Action::ExportData,
        Action::ChangeStatus,
        Action::UpdateStock,
    ];
}
