//! Functional-area (module) enumeration.

use serde::{Deserialize, Serialize};

/// A named functional area of the console, gated as a whole per role.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    Dashboard,
    Building,
    Splitter,
    Material,
    ServiceInstaller,
    Order,
    Invoice,
    Report,
    Import,
    Export,
    Search,
}

impl Module {
    pub const ALL: [Module; 11] = [
        Module::Dashboard,
        Module::Building,
        Module::Splitter,
        Module::Material,
        Module::ServiceInstaller,
        Module::Order,
        Module::Invoice,
        Module::Report,
        Module::Import,
        Module::Export,
        Module::Search,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Module::Dashboard => "dashboard",
            Module::Building => "building",
            Module::Splitter => "splitter",
            Module::Material => "material",
            Module::ServiceInstaller => "service_installer",
            Module::Order => "order",
            Module::Invoice => "invoice",
            Module::Report => "report",
            Module::Import => "import",
            Module::Export => "export",
            Module::Search => "search",
        }
    }
}

impl core::fmt::Display for Module {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
