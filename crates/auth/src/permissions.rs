use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// Action a caller wants to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
}

/// Entity type the action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Product,
    Movement,
    Category,
    Role,
}

impl Role {
    /// Capability table.
    ///
    /// - Products and movements are visible to everyone; any role may record
    ///   a movement, but only Dueno/Ejecutivo may rewrite history (edit or
    ///   delete movements) or manage products.
    /// - Categories are managed (and even listed) by Dueno/Ejecutivo only.
    /// - Role records are Dueno territory entirely.
    pub fn permits(self, action: Action, resource: Resource) -> bool {
        match (resource, action) {
            (Resource::Product, Action::View) => true,
            (Resource::Product, _) => self.is_manager(),

            (Resource::Movement, Action::View | Action::Create) => true,
            (Resource::Movement, Action::Edit | Action::Delete) => self.is_manager(),

            (Resource::Category, _) => self.is_manager(),

            (Resource::Role, _) => self == Role::Dueno,
        }
    }

    fn is_manager(self) -> bool {
        matches!(self, Role::Dueno | Role::Ejecutivo)
    }
}
