use thiserror::Error;

use crate::permissions::{Action, Resource};
use crate::roles::Role;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("role {role} may not {action:?} {resource:?}")]
    Forbidden {
        role: Role,
        action: Action,
        resource: Resource,
    },
}

/// Authorize a role for an action on a resource.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
///
/// The store never calls this itself; the caller checks before dispatching.
pub fn authorize(role: Role, action: Action, resource: Resource) -> Result<(), AuthzError> {
    if role.permits(action, resource) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden {
            role,
            action,
            resource,
        })
    }
}
