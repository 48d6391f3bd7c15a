use serde::{Deserialize, Serialize};

use firemat_core::{DomainError, DomainResult, Entity, RoleId};

/// A role catalog entry.
///
/// Pure reference data: the access-control mapping lives in `firemat-auth`
/// and does not read these records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    id: RoleId,
    name: String,
    description: String,
}

impl RoleRecord {
    pub fn new(
        id: RoleId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("role name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            description: description.into().trim().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> DomainResult<()> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("role name cannot be empty"));
        }
        self.name = name;
        self.description = description.into().trim().to_string();
        Ok(())
    }
}

impl Entity for RoleRecord {
    type Id = RoleId;

    fn id(&self) -> RoleId {
        self.id
    }
}
