use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Access-control role supplied by the auth collaborator.
///
/// A closed set, unlike the descriptive role records in the catalog: the
/// capability table in `permissions` is keyed on these three values and
/// nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Dueno")]
    Dueno,
    #[serde(rename = "Ejecutivo")]
    Ejecutivo,
    #[serde(rename = "Gerente")]
    Gerente,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Dueno => "Dueno",
            Role::Ejecutivo => "Ejecutivo",
            Role::Gerente => "Gerente",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized role strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Dueno" => Ok(Role::Dueno),
            "Ejecutivo" => Ok(Role::Ejecutivo),
            "Gerente" => Ok(Role::Gerente),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
