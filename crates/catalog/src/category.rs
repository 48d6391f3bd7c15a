use serde::{Deserialize, Serialize};

use firemat_core::{DomainError, DomainResult};

/// A product category.
///
/// Categories are plain names; products reference them by string, so a rename
/// here does not touch the products that point at the old name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("category name cannot be empty"));
        }
        Ok(Self(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Case-insensitive name comparison, the uniqueness rule for the set.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        let cat = Category::new("  Sellos y Spray ").unwrap();
        assert_eq!(cat.name(), "Sellos y Spray");
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Category::new("   ").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn matching_ignores_case() {
        let cat = Category::new("Accesorios").unwrap();
        assert!(cat.matches("accesorios"));
        assert!(cat.matches("ACCESORIOS "));
        assert!(!cat.matches("Accesorio"));
    }
}
