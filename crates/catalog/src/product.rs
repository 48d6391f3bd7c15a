use serde::{Deserialize, Serialize};

use firemat_core::{DomainError, DomainResult, Entity, ProductId};

/// Product status lifecycle.
///
/// Serialized with the historical Spanish literals so session snapshots keep
/// their data shape across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    #[serde(rename = "Activo")]
    Active,
    #[serde(rename = "Inactivo")]
    Inactive,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Activo",
            ProductStatus::Inactive => "Inactivo",
        }
    }
}

impl core::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive product fields, as entered by the caller.
///
/// Stock is deliberately absent: it is set once at creation and afterwards
/// only moves through ledger movements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub code: String,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub min_stock: i64,
    pub location: String,
    pub status: ProductStatus,
    pub doc_ref: String,
    pub image_url: String,
}

/// A catalog product with its live stock level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    code: String,
    sku: String,
    name: String,
    category: String,
    stock: i64,
    min_stock: i64,
    location: String,
    status: ProductStatus,
    doc_ref: String,
    image_url: String,
}

impl Product {
    /// Build a product from a draft plus its initial stock.
    pub fn new(id: ProductId, draft: &ProductDraft, stock: i64) -> DomainResult<Self> {
        validate_draft(draft)?;
        if stock < 0 {
            return Err(DomainError::validation("stock cannot be negative"));
        }

        Ok(Self {
            id,
            code: draft.code.trim().to_string(),
            sku: draft.sku.trim().to_string(),
            name: draft.name.trim().to_string(),
            category: draft.category.clone(),
            stock,
            min_stock: draft.min_stock,
            location: draft.location.trim().to_string(),
            status: draft.status,
            doc_ref: draft.doc_ref.trim().to_string(),
            image_url: draft.image_url.trim().to_string(),
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn min_stock(&self) -> i64 {
        self.min_stock
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    pub fn doc_ref(&self) -> &str {
        &self.doc_ref
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }

    /// Low-stock flag: strictly below the configured minimum.
    pub fn is_low_stock(&self) -> bool {
        self.stock < self.min_stock
    }

    /// Display label, also cached on movement records ("FM-CT-001 - Metacaulk 1200").
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }

    /// Replace descriptive metadata. Stock is untouched: edits never change
    /// stock directly, only ledger movements do.
    pub fn update(&mut self, draft: &ProductDraft) -> DomainResult<()> {
        validate_draft(draft)?;

        self.code = draft.code.trim().to_string();
        self.sku = draft.sku.trim().to_string();
        self.name = draft.name.trim().to_string();
        self.category = draft.category.clone();
        self.min_stock = draft.min_stock;
        self.location = draft.location.trim().to_string();
        self.status = draft.status;
        self.doc_ref = draft.doc_ref.trim().to_string();
        self.image_url = draft.image_url.trim().to_string();
        Ok(())
    }

    /// Set the live stock level. The value must come out of ledger math
    /// (`firemat-ledger` plans); there is no other legitimate producer.
    pub fn apply_stock(&mut self, stock: i64) {
        self.stock = stock;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

fn validate_draft(draft: &ProductDraft) -> DomainResult<()> {
    if draft.code.trim().is_empty() {
        return Err(DomainError::validation("code cannot be empty"));
    }
    if draft.name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    if draft.min_stock < 0 {
        return Err(DomainError::validation("minStock cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            code: "FM-CT-001".to_string(),
            sku: "SKU-CT-001".to_string(),
            name: "Metacaulk 1200".to_string(),
            category: "Cintas / Wraps".to_string(),
            min_stock: 30,
            location: "B1 - Rack A2".to_string(),
            status: ProductStatus::Active,
            doc_ref: String::new(),
            image_url: String::new(),
        }
    }

    #[test]
    fn new_product_trims_descriptive_fields() {
        let mut d = draft();
        d.code = "  FM-CT-001  ".to_string();
        d.name = " Metacaulk 1200 ".to_string();

        let product = Product::new(ProductId::new(1), &d, 25).unwrap();
        assert_eq!(product.code(), "FM-CT-001");
        assert_eq!(product.name(), "Metacaulk 1200");
        assert_eq!(product.label(), "FM-CT-001 - Metacaulk 1200");
    }

    #[test]
    fn empty_code_is_rejected() {
        let mut d = draft();
        d.code = "   ".to_string();

        let err = Product::new(ProductId::new(1), &d, 0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut d = draft();
        d.name = String::new();

        let err = Product::new(ProductId::new(1), &d, 0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn negative_initial_stock_is_rejected() {
        let err = Product::new(ProductId::new(1), &draft(), -1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn update_replaces_metadata_but_not_stock() {
        let mut product = Product::new(ProductId::new(1), &draft(), 25).unwrap();

        let mut d = draft();
        d.name = "Metacaulk MC 150+".to_string();
        d.status = ProductStatus::Inactive;
        d.min_stock = 5;
        product.update(&d).unwrap();

        assert_eq!(product.name(), "Metacaulk MC 150+");
        assert_eq!(product.status(), ProductStatus::Inactive);
        assert_eq!(product.min_stock(), 5);
        assert_eq!(product.stock(), 25);
    }

    #[test]
    fn low_stock_is_strictly_below_minimum() {
        let mut product = Product::new(ProductId::new(1), &draft(), 25).unwrap();
        assert!(product.is_low_stock()); // 25 < 30

        product.apply_stock(30);
        assert!(!product.is_low_stock());
    }

    #[test]
    fn serializes_with_historical_field_names() {
        let product = Product::new(ProductId::new(1), &draft(), 25).unwrap();
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["minStock"], 30);
        assert_eq!(json["status"], "Activo");
        assert!(json.get("docRef").is_some());
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("min_stock").is_none());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Metadata edits can never move stock.
            #[test]
            fn update_preserves_stock(
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                code in "[A-Z0-9-]{1,12}",
                min_stock in 0i64..10_000,
                stock in 0i64..10_000,
            ) {
                let mut product = Product::new(ProductId::new(1), &draft(), stock).unwrap();

                let d = ProductDraft {
                    code,
                    name,
                    min_stock,
                    ..draft()
                };
                product.update(&d).unwrap();

                prop_assert_eq!(product.stock(), stock);
            }
        }
    }
}
