//! Initial catalog: the products, categories and role records a fresh
//! session starts from.

use firemat_catalog::{Category, Product, ProductDraft, ProductStatus, RoleRecord};
use firemat_core::{ProductId, RoleId};

pub(crate) fn products() -> Vec<Product> {
    [
        (
            1,
            "FM-CT-001",
            "SKU-CT-001",
            "Metacaulk 1200",
            "Cintas / Wraps",
            25,
            30,
            "B1 - Rack A2",
            "/img/products/Blaze-Foam-Intumescent-Compressible-Firestop-Foam-300x300.jpg",
        ),
        (
            2,
            "FM-SL-010",
            "SKU-SL-010",
            "Metacaulk MC 150+",
            "Sellos y Spray",
            120,
            40,
            "B1 - Rack B1",
            "/img/products/Metacaulk-1200-Firestop-Sealant.png",
        ),
        (
            3,
            "FM-AC-005",
            "SKU-AC-005",
            "Accesorio generico",
            "Accesorios",
            60,
            20,
            "B2 - Rack C3",
            "/img/products/Blaze-Foam-Intumescent-Compressible-Firestop-Foam-300x300.jpg",
        ),
    ]
    .into_iter()
    .map(|(id, code, sku, name, category, stock, min_stock, location, image_url)| {
        let draft = ProductDraft {
            code: code.to_string(),
            sku: sku.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            min_stock,
            location: location.to_string(),
            status: ProductStatus::Active,
            doc_ref: String::new(),
            image_url: image_url.to_string(),
        };
        Product::new(ProductId::new(id), &draft, stock).expect("seed catalog is valid")
    })
    .collect()
}

pub(crate) fn categories() -> Vec<Category> {
    ["Sellos y Spray", "Grandes Pasadas", "Cintas / Wraps", "Accesorios"]
        .into_iter()
        .map(|name| Category::new(name).expect("seed catalog is valid"))
        .collect()
}

pub(crate) fn roles() -> Vec<RoleRecord> {
    [(1, "Dueno"), (2, "Ejecutivo"), (3, "Gerente")]
        .into_iter()
        .map(|(id, name)| RoleRecord::new(RoleId::new(id), name, "").expect("seed catalog is valid"))
        .collect()
}
