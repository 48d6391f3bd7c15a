//! Black-box session walkthrough: drives the store the way the UI does,
//! asserting only through the public API.

use anyhow::Result;
use chrono::NaiveDate;

use firemat_auth::{Action, Resource, Role, authorize};
use firemat_catalog::{ProductDraft, ProductStatus};
use firemat_core::DomainError;
use firemat_ledger::{MovementDraft, MovementKind};
use firemat_store::{InventoryStore, ReportFilter, ReportScope, build_report};

fn fecha(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn draft(code: &str, name: &str, category: &str) -> ProductDraft {
    ProductDraft {
        code: code.to_string(),
        sku: format!("SKU-{code}"),
        name: name.to_string(),
        category: category.to_string(),
        min_stock: 20,
        location: "B1 - Rack A2".to_string(),
        status: ProductStatus::Active,
        doc_ref: "OC 789".to_string(),
        image_url: String::new(),
    }
}

#[test]
fn full_session_walkthrough() -> Result<()> {
    firemat_observability::init();

    let mut store = InventoryStore::seeded();

    // A Dueno-gated caller creates a category and a product in it.
    authorize(Role::Dueno, Action::Create, Resource::Category)?;
    store.create_category("Espumas")?;

    authorize(Role::Dueno, Action::Create, Resource::Product)?;
    let product_id = store.create_product(&draft("FM-ES-001", "Blaze Foam", "Espumas"), 10, fecha(2024, 5, 1))?;

    // The alta left its synthetic ledger entry.
    let altas: Vec<_> = store
        .movements()
        .iter()
        .filter(|m| m.tipo == MovementKind::AltaDeProducto && m.producto_id == product_id)
        .collect();
    assert_eq!(altas.len(), 1);
    assert_eq!(altas[0].stock_anterior, 0);
    assert_eq!(altas[0].stock_nuevo, 10);

    // A Gerente may record movements but not rewrite history.
    authorize(Role::Gerente, Action::Create, Resource::Movement)?;
    assert!(authorize(Role::Gerente, Action::Edit, Resource::Movement).is_err());

    let entrada = store.record_movement(
        product_id,
        &MovementDraft::new(MovementKind::Entrada, 15, fecha(2024, 5, 3)).with_documento("Factura 55"),
    )?;
    assert_eq!(store.product(product_id).unwrap().stock(), 25);
    assert!(!store.product(product_id).unwrap().is_low_stock());

    // Oversized Salida clamps at zero instead of failing.
    store.record_movement(
        product_id,
        &MovementDraft::new(MovementKind::Salida, 40, fecha(2024, 5, 4)),
    )?;
    assert_eq!(store.product(product_id).unwrap().stock(), 0);
    assert!(store.product(product_id).unwrap().is_low_stock());

    // History reads newest-first.
    let desc = store.movements_desc();
    assert_eq!(desc[0].tipo, MovementKind::Salida);
    assert_eq!(desc.last().unwrap().tipo, MovementKind::AltaDeProducto);

    // The category is now in use and cannot be removed...
    let err = store.delete_category("Espumas").unwrap_err();
    assert!(matches!(err, DomainError::CategoryInUse(_)));

    // ...until its product is gone.
    store.delete_product(product_id)?;
    store.delete_category("Espumas")?;

    // The ledger survives the product: the entrada can still be edited, then
    // deleted, touching only the record.
    store.edit_movement(
        entrada,
        &MovementDraft::new(MovementKind::Entrada, 20, fecha(2024, 5, 3)),
    )?;
    assert_eq!(store.movement(entrada).unwrap().cantidad, 20);
    store.delete_movement(entrada)?;
    assert!(store.movement(entrada).is_none());

    // Reports keep serving the remaining data.
    let report = build_report(&store, ReportScope::Movimientos, &ReportFilter::default());
    assert_eq!(report.title, "Historial de movimientos");
    assert_eq!(report.rows.len(), store.movements().len());

    let summary = store.summary();
    assert_eq!(summary.product_count, 3); // the seeded catalog
    assert_eq!(summary.total_stock, 25 + 120 + 60);

    Ok(())
}

#[test]
fn edit_after_interleaved_movements_uses_the_recorded_base() -> Result<()> {
    // The documented drift: reversal happens against the movement's own
    // stock_anterior, so an interleaved movement makes it approximate.
    let mut store = InventoryStore::new();
    store.create_category("General")?;
    let id = store.create_product(&draft("P-1", "Producto", "General"), 10, fecha(2024, 1, 1))?;

    let first = store.record_movement(
        id,
        &MovementDraft::new(MovementKind::Entrada, 5, fecha(2024, 1, 2)),
    )?; // stock 15, recorded against base 10
    store.record_movement(
        id,
        &MovementDraft::new(MovementKind::Entrada, 7, fecha(2024, 1, 3)),
    )?; // stock 22

    // Edit the first entrada into an ajuste targeting 12: delta_old = +5,
    // delta_new = 12 - 10 = +2 -> live stock 22 - 5 + 2 = 19.
    store.edit_movement(first, &MovementDraft::new(MovementKind::Ajuste, 12, fecha(2024, 1, 2)))?;
    assert_eq!(store.product(id).unwrap().stock(), 19);
    assert_eq!(store.movement(first).unwrap().stock_nuevo, 12);

    Ok(())
}
