//! Stock delta computation and movement planning.
//!
//! Planning functions decide, the store applies: each `plan_*` call validates
//! its input up front and returns the full outcome (updated record + target
//! stock level) without mutating anything, so a failed call leaves no partial
//! state behind.

use firemat_catalog::Product;
use firemat_core::{DomainError, DomainResult, Entity, MovementId};

use crate::movement::{Movement, MovementDraft, MovementKind};

/// Signed stock change implied by a movement.
///
/// Single source of truth for movement semantics:
/// - Entrada / Alta de producto add `cantidad`;
/// - Salida subtracts `cantidad`;
/// - Ajuste treats `cantidad` as the target absolute level, so the delta is
///   `cantidad - stock_anterior`.
pub fn compute_delta(tipo: MovementKind, cantidad: i64, stock_anterior: i64) -> i64 {
    match tipo {
        MovementKind::Entrada | MovementKind::AltaDeProducto => cantidad,
        MovementKind::Salida => -cantidad,
        MovementKind::Ajuste => cantidad - stock_anterior,
    }
}

/// Outcome of planning a new movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementPlan {
    pub movement: Movement,
    pub new_stock: i64,
}

/// Outcome of planning an edit of an existing movement.
///
/// `new_stock` is `None` when the owning product no longer exists: the record
/// is still rewritten, there is just no stock left to adjust.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPlan {
    pub movement: Movement,
    pub new_stock: Option<i64>,
}

/// Outcome of planning a movement deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePlan {
    pub new_stock: Option<i64>,
}

/// Plan a new movement against a product.
///
/// Live stock is clamped at zero: a Salida larger than the available stock
/// floors the product at zero instead of failing. A Salida against an
/// Inactivo product is rejected outright.
pub fn plan_movement(
    product: &Product,
    id: MovementId,
    draft: &MovementDraft,
) -> DomainResult<MovementPlan> {
    validate_cantidad(draft.cantidad)?;

    if draft.tipo == MovementKind::Salida && !product.is_active() {
        return Err(DomainError::inactive_product(product.label()));
    }

    let stock_anterior = product.stock();
    let delta = compute_delta(draft.tipo, draft.cantidad, stock_anterior);
    let new_stock = (stock_anterior + delta).max(0);

    let movement = Movement {
        id,
        fecha: draft.fecha,
        producto_id: product.id(),
        producto: product.label(),
        tipo: draft.tipo,
        cantidad: draft.cantidad,
        stock_anterior,
        stock_nuevo: new_stock,
        motivo: draft.motivo.trim().to_string(),
        documento: draft.documento.trim().to_string(),
    };

    Ok(MovementPlan { movement, new_stock })
}

/// Plan an edit of an existing movement: reverse the old effect, apply the
/// new one.
///
/// Both deltas are computed against the movement's recorded `stock_anterior`,
/// not the product's live stock. When later movements have hit the same
/// product the reversal is therefore approximate; with no interleaving it is
/// exact. The rewritten record's `stock_nuevo` is deliberately left
/// unclamped, while the live product stock is clamped at zero as always.
pub fn plan_edit(
    old: &Movement,
    product: Option<&Product>,
    draft: &MovementDraft,
) -> DomainResult<EditPlan> {
    validate_cantidad(draft.cantidad)?;

    let delta_old = compute_delta(old.tipo, old.cantidad, old.stock_anterior);
    let delta_new = compute_delta(draft.tipo, draft.cantidad, old.stock_anterior);

    let new_stock = product.map(|p| (p.stock() - delta_old + delta_new).max(0));

    let movement = Movement {
        id: old.id,
        fecha: draft.fecha,
        producto_id: old.producto_id,
        producto: old.producto.clone(),
        tipo: draft.tipo,
        cantidad: draft.cantidad,
        stock_anterior: old.stock_anterior,
        stock_nuevo: old.stock_anterior + delta_new,
        motivo: draft.motivo.trim().to_string(),
        documento: draft.documento.trim().to_string(),
    };

    Ok(EditPlan { movement, new_stock })
}

/// Plan the removal of a movement: back its delta out of the live stock.
pub fn plan_delete(movement: &Movement, product: Option<&Product>) -> DeletePlan {
    let delta_old = compute_delta(movement.tipo, movement.cantidad, movement.stock_anterior);
    DeletePlan {
        new_stock: product.map(|p| (p.stock() - delta_old).max(0)),
    }
}

fn validate_cantidad(cantidad: i64) -> DomainResult<()> {
    if cantidad <= 0 {
        return Err(DomainError::validation("cantidad must be greater than 0"));
    }
    Ok(())
}
