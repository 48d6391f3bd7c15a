use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use firemat_core::{Entity, MovementId, ProductId};

/// Kind of ledger movement.
///
/// Serialized with the historical Spanish literals ("Entrada", "Salida",
/// "Ajuste", "Alta de producto").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementKind {
    /// Goods in: quantity is added to stock.
    #[serde(rename = "Entrada")]
    Entrada,
    /// Goods out: quantity is subtracted from stock.
    #[serde(rename = "Salida")]
    Salida,
    /// Stock take: quantity is the target absolute level, not an increment.
    #[serde(rename = "Ajuste")]
    Ajuste,
    /// Synthetic movement appended when a product is created with stock.
    #[serde(rename = "Alta de producto")]
    AltaDeProducto,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Entrada => "Entrada",
            MovementKind::Salida => "Salida",
            MovementKind::Ajuste => "Ajuste",
            MovementKind::AltaDeProducto => "Alta de producto",
        }
    }
}

impl core::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ledger entry: a stock change with its before/after levels.
///
/// `producto` is a cached display label ("CODE - Name") frozen at creation
/// time; it is kept for historical accuracy even if the product is later
/// renamed or removed. `stock_anterior` is likewise frozen: edits recompute
/// `stock_nuevo` but never touch the recorded starting level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub id: MovementId,
    pub fecha: NaiveDate,
    pub producto_id: ProductId,
    pub producto: String,
    pub tipo: MovementKind,
    pub cantidad: i64,
    pub stock_anterior: i64,
    pub stock_nuevo: i64,
    pub motivo: String,
    pub documento: String,
}

impl Entity for Movement {
    type Id = MovementId;

    fn id(&self) -> MovementId {
        self.id
    }
}

/// Caller input for creating or editing a movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementDraft {
    pub tipo: MovementKind,
    pub cantidad: i64,
    pub fecha: NaiveDate,
    pub motivo: String,
    pub documento: String,
}

impl MovementDraft {
    pub fn new(tipo: MovementKind, cantidad: i64, fecha: NaiveDate) -> Self {
        Self {
            tipo,
            cantidad,
            fecha,
            motivo: String::new(),
            documento: String::new(),
        }
    }

    pub fn with_motivo(mut self, motivo: impl Into<String>) -> Self {
        self.motivo = motivo.into();
        self
    }

    pub fn with_documento(mut self, documento: impl Into<String>) -> Self {
        self.documento = documento.into();
        self
    }
}
