//! Tabular report projections for the export collaborator.
//!
//! The core exposes stable, already-filtered rows; turning them into PDF or
//! spreadsheet files is the exporter's problem.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::InventoryStore;

/// Which dataset a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportScope {
    /// Current catalog with stock levels.
    #[serde(rename = "inventario")]
    Inventario,
    /// Products strictly below their minimum.
    #[serde(rename = "bajo")]
    Bajo,
    /// Movement history.
    #[serde(rename = "movimientos")]
    Movimientos,
}

/// Optional narrowing of a report.
///
/// `category` applies to the product scopes, the date range to movements,
/// and `search` matches any cell case-insensitively in every scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub category: Option<String>,
    pub search: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

/// A rendered report: title, column headers, stringified rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub title: String,
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the report for a scope, applying the filter.
pub fn build_report(store: &InventoryStore, scope: ReportScope, filter: &ReportFilter) -> Report {
    let mut report = match scope {
        ReportScope::Inventario => inventario_rows(store, filter),
        ReportScope::Bajo => bajo_rows(store, filter),
        ReportScope::Movimientos => movimientos_rows(store, filter),
    };

    if let Some(term) = filter.search.as_deref() {
        let term = term.trim().to_lowercase();
        if !term.is_empty() {
            report
                .rows
                .retain(|row| row.iter().any(|cell| cell.to_lowercase().contains(&term)));
        }
    }

    report
}

fn category_matches(filter: &ReportFilter, category: &str) -> bool {
    match filter.category.as_deref() {
        Some(wanted) => category == wanted,
        None => true,
    }
}

fn inventario_rows(store: &InventoryStore, filter: &ReportFilter) -> Report {
    let rows = store
        .products()
        .iter()
        .filter(|p| category_matches(filter, p.category()))
        .map(|p| {
            vec![
                p.code().to_string(),
                p.sku().to_string(),
                p.name().to_string(),
                p.category().to_string(),
                p.stock().to_string(),
                p.min_stock().to_string(),
                p.status().to_string(),
            ]
        })
        .collect();

    Report {
        title: "Inventario actual".to_string(),
        columns: vec!["Codigo", "SKU", "Nombre", "Categoria", "Stock", "Minimo", "Estado"],
        rows,
    }
}

fn bajo_rows(store: &InventoryStore, filter: &ReportFilter) -> Report {
    let rows = store
        .low_stock()
        .into_iter()
        .filter(|p| category_matches(filter, p.category()))
        .map(|p| {
            vec![
                p.code().to_string(),
                p.name().to_string(),
                p.category().to_string(),
                p.stock().to_string(),
                p.min_stock().to_string(),
                p.location().to_string(),
            ]
        })
        .collect();

    Report {
        title: "Stock bajo".to_string(),
        columns: vec!["Codigo", "Nombre", "Categoria", "Stock", "Minimo", "Ubicacion"],
        rows,
    }
}

fn movimientos_rows(store: &InventoryStore, filter: &ReportFilter) -> Report {
    let rows = store
        .movements()
        .iter()
        .filter(|m| filter.date_from.is_none_or(|from| m.fecha >= from))
        .filter(|m| filter.date_to.is_none_or(|to| m.fecha <= to))
        .map(|m| {
            vec![
                m.fecha.to_string(),
                m.producto.clone(),
                m.tipo.to_string(),
                m.cantidad.to_string(),
                m.stock_anterior.to_string(),
                m.stock_nuevo.to_string(),
                m.motivo.clone(),
                m.documento.clone(),
            ]
        })
        .collect();

    Report {
        title: "Historial de movimientos".to_string(),
        columns: vec![
            "Fecha",
            "Producto",
            "Tipo",
            "Cantidad",
            "Stock antes",
            "Stock despues",
            "Motivo",
            "Documento",
        ],
        rows,
    }
}
