//! `firemat-store` — the authoritative in-memory inventory state.
//!
//! One `InventoryStore` per session owns the four collections (products,
//! categories, role records, movements) and enforces the invariants that span
//! them. Stock math is delegated to `firemat-ledger`; this crate only commits
//! the resulting plans and answers read queries for the display and export
//! collaborators.

pub mod report;
mod seed;
pub mod store;

pub use report::{Report, ReportFilter, ReportScope, build_report};
pub use store::{InventoryStore, InventorySummary};
