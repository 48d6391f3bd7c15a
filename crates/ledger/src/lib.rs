//! Ledger domain module: stock movements and the delta math behind them.
//!
//! The engine is purely decisional: `plan_movement`, `plan_edit` and
//! `plan_delete` validate input and compute the resulting movement record and
//! stock level, but never mutate anything. `firemat-store` owns the
//! collections and commits the plans.

pub mod engine;
pub mod movement;

pub use engine::{
    DeletePlan, EditPlan, MovementPlan, compute_delta, plan_delete, plan_edit, plan_movement,
};
pub use movement::{Movement, MovementDraft, MovementKind};
