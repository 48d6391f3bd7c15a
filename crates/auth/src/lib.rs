//! `firemat-auth` — pure role/permission policy boundary.
//!
//! This crate is intentionally decoupled from the store: callers check a
//! mutation here *before* invoking it, the store itself never looks at roles.

pub mod authorize;
pub mod permissions;
pub mod roles;

pub use authorize::{AuthzError, authorize};
pub use permissions::{Action, Resource};
pub use roles::{Role, UnknownRole};
