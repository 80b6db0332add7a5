//! Shared domain types, error definitions, and pure validation helpers.
//!
//! This crate performs no I/O. Everything here is used by both the
//! repository layer (`cutroom-db`) and the HTTP layer (`cutroom-api`).

pub mod error;
pub mod ordering;
pub mod types;
pub mod upload;
