//! Inventory domain: product store, derived list views and summary statistics.
//!
//! Everything here is framework-agnostic; the `frontend` crate renders it.

pub mod dashboards;
pub mod domain;
pub mod projections;
pub mod shared;
