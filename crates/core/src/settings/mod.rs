//! Tenant settings module - per-tenant configuration and derived policy.
//!
//! This module provides:
//! - The `TenantSettings` record and its seeded defaults
//! - Partial updates with field validation
//! - The `SettingsStore` service with lazy materialization and reset
//! - Derived policy queries (stock, duplicates, approvals, feature flags)

pub mod error;
pub mod policy;
pub mod store;
pub mod types;

#[cfg(test)]
mod policy_props;
#[cfg(test)]
mod types_props;

pub use error::SettingsError;
pub use policy::Feature;
pub use store::{MemorySettingsRepository, SettingsRepository, SettingsStore};
pub use types::{SettingsUpdate, StockValuationMethod, TaxCalculationMethod, TenantSettings};
