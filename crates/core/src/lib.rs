//! Core business logic for Ledgerline.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and report projections live here.
//!
//! # Modules
//!
//! - `settings` - Per-tenant configuration and derived policy queries
//! - `numbering` - Document number generation from stored documents
//! - `validation` - Business-rule gates returning verdicts
//! - `ledger` - Trial balance and balance sheet projections

pub mod ledger;
pub mod numbering;
pub mod settings;
pub mod validation;
