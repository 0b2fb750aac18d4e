//! Validation module - business-rule gates that return verdicts.
//!
//! This module provides:
//! - Verdict types carried as data, never thrown
//! - Pure rule checks for stock, numbering conflicts, deletion and periods
//! - The `ValidationGate` service that gathers inputs for the checks
//! - Closed accounting periods with inclusive date ranges

pub mod checks;
pub mod error;
pub mod gate;
pub mod period;
pub mod verdict;

#[cfg(test)]
mod checks_props;

pub use checks::{DeleteTarget, ProductReferences, ReferenceCount, StockRequest};
pub use error::GateError;
pub use gate::{GateSource, MemoryGateSource, ValidationGate};
pub use period::{ClosedPeriod, PeriodStatus};
pub use verdict::{BatchStockError, BatchStockVerdict, DeleteVerdict, StockVerdict, Verdict};
