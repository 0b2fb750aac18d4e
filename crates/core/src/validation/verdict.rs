//! Verdict types - rule outcomes carried as data, not errors.

use ledgerline_shared::types::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of a single business-rule check.
///
/// A failed check is a rejecting verdict, not an `Err`; errors are
/// reserved for infrastructure failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the checked operation may proceed
    pub valid: bool,
    /// Human-readable reason when the operation is rejected
    pub message: Option<String>,
}

impl Verdict {
    /// A passing verdict
    pub const fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A rejecting verdict with a reason
    pub fn reject(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Outcome of a stock availability check.
///
/// Carries the observed stock level either way so callers can show it,
/// and a warning message even when the movement is allowed to proceed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockVerdict {
    /// Whether the movement may proceed
    pub valid: bool,
    /// Rejection reason, or a warning for an allowed negative movement
    pub message: Option<String>,
    /// Stock on hand at the time of the check
    pub current_stock: Decimal,
    /// Stock that would remain after the movement
    pub remaining: Decimal,
}

/// Outcome of a deletion check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteVerdict {
    /// Whether the record may be deleted
    pub can_delete: bool,
    /// Descriptions of the references blocking deletion, e.g. "2 sale(s)"
    pub references: Vec<String>,
    /// Human-readable summary when deletion is blocked
    pub message: Option<String>,
}

/// One failing item inside a batch stock check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchStockError {
    /// Product the failure belongs to
    pub product_id: ProductId,
    /// Rejection reason for this product
    pub message: String,
    /// Stock on hand at the time of the check
    pub current_stock: Decimal,
}

/// Outcome of checking several stock movements at once.
///
/// Every item is checked; the verdict is valid only when no item was
/// rejected. Allowed-negative warnings do not appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchStockVerdict {
    /// Whether every movement may proceed
    pub valid: bool,
    /// Failures keyed by product
    pub errors: Vec<BatchStockError>,
}
