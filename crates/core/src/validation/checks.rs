//! Pure business-rule checks.
//!
//! Every function here is a total function from inputs to a verdict;
//! fetching those inputs is the gate's job. Rule failures come back as
//! rejecting verdicts, never as errors.

use chrono::NaiveDate;
use ledgerline_shared::types::{AccountId, CustomerId, ProductId, SupplierId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::settings::TenantSettings;

use super::period::ClosedPeriod;
use super::verdict::{BatchStockError, BatchStockVerdict, DeleteVerdict, StockVerdict, Verdict};

/// A record whose deletion is being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteTarget {
    /// A product, blocked by sales, purchases and production runs
    Product(ProductId),
    /// A customer, blocked by their sales
    Customer(CustomerId),
    /// A supplier, blocked by their purchases
    Supplier(SupplierId),
    /// A ledger account, blocked by its transactions
    Account(AccountId),
}

/// How many documents of each kind reference a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductReferences {
    /// Sales containing the product
    pub sales: u64,
    /// Purchases containing the product
    pub purchases: u64,
    /// Production runs consuming or producing the product
    pub productions: u64,
}

impl ProductReferences {
    /// Flatten into labelled counts for the deletion check
    pub fn into_counts(self) -> Vec<ReferenceCount> {
        vec![
            ReferenceCount::new("sale", self.sales),
            ReferenceCount::new("purchase", self.purchases),
            ReferenceCount::new("production", self.productions),
        ]
    }
}

/// A count of referencing records under one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceCount {
    /// Singular label, pluralized in messages as "{label}(s)"
    pub label: &'static str,
    /// Number of referencing records
    pub count: u64,
}

impl ReferenceCount {
    /// Create a labelled count
    pub const fn new(label: &'static str, count: u64) -> Self {
        Self { label, count }
    }
}

/// One requested stock movement inside a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockRequest {
    /// Product being moved
    pub product_id: ProductId,
    /// Quantity leaving stock
    pub quantity: Decimal,
}

/// Check whether a stock movement may proceed.
///
/// A product with no stock record counts as zero on hand. When the
/// movement would take stock negative, the tenant's negative-stock
/// policy decides between a rejection and an allowed movement that
/// carries a warning message.
pub fn check_stock(
    settings: &TenantSettings,
    on_hand: Option<Decimal>,
    requested: Decimal,
) -> StockVerdict {
    let current_stock = on_hand.unwrap_or(Decimal::ZERO);
    let remaining = current_stock - requested;

    if remaining < Decimal::ZERO {
        if settings.can_have_negative_stock() {
            return StockVerdict {
                valid: true,
                message: Some(format!(
                    "Stock will go negative: {remaining} remaining after this movement"
                )),
                current_stock,
                remaining,
            };
        }
        return StockVerdict {
            valid: false,
            message: Some(format!(
                "Insufficient stock: {current_stock} available, {requested} requested"
            )),
            current_stock,
            remaining,
        };
    }

    StockVerdict {
        valid: true,
        message: None,
        current_stock,
        remaining,
    }
}

/// Check an invoice number against the tenant's duplicate policy.
///
/// Tenants that allow duplicate invoice numbers accept any number; the
/// conflict flag is only consulted when duplicates are forbidden.
pub fn check_invoice_number(
    settings: &TenantSettings,
    invoice_number: &str,
    conflict: bool,
) -> Verdict {
    if settings.can_have_duplicate_invoice() {
        return Verdict::ok();
    }
    if conflict {
        return Verdict::reject(format!("Invoice number {invoice_number} already exists"));
    }
    Verdict::ok()
}

/// Check a purchase order number for uniqueness.
///
/// Unlike invoices, purchase order numbers have no duplicate policy;
/// a conflict always rejects.
pub fn check_purchase_order_number(po_number: &str, conflict: bool) -> Verdict {
    if conflict {
        return Verdict::reject(format!("Purchase order number {po_number} already exists"));
    }
    Verdict::ok()
}

/// Check whether a record with the given reference counts may be deleted.
///
/// Labels with a zero count are dropped; any remaining count blocks the
/// deletion and shows up as "{count} {label}(s)".
pub fn check_delete(references: &[ReferenceCount]) -> DeleteVerdict {
    let blocking: Vec<String> = references
        .iter()
        .filter(|reference| reference.count > 0)
        .map(|reference| format!("{} {}(s)", reference.count, reference.label))
        .collect();

    if blocking.is_empty() {
        return DeleteVerdict {
            can_delete: true,
            references: Vec::new(),
            message: None,
        };
    }

    let message = format!("Cannot delete: referenced by {}", blocking.join(", "));
    DeleteVerdict {
        can_delete: false,
        references: blocking,
        message: Some(message),
    }
}

/// Check a posting date against the tenant's closed periods.
///
/// Only runs when the tenant locks past periods, and only records whose
/// status is closed block; period bounds are inclusive on both ends.
pub fn check_closed_period(
    settings: &TenantSettings,
    date: NaiveDate,
    periods: &[ClosedPeriod],
) -> Verdict {
    if !settings.lock_past_periods {
        return Verdict::ok();
    }

    match periods
        .iter()
        .find(|period| period.is_closed() && period.contains(date))
    {
        Some(period) => Verdict::reject(format!(
            "Date {date} falls within closed period {}",
            period.name
        )),
        None => Verdict::ok(),
    }
}

/// Check every stock movement in a batch.
///
/// All items are checked; a failing item never stops the rest. Allowed
/// negative movements warn in the single-item check but are valid, so
/// they do not contribute errors here.
pub fn check_stock_batch<F>(
    settings: &TenantSettings,
    items: &[StockRequest],
    on_hand: F,
) -> BatchStockVerdict
where
    F: Fn(ProductId) -> Option<Decimal>,
{
    let mut errors = Vec::new();
    for item in items {
        let verdict = check_stock(settings, on_hand(item.product_id), item.quantity);
        if !verdict.valid {
            errors.push(BatchStockError {
                product_id: item.product_id,
                message: verdict
                    .message
                    .unwrap_or_else(|| "Insufficient stock".to_string()),
                current_stock: verdict.current_stock,
            });
        }
    }

    BatchStockVerdict {
        valid: errors.is_empty(),
        errors,
    }
}
