//! Validation gate - gathers inputs and applies the pure rule checks.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::DashMap;
use ledgerline_shared::types::{
    AccountId, CustomerId, ProductId, PurchaseId, SaleId, SupplierId, TenantId,
};
use rust_decimal::Decimal;

use crate::settings::TenantSettings;

use super::checks::{
    DeleteTarget, ProductReferences, ReferenceCount, StockRequest, check_closed_period,
    check_delete, check_invoice_number, check_purchase_order_number, check_stock,
    check_stock_batch,
};
use super::error::GateError;
use super::period::ClosedPeriod;
use super::verdict::{BatchStockVerdict, DeleteVerdict, StockVerdict, Verdict};

/// Read access to the records business-rule checks run against.
pub trait GateSource: Send + Sync {
    /// Stock on hand for a product, `None` when it has no stock record
    fn stock_on_hand(
        &self,
        tenant_id: TenantId,
        product_id: ProductId,
    ) -> impl std::future::Future<Output = Result<Option<Decimal>, GateError>> + Send;

    /// Whether a sale other than `exclude` already uses this invoice number
    fn sale_number_exists(
        &self,
        tenant_id: TenantId,
        number: &str,
        exclude: Option<SaleId>,
    ) -> impl std::future::Future<Output = Result<bool, GateError>> + Send;

    /// Whether a purchase other than `exclude` already uses this order number
    fn purchase_number_exists(
        &self,
        tenant_id: TenantId,
        number: &str,
        exclude: Option<PurchaseId>,
    ) -> impl std::future::Future<Output = Result<bool, GateError>> + Send;

    /// Documents of each kind referencing a product
    fn product_references(
        &self,
        tenant_id: TenantId,
        product_id: ProductId,
    ) -> impl std::future::Future<Output = Result<ProductReferences, GateError>> + Send;

    /// Number of sales belonging to a customer
    fn customer_sale_count(
        &self,
        tenant_id: TenantId,
        customer_id: CustomerId,
    ) -> impl std::future::Future<Output = Result<u64, GateError>> + Send;

    /// Number of purchases belonging to a supplier
    fn supplier_purchase_count(
        &self,
        tenant_id: TenantId,
        supplier_id: SupplierId,
    ) -> impl std::future::Future<Output = Result<u64, GateError>> + Send;

    /// Number of ledger entries posted to an account
    fn account_entry_count(
        &self,
        tenant_id: TenantId,
        account_id: AccountId,
    ) -> impl std::future::Future<Output = Result<u64, GateError>> + Send;

    /// Every period record for a tenant, open or closed
    fn closed_periods(
        &self,
        tenant_id: TenantId,
    ) -> impl std::future::Future<Output = Result<Vec<ClosedPeriod>, GateError>> + Send;
}

/// Applies business rules to operations before they are persisted.
///
/// Every method takes the caller's settings snapshot, so one settings
/// read covers a whole request. Methods return `Err` only when the
/// source fails; a broken rule is a rejecting verdict.
pub struct ValidationGate<S: GateSource> {
    source: Arc<S>,
}

impl<S: GateSource> ValidationGate<S> {
    /// Create a gate over the given source
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Check a single stock movement against on-hand stock
    pub async fn validate_stock(
        &self,
        settings: &TenantSettings,
        product_id: ProductId,
        quantity: Decimal,
    ) -> Result<StockVerdict, GateError> {
        let on_hand = self
            .source
            .stock_on_hand(settings.tenant_id, product_id)
            .await?;
        Ok(check_stock(settings, on_hand, quantity))
    }

    /// Check an invoice number against the tenant's duplicate policy.
    ///
    /// Skips the lookup entirely when the tenant allows duplicates.
    /// Pass `exclude` when editing so a sale does not conflict with
    /// its own number.
    pub async fn validate_invoice_number(
        &self,
        settings: &TenantSettings,
        invoice_number: &str,
        exclude: Option<SaleId>,
    ) -> Result<Verdict, GateError> {
        if settings.can_have_duplicate_invoice() {
            return Ok(Verdict::ok());
        }
        let conflict = self
            .source
            .sale_number_exists(settings.tenant_id, invoice_number, exclude)
            .await?;
        Ok(check_invoice_number(settings, invoice_number, conflict))
    }

    /// Check a purchase order number for uniqueness, always enforced
    pub async fn validate_purchase_order_number(
        &self,
        settings: &TenantSettings,
        po_number: &str,
        exclude: Option<PurchaseId>,
    ) -> Result<Verdict, GateError> {
        let conflict = self
            .source
            .purchase_number_exists(settings.tenant_id, po_number, exclude)
            .await?;
        Ok(check_purchase_order_number(po_number, conflict))
    }

    /// Check whether a record may be deleted given what references it
    pub async fn can_delete(
        &self,
        tenant_id: TenantId,
        target: DeleteTarget,
    ) -> Result<DeleteVerdict, GateError> {
        let counts = match target {
            DeleteTarget::Product(id) => self
                .source
                .product_references(tenant_id, id)
                .await?
                .into_counts(),
            DeleteTarget::Customer(id) => vec![ReferenceCount::new(
                "sale",
                self.source.customer_sale_count(tenant_id, id).await?,
            )],
            DeleteTarget::Supplier(id) => vec![ReferenceCount::new(
                "purchase",
                self.source.supplier_purchase_count(tenant_id, id).await?,
            )],
            DeleteTarget::Account(id) => vec![ReferenceCount::new(
                "transaction",
                self.source.account_entry_count(tenant_id, id).await?,
            )],
        };
        Ok(check_delete(&counts))
    }

    /// Check a posting date against closed periods.
    ///
    /// Skips the lookup when the tenant does not lock past periods.
    pub async fn validate_date_not_in_closed_period(
        &self,
        settings: &TenantSettings,
        date: NaiveDate,
    ) -> Result<Verdict, GateError> {
        if !settings.lock_past_periods {
            return Ok(Verdict::ok());
        }
        let periods = self.source.closed_periods(settings.tenant_id).await?;
        Ok(check_closed_period(settings, date, &periods))
    }

    /// Check every stock movement in a batch, fetching each product once
    pub async fn validate_stock_batch(
        &self,
        settings: &TenantSettings,
        items: &[StockRequest],
    ) -> Result<BatchStockVerdict, GateError> {
        let mut levels: HashMap<ProductId, Option<Decimal>> = HashMap::new();
        for item in items {
            if !levels.contains_key(&item.product_id) {
                let on_hand = self
                    .source
                    .stock_on_hand(settings.tenant_id, item.product_id)
                    .await?;
                levels.insert(item.product_id, on_hand);
            }
        }
        Ok(check_stock_batch(settings, items, |id| {
            levels.get(&id).copied().flatten()
        }))
    }
}

/// In-memory gate source for tests and single-process setups.
#[derive(Debug, Default)]
pub struct MemoryGateSource {
    stock: DashMap<(TenantId, ProductId), Decimal>,
    sale_numbers: DashMap<(TenantId, String), SaleId>,
    purchase_numbers: DashMap<(TenantId, String), PurchaseId>,
    product_refs: DashMap<(TenantId, ProductId), ProductReferences>,
    customer_sales: DashMap<(TenantId, CustomerId), u64>,
    supplier_purchases: DashMap<(TenantId, SupplierId), u64>,
    account_entries: DashMap<(TenantId, AccountId), u64>,
    periods: DashMap<TenantId, Vec<ClosedPeriod>>,
}

impl MemoryGateSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stock on hand for a product
    pub fn set_stock(&self, tenant_id: TenantId, product_id: ProductId, on_hand: Decimal) {
        self.stock.insert((tenant_id, product_id), on_hand);
    }

    /// Record a sale as the owner of an invoice number
    pub fn insert_sale_number(
        &self,
        tenant_id: TenantId,
        number: impl Into<String>,
        sale_id: SaleId,
    ) {
        self.sale_numbers.insert((tenant_id, number.into()), sale_id);
    }

    /// Record a purchase as the owner of an order number
    pub fn insert_purchase_number(
        &self,
        tenant_id: TenantId,
        number: impl Into<String>,
        purchase_id: PurchaseId,
    ) {
        self.purchase_numbers
            .insert((tenant_id, number.into()), purchase_id);
    }

    /// Set the reference counts for a product
    pub fn set_product_references(
        &self,
        tenant_id: TenantId,
        product_id: ProductId,
        references: ProductReferences,
    ) {
        self.product_refs.insert((tenant_id, product_id), references);
    }

    /// Set the number of sales a customer owns
    pub fn set_customer_sales(&self, tenant_id: TenantId, customer_id: CustomerId, count: u64) {
        self.customer_sales.insert((tenant_id, customer_id), count);
    }

    /// Set the number of purchases a supplier owns
    pub fn set_supplier_purchases(
        &self,
        tenant_id: TenantId,
        supplier_id: SupplierId,
        count: u64,
    ) {
        self.supplier_purchases
            .insert((tenant_id, supplier_id), count);
    }

    /// Set the number of entries posted to an account
    pub fn set_account_entries(&self, tenant_id: TenantId, account_id: AccountId, count: u64) {
        self.account_entries.insert((tenant_id, account_id), count);
    }

    /// Add a period record for its tenant
    pub fn add_period(&self, period: ClosedPeriod) {
        self.periods
            .entry(period.tenant_id)
            .or_default()
            .push(period);
    }
}

impl GateSource for MemoryGateSource {
    async fn stock_on_hand(
        &self,
        tenant_id: TenantId,
        product_id: ProductId,
    ) -> Result<Option<Decimal>, GateError> {
        Ok(self
            .stock
            .get(&(tenant_id, product_id))
            .map(|entry| *entry.value()))
    }

    async fn sale_number_exists(
        &self,
        tenant_id: TenantId,
        number: &str,
        exclude: Option<SaleId>,
    ) -> Result<bool, GateError> {
        Ok(self
            .sale_numbers
            .get(&(tenant_id, number.to_string()))
            .is_some_and(|entry| exclude != Some(*entry.value())))
    }

    async fn purchase_number_exists(
        &self,
        tenant_id: TenantId,
        number: &str,
        exclude: Option<PurchaseId>,
    ) -> Result<bool, GateError> {
        Ok(self
            .purchase_numbers
            .get(&(tenant_id, number.to_string()))
            .is_some_and(|entry| exclude != Some(*entry.value())))
    }

    async fn product_references(
        &self,
        tenant_id: TenantId,
        product_id: ProductId,
    ) -> Result<ProductReferences, GateError> {
        Ok(self
            .product_refs
            .get(&(tenant_id, product_id))
            .map(|entry| *entry.value())
            .unwrap_or_default())
    }

    async fn customer_sale_count(
        &self,
        tenant_id: TenantId,
        customer_id: CustomerId,
    ) -> Result<u64, GateError> {
        Ok(self
            .customer_sales
            .get(&(tenant_id, customer_id))
            .map_or(0, |entry| *entry.value()))
    }

    async fn supplier_purchase_count(
        &self,
        tenant_id: TenantId,
        supplier_id: SupplierId,
    ) -> Result<u64, GateError> {
        Ok(self
            .supplier_purchases
            .get(&(tenant_id, supplier_id))
            .map_or(0, |entry| *entry.value()))
    }

    async fn account_entry_count(
        &self,
        tenant_id: TenantId,
        account_id: AccountId,
    ) -> Result<u64, GateError> {
        Ok(self
            .account_entries
            .get(&(tenant_id, account_id))
            .map_or(0, |entry| *entry.value()))
    }

    async fn closed_periods(&self, tenant_id: TenantId) -> Result<Vec<ClosedPeriod>, GateError> {
        Ok(self
            .periods
            .get(&tenant_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }
}
