//! Tenant settings record and partial-update types.
//!
//! One settings record exists per tenant once first requested. Every policy
//! in the validation gates, every numbering scheme, and every amount format
//! is derived from a snapshot of this record.

use chrono::{DateTime, Utc};
use ledgerline_shared::SettingsDefaults;
use ledgerline_shared::types::TenantId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::SettingsError;

/// How tax is applied to a document total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxCalculationMethod {
    /// Tax is already contained in the entered amount.
    Inclusive,
    /// Tax is added on top of the entered amount.
    Exclusive,
}

impl TaxCalculationMethod {
    /// Parse a method from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "inclusive" => Some(Self::Inclusive),
            "exclusive" => Some(Self::Exclusive),
            _ => None,
        }
    }

    /// Returns the string representation of the method.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inclusive => "inclusive",
            Self::Exclusive => "exclusive",
        }
    }
}

/// How consumed stock is costed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockValuationMethod {
    /// First in, first out.
    Fifo,
    /// Last in, first out.
    Lifo,
    /// Weighted average cost.
    WeightedAverage,
}

impl StockValuationMethod {
    /// Parse a method from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fifo" => Some(Self::Fifo),
            "lifo" => Some(Self::Lifo),
            "weighted_average" => Some(Self::WeightedAverage),
            _ => None,
        }
    }

    /// Returns the string representation of the method.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Lifo => "lifo",
            Self::WeightedAverage => "weighted_average",
        }
    }
}

/// Per-tenant configuration record.
///
/// Materialized lazily with defaults on first access; mutated only through
/// partial updates. Field docs state the library default applied at
/// materialization (formatting and numbering seeds come from
/// [`SettingsDefaults`] instead).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantSettings {
    /// Tenant this record belongs to.
    pub tenant_id: TenantId,

    // ========== Fiscal ==========
    /// First month of the fiscal year, 1-12 (default: 1).
    pub fiscal_year_start_month: u32,
    /// Last month of the fiscal year, 1-12 (default: 12).
    pub fiscal_year_end_month: u32,

    // ========== Formatting ==========
    /// ISO 4217 currency code.
    pub currency: String,
    /// Symbol prefixed to rendered amounts.
    pub currency_symbol: String,
    /// Decimal places rendered for amounts, 0-4.
    pub decimal_precision: u32,
    /// Display pattern for dates (e.g., "DD/MM/YYYY").
    pub date_format: String,
    /// IANA time zone name.
    pub time_zone: String,

    // ========== Tax ==========
    /// Tax rate applied when a document has no explicit rate (default: 0).
    pub default_tax_rate: Decimal,
    /// Whether amounts are entered tax-inclusive or tax-exclusive
    /// (default: exclusive).
    pub tax_calculation_method: TaxCalculationMethod,
    /// Allow more than one tax per document line (default: false).
    pub enable_multiple_taxes: bool,

    // ========== Stock policy ==========
    /// Reject stock movements that would drive quantity below zero
    /// (default: true).
    pub prevent_negative_stock: bool,
    /// Costing method for consumed stock (default: FIFO).
    pub stock_valuation_method: StockValuationMethod,
    /// Quantity at or below which a product counts as low stock
    /// (default: 10).
    pub low_stock_threshold: Decimal,
    /// Track stock by batch/lot (default: false).
    pub enable_batch_tracking: bool,
    /// Track stock by serial number (default: false).
    pub enable_serial_numbers: bool,

    // ========== Sales policy ==========
    /// Require approval before a sale is finalized (default: false).
    pub require_approval_for_sales: bool,
    /// Sales at or above this amount need approval; None means every sale
    /// does once approval is required (default: None).
    pub sales_approval_threshold: Option<Decimal>,
    /// Allow editing a sale after creation (default: true).
    pub allow_sales_editing: bool,
    /// Reject duplicate invoice numbers within the tenant (default: true).
    pub prevent_duplicate_invoice: bool,

    // ========== Purchase policy ==========
    /// Require approval before a purchase is finalized (default: false).
    pub require_approval_for_purchases: bool,
    /// Purchases at or above this amount need approval; None means every
    /// purchase does once approval is required (default: None).
    pub purchase_approval_threshold: Option<Decimal>,
    /// Allow editing a purchase after creation (default: true).
    pub allow_purchase_editing: bool,

    // ========== Production policy ==========
    /// Record waste quantities on production runs (default: true).
    pub track_production_waste: bool,
    /// Require approval before a production run is finalized
    /// (default: false).
    pub require_production_approval: bool,

    // ========== Accounting policy ==========
    /// Post transactions double-entry instead of single-sided
    /// (default: false).
    pub use_double_entry: bool,
    /// Reject postings dated inside a closed period (default: false).
    pub lock_past_periods: bool,
    /// Require approval for manual journal entries (default: false).
    pub require_journal_approval: bool,

    // ========== Numbering ==========
    /// Prefix for invoice numbers.
    pub invoice_prefix: String,
    /// Digit count for the invoice sequence, 4-10.
    pub invoice_number_length: u32,
    /// Prefix for purchase order numbers.
    pub purchase_order_prefix: String,
    /// Digit count for the purchase order sequence, 4-10.
    pub po_number_length: u32,

    // ========== Feature flags ==========
    /// Advanced reporting screens (default: false).
    pub enable_advanced_reporting: bool,
    /// Multiple warehouse locations (default: false).
    pub enable_multi_warehouse: bool,
    /// Project cost tracking (default: false).
    pub enable_project_tracking: bool,
    /// Manufacturing module (default: false).
    pub enable_manufacturing: bool,
    /// E-commerce integration (default: false).
    pub enable_ecommerce: bool,

    // ========== Audit ==========
    /// When the record was first materialized.
    pub created_at: DateTime<Utc>,
    /// When the record was last changed.
    pub updated_at: DateTime<Utc>,
}

impl TenantSettings {
    /// Creates the default record for a tenant.
    ///
    /// Formatting and numbering fields are seeded from the deployment
    /// defaults; out-of-range seeds are clamped rather than rejected so a
    /// misconfigured deployment still materializes usable settings.
    #[must_use]
    pub fn new(tenant_id: TenantId, defaults: &SettingsDefaults) -> Self {
        let now = Utc::now();
        Self {
            tenant_id,
            fiscal_year_start_month: 1,
            fiscal_year_end_month: 12,
            currency: defaults.currency.clone(),
            currency_symbol: defaults.currency_symbol.clone(),
            decimal_precision: defaults.decimal_precision.min(4),
            date_format: defaults.date_format.clone(),
            time_zone: defaults.time_zone.clone(),
            default_tax_rate: Decimal::ZERO,
            tax_calculation_method: TaxCalculationMethod::Exclusive,
            enable_multiple_taxes: false,
            prevent_negative_stock: true,
            stock_valuation_method: StockValuationMethod::Fifo,
            low_stock_threshold: Decimal::from(10),
            enable_batch_tracking: false,
            enable_serial_numbers: false,
            require_approval_for_sales: false,
            sales_approval_threshold: None,
            allow_sales_editing: true,
            prevent_duplicate_invoice: true,
            require_approval_for_purchases: false,
            purchase_approval_threshold: None,
            allow_purchase_editing: true,
            track_production_waste: true,
            require_production_approval: false,
            use_double_entry: false,
            lock_past_periods: false,
            require_journal_approval: false,
            invoice_prefix: defaults.invoice_prefix.clone(),
            invoice_number_length: defaults.invoice_number_length.clamp(4, 10),
            purchase_order_prefix: defaults.purchase_order_prefix.clone(),
            po_number_length: defaults.po_number_length.clamp(4, 10),
            enable_advanced_reporting: false,
            enable_multi_warehouse: false,
            enable_project_tracking: false,
            enable_manufacturing: false,
            enable_ecommerce: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a settings record.
///
/// Every field is independently optional; absent fields leave the stored
/// value unchanged. The nullable approval thresholds use a double `Option`:
/// `Some(None)` clears the threshold, `None` leaves it as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsUpdate {
    /// New first month of the fiscal year.
    pub fiscal_year_start_month: Option<u32>,
    /// New last month of the fiscal year.
    pub fiscal_year_end_month: Option<u32>,
    /// New currency code.
    pub currency: Option<String>,
    /// New currency symbol.
    pub currency_symbol: Option<String>,
    /// New decimal precision.
    pub decimal_precision: Option<u32>,
    /// New date display pattern.
    pub date_format: Option<String>,
    /// New time zone name.
    pub time_zone: Option<String>,
    /// New default tax rate.
    pub default_tax_rate: Option<Decimal>,
    /// New tax calculation method.
    pub tax_calculation_method: Option<TaxCalculationMethod>,
    /// Toggle multiple taxes.
    pub enable_multiple_taxes: Option<bool>,
    /// Toggle negative stock prevention.
    pub prevent_negative_stock: Option<bool>,
    /// New stock valuation method.
    pub stock_valuation_method: Option<StockValuationMethod>,
    /// New low stock threshold.
    pub low_stock_threshold: Option<Decimal>,
    /// Toggle batch tracking.
    pub enable_batch_tracking: Option<bool>,
    /// Toggle serial number tracking.
    pub enable_serial_numbers: Option<bool>,
    /// Toggle sales approval.
    pub require_approval_for_sales: Option<bool>,
    /// Set or clear the sales approval threshold.
    pub sales_approval_threshold: Option<Option<Decimal>>,
    /// Toggle sales editing.
    pub allow_sales_editing: Option<bool>,
    /// Toggle duplicate invoice prevention.
    pub prevent_duplicate_invoice: Option<bool>,
    /// Toggle purchase approval.
    pub require_approval_for_purchases: Option<bool>,
    /// Set or clear the purchase approval threshold.
    pub purchase_approval_threshold: Option<Option<Decimal>>,
    /// Toggle purchase editing.
    pub allow_purchase_editing: Option<bool>,
    /// Toggle production waste tracking.
    pub track_production_waste: Option<bool>,
    /// Toggle production approval.
    pub require_production_approval: Option<bool>,
    /// Toggle double-entry posting.
    pub use_double_entry: Option<bool>,
    /// Toggle closed-period locking.
    pub lock_past_periods: Option<bool>,
    /// Toggle journal approval.
    pub require_journal_approval: Option<bool>,
    /// New invoice prefix.
    pub invoice_prefix: Option<String>,
    /// New invoice sequence length.
    pub invoice_number_length: Option<u32>,
    /// New purchase order prefix.
    pub purchase_order_prefix: Option<String>,
    /// New purchase order sequence length.
    pub po_number_length: Option<u32>,
    /// Toggle advanced reporting.
    pub enable_advanced_reporting: Option<bool>,
    /// Toggle multi-warehouse.
    pub enable_multi_warehouse: Option<bool>,
    /// Toggle project tracking.
    pub enable_project_tracking: Option<bool>,
    /// Toggle manufacturing.
    pub enable_manufacturing: Option<bool>,
    /// Toggle e-commerce.
    pub enable_ecommerce: Option<bool>,
}

impl SettingsUpdate {
    /// Validates every present field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidField` naming the first field whose
    /// value is out of range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(month) = self.fiscal_year_start_month
            && !(1..=12).contains(&month)
        {
            return Err(SettingsError::invalid_field(
                "fiscal_year_start_month",
                format!("{month} is not a month (1-12)"),
            ));
        }
        if let Some(month) = self.fiscal_year_end_month
            && !(1..=12).contains(&month)
        {
            return Err(SettingsError::invalid_field(
                "fiscal_year_end_month",
                format!("{month} is not a month (1-12)"),
            ));
        }
        if let Some(precision) = self.decimal_precision
            && precision > 4
        {
            return Err(SettingsError::invalid_field(
                "decimal_precision",
                format!("{precision} exceeds the maximum of 4"),
            ));
        }
        if let Some(length) = self.invoice_number_length
            && !(4..=10).contains(&length)
        {
            return Err(SettingsError::invalid_field(
                "invoice_number_length",
                format!("{length} is outside the allowed range 4-10"),
            ));
        }
        if let Some(length) = self.po_number_length
            && !(4..=10).contains(&length)
        {
            return Err(SettingsError::invalid_field(
                "po_number_length",
                format!("{length} is outside the allowed range 4-10"),
            ));
        }
        Ok(())
    }

    /// Merges every present field into the target record.
    ///
    /// Absent fields leave the target untouched. Does not bump
    /// `updated_at`; the store owns audit timestamps.
    pub fn apply(&self, settings: &mut TenantSettings) {
        if let Some(v) = self.fiscal_year_start_month {
            settings.fiscal_year_start_month = v;
        }
        if let Some(v) = self.fiscal_year_end_month {
            settings.fiscal_year_end_month = v;
        }
        if let Some(v) = &self.currency {
            settings.currency = v.clone();
        }
        if let Some(v) = &self.currency_symbol {
            settings.currency_symbol = v.clone();
        }
        if let Some(v) = self.decimal_precision {
            settings.decimal_precision = v;
        }
        if let Some(v) = &self.date_format {
            settings.date_format = v.clone();
        }
        if let Some(v) = &self.time_zone {
            settings.time_zone = v.clone();
        }
        if let Some(v) = self.default_tax_rate {
            settings.default_tax_rate = v;
        }
        if let Some(v) = self.tax_calculation_method {
            settings.tax_calculation_method = v;
        }
        if let Some(v) = self.enable_multiple_taxes {
            settings.enable_multiple_taxes = v;
        }
        if let Some(v) = self.prevent_negative_stock {
            settings.prevent_negative_stock = v;
        }
        if let Some(v) = self.stock_valuation_method {
            settings.stock_valuation_method = v;
        }
        if let Some(v) = self.low_stock_threshold {
            settings.low_stock_threshold = v;
        }
        if let Some(v) = self.enable_batch_tracking {
            settings.enable_batch_tracking = v;
        }
        if let Some(v) = self.enable_serial_numbers {
            settings.enable_serial_numbers = v;
        }
        if let Some(v) = self.require_approval_for_sales {
            settings.require_approval_for_sales = v;
        }
        if let Some(v) = self.sales_approval_threshold {
            settings.sales_approval_threshold = v;
        }
        if let Some(v) = self.allow_sales_editing {
            settings.allow_sales_editing = v;
        }
        if let Some(v) = self.prevent_duplicate_invoice {
            settings.prevent_duplicate_invoice = v;
        }
        if let Some(v) = self.require_approval_for_purchases {
            settings.require_approval_for_purchases = v;
        }
        if let Some(v) = self.purchase_approval_threshold {
            settings.purchase_approval_threshold = v;
        }
        if let Some(v) = self.allow_purchase_editing {
            settings.allow_purchase_editing = v;
        }
        if let Some(v) = self.track_production_waste {
            settings.track_production_waste = v;
        }
        if let Some(v) = self.require_production_approval {
            settings.require_production_approval = v;
        }
        if let Some(v) = self.use_double_entry {
            settings.use_double_entry = v;
        }
        if let Some(v) = self.lock_past_periods {
            settings.lock_past_periods = v;
        }
        if let Some(v) = self.require_journal_approval {
            settings.require_journal_approval = v;
        }
        if let Some(v) = &self.invoice_prefix {
            settings.invoice_prefix = v.clone();
        }
        if let Some(v) = self.invoice_number_length {
            settings.invoice_number_length = v;
        }
        if let Some(v) = &self.purchase_order_prefix {
            settings.purchase_order_prefix = v.clone();
        }
        if let Some(v) = self.po_number_length {
            settings.po_number_length = v;
        }
        if let Some(v) = self.enable_advanced_reporting {
            settings.enable_advanced_reporting = v;
        }
        if let Some(v) = self.enable_multi_warehouse {
            settings.enable_multi_warehouse = v;
        }
        if let Some(v) = self.enable_project_tracking {
            settings.enable_project_tracking = v;
        }
        if let Some(v) = self.enable_manufacturing {
            settings.enable_manufacturing = v;
        }
        if let Some(v) = self.enable_ecommerce {
            settings.enable_ecommerce = v;
        }
    }
}
