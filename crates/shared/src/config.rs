//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Seed values applied when a tenant's settings record is first
    /// materialized.
    #[serde(default)]
    pub defaults: SettingsDefaults,
}

/// Deployment-tunable seed values for new tenant settings records.
///
/// Only the formatting and numbering fields vary per deployment; the policy
/// flags always start from the library defaults and are changed per tenant
/// through the settings store.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsDefaults {
    /// ISO 4217 currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Symbol prefixed to rendered amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Decimal places rendered for amounts (0-4).
    #[serde(default = "default_decimal_precision")]
    pub decimal_precision: u32,
    /// Display pattern for dates (e.g., "DD/MM/YYYY").
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// IANA time zone name.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    /// Prefix for invoice numbers.
    #[serde(default = "default_invoice_prefix")]
    pub invoice_prefix: String,
    /// Digit count for the invoice sequence (4-10).
    #[serde(default = "default_number_length")]
    pub invoice_number_length: u32,
    /// Prefix for purchase order numbers.
    #[serde(default = "default_po_prefix")]
    pub purchase_order_prefix: String,
    /// Digit count for the purchase order sequence (4-10).
    #[serde(default = "default_number_length")]
    pub po_number_length: u32,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_decimal_precision() -> u32 {
    2
}

fn default_date_format() -> String {
    "DD/MM/YYYY".to_string()
}

fn default_time_zone() -> String {
    "UTC".to_string()
}

fn default_invoice_prefix() -> String {
    "INV".to_string()
}

fn default_po_prefix() -> String {
    "PO".to_string()
}

fn default_number_length() -> u32 {
    6
}

impl Default for SettingsDefaults {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            currency_symbol: default_currency_symbol(),
            decimal_precision: default_decimal_precision(),
            date_format: default_date_format(),
            time_zone: default_time_zone(),
            invoice_prefix: default_invoice_prefix(),
            invoice_number_length: default_number_length(),
            purchase_order_prefix: default_po_prefix(),
            po_number_length: default_number_length(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LEDGERLINE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
