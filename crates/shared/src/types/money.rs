//! Currency formatting with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` end to end; this module only
//! decides how they are rendered for a tenant.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How a tenant renders monetary amounts.
///
/// Derived from the tenant's settings; carries everything a caller needs
/// to display an amount without consulting the settings record again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// ISO 4217 currency code (e.g., "USD", "IDR").
    pub currency: String,
    /// Symbol prefixed to rendered amounts.
    pub symbol: String,
    /// Fixed number of decimal places (0-4).
    pub decimal_places: u32,
}

impl CurrencyFormat {
    /// Creates a new format description.
    #[must_use]
    pub const fn new(currency: String, symbol: String, decimal_places: u32) -> Self {
        Self {
            currency,
            symbol,
            decimal_places,
        }
    }

    /// Renders an amount with the symbol prefixed and exactly
    /// `decimal_places` fractional digits.
    ///
    /// Uses banker's rounding so repeated formatting does not drift
    /// totals upward.
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount
            .round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointNearestEven);
        format!(
            "{}{:.prec$}",
            self.symbol,
            rounded,
            prec = self.decimal_places as usize
        )
    }
}
