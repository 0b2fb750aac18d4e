//! Derived policy queries over a settings snapshot.
//!
//! These are pure reads: every gate and numbering call receives a
//! [`TenantSettings`] snapshot and asks it questions, so concurrent
//! settings updates only affect calls that fetch a fresh snapshot.

use ledgerline_shared::types::CurrencyFormat;
use rust_decimal::Decimal;

use super::types::TenantSettings;

/// Named feature flags a tenant can toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// Advanced reporting screens.
    AdvancedReporting,
    /// Multiple warehouse locations.
    MultiWarehouse,
    /// Project cost tracking.
    ProjectTracking,
    /// Manufacturing module.
    Manufacturing,
    /// E-commerce integration.
    Ecommerce,
}

impl Feature {
    /// Parse a feature from its canonical name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "advanced_reporting" => Some(Self::AdvancedReporting),
            "multi_warehouse" => Some(Self::MultiWarehouse),
            "project_tracking" => Some(Self::ProjectTracking),
            "manufacturing" => Some(Self::Manufacturing),
            "ecommerce" => Some(Self::Ecommerce),
            _ => None,
        }
    }

    /// Returns the canonical name of the feature.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdvancedReporting => "advanced_reporting",
            Self::MultiWarehouse => "multi_warehouse",
            Self::ProjectTracking => "project_tracking",
            Self::Manufacturing => "manufacturing",
            Self::Ecommerce => "ecommerce",
        }
    }
}

impl TenantSettings {
    /// Whether stock may be driven below zero.
    #[must_use]
    pub fn can_have_negative_stock(&self) -> bool {
        !self.prevent_negative_stock
    }

    /// Whether two sales may share an invoice number.
    #[must_use]
    pub fn can_have_duplicate_invoice(&self) -> bool {
        !self.prevent_duplicate_invoice
    }

    /// Whether a sale of the given amount needs approval.
    ///
    /// False when approval is off; true when approval is on and no
    /// threshold is set; otherwise true iff the amount reaches the
    /// threshold.
    #[must_use]
    pub fn requires_sales_approval(&self, amount: Decimal) -> bool {
        if !self.require_approval_for_sales {
            return false;
        }
        self.sales_approval_threshold
            .is_none_or(|threshold| amount >= threshold)
    }

    /// Whether a purchase of the given amount needs approval.
    ///
    /// Same rule as sales approval, against the purchase threshold.
    #[must_use]
    pub fn requires_purchase_approval(&self, amount: Decimal) -> bool {
        if !self.require_approval_for_purchases {
            return false;
        }
        self.purchase_approval_threshold
            .is_none_or(|threshold| amount >= threshold)
    }

    /// Whether a feature flag is enabled.
    #[must_use]
    pub fn is_feature_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::AdvancedReporting => self.enable_advanced_reporting,
            Feature::MultiWarehouse => self.enable_multi_warehouse,
            Feature::ProjectTracking => self.enable_project_tracking,
            Feature::Manufacturing => self.enable_manufacturing,
            Feature::Ecommerce => self.enable_ecommerce,
        }
    }

    /// Looks up a feature flag by name; unknown names resolve to false.
    #[must_use]
    pub fn feature_enabled_by_name(&self, name: &str) -> bool {
        Feature::parse(name).is_some_and(|feature| self.is_feature_enabled(feature))
    }

    /// The tenant's amount rendering rules.
    #[must_use]
    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat::new(
            self.currency.clone(),
            self.currency_symbol.clone(),
            self.decimal_precision,
        )
    }
}
