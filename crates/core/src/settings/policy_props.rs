//! Property-based tests for derived policy queries.

use ledgerline_shared::SettingsDefaults;
use ledgerline_shared::types::TenantId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::policy::Feature;
use super::types::TenantSettings;

/// Strategy to generate a positive amount (0.01 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn base_settings() -> TenantSettings {
    TenantSettings::new(TenantId::new(), &SettingsDefaults::default())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Once an amount requires sales approval, every larger amount does too.
    #[test]
    fn prop_sales_approval_monotone(
        a in amount(),
        b in amount(),
        threshold in amount(),
    ) {
        let mut settings = base_settings();
        settings.require_approval_for_sales = true;
        settings.sales_approval_threshold = Some(threshold);

        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if settings.requires_sales_approval(lo) {
            prop_assert!(settings.requires_sales_approval(hi));
        }
    }

    /// With approval enabled and no threshold, every amount needs approval.
    #[test]
    fn prop_missing_threshold_catches_everything(amount in amount()) {
        let mut settings = base_settings();
        settings.require_approval_for_purchases = true;
        settings.purchase_approval_threshold = None;
        prop_assert!(settings.requires_purchase_approval(amount));
    }

    /// With approval disabled, no amount needs approval regardless of threshold.
    #[test]
    fn prop_disabled_gate_never_triggers(
        amount in amount(),
        threshold in proptest::option::of(amount()),
    ) {
        let mut settings = base_settings();
        settings.require_approval_for_sales = false;
        settings.sales_approval_threshold = threshold;
        prop_assert!(!settings.requires_sales_approval(amount));
    }

    /// Unknown feature names never enable anything, even with every flag on.
    #[test]
    fn prop_unknown_feature_names_fail_closed(name in "[a-z_]{1,24}") {
        let mut settings = base_settings();
        settings.enable_advanced_reporting = true;
        settings.enable_multi_warehouse = true;
        settings.enable_project_tracking = true;
        settings.enable_manufacturing = true;
        settings.enable_ecommerce = true;

        if Feature::parse(&name).is_none() {
            prop_assert!(!settings.feature_enabled_by_name(&name));
        }
    }

    /// Looking a feature up by its canonical name matches the typed query.
    #[test]
    fn prop_feature_name_round_trip(flag in any::<bool>()) {
        let mut settings = base_settings();
        settings.enable_manufacturing = flag;
        prop_assert_eq!(
            settings.feature_enabled_by_name(Feature::Manufacturing.as_str()),
            settings.is_feature_enabled(Feature::Manufacturing)
        );
    }
}
