//! Property-based tests for settings partial updates.

use ledgerline_shared::SettingsDefaults;
use ledgerline_shared::types::TenantId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::types::{SettingsUpdate, TenantSettings};

/// Strategy to generate a positive amount (0.01 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate an uppercase document prefix.
fn prefix() -> impl Strategy<Value = String> {
    "[A-Z]{1,5}"
}

/// Strategy to generate a partial update touching a spread of field groups,
/// with every present value inside its allowed range.
fn partial_update() -> impl Strategy<Value = SettingsUpdate> {
    (
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(amount()),
        proptest::option::of(1u32..=12u32),
        proptest::option::of(0u32..=4u32),
        proptest::option::of(4u32..=10u32),
        proptest::option::of(prefix()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(amount()),
    )
        .prop_map(
            |(
                prevent_negative_stock,
                require_approval_for_sales,
                threshold,
                fiscal_year_start_month,
                decimal_precision,
                invoice_number_length,
                invoice_prefix,
                lock_past_periods,
                enable_ecommerce,
                default_tax_rate,
            )| SettingsUpdate {
                prevent_negative_stock,
                require_approval_for_sales,
                sales_approval_threshold: threshold.map(Some),
                fiscal_year_start_month,
                decimal_precision,
                invoice_number_length,
                invoice_prefix,
                lock_past_periods,
                enable_ecommerce,
                default_tax_rate,
                ..SettingsUpdate::default()
            },
        )
}

fn base_settings() -> TenantSettings {
    TenantSettings::new(TenantId::new(), &SettingsDefaults::default())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Applying a partial update reflects every present field and
    /// preserves every absent one.
    #[test]
    fn prop_update_reflects_and_preserves(update in partial_update()) {
        let original = base_settings();
        let mut merged = original.clone();
        update.apply(&mut merged);

        match update.prevent_negative_stock {
            Some(v) => prop_assert_eq!(merged.prevent_negative_stock, v),
            None => prop_assert_eq!(
                merged.prevent_negative_stock,
                original.prevent_negative_stock
            ),
        }
        match update.require_approval_for_sales {
            Some(v) => prop_assert_eq!(merged.require_approval_for_sales, v),
            None => prop_assert_eq!(
                merged.require_approval_for_sales,
                original.require_approval_for_sales
            ),
        }
        match update.sales_approval_threshold {
            Some(v) => prop_assert_eq!(merged.sales_approval_threshold, v),
            None => prop_assert_eq!(
                merged.sales_approval_threshold,
                original.sales_approval_threshold
            ),
        }
        match update.fiscal_year_start_month {
            Some(v) => prop_assert_eq!(merged.fiscal_year_start_month, v),
            None => prop_assert_eq!(
                merged.fiscal_year_start_month,
                original.fiscal_year_start_month
            ),
        }
        match update.decimal_precision {
            Some(v) => prop_assert_eq!(merged.decimal_precision, v),
            None => prop_assert_eq!(merged.decimal_precision, original.decimal_precision),
        }
        match update.invoice_number_length {
            Some(v) => prop_assert_eq!(merged.invoice_number_length, v),
            None => prop_assert_eq!(
                merged.invoice_number_length,
                original.invoice_number_length
            ),
        }
        match &update.invoice_prefix {
            Some(v) => prop_assert_eq!(&merged.invoice_prefix, v),
            None => prop_assert_eq!(&merged.invoice_prefix, &original.invoice_prefix),
        }
        match update.lock_past_periods {
            Some(v) => prop_assert_eq!(merged.lock_past_periods, v),
            None => prop_assert_eq!(merged.lock_past_periods, original.lock_past_periods),
        }
        match update.enable_ecommerce {
            Some(v) => prop_assert_eq!(merged.enable_ecommerce, v),
            None => prop_assert_eq!(merged.enable_ecommerce, original.enable_ecommerce),
        }
        match update.default_tax_rate {
            Some(v) => prop_assert_eq!(merged.default_tax_rate, v),
            None => prop_assert_eq!(merged.default_tax_rate, original.default_tax_rate),
        }

        // Fields this update never carries stay untouched.
        prop_assert_eq!(&merged.purchase_order_prefix, &original.purchase_order_prefix);
        prop_assert_eq!(merged.po_number_length, original.po_number_length);
        prop_assert_eq!(merged.allow_sales_editing, original.allow_sales_editing);
        prop_assert_eq!(merged.use_double_entry, original.use_double_entry);
        prop_assert_eq!(merged.tenant_id, original.tenant_id);
    }

    /// Every in-range partial update passes validation.
    #[test]
    fn prop_in_range_update_validates(update in partial_update()) {
        prop_assert!(update.validate().is_ok());
    }

    /// Precision above four always rejects.
    #[test]
    fn prop_precision_above_four_rejected(precision in 5u32..1000u32) {
        let update = SettingsUpdate {
            decimal_precision: Some(precision),
            ..SettingsUpdate::default()
        };
        prop_assert!(update.validate().is_err());
    }

    /// Number lengths outside 4-10 always reject.
    #[test]
    fn prop_number_length_out_of_range_rejected(
        short in 0u32..4u32,
        long in 11u32..1000u32,
    ) {
        let update = SettingsUpdate {
            invoice_number_length: Some(short),
            ..SettingsUpdate::default()
        };
        prop_assert!(update.validate().is_err());

        let update = SettingsUpdate {
            po_number_length: Some(long),
            ..SettingsUpdate::default()
        };
        prop_assert!(update.validate().is_err());
    }

    /// Applying the same update twice gives the same record as once.
    #[test]
    fn prop_update_is_idempotent(update in partial_update()) {
        let mut once = base_settings();
        update.apply(&mut once);
        let mut twice = once.clone();
        update.apply(&mut twice);
        prop_assert_eq!(once, twice);
    }
}
