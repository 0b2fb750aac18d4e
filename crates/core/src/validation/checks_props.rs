//! Property-based tests for the pure rule checks.

use std::collections::HashMap;

use ledgerline_shared::SettingsDefaults;
use ledgerline_shared::types::{ProductId, TenantId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::settings::TenantSettings;

use super::checks::{ReferenceCount, StockRequest, check_delete, check_stock, check_stock_batch};

/// Strategy to generate (on hand, requested) pairs for a batch.
fn batch_levels() -> impl Strategy<Value = Vec<(Decimal, Decimal)>> {
    proptest::collection::vec(
        (0i64..1_000i64, 0i64..1_000i64).prop_map(|(available, requested)| {
            (Decimal::from(available), Decimal::from(requested))
        }),
        0..16,
    )
}

/// Strategy to generate labelled reference counts.
fn reference_counts() -> impl Strategy<Value = Vec<ReferenceCount>> {
    proptest::collection::vec(
        (
            proptest::sample::select(vec!["sale", "purchase", "production", "transaction"]),
            0u64..100u64,
        )
            .prop_map(|(label, count)| ReferenceCount::new(label, count)),
        0..8,
    )
}

fn base_settings() -> TenantSettings {
    TenantSettings::new(TenantId::new(), &SettingsDefaults::default())
}

/// Materialize a batch with a fresh product per pair.
fn build_batch(levels: &[(Decimal, Decimal)]) -> (HashMap<ProductId, Decimal>, Vec<StockRequest>) {
    let mut on_hand = HashMap::new();
    let mut items = Vec::new();
    for (available, requested) in levels {
        let product_id = ProductId::new();
        on_hand.insert(product_id, *available);
        items.push(StockRequest {
            product_id,
            quantity: *requested,
        });
    }
    (on_hand, items)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The batch verdict is valid exactly when no item errored.
    #[test]
    fn prop_batch_valid_iff_no_errors(levels in batch_levels()) {
        let settings = base_settings();
        let (on_hand, items) = build_batch(&levels);

        let verdict = check_stock_batch(&settings, &items, |id| on_hand.get(&id).copied());
        prop_assert_eq!(verdict.valid, verdict.errors.is_empty());
    }

    /// Batch errors are exactly the items the single check rejects,
    /// in batch order.
    #[test]
    fn prop_batch_errors_match_single_checks(levels in batch_levels()) {
        let settings = base_settings();
        let (on_hand, items) = build_batch(&levels);

        let verdict = check_stock_batch(&settings, &items, |id| on_hand.get(&id).copied());

        let failing: Vec<ProductId> = items
            .iter()
            .filter(|item| {
                !check_stock(&settings, on_hand.get(&item.product_id).copied(), item.quantity)
                    .valid
            })
            .map(|item| item.product_id)
            .collect();
        let errored: Vec<ProductId> = verdict
            .errors
            .iter()
            .map(|error| error.product_id)
            .collect();
        prop_assert_eq!(errored, failing);
    }

    /// With negative stock allowed, a batch never errors no matter how
    /// far the movements overdraw.
    #[test]
    fn prop_allowed_negative_batch_never_errors(levels in batch_levels()) {
        let mut settings = base_settings();
        settings.prevent_negative_stock = false;
        let (on_hand, items) = build_batch(&levels);

        let verdict = check_stock_batch(&settings, &items, |id| on_hand.get(&id).copied());
        prop_assert!(verdict.valid);
        prop_assert!(verdict.errors.is_empty());
    }

    /// Deletion is blocked exactly when some count is positive, and the
    /// summary lists one entry per positive count.
    #[test]
    fn prop_delete_blocked_iff_any_reference(counts in reference_counts()) {
        let verdict = check_delete(&counts);
        let positive = counts.iter().filter(|reference| reference.count > 0).count();

        prop_assert_eq!(verdict.can_delete, positive == 0);
        prop_assert_eq!(verdict.references.len(), positive);
        prop_assert_eq!(verdict.message.is_some(), positive > 0);
    }
}
