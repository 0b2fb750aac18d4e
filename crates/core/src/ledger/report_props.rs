//! Property-based tests for the ledger projections.

use chrono::NaiveDate;
use ledgerline_shared::types::{AccountId, TenantId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::account::{Account, AccountKind};
use super::entry::{EntryType, LedgerEntry};
use super::report::{balance_sheet, entry_type_columns, trial_balance};

const KINDS: [AccountKind; 3] = [
    AccountKind::Bank,
    AccountKind::Cash,
    AccountKind::MobileMoney,
];

/// Strategy to generate account seeds: name, kind index, opening cents.
fn account_seeds() -> impl Strategy<Value = Vec<(String, usize, i64)>> {
    proptest::collection::vec(
        ("[a-z]{3,12}", 0usize..3usize, -1_000_000i64..1_000_000i64),
        1..6,
    )
}

/// Strategy to generate entry seeds: account index, deposit flag, cents.
fn entry_seeds() -> impl Strategy<Value = Vec<(usize, bool, i64)>> {
    proptest::collection::vec((0usize..8usize, any::<bool>(), 0i64..1_000_000i64), 0..20)
}

/// Materialize accounts and entries for one tenant from seeds.
fn build(
    account_seeds: &[(String, usize, i64)],
    entry_seeds: &[(usize, bool, i64)],
) -> (Vec<Account>, Vec<LedgerEntry>) {
    let tenant_id = TenantId::new();
    let accounts: Vec<Account> = account_seeds
        .iter()
        .map(|(name, kind, cents)| {
            Account::new(
                tenant_id,
                name.clone(),
                KINDS[kind % KINDS.len()],
                Decimal::new(*cents, 2),
            )
        })
        .collect();

    let date = NaiveDate::from_ymd_opt(2026, 5, 20).unwrap();
    let entries: Vec<LedgerEntry> = entry_seeds
        .iter()
        .map(|(index, is_deposit, cents)| {
            let account = &accounts[index % accounts.len()];
            let entry_type = if *is_deposit {
                EntryType::Deposit
            } else {
                EntryType::Withdrawal
            };
            LedgerEntry::new(account.id, entry_type, Decimal::new(*cents, 2), date)
        })
        .collect();

    (accounts, entries)
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 30).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Equity is exactly the asset total minus the liability total, and
    /// the balance flag is always true, for any input set.
    #[test]
    fn prop_equity_identity(
        accounts in account_seeds(),
        entries in entry_seeds(),
    ) {
        let (accounts, entries) = build(&accounts, &entries);
        let report = balance_sheet(&accounts, &entries, as_of());

        prop_assert_eq!(
            report.equity,
            report.assets.total - report.liabilities.total
        );
        prop_assert!(report.is_balanced);
    }

    /// Trial balance totals are exactly the column sums of the rows.
    #[test]
    fn prop_totals_are_row_sums(
        accounts in account_seeds(),
        entries in entry_seeds(),
    ) {
        let (accounts, entries) = build(&accounts, &entries);
        let report = trial_balance(&accounts, &entries, as_of());

        let debit_sum: Decimal = report.rows.iter().map(|row| row.debit).sum();
        let credit_sum: Decimal = report.rows.iter().map(|row| row.credit).sum();
        prop_assert_eq!(report.totals.total_debit, debit_sum);
        prop_assert_eq!(report.totals.total_credit, credit_sum);
    }

    /// Under the default policy, the debit column carries every deposit
    /// plus every opening balance, and the credit column carries every
    /// withdrawal.
    #[test]
    fn prop_default_columns_decompose(
        accounts in account_seeds(),
        entries in entry_seeds(),
    ) {
        let (accounts, entries) = build(&accounts, &entries);
        let report = trial_balance(&accounts, &entries, as_of());

        let deposits: Decimal = entries
            .iter()
            .filter(|entry| entry.entry_type == EntryType::Deposit)
            .map(|entry| entry.amount)
            .sum();
        let withdrawals: Decimal = entries
            .iter()
            .filter(|entry| entry.entry_type == EntryType::Withdrawal)
            .map(|entry| entry.amount)
            .sum();
        let openings: Decimal = accounts.iter().map(|account| account.balance).sum();

        prop_assert_eq!(report.totals.total_debit, deposits + openings);
        prop_assert_eq!(report.totals.total_credit, withdrawals);
    }

    /// Trial balance rows come back sorted by account name.
    #[test]
    fn prop_rows_sorted_by_name(
        accounts in account_seeds(),
        entries in entry_seeds(),
    ) {
        let (accounts, entries) = build(&accounts, &entries);
        let report = trial_balance(&accounts, &entries, as_of());

        prop_assert!(report
            .rows
            .windows(2)
            .all(|pair| pair[0].name <= pair[1].name));
    }

    /// Balance sheet sections come back sorted descending by balance.
    #[test]
    fn prop_sections_sorted_descending(
        accounts in account_seeds(),
        entries in entry_seeds(),
    ) {
        let (accounts, entries) = build(&accounts, &entries);
        let report = balance_sheet(&accounts, &entries, as_of());

        prop_assert!(report
            .assets
            .rows
            .windows(2)
            .all(|pair| pair[0].balance >= pair[1].balance));
    }

    /// The default policy puts each entry's amount in exactly one column.
    #[test]
    fn prop_default_policy_single_column(
        is_deposit in any::<bool>(),
        cents in 0i64..1_000_000i64,
    ) {
        let entry_type = if is_deposit {
            EntryType::Deposit
        } else {
            EntryType::Withdrawal
        };
        let entry = LedgerEntry::new(
            AccountId::new(),
            entry_type,
            Decimal::new(cents, 2),
            as_of(),
        );

        let (debit, credit) = entry_type_columns(&entry);
        prop_assert_eq!(debit + credit, entry.amount);
        prop_assert!(debit == Decimal::ZERO || credit == Decimal::ZERO);
    }
}
