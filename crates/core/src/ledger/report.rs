//! Trial balance and balance sheet projections.
//!
//! Both reports are pure projections over caller-supplied slices,
//! recomputed fresh on every call. Nothing here caches or persists.

use chrono::NaiveDate;
use ledgerline_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::account::{Account, AccountClass, AccountKind};
use super::entry::{EntryType, LedgerEntry};

/// Assigns one entry's amount to the (debit, credit) columns.
pub type ColumnPolicy = fn(&LedgerEntry) -> (Decimal, Decimal);

/// Default column assignment: deposits are debits, withdrawals credits.
///
/// Assignment keys off the entry type alone, never the account's class,
/// so a withdrawal credits any account it touches. That is not standard
/// double-entry treatment for non-asset accounts; a policy that consults
/// the account can replace this without touching report callers.
pub fn entry_type_columns(entry: &LedgerEntry) -> (Decimal, Decimal) {
    match entry.entry_type {
        EntryType::Deposit => (entry.amount, Decimal::ZERO),
        EntryType::Withdrawal => (Decimal::ZERO, entry.amount),
    }
}

/// Opening balance adjusted by every entry against the account.
///
/// Recomputed on demand, never persisted.
pub fn account_balance(account: &Account, entries: &[LedgerEntry]) -> Decimal {
    entries
        .iter()
        .filter(|entry| entry.account_id == account.id)
        .fold(account.balance, |balance, entry| {
            balance + entry.signed_amount()
        })
}

/// One account's accumulated debit and credit totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    /// Account the totals belong to
    pub account_id: AccountId,
    /// Account name; rows are sorted on this
    pub name: String,
    /// Account kind
    pub kind: AccountKind,
    /// Accumulated debit column
    pub debit: Decimal,
    /// Accumulated credit column
    pub credit: Decimal,
}

/// Column sums across every trial balance row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Sum of every row's debit column
    pub total_debit: Decimal,
    /// Sum of every row's credit column
    pub total_credit: Decimal,
    /// Whether the columns agree within the fixed tolerance
    pub is_balanced: bool,
}

/// Trial balance for a reporting date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// Date the caller fetched the underlying data for
    pub as_of: NaiveDate,
    /// Per-account rows, sorted by account name
    pub rows: Vec<TrialBalanceRow>,
    /// Column sums and the balance flag
    pub totals: TrialBalanceTotals,
}

/// Build a trial balance with the default column policy.
pub fn trial_balance(
    accounts: &[Account],
    entries: &[LedgerEntry],
    as_of: NaiveDate,
) -> TrialBalanceReport {
    trial_balance_with_policy(accounts, entries, as_of, entry_type_columns)
}

/// Build a trial balance with an explicit column policy.
///
/// Each account's opening balance joins its debit column only when the
/// account classifies as an asset and the balance is non-zero; the
/// policy decides everything else.
pub fn trial_balance_with_policy(
    accounts: &[Account],
    entries: &[LedgerEntry],
    as_of: NaiveDate,
    policy: ColumnPolicy,
) -> TrialBalanceReport {
    let mut rows: Vec<TrialBalanceRow> = accounts
        .iter()
        .map(|account| {
            let mut debit = Decimal::ZERO;
            let mut credit = Decimal::ZERO;
            for entry in entries.iter().filter(|entry| entry.account_id == account.id) {
                let (to_debit, to_credit) = policy(entry);
                debit += to_debit;
                credit += to_credit;
            }
            if account.kind.class() == AccountClass::Asset && account.balance != Decimal::ZERO {
                debit += account.balance;
            }
            TrialBalanceRow {
                account_id: account.id,
                name: account.name.clone(),
                kind: account.kind,
                debit,
                credit,
            }
        })
        .collect();

    rows.sort_by(|a, b| a.name.cmp(&b.name));

    let total_debit: Decimal = rows.iter().map(|row| row.debit).sum();
    let total_credit: Decimal = rows.iter().map(|row| row.credit).sum();
    let totals = TrialBalanceTotals {
        total_debit,
        total_credit,
        is_balanced: within_tolerance(total_debit, total_credit),
    };

    TrialBalanceReport {
        as_of,
        rows,
        totals,
    }
}

/// One account's recomputed balance on the balance sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetRow {
    /// Account the balance belongs to
    pub account_id: AccountId,
    /// Account name
    pub name: String,
    /// Account kind
    pub kind: AccountKind,
    /// Opening balance adjusted by every entry
    pub balance: Decimal,
}

/// One side of the balance sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetSection {
    /// Accounts in this section, sorted descending by balance
    pub rows: Vec<BalanceSheetRow>,
    /// Sum of the section's balances
    pub total: Decimal,
}

/// Balance sheet for a reporting date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetReport {
    /// Date the caller fetched the underlying data for
    pub as_of: NaiveDate,
    /// Asset-classed accounts
    pub assets: BalanceSheetSection,
    /// Liability-classed accounts; empty while no kind maps to liability
    pub liabilities: BalanceSheetSection,
    /// Residual: asset total minus liability total
    pub equity: Decimal,
    /// Whether assets agree with liabilities plus equity within the
    /// fixed tolerance; always true while equity is defined as their
    /// difference
    pub is_balanced: bool,
}

/// Build a balance sheet from recomputed account balances.
pub fn balance_sheet(
    accounts: &[Account],
    entries: &[LedgerEntry],
    as_of: NaiveDate,
) -> BalanceSheetReport {
    let mut assets = Vec::new();
    let mut liabilities = Vec::new();
    for account in accounts {
        let row = BalanceSheetRow {
            account_id: account.id,
            name: account.name.clone(),
            kind: account.kind,
            balance: account_balance(account, entries),
        };
        match account.kind.class() {
            AccountClass::Asset => assets.push(row),
            AccountClass::Liability => liabilities.push(row),
            // Equity is derived below, not read off accounts; an
            // equity-classed kind would need its own section first.
            AccountClass::Equity => {}
        }
    }

    assets.sort_by(|a, b| b.balance.cmp(&a.balance));
    liabilities.sort_by(|a, b| b.balance.cmp(&a.balance));

    let total_assets: Decimal = assets.iter().map(|row| row.balance).sum();
    let total_liabilities: Decimal = liabilities.iter().map(|row| row.balance).sum();
    let equity = total_assets - total_liabilities;

    BalanceSheetReport {
        as_of,
        assets: BalanceSheetSection {
            rows: assets,
            total: total_assets,
        },
        liabilities: BalanceSheetSection {
            rows: liabilities,
            total: total_liabilities,
        },
        equity,
        is_balanced: within_tolerance(total_assets, total_liabilities + equity),
    }
}

/// Fixed comparison tolerance shared by both reports, one cent
fn within_tolerance(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < Decimal::new(1, 2)
}
