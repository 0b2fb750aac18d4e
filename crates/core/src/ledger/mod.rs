//! Ledger aggregation logic.
//!
//! This module implements the reporting side of the ledger:
//! - Accounts and their financial statement classification
//! - Ledger entries (deposits and withdrawals)
//! - Derived per-account balances
//! - Trial balance with a swappable column policy
//! - Balance sheet with derived equity

pub mod account;
pub mod entry;
pub mod report;

#[cfg(test)]
mod report_props;

pub use account::{Account, AccountClass, AccountKind};
pub use entry::{EntryType, LedgerEntry};
pub use report::{
    BalanceSheetReport, BalanceSheetRow, BalanceSheetSection, ColumnPolicy, TrialBalanceReport,
    TrialBalanceRow, TrialBalanceTotals, account_balance, balance_sheet, entry_type_columns,
    trial_balance, trial_balance_with_policy,
};
