//! Ledger entries - deposits and withdrawals against accounts.

use chrono::NaiveDate;
use ledgerline_shared::types::{AccountId, LedgerEntryId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money moving into the account
    Deposit,
    /// Money moving out of the account
    Withdrawal,
}

impl EntryType {
    /// Parse from a string identifier
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "deposit" => Some(Self::Deposit),
            "withdrawal" => Some(Self::Withdrawal),
            _ => None,
        }
    }

    /// String identifier for this type
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
        }
    }
}

/// A single movement against one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique identifier for this entry
    pub id: LedgerEntryId,
    /// The account the movement applies to
    pub account_id: AccountId,
    /// Whether money moved in or out
    pub entry_type: EntryType,
    /// Always non-negative; direction comes from `entry_type`
    pub amount: Decimal,
    /// Posting date
    pub date: NaiveDate,
    /// Free-form note
    pub description: Option<String>,
}

impl LedgerEntry {
    /// Create an entry with a fresh identifier and no description
    pub fn new(
        account_id: AccountId,
        entry_type: EntryType,
        amount: Decimal,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: LedgerEntryId::new(),
            account_id,
            entry_type,
            amount,
            date,
            description: None,
        }
    }

    /// Returns the signed amount (positive for deposits, negative for withdrawals).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.entry_type {
            EntryType::Deposit => self.amount,
            EntryType::Withdrawal => -self.amount,
        }
    }
}
