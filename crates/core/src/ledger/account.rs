//! Accounts and their financial statement classification.

use ledgerline_shared::types::{AccountId, TenantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kinds of money accounts a tenant can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// Bank account
    Bank,
    /// Physical cash drawer
    Cash,
    /// Mobile money wallet
    #[serde(rename = "mobile")]
    MobileMoney,
}

impl AccountKind {
    /// Parse from a string identifier
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bank" => Some(Self::Bank),
            "cash" => Some(Self::Cash),
            "mobile" => Some(Self::MobileMoney),
            _ => None,
        }
    }

    /// String identifier for this kind
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bank => "bank",
            Self::Cash => "cash",
            Self::MobileMoney => "mobile",
        }
    }

    /// Financial statement class this kind belongs to.
    ///
    /// Every current kind classifies as an asset. `Liability` and
    /// `Equity` have no kinds mapping to them yet, which leaves the
    /// balance sheet's liability section structurally empty; adding a
    /// liability kind means extending this match, not a string check.
    pub const fn class(&self) -> AccountClass {
        match self {
            Self::Bank | Self::Cash | Self::MobileMoney => AccountClass::Asset,
        }
    }
}

/// Financial statement classes an account kind can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountClass {
    /// Resources the tenant owns
    Asset,
    /// Obligations the tenant owes
    Liability,
    /// Residual interest, derived on the balance sheet
    Equity,
}

/// A money account with its static opening balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier
    pub id: AccountId,
    /// Owning tenant
    pub tenant_id: TenantId,
    /// Display name; trial balance rows sort on this
    pub name: String,
    /// Kind, and through it the statement class
    pub kind: AccountKind,
    /// External account number, if any
    pub account_number: Option<String>,
    /// Opening balance; derived balances start from here
    pub balance: Decimal,
}

impl Account {
    /// Create an account with a fresh identifier and no account number
    pub fn new(
        tenant_id: TenantId,
        name: impl Into<String>,
        kind: AccountKind,
        balance: Decimal,
    ) -> Self {
        Self {
            id: AccountId::new(),
            tenant_id,
            name: name.into(),
            kind,
            account_number: None,
            balance,
        }
    }
}
