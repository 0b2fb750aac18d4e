//! Accounting periods that can be closed against postings.

use chrono::NaiveDate;
use ledgerline_shared::types::{ClosedPeriodId, TenantId};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an accounting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodStatus {
    /// Postings into the period are allowed
    Open,
    /// Postings into the period are blocked
    Closed,
}

impl PeriodStatus {
    /// Parse from a string identifier
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(Self::Open),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }

    /// String identifier for this status
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// An accounting period with an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosedPeriod {
    /// Unique period identifier
    pub id: ClosedPeriodId,
    /// Owning tenant
    pub tenant_id: TenantId,
    /// Display name, e.g. "January 2026"
    pub name: String,
    /// Whether the period currently blocks postings
    pub status: PeriodStatus,
    /// First day of the period, inclusive
    pub start_date: NaiveDate,
    /// Last day of the period, inclusive
    pub end_date: NaiveDate,
}

impl ClosedPeriod {
    /// Create a period record with a fresh identifier
    pub fn new(
        tenant_id: TenantId,
        name: impl Into<String>,
        status: PeriodStatus,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: ClosedPeriodId::new(),
            tenant_id,
            name: name.into(),
            status,
            start_date,
            end_date,
        }
    }

    /// Whether the date falls inside the period, bounds included
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Whether the period blocks postings
    pub fn is_closed(&self) -> bool {
        self.status == PeriodStatus::Closed
    }
}
