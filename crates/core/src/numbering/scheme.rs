//! Numbering schemes - prefix plus zero-padded sequence.

use serde::{Deserialize, Serialize};

use crate::settings::TenantSettings;

/// Kinds of documents that receive generated numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Sales invoice
    Invoice,
    /// Purchase order
    PurchaseOrder,
}

impl DocumentKind {
    /// Parse from a string identifier
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "invoice" => Some(Self::Invoice),
            "purchase_order" => Some(Self::PurchaseOrder),
            _ => None,
        }
    }

    /// String identifier for this kind
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Invoice => "invoice",
            Self::PurchaseOrder => "purchase_order",
        }
    }
}

/// A tenant's numbering scheme for one document kind.
///
/// Numbers are the prefix followed by the sequence, zero-padded to
/// `pad_length` digits. Padding is a minimum width: once a sequence
/// outgrows it, the rendered number simply gets longer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingScheme {
    /// Literal prefix, e.g. "INV"
    pub prefix: String,
    /// Minimum digit count for the sequence part
    pub pad_length: u32,
}

impl NumberingScheme {
    /// Create a scheme from explicit parts
    pub fn new(prefix: impl Into<String>, pad_length: u32) -> Self {
        Self {
            prefix: prefix.into(),
            pad_length,
        }
    }

    /// Build the scheme a tenant's settings prescribe for a document kind
    pub fn from_settings(settings: &TenantSettings, kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Invoice => Self::new(
                settings.invoice_prefix.clone(),
                settings.invoice_number_length,
            ),
            DocumentKind::PurchaseOrder => Self::new(
                settings.purchase_order_prefix.clone(),
                settings.po_number_length,
            ),
        }
    }

    /// Render a sequence as a full document number
    pub fn render(&self, sequence: u64) -> String {
        format!(
            "{}{:0width$}",
            self.prefix,
            sequence,
            width = self.pad_length as usize
        )
    }

    /// Sequence that follows the latest known document number.
    ///
    /// The sequence is the trailing digit run of the latest number; the
    /// prefix is not stripped first, so a prefix ending in digits folds
    /// into the extracted sequence. No latest number, or one without
    /// trailing digits, restarts the sequence at one.
    pub fn next_after(&self, latest: Option<&str>) -> u64 {
        latest
            .and_then(trailing_sequence)
            .map_or(1, |sequence| sequence.saturating_add(1))
    }
}

/// Extract the trailing run of ASCII digits as a sequence value.
///
/// Returns `None` when the number has no trailing digits or the run
/// does not fit in a `u64`.
fn trailing_sequence(number: &str) -> Option<u64> {
    let start = number
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(index, _)| index)?;
    number[start..].parse::<u64>().ok()
}
