//! Document numbering service - peek and reserve operations.

use std::sync::Arc;

use dashmap::DashMap;
use ledgerline_shared::types::TenantId;

use crate::settings::TenantSettings;

use super::error::NumberingError;
use super::scheme::{DocumentKind, NumberingScheme};

/// Read access to the stored documents a sequence is derived from.
pub trait DocumentIndex: Send + Sync {
    /// Latest stored document number for a tenant and kind, if any.
    ///
    /// "Latest" follows the store's own ordering of document numbers;
    /// the numberer only inspects the returned string.
    fn latest_number(
        &self,
        tenant_id: TenantId,
        kind: DocumentKind,
    ) -> impl std::future::Future<Output = Result<Option<String>, NumberingError>> + Send;
}

/// Generates document numbers from a tenant's settings and stored documents.
pub struct DocumentNumberer<I: DocumentIndex> {
    index: Arc<I>,
    /// Highest sequence handed out per tenant and kind since startup
    floors: DashMap<(TenantId, DocumentKind), u64>,
}

impl<I: DocumentIndex> DocumentNumberer<I> {
    /// Create a numberer backed by the given document index
    pub fn new(index: Arc<I>) -> Self {
        Self {
            index,
            floors: DashMap::new(),
        }
    }

    /// Preview the next document number without claiming it.
    ///
    /// Derived purely from the latest stored document, so repeated calls
    /// return the same number until a document is stored. Two callers
    /// that both peek before either stores will see the same number; use
    /// [`reserve`](Self::reserve) when the number must be unique.
    pub async fn peek(
        &self,
        settings: &TenantSettings,
        kind: DocumentKind,
    ) -> Result<String, NumberingError> {
        let scheme = NumberingScheme::from_settings(settings, kind);
        let latest = self.index.latest_number(settings.tenant_id, kind).await?;
        Ok(scheme.render(scheme.next_after(latest.as_deref())))
    }

    /// Claim the next document number.
    ///
    /// Takes the scan-derived sequence or the next sequence above the
    /// highest one already reserved, whichever is greater, so concurrent
    /// reservations within this process never collide even before their
    /// documents are stored.
    pub async fn reserve(
        &self,
        settings: &TenantSettings,
        kind: DocumentKind,
    ) -> Result<String, NumberingError> {
        let scheme = NumberingScheme::from_settings(settings, kind);
        let latest = self.index.latest_number(settings.tenant_id, kind).await?;
        let scanned = scheme.next_after(latest.as_deref());

        let sequence = {
            let mut floor = self.floors.entry((settings.tenant_id, kind)).or_insert(0);
            let sequence = scanned.max(floor.saturating_add(1));
            *floor = sequence;
            sequence
        };

        let number = scheme.render(sequence);
        tracing::debug!(
            tenant_id = %settings.tenant_id,
            kind = kind.as_str(),
            number = %number,
            "Reserved document number"
        );
        Ok(number)
    }
}

/// In-memory document index for tests and single-process setups.
#[derive(Debug, Default)]
pub struct MemoryDocumentIndex {
    latest: DashMap<(TenantId, DocumentKind), String>,
}

impl MemoryDocumentIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a stored document number; the last write becomes the latest
    pub fn record(&self, tenant_id: TenantId, kind: DocumentKind, number: impl Into<String>) {
        self.latest.insert((tenant_id, kind), number.into());
    }
}

impl DocumentIndex for MemoryDocumentIndex {
    async fn latest_number(
        &self,
        tenant_id: TenantId,
        kind: DocumentKind,
    ) -> Result<Option<String>, NumberingError> {
        Ok(self
            .latest
            .get(&(tenant_id, kind))
            .map(|entry| entry.value().clone()))
    }
}
