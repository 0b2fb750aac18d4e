//! Settings store service.

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use ledgerline_shared::SettingsDefaults;
use ledgerline_shared::types::TenantId;

use super::error::SettingsError;
use super::types::{SettingsUpdate, TenantSettings};

/// Repository trait for settings persistence.
///
/// Implemented outside this crate by the persistence collaborator;
/// [`MemorySettingsRepository`] covers tests and embedded use.
pub trait SettingsRepository: Send + Sync {
    /// Load the settings record for a tenant, if one exists.
    fn load(
        &self,
        tenant_id: TenantId,
    ) -> impl std::future::Future<Output = Result<Option<TenantSettings>, SettingsError>> + Send;

    /// Persist a settings record, replacing any existing one for the tenant.
    fn save(
        &self,
        settings: TenantSettings,
    ) -> impl std::future::Future<Output = Result<TenantSettings, SettingsError>> + Send;

    /// Delete the settings record for a tenant.
    fn delete(
        &self,
        tenant_id: TenantId,
    ) -> impl std::future::Future<Output = Result<bool, SettingsError>> + Send;
}

/// Store managing one settings record per tenant.
///
/// Records are materialized lazily: the first `get` for a tenant creates
/// and persists the default record, so callers never observe a tenant
/// without settings.
pub struct SettingsStore<R: SettingsRepository> {
    defaults: SettingsDefaults,
    repo: Arc<R>,
}

impl<R: SettingsRepository> SettingsStore<R> {
    /// Creates a new store over the given repository.
    #[must_use]
    pub fn new(defaults: SettingsDefaults, repo: Arc<R>) -> Self {
        Self { defaults, repo }
    }

    /// Returns the tenant's settings, materializing defaults if none exist.
    ///
    /// Idempotent: repeated calls return the persisted record.
    ///
    /// # Errors
    ///
    /// Returns an error only when the repository fails.
    pub async fn get(&self, tenant_id: TenantId) -> Result<TenantSettings, SettingsError> {
        if let Some(settings) = self.repo.load(tenant_id).await? {
            return Ok(settings);
        }
        let fresh = TenantSettings::new(tenant_id, &self.defaults);
        tracing::info!(%tenant_id, "materialized default settings");
        self.repo.save(fresh).await
    }

    /// Applies a partial update and returns the full updated record.
    ///
    /// Ensures the record exists first, so updating a never-seen tenant
    /// works. Nothing is persisted when validation rejects a field.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidField` for out-of-range values, or a
    /// storage error from the repository.
    pub async fn update(
        &self,
        tenant_id: TenantId,
        update: SettingsUpdate,
    ) -> Result<TenantSettings, SettingsError> {
        update.validate()?;
        let mut settings = self.get(tenant_id).await?;
        update.apply(&mut settings);
        settings.updated_at = Utc::now();
        tracing::info!(%tenant_id, "updated tenant settings");
        self.repo.save(settings).await
    }

    /// Deletes the record and immediately recreates it with defaults.
    ///
    /// Destructive and irreversible; from the caller's perspective the
    /// tenant is never without settings.
    ///
    /// # Errors
    ///
    /// Returns an error only when the repository fails.
    pub async fn reset(&self, tenant_id: TenantId) -> Result<TenantSettings, SettingsError> {
        self.repo.delete(tenant_id).await?;
        let fresh = TenantSettings::new(tenant_id, &self.defaults);
        tracing::warn!(%tenant_id, "reset tenant settings to defaults");
        self.repo.save(fresh).await
    }
}

/// In-memory settings repository for tests and embedded use.
#[derive(Debug, Default)]
pub struct MemorySettingsRepository {
    records: DashMap<TenantId, TenantSettings>,
}

impl MemorySettingsRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsRepository for MemorySettingsRepository {
    async fn load(&self, tenant_id: TenantId) -> Result<Option<TenantSettings>, SettingsError> {
        Ok(self.records.get(&tenant_id).map(|entry| entry.clone()))
    }

    async fn save(&self, settings: TenantSettings) -> Result<TenantSettings, SettingsError> {
        self.records.insert(settings.tenant_id, settings.clone());
        Ok(settings)
    }

    async fn delete(&self, tenant_id: TenantId) -> Result<bool, SettingsError> {
        Ok(self.records.remove(&tenant_id).is_some())
    }
}
