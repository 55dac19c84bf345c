//! Repository and service traits for settings.

use async_trait::async_trait;

use super::settings_model::{SettingsUpdate, UserSettings};
use crate::errors::Result;
use crate::store::SessionContext;

/// Repository trait for the single user-settings row.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Fetches the settings row, if one has been written yet.
    async fn get(&self, session: &SessionContext) -> Result<Option<UserSettings>>;

    /// Inserts or merges the settings row.
    async fn upsert(
        &self,
        session: &SessionContext,
        update: &SettingsUpdate,
    ) -> Result<UserSettings>;
}

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// Settings with defaults applied when no row exists yet.
    async fn get_settings(&self, session: &SessionContext) -> Result<UserSettings>;

    async fn update_settings(
        &self,
        session: &SessionContext,
        update: &SettingsUpdate,
    ) -> Result<UserSettings>;
}
