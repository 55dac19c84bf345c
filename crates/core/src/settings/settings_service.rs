use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::settings_model::{SettingsUpdate, UserSettings};
use super::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
use crate::errors::Result;
use crate::store::SessionContext;

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    async fn get_settings(&self, session: &SessionContext) -> Result<UserSettings> {
        Ok(self
            .settings_repository
            .get(session)
            .await?
            .unwrap_or_default())
    }

    async fn update_settings(
        &self,
        session: &SessionContext,
        update: &SettingsUpdate,
    ) -> Result<UserSettings> {
        update.validate()?;
        debug!("updating user settings");
        self.settings_repository.upsert(session, update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COMMUNITY_MONTHLY_PRICE;
    use crate::errors::{Error, ValidationError};
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    struct MockSettingsRepository {
        row: Mutex<Option<UserSettings>>,
    }

    #[async_trait]
    impl SettingsRepositoryTrait for MockSettingsRepository {
        async fn get(&self, _session: &SessionContext) -> Result<Option<UserSettings>> {
            Ok(self.row.lock().unwrap().clone())
        }

        async fn upsert(
            &self,
            _session: &SessionContext,
            update: &SettingsUpdate,
        ) -> Result<UserSettings> {
            let mut row = self.row.lock().unwrap();
            let mut settings = row.clone().unwrap_or_default();
            if let Some(goal) = update.monthly_goal {
                settings.monthly_goal = goal;
            }
            if let Some(count) = update.community_monthly_count {
                settings.community_monthly_count = count;
            }
            if let Some(price) = update.community_monthly_price {
                settings.community_monthly_price = price;
            }
            *row = Some(settings.clone());
            Ok(settings)
        }
    }

    fn session() -> SessionContext {
        SessionContext::new("user-1", "token").unwrap()
    }

    #[tokio::test]
    async fn defaults_when_no_row_exists() {
        let service = SettingsService::new(Arc::new(MockSettingsRepository {
            row: Mutex::new(None),
        }));
        let settings = service.get_settings(&session()).await.unwrap();
        assert_eq!(settings.monthly_goal, dec!(0));
        assert_eq!(settings.community_monthly_count, 0);
        assert_eq!(settings.community_monthly_price, COMMUNITY_MONTHLY_PRICE);
    }

    #[tokio::test]
    async fn rejects_negative_goal() {
        let service = SettingsService::new(Arc::new(MockSettingsRepository {
            row: Mutex::new(None),
        }));
        let update = SettingsUpdate {
            monthly_goal: Some(dec!(-10)),
            community_monthly_count: None,
            community_monthly_price: None,
        };
        assert!(matches!(
            service.update_settings(&session(), &update).await,
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let service = SettingsService::new(Arc::new(MockSettingsRepository {
            row: Mutex::new(Some(UserSettings {
                monthly_goal: dec!(10000),
                community_monthly_count: 12,
                community_monthly_price: dec!(59),
            })),
        }));
        let update = SettingsUpdate {
            monthly_goal: None,
            community_monthly_count: Some(15),
            community_monthly_price: None,
        };
        let settings = service.update_settings(&session(), &update).await.unwrap();
        assert_eq!(settings.monthly_goal, dec!(10000));
        assert_eq!(settings.community_monthly_count, 15);
    }
}
