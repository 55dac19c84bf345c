use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::COMMUNITY_MONTHLY_PRICE;
use crate::errors::{Result, ValidationError};

/// The single per-user settings row: the global monthly goal and the
/// current community monthly-subscription figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// One global target, not per month.
    #[serde(default)]
    pub monthly_goal: Decimal,
    /// Current count of active monthly subscriptions. Not a time series:
    /// only "now" is tracked.
    #[serde(default)]
    pub community_monthly_count: i32,
    #[serde(default = "default_monthly_price")]
    pub community_monthly_price: Decimal,
}

fn default_monthly_price() -> Decimal {
    COMMUNITY_MONTHLY_PRICE
}

impl Default for UserSettings {
    fn default() -> Self {
        UserSettings {
            monthly_goal: Decimal::ZERO,
            community_monthly_count: 0,
            community_monthly_price: COMMUNITY_MONTHLY_PRICE,
        }
    }
}

/// Input model for settings edits.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_goal: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_monthly_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_monthly_price: Option<Decimal>,
}

impl SettingsUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(goal) = self.monthly_goal {
            if goal < Decimal::ZERO {
                return Err(ValidationError::InvalidInput(
                    "monthly goal cannot be negative".to_string(),
                )
                .into());
            }
        }
        if let Some(count) = self.community_monthly_count {
            if count < 0 {
                return Err(ValidationError::InvalidInput(
                    "subscriber count cannot be negative".to_string(),
                )
                .into());
            }
        }
        if let Some(price) = self.community_monthly_price {
            if price < Decimal::ZERO {
                return Err(ValidationError::InvalidInput(
                    "subscription price cannot be negative".to_string(),
                )
                .into());
            }
        }
        Ok(())
    }
}
