use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use super::revenue_model::{MonthKey, MonthlyRevenue, NewMonthlyRevenue};
use super::revenue_traits::RevenueRepositoryTrait;
use crate::errors::Result;
use crate::store::{eq, SessionContext, StoreClient};

const MONTHLY_REVENUES_TABLE: &str = "monthly_revenues";

/// Remote-store implementation for the `(user_id, month_key)` revenue rows.
pub struct RevenueRepository {
    client: Arc<StoreClient>,
}

impl RevenueRepository {
    pub fn new(client: Arc<StoreClient>) -> Self {
        RevenueRepository { client }
    }
}

#[async_trait]
impl RevenueRepositoryTrait for RevenueRepository {
    async fn get_for_month(
        &self,
        session: &SessionContext,
        month: MonthKey,
    ) -> Result<Option<MonthlyRevenue>> {
        let mut rows: Vec<MonthlyRevenue> = self
            .client
            .select(
                session,
                MONTHLY_REVENUES_TABLE,
                &[
                    ("userId", eq(&session.user_id)),
                    ("monthKey", eq(month)),
                ],
            )
            .await?;
        Ok(rows.pop())
    }

    async fn upsert(
        &self,
        session: &SessionContext,
        row: NewMonthlyRevenue,
    ) -> Result<MonthlyRevenue> {
        let mut body = serde_json::to_value(&row)?;
        body["id"] = json!(Uuid::new_v4().to_string());
        body["userId"] = json!(session.user_id);
        self.client
            .upsert(session, MONTHLY_REVENUES_TABLE, &body)
            .await
    }
}
