//! Revenue repository and service traits.

use async_trait::async_trait;

use super::revenue_model::{MonthKey, MonthlyRevenue, NewMonthlyRevenue, RevenueBreakdown};
use crate::errors::Result;
use crate::store::SessionContext;

/// Contract for the manually entered per-month revenue rows.
#[async_trait]
pub trait RevenueRepositoryTrait: Send + Sync {
    /// Fetches the manual row for a month, if one was entered.
    async fn get_for_month(
        &self,
        session: &SessionContext,
        month: MonthKey,
    ) -> Result<Option<MonthlyRevenue>>;

    /// Inserts or replaces the manual row for a month.
    async fn upsert(
        &self,
        session: &SessionContext,
        row: NewMonthlyRevenue,
    ) -> Result<MonthlyRevenue>;
}

/// Contract for revenue aggregation.
#[async_trait]
pub trait RevenueServiceTrait: Send + Sync {
    /// Total revenue recognized for a month, decomposed by source, with
    /// progress toward the global goal.
    async fn monthly_breakdown(
        &self,
        session: &SessionContext,
        month: MonthKey,
    ) -> Result<RevenueBreakdown>;

    /// Records the manually entered agency/product figures for a month.
    async fn set_manual_revenue(
        &self,
        session: &SessionContext,
        row: NewMonthlyRevenue,
    ) -> Result<MonthlyRevenue>;
}
