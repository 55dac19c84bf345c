use async_trait::async_trait;
use futures::try_join;
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::revenue_model::{MonthKey, MonthlyRevenue, NewMonthlyRevenue, RevenueBreakdown};
use super::revenue_traits::{RevenueRepositoryTrait, RevenueServiceTrait};
use crate::community::community_model::AnnualMember;
use crate::community::community_traits::CommunityRepositoryTrait;
use crate::constants::GOAL_FALLBACK;
use crate::errors::Result;
use crate::settings::settings_traits::SettingsRepositoryTrait;
use crate::store::SessionContext;
use crate::students::students_model::Student;
use crate::students::students_traits::StudentRepositoryTrait;

/// Sums the revenue recognized for one month across the four sources.
///
/// Pure and order-independent: inputs are never mutated, so computing the
/// same month twice yields the same breakdown. The monthly community
/// segment applies the current subscriber count to whichever month is
/// viewed, since no historical count exists.
pub fn aggregate_month(
    month: MonthKey,
    students: &[Student],
    members: &[AnnualMember],
    monthly_count: i32,
    monthly_price: Decimal,
    manual: Option<&MonthlyRevenue>,
    goal: Decimal,
) -> RevenueBreakdown {
    let consulting_revenue: Decimal = students
        .iter()
        .flat_map(|student| &student.payments)
        .filter(|payment| payment.is_valid() && month.contains(payment.payment_date.date()))
        .map(|payment| payment.amount)
        .sum();

    let annual_joins: Decimal = members
        .iter()
        .filter(|member| month.contains(member.joined_at.date_naive()))
        .map(|member| member.amount_paid)
        .sum();
    let community_revenue = annual_joins + monthly_price * Decimal::from(monthly_count.max(0));

    let agency_revenue = manual.map(|m| m.agency_revenue).unwrap_or_else(Decimal::zero);
    let product_revenue = manual
        .map(|m| m.gumroad_revenue)
        .unwrap_or_else(Decimal::zero);

    let total = consulting_revenue + community_revenue + agency_revenue + product_revenue;

    let goal = if goal > Decimal::ZERO {
        goal
    } else {
        GOAL_FALLBACK
    };
    let progress_percent = (total / goal * Decimal::ONE_HUNDRED).min(Decimal::ONE_HUNDRED);

    RevenueBreakdown {
        month: month.to_string(),
        consulting_revenue,
        community_revenue,
        agency_revenue,
        product_revenue,
        total,
        goal,
        progress_percent,
    }
}

/// Service assembling aggregation inputs from the student, community,
/// settings, and manual-revenue tables.
pub struct RevenueService {
    repository: Arc<dyn RevenueRepositoryTrait>,
    student_repository: Arc<dyn StudentRepositoryTrait>,
    community_repository: Arc<dyn CommunityRepositoryTrait>,
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl RevenueService {
    pub fn new(
        repository: Arc<dyn RevenueRepositoryTrait>,
        student_repository: Arc<dyn StudentRepositoryTrait>,
        community_repository: Arc<dyn CommunityRepositoryTrait>,
        settings_repository: Arc<dyn SettingsRepositoryTrait>,
    ) -> Self {
        RevenueService {
            repository,
            student_repository,
            community_repository,
            settings_repository,
        }
    }
}

#[async_trait]
impl RevenueServiceTrait for RevenueService {
    async fn monthly_breakdown(
        &self,
        session: &SessionContext,
        month: MonthKey,
    ) -> Result<RevenueBreakdown> {
        debug!("aggregating revenue for {}", month);
        let (students, members, settings, manual) = try_join!(
            self.student_repository.list(session),
            self.community_repository.list(session),
            self.settings_repository.get(session),
            self.repository.get_for_month(session, month),
        )?;
        let settings = settings.unwrap_or_default();
        Ok(aggregate_month(
            month,
            &students,
            &members,
            settings.community_monthly_count,
            settings.community_monthly_price,
            manual.as_ref(),
            settings.monthly_goal,
        ))
    }

    async fn set_manual_revenue(
        &self,
        session: &SessionContext,
        row: NewMonthlyRevenue,
    ) -> Result<MonthlyRevenue> {
        row.validate()?;
        self.repository.upsert(session, row).await
    }
}
