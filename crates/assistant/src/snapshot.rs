//! Read-only snapshot of the business, serialized into the system prompt.
//!
//! The snapshot reuses the exact aggregates the dashboard renders, so the
//! assistant and the UI can never disagree about the numbers: billing
//! status comes from the one cycle calculator, revenue from the one
//! aggregator.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::fmt::Write as _;

use mentordesk_core::billing::billing_status;
use mentordesk_core::calls::Call;
use mentordesk_core::constants::DISPLAY_DECIMAL_PRECISION;
use mentordesk_core::leads::{Lead, LeadStatus};
use mentordesk_core::revenue::RevenueBreakdown;
use mentordesk_core::students::Student;
use mentordesk_core::tasks::Task;

/// One overdue student as the model sees it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueEntry {
    pub name: String,
    pub months_owed: i32,
    pub due_date: NaiveDate,
}

/// Aggregates handed to the model. Built once per chat turn from already
/// loaded domain data; never written back.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSnapshot {
    pub as_of: NaiveDate,
    pub revenue: RevenueBreakdown,
    pub active_students: usize,
    pub overdue: Vec<OverdueEntry>,
    pub pipeline: Vec<(LeadStatus, usize)>,
    pub open_tasks: usize,
    pub upcoming_calls: Vec<String>,
}

impl BusinessSnapshot {
    pub fn build(
        as_of: NaiveDate,
        revenue: RevenueBreakdown,
        students: &[Student],
        leads: &[Lead],
        tasks: &[Task],
        calls: &[Call],
        now: DateTime<Utc>,
    ) -> Self {
        let overdue = students
            .iter()
            .filter_map(|student| {
                let status = billing_status(student, as_of);
                status.is_overdue.then(|| OverdueEntry {
                    name: student.name.clone(),
                    months_owed: status.months_owed,
                    due_date: status.due_date,
                })
            })
            .collect();

        let pipeline = LeadStatus::ALL
            .iter()
            .map(|&status| (status, leads.iter().filter(|l| l.status == status).count()))
            .collect();

        let upcoming_calls = calls
            .iter()
            .filter(|call| !call.completed && call.scheduled_at >= now)
            .map(|call| format!("{} ({})", call.topic, call.scheduled_at.format("%Y-%m-%d %H:%M")))
            .collect();

        BusinessSnapshot {
            as_of,
            revenue,
            active_students: students.len(),
            overdue,
            pipeline,
            open_tasks: tasks.iter().filter(|t| !t.completed).count(),
            upcoming_calls,
        }
    }

    /// Renders the snapshot as the system prompt: plain bullet lists, no
    /// markup the model has to parse.
    pub fn system_prompt(&self) -> String {
        let mut prompt = String::new();
        let _ = writeln!(
            prompt,
            "You are the business assistant for a solo consulting and mentoring practice. \
             Answer using only the data below; it is a read-only snapshot as of {}.",
            self.as_of
        );

        let rev = &self.revenue;
        let _ = writeln!(prompt, "\nRevenue for {}:", rev.month);
        let _ = writeln!(
            prompt,
            "- total: ${} of ${} goal ({}% reached)",
            rev.total.round_dp(DISPLAY_DECIMAL_PRECISION),
            rev.goal.round_dp(DISPLAY_DECIMAL_PRECISION),
            rev.progress_percent.round_dp(DISPLAY_DECIMAL_PRECISION)
        );
        let _ = writeln!(
            prompt,
            "- consulting: ${}, community: ${}, agency: ${}, products: ${}",
            rev.consulting_revenue.round_dp(DISPLAY_DECIMAL_PRECISION),
            rev.community_revenue.round_dp(DISPLAY_DECIMAL_PRECISION),
            rev.agency_revenue.round_dp(DISPLAY_DECIMAL_PRECISION),
            rev.product_revenue.round_dp(DISPLAY_DECIMAL_PRECISION)
        );

        let _ = writeln!(prompt, "\nStudents: {} active", self.active_students);
        if self.overdue.is_empty() {
            let _ = writeln!(prompt, "- none overdue");
        } else {
            for entry in &self.overdue {
                let _ = writeln!(
                    prompt,
                    "- OVERDUE: {} owes {} month(s), due date was {}",
                    entry.name, entry.months_owed, entry.due_date
                );
            }
        }

        let _ = writeln!(prompt, "\nLead pipeline:");
        for (status, count) in &self.pipeline {
            let _ = writeln!(prompt, "- {:?}: {}", status, count);
        }

        let _ = writeln!(prompt, "\nOpen tasks: {}", self.open_tasks);

        if !self.upcoming_calls.is_empty() {
            let _ = writeln!(prompt, "\nUpcoming calls:");
            for call in &self.upcoming_calls {
                let _ = writeln!(prompt, "- {}", call);
            }
        }

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mentordesk_core::students::Payment;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn breakdown() -> RevenueBreakdown {
        RevenueBreakdown {
            month: "2024-03".to_string(),
            consulting_revenue: dec!(300),
            community_revenue: dec!(938),
            agency_revenue: dec!(1000),
            product_revenue: dec!(0),
            total: dec!(2238),
            goal: dec!(5000),
            progress_percent: dec!(44.76),
        }
    }

    fn student(name: &str, start: NaiveDate, payments: Vec<Payment>) -> Student {
        let now = Utc::now();
        Student {
            id: name.to_lowercase(),
            name: name.to_string(),
            occupation: None,
            start_date: start,
            paid_in_full: false,
            amount_paid: Decimal::ZERO,
            amount_owed: Decimal::ZERO,
            next_billing_date: None,
            payments,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn prompt_carries_revenue_and_overdue_students() {
        let as_of = date(2024, 3, 20);
        let students = vec![
            student("Ada", date(2024, 1, 10), vec![]), // overdue since Feb 9
            student(
                "Grace",
                date(2024, 3, 1),
                vec![Payment {
                    id: "p1".to_string(),
                    student_id: "grace".to_string(),
                    amount: dec!(500),
                    payment_date: date(2024, 3, 1).and_hms_opt(9, 0, 0).unwrap(),
                    note: None,
                }],
            ),
        ];
        let now = Utc.with_ymd_and_hms(2024, 3, 20, 8, 0, 0).unwrap();
        let snapshot =
            BusinessSnapshot::build(as_of, breakdown(), &students, &[], &[], &[], now);

        assert_eq!(snapshot.overdue.len(), 1);
        assert_eq!(snapshot.overdue[0].name, "Ada");

        let prompt = snapshot.system_prompt();
        assert!(prompt.contains("$2238 of $5000 goal"));
        assert!(prompt.contains("44.76% reached"));
        assert!(prompt.contains("OVERDUE: Ada"));
        assert!(!prompt.contains("OVERDUE: Grace"));
    }

    #[test]
    fn prompt_reports_empty_state_plainly() {
        let now = Utc.with_ymd_and_hms(2024, 3, 20, 8, 0, 0).unwrap();
        let snapshot =
            BusinessSnapshot::build(date(2024, 3, 20), breakdown(), &[], &[], &[], &[], now);
        let prompt = snapshot.system_prompt();
        assert!(prompt.contains("none overdue"));
        assert!(prompt.contains("Open tasks: 0"));
        assert!(!prompt.contains("Upcoming calls"));
    }

    #[test]
    fn snapshot_serializes_camel_case_for_the_frontend() {
        let now = Utc.with_ymd_and_hms(2024, 3, 20, 8, 0, 0).unwrap();
        let snapshot =
            BusinessSnapshot::build(date(2024, 3, 20), breakdown(), &[], &[], &[], &[], now);
        let value = serde_json::to_value(&snapshot).unwrap();
        assert!(value.get("activeStudents").is_some());
        assert!(value.get("openTasks").is_some());
        assert!(value.get("upcomingCalls").is_some());
    }

    #[test]
    fn pipeline_counts_every_column() {
        let now = Utc::now();
        let lead = |status| Lead {
            id: format!("{:?}", status),
            name: "L".to_string(),
            company: None,
            contact: None,
            status,
            value: None,
            notes: None,
            created_at: now,
            updated_at: now,
        };
        let leads = vec![
            lead(LeadStatus::New),
            lead(LeadStatus::New),
            lead(LeadStatus::Won),
        ];
        let snapshot = BusinessSnapshot::build(
            date(2024, 3, 20),
            breakdown(),
            &[],
            &leads,
            &[],
            &[],
            now,
        );
        assert_eq!(snapshot.pipeline.len(), LeadStatus::ALL.len());
        assert!(snapshot.pipeline.contains(&(LeadStatus::New, 2)));
        assert!(snapshot.pipeline.contains(&(LeadStatus::Won, 1)));
        assert!(snapshot.pipeline.contains(&(LeadStatus::Lost, 0)));
    }
}
