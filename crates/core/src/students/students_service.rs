use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::debug;
use std::sync::Arc;

use super::students_model::{NewPayment, NewStudent, Payment, Student, StudentUpdate};
use super::students_traits::{StudentRepositoryTrait, StudentServiceTrait};
use crate::billing::{billing_status, next_billing_date, BillingStatus};
use crate::errors::Result;
use crate::store::SessionContext;

/// Service for managing students and their payment history.
pub struct StudentService {
    repository: Arc<dyn StudentRepositoryTrait>,
}

impl StudentService {
    pub fn new(repository: Arc<dyn StudentRepositoryTrait>) -> Self {
        StudentService { repository }
    }
}

#[async_trait]
impl StudentServiceTrait for StudentService {
    async fn list_students(&self, session: &SessionContext) -> Result<Vec<Student>> {
        self.repository.list(session).await
    }

    async fn get_student(&self, session: &SessionContext, student_id: &str) -> Result<Student> {
        self.repository.get_by_id(session, student_id).await
    }

    async fn create_student(
        &self,
        session: &SessionContext,
        new_student: NewStudent,
    ) -> Result<Student> {
        new_student.validate()?;
        debug!("enrolling student '{}'", new_student.name);
        self.repository.create(session, new_student).await
    }

    async fn update_student(
        &self,
        session: &SessionContext,
        update: StudentUpdate,
    ) -> Result<Student> {
        update.validate()?;
        self.repository.update(session, update).await
    }

    async fn delete_student(&self, session: &SessionContext, student_id: &str) -> Result<()> {
        self.repository.delete(session, student_id).await
    }

    async fn record_payment(
        &self,
        session: &SessionContext,
        student_id: &str,
        payment: NewPayment,
        extend_cycle: bool,
    ) -> Result<Payment> {
        payment.validate(Utc::now().date_naive())?;
        let stored = self
            .repository
            .insert_payment(session, student_id, payment)
            .await?;
        if extend_cycle {
            let next = next_billing_date(stored.payment_date.date());
            debug!("extending cycle for student '{}' to {}", student_id, next);
            self.repository
                .set_next_billing_date(session, student_id, next)
                .await?;
        }
        Ok(stored)
    }

    fn billing_status(&self, student: &Student, as_of: NaiveDate) -> BillingStatus {
        billing_status(student, as_of)
    }

    async fn overdue_students(
        &self,
        session: &SessionContext,
        as_of: NaiveDate,
    ) -> Result<Vec<Student>> {
        let students = self.repository.list(session).await?;
        Ok(students
            .into_iter()
            .filter(|student| billing_status(student, as_of).is_overdue)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Error, RemoteError, ValidationError};
    use chrono::{DateTime, NaiveDateTime};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(12, 0, 0).unwrap()
    }

    fn test_student(id: &str, start: NaiveDate, payments: Vec<Payment>) -> Student {
        let created: DateTime<Utc> = Utc::now();
        Student {
            id: id.to_string(),
            name: format!("Student {}", id),
            occupation: None,
            start_date: start,
            paid_in_full: false,
            amount_paid: Decimal::ZERO,
            amount_owed: Decimal::ZERO,
            next_billing_date: None,
            payments,
            created_at: created,
            updated_at: created,
        }
    }

    fn test_payment(student_id: &str, amount: Decimal, paid_on: NaiveDate) -> Payment {
        Payment {
            id: Uuid::new_v4().to_string(),
            student_id: student_id.to_string(),
            amount,
            payment_date: paid_on.and_hms_opt(12, 0, 0).unwrap(),
            note: None,
        }
    }

    // --- Mock repository ---
    struct MockStudentRepository {
        students: Mutex<Vec<Student>>,
        next_billing_dates: Mutex<Vec<(String, NaiveDate)>>,
        fail_writes: bool,
    }

    impl MockStudentRepository {
        fn with_students(students: Vec<Student>) -> Self {
            MockStudentRepository {
                students: Mutex::new(students),
                next_billing_dates: Mutex::new(Vec::new()),
                fail_writes: false,
            }
        }
    }

    #[async_trait]
    impl StudentRepositoryTrait for MockStudentRepository {
        async fn list(&self, _session: &SessionContext) -> Result<Vec<Student>> {
            Ok(self.students.lock().unwrap().clone())
        }

        async fn get_by_id(
            &self,
            _session: &SessionContext,
            student_id: &str,
        ) -> Result<Student> {
            self.students
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.id == student_id)
                .cloned()
                .ok_or_else(|| RemoteError::NotFound(student_id.to_string()).into())
        }

        async fn create(
            &self,
            _session: &SessionContext,
            new_student: NewStudent,
        ) -> Result<Student> {
            let student = test_student(
                &new_student.id.unwrap_or_else(|| "generated".to_string()),
                new_student.start_date,
                Vec::new(),
            );
            self.students.lock().unwrap().push(student.clone());
            Ok(student)
        }

        async fn update(
            &self,
            _session: &SessionContext,
            update: StudentUpdate,
        ) -> Result<Student> {
            self.get_by_id(_session, &update.id).await
        }

        async fn delete(&self, _session: &SessionContext, student_id: &str) -> Result<()> {
            self.students.lock().unwrap().retain(|s| s.id != student_id);
            Ok(())
        }

        async fn insert_payment(
            &self,
            _session: &SessionContext,
            student_id: &str,
            payment: NewPayment,
        ) -> Result<Payment> {
            if self.fail_writes {
                return Err(RemoteError::Request("write rejected".to_string()).into());
            }
            let stored = Payment {
                id: Uuid::new_v4().to_string(),
                student_id: student_id.to_string(),
                amount: payment.amount,
                payment_date: payment.payment_date,
                note: payment.note,
            };
            let mut students = self.students.lock().unwrap();
            if let Some(student) = students.iter_mut().find(|s| s.id == student_id) {
                student.payments.push(stored.clone());
            }
            Ok(stored)
        }

        async fn set_next_billing_date(
            &self,
            _session: &SessionContext,
            student_id: &str,
            next_billing_date: NaiveDate,
        ) -> Result<()> {
            self.next_billing_dates
                .lock()
                .unwrap()
                .push((student_id.to_string(), next_billing_date));
            Ok(())
        }
    }

    fn session() -> SessionContext {
        SessionContext::new("user-1", "token").unwrap()
    }

    #[tokio::test]
    async fn record_payment_with_extend_persists_cache() {
        let repo = Arc::new(MockStudentRepository::with_students(vec![test_student(
            "s1",
            date(2024, 1, 10),
            Vec::new(),
        )]));
        let service = StudentService::new(repo.clone());

        let payment = NewPayment {
            id: None,
            amount: dec!(500),
            payment_date: datetime(2024, 2, 11),
            note: None,
        };
        let stored = service
            .record_payment(&session(), "s1", payment, true)
            .await
            .unwrap();
        assert_eq!(stored.amount, dec!(500));

        let cached = repo.next_billing_dates.lock().unwrap().clone();
        assert_eq!(cached, vec![("s1".to_string(), date(2024, 3, 12))]);

        // A subsequent status query reflects the new window without any
        // other field changing.
        let student = service.get_student(&session(), "s1").await.unwrap();
        let status = service.billing_status(&student, date(2024, 2, 11));
        assert_eq!(status.due_date, date(2024, 3, 12));
        assert!(!status.is_overdue);
    }

    #[tokio::test]
    async fn record_payment_without_extend_leaves_cache_alone() {
        let repo = Arc::new(MockStudentRepository::with_students(vec![test_student(
            "s1",
            date(2024, 1, 10),
            Vec::new(),
        )]));
        let service = StudentService::new(repo.clone());

        let payment = NewPayment {
            id: None,
            amount: dec!(250),
            payment_date: datetime(2024, 2, 1),
            note: Some("first month".to_string()),
        };
        service
            .record_payment(&session(), "s1", payment, false)
            .await
            .unwrap();
        assert!(repo.next_billing_dates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn record_payment_rejects_invalid_amount_before_any_write() {
        let repo = Arc::new(MockStudentRepository::with_students(vec![test_student(
            "s1",
            date(2024, 1, 10),
            Vec::new(),
        )]));
        let service = StudentService::new(repo.clone());

        let payment = NewPayment {
            id: None,
            amount: dec!(-50),
            payment_date: datetime(2024, 2, 1),
            note: None,
        };
        let result = service.record_payment(&session(), "s1", payment, true).await;
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::NonPositiveAmount(_)))
        ));
        let student = repo.get_by_id(&session(), "s1").await.unwrap();
        assert!(student.payments.is_empty());
        assert!(repo.next_billing_dates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn overdue_students_filters_by_window() {
        let on_time = {
            let mut s = test_student("paid", date(2024, 1, 10), Vec::new());
            s.payments
                .push(test_payment("paid", dec!(500), date(2024, 2, 20)));
            s
        };
        let lapsed = test_student("lapsed", date(2024, 1, 10), Vec::new());
        let exempt = {
            let mut s = test_student("exempt", date(2024, 1, 10), Vec::new());
            s.paid_in_full = true;
            s
        };
        let repo = Arc::new(MockStudentRepository::with_students(vec![
            on_time, lapsed, exempt,
        ]));
        let service = StudentService::new(repo);

        let overdue = service
            .overdue_students(&session(), date(2024, 3, 1))
            .await
            .unwrap();
        let ids: Vec<&str> = overdue.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["lapsed"]);
    }
}
