//! Student repository and service traits.
//!
//! The repository contract is storage-agnostic: the concrete
//! implementation talks to the remote table API, mocks in tests hold rows
//! in memory.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::students_model::{NewPayment, NewStudent, Payment, Student, StudentUpdate};
use crate::billing::BillingStatus;
use crate::errors::Result;
use crate::store::SessionContext;

/// Trait defining the contract for Student repository operations.
#[async_trait]
pub trait StudentRepositoryTrait: Send + Sync {
    /// Lists all students with their payment history attached.
    async fn list(&self, session: &SessionContext) -> Result<Vec<Student>>;

    /// Retrieves a student (with payments) by id.
    async fn get_by_id(&self, session: &SessionContext, student_id: &str) -> Result<Student>;

    async fn create(&self, session: &SessionContext, new_student: NewStudent) -> Result<Student>;

    async fn update(&self, session: &SessionContext, update: StudentUpdate) -> Result<Student>;

    async fn delete(&self, session: &SessionContext, student_id: &str) -> Result<()>;

    /// Appends a payment row to a student's history.
    async fn insert_payment(
        &self,
        session: &SessionContext,
        student_id: &str,
        payment: NewPayment,
    ) -> Result<Payment>;

    /// Persists the denormalized next-billing-date cache on the student row.
    async fn set_next_billing_date(
        &self,
        session: &SessionContext,
        student_id: &str,
        next_billing_date: NaiveDate,
    ) -> Result<()>;
}

/// Trait defining the contract for Student service operations.
#[async_trait]
pub trait StudentServiceTrait: Send + Sync {
    async fn list_students(&self, session: &SessionContext) -> Result<Vec<Student>>;

    async fn get_student(&self, session: &SessionContext, student_id: &str) -> Result<Student>;

    async fn create_student(
        &self,
        session: &SessionContext,
        new_student: NewStudent,
    ) -> Result<Student>;

    async fn update_student(
        &self,
        session: &SessionContext,
        update: StudentUpdate,
    ) -> Result<Student>;

    async fn delete_student(&self, session: &SessionContext, student_id: &str) -> Result<()>;

    /// Records a payment. With `extend_cycle` the persisted
    /// `next_billing_date` cache moves to the payment date + 30 days.
    async fn record_payment(
        &self,
        session: &SessionContext,
        student_id: &str,
        payment: NewPayment,
        extend_cycle: bool,
    ) -> Result<Payment>;

    /// Derived billing status for one student, as of the given day.
    fn billing_status(&self, student: &Student, as_of: NaiveDate) -> BillingStatus;

    /// Students whose billing window has lapsed as of the given day.
    async fn overdue_students(
        &self,
        session: &SessionContext,
        as_of: NaiveDate,
    ) -> Result<Vec<Student>>;
}
