use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use super::students_model::{NewPayment, NewStudent, Payment, Student, StudentUpdate};
use super::students_traits::StudentRepositoryTrait;
use crate::errors::{RemoteError, Result};
use crate::store::{eq, SessionContext, StoreClient};

const STUDENTS_TABLE: &str = "students";
const PAYMENTS_TABLE: &str = "payments";

/// Remote-store implementation of the student repository.
pub struct StudentRepository {
    client: Arc<StoreClient>,
}

impl StudentRepository {
    pub fn new(client: Arc<StoreClient>) -> Self {
        StudentRepository { client }
    }
}

#[async_trait]
impl StudentRepositoryTrait for StudentRepository {
    async fn list(&self, session: &SessionContext) -> Result<Vec<Student>> {
        self.client
            .select(
                session,
                STUDENTS_TABLE,
                &[
                    ("select", "*,payments(*)".to_string()),
                    ("userId", eq(&session.user_id)),
                    ("order", "startDate.asc".to_string()),
                ],
            )
            .await
    }

    async fn get_by_id(&self, session: &SessionContext, student_id: &str) -> Result<Student> {
        let mut rows: Vec<Student> = self
            .client
            .select(
                session,
                STUDENTS_TABLE,
                &[
                    ("select", "*,payments(*)".to_string()),
                    ("userId", eq(&session.user_id)),
                    ("id", eq(student_id)),
                ],
            )
            .await?;
        rows.pop()
            .ok_or_else(|| RemoteError::NotFound(format!("student '{}'", student_id)).into())
    }

    async fn create(&self, session: &SessionContext, new_student: NewStudent) -> Result<Student> {
        let mut row = serde_json::to_value(&new_student)?;
        row["id"] = json!(new_student
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string()));
        row["userId"] = json!(session.user_id);
        self.client.insert(session, STUDENTS_TABLE, &row).await
    }

    async fn update(&self, session: &SessionContext, update: StudentUpdate) -> Result<Student> {
        let mut patch = serde_json::to_value(&update)?;
        // The id travels as a filter, not as part of the patch body.
        if let Some(body) = patch.as_object_mut() {
            body.remove("id");
        }
        let rows: Vec<Student> = self
            .client
            .update(
                session,
                STUDENTS_TABLE,
                &[("userId", eq(&session.user_id)), ("id", eq(&update.id))],
                &patch,
            )
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| RemoteError::NotFound(format!("student '{}'", update.id)).into())
    }

    async fn delete(&self, session: &SessionContext, student_id: &str) -> Result<()> {
        self.client
            .delete(
                session,
                STUDENTS_TABLE,
                &[("userId", eq(&session.user_id)), ("id", eq(student_id))],
            )
            .await
    }

    async fn insert_payment(
        &self,
        session: &SessionContext,
        student_id: &str,
        payment: NewPayment,
    ) -> Result<Payment> {
        let mut row = serde_json::to_value(&payment)?;
        row["id"] = json!(payment
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string()));
        row["studentId"] = json!(student_id);
        row["userId"] = json!(session.user_id);
        self.client.insert(session, PAYMENTS_TABLE, &row).await
    }

    async fn set_next_billing_date(
        &self,
        session: &SessionContext,
        student_id: &str,
        next_billing_date: NaiveDate,
    ) -> Result<()> {
        let patch = json!({ "nextBillingDate": next_billing_date });
        let _rows: Vec<Student> = self
            .client
            .update(
                session,
                STUDENTS_TABLE,
                &[("userId", eq(&session.user_id)), ("id", eq(student_id))],
                &patch,
            )
            .await?;
        Ok(())
    }
}
