use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use super::tasks_model::{NewTask, Task};
use super::tasks_traits::TaskRepositoryTrait;
use crate::errors::{RemoteError, Result};
use crate::store::{eq, SessionContext, StoreClient};

const TASKS_TABLE: &str = "tasks";

pub struct TaskRepository {
    client: Arc<StoreClient>,
}

impl TaskRepository {
    pub fn new(client: Arc<StoreClient>) -> Self {
        TaskRepository { client }
    }
}

#[async_trait]
impl TaskRepositoryTrait for TaskRepository {
    async fn list(&self, session: &SessionContext) -> Result<Vec<Task>> {
        self.client
            .select(
                session,
                TASKS_TABLE,
                &[
                    ("userId", eq(&session.user_id)),
                    ("order", "createdAt.desc".to_string()),
                ],
            )
            .await
    }

    async fn create(&self, session: &SessionContext, new_task: NewTask) -> Result<Task> {
        let mut row = serde_json::to_value(&new_task)?;
        row["id"] = json!(new_task
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string()));
        row["userId"] = json!(session.user_id);
        self.client.insert(session, TASKS_TABLE, &row).await
    }

    async fn set_completed(
        &self,
        session: &SessionContext,
        task_id: &str,
        completed: bool,
    ) -> Result<Task> {
        let patch = json!({ "completed": completed });
        let rows: Vec<Task> = self
            .client
            .update(
                session,
                TASKS_TABLE,
                &[("userId", eq(&session.user_id)), ("id", eq(task_id))],
                &patch,
            )
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| RemoteError::NotFound(format!("task '{}'", task_id)).into())
    }

    async fn delete(&self, session: &SessionContext, task_id: &str) -> Result<()> {
        self.client
            .delete(
                session,
                TASKS_TABLE,
                &[("userId", eq(&session.user_id)), ("id", eq(task_id))],
            )
            .await
    }
}
