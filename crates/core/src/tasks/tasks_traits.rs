use async_trait::async_trait;

use super::tasks_model::{NewTask, Task};
use crate::errors::Result;
use crate::store::SessionContext;

#[async_trait]
pub trait TaskRepositoryTrait: Send + Sync {
    async fn list(&self, session: &SessionContext) -> Result<Vec<Task>>;

    async fn create(&self, session: &SessionContext, new_task: NewTask) -> Result<Task>;

    async fn set_completed(
        &self,
        session: &SessionContext,
        task_id: &str,
        completed: bool,
    ) -> Result<Task>;

    async fn delete(&self, session: &SessionContext, task_id: &str) -> Result<()>;
}

#[async_trait]
pub trait TasksServiceTrait: Send + Sync {
    async fn list_tasks(&self, session: &SessionContext) -> Result<Vec<Task>>;

    /// Tasks not yet completed.
    async fn open_tasks(&self, session: &SessionContext) -> Result<Vec<Task>>;

    async fn create_task(&self, session: &SessionContext, new_task: NewTask) -> Result<Task>;

    /// Flips the completion flag of a task.
    async fn toggle_task(&self, session: &SessionContext, task: &Task) -> Result<Task>;

    async fn delete_task(&self, session: &SessionContext, task_id: &str) -> Result<()>;
}
