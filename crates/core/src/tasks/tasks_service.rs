use async_trait::async_trait;
use std::sync::Arc;

use super::tasks_model::{NewTask, Task};
use super::tasks_traits::{TaskRepositoryTrait, TasksServiceTrait};
use crate::errors::Result;
use crate::store::SessionContext;

pub struct TasksService {
    repository: Arc<dyn TaskRepositoryTrait>,
}

impl TasksService {
    pub fn new(repository: Arc<dyn TaskRepositoryTrait>) -> Self {
        TasksService { repository }
    }
}

#[async_trait]
impl TasksServiceTrait for TasksService {
    async fn list_tasks(&self, session: &SessionContext) -> Result<Vec<Task>> {
        self.repository.list(session).await
    }

    async fn open_tasks(&self, session: &SessionContext) -> Result<Vec<Task>> {
        let tasks = self.repository.list(session).await?;
        Ok(tasks.into_iter().filter(|t| !t.completed).collect())
    }

    async fn create_task(&self, session: &SessionContext, new_task: NewTask) -> Result<Task> {
        new_task.validate()?;
        self.repository.create(session, new_task).await
    }

    async fn toggle_task(&self, session: &SessionContext, task: &Task) -> Result<Task> {
        self.repository
            .set_completed(session, &task.id, !task.completed)
            .await
    }

    async fn delete_task(&self, session: &SessionContext, task_id: &str) -> Result<()> {
        self.repository.delete(session, task_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    struct MockTaskRepository {
        tasks: Mutex<Vec<Task>>,
    }

    fn task(id: &str, completed: bool) -> Task {
        let now = Utc::now();
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            completed,
            due_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[async_trait]
    impl TaskRepositoryTrait for MockTaskRepository {
        async fn list(&self, _session: &SessionContext) -> Result<Vec<Task>> {
            Ok(self.tasks.lock().unwrap().clone())
        }

        async fn create(&self, _session: &SessionContext, new_task: NewTask) -> Result<Task> {
            let stored = Task {
                id: new_task.id.unwrap_or_else(|| "generated".to_string()),
                title: new_task.title,
                completed: false,
                due_date: new_task.due_date,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            };
            self.tasks.lock().unwrap().push(stored.clone());
            Ok(stored)
        }

        async fn set_completed(
            &self,
            _session: &SessionContext,
            task_id: &str,
            completed: bool,
        ) -> Result<Task> {
            let mut tasks = self.tasks.lock().unwrap();
            let task = tasks.iter_mut().find(|t| t.id == task_id).unwrap();
            task.completed = completed;
            Ok(task.clone())
        }

        async fn delete(&self, _session: &SessionContext, task_id: &str) -> Result<()> {
            self.tasks.lock().unwrap().retain(|t| t.id != task_id);
            Ok(())
        }
    }

    fn session() -> SessionContext {
        SessionContext::new("user-1", "token").unwrap()
    }

    #[tokio::test]
    async fn toggle_flips_completion_both_ways() {
        let repo = Arc::new(MockTaskRepository {
            tasks: Mutex::new(vec![task("t1", false)]),
        });
        let service = TasksService::new(repo);

        let open = task("t1", false);
        let done = service.toggle_task(&session(), &open).await.unwrap();
        assert!(done.completed);

        let reopened = service.toggle_task(&session(), &done).await.unwrap();
        assert!(!reopened.completed);
    }

    #[tokio::test]
    async fn open_tasks_excludes_completed() {
        let repo = Arc::new(MockTaskRepository {
            tasks: Mutex::new(vec![task("t1", false), task("t2", true), task("t3", false)]),
        });
        let service = TasksService::new(repo);
        let open = service.open_tasks(&session()).await.unwrap();
        assert_eq!(open.len(), 2);
        assert!(open.iter().all(|t| !t.completed));
    }

    #[tokio::test]
    async fn create_requires_title() {
        let repo = Arc::new(MockTaskRepository {
            tasks: Mutex::new(vec![]),
        });
        let service = TasksService::new(repo);
        let result = service
            .create_task(
                &session(),
                NewTask {
                    id: None,
                    title: "  ".to_string(),
                    due_date: None,
                },
            )
            .await;
        assert!(result.is_err());
    }
}
