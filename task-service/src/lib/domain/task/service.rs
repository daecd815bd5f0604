use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTaskCommand;
use crate::domain::task::ports::TaskRepository;
use crate::domain::task::ports::TaskServicePort;

/// Domain service implementation for task operations.
///
/// Generic over the repository for testability.
pub struct TaskService<TR>
where
    TR: TaskRepository,
{
    repository: Arc<TR>,
}

impl<TR> TaskService<TR>
where
    TR: TaskRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TaskServicePort for TaskService<TR>
where
    TR: TaskRepository,
{
    async fn create_task(&self, command: CreateTaskCommand) -> Result<Task, TaskError> {
        let task = Task {
            id: TaskId::new(),
            title: command.title,
            description: command.description,
            status: command.status,
        };

        let task = self.repository.create(task).await?;
        tracing::info!(task_id = %task.id, status = %task.status, "Task created");
        Ok(task)
    }

    async fn get_task(&self, id: &TaskId) -> Result<Task, TaskError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id.to_string()))
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, TaskError> {
        self.repository.list_all().await
    }

    async fn update_task(
        &self,
        id: &TaskId,
        command: UpdateTaskCommand,
    ) -> Result<Task, TaskError> {
        let task = Task {
            id: *id,
            title: command.title,
            description: command.description,
            status: command.status,
        };

        let task = self.repository.update(task).await?;
        tracing::info!(task_id = %task.id, status = %task.status, "Task updated");
        Ok(task)
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), TaskError> {
        self.repository.delete(id).await?;
        tracing::info!(task_id = %id, "Task deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::task::models::TaskStatus;
    use crate::domain::task::models::Title;

    mock! {
        pub TestTaskRepository {}

        #[async_trait]
        impl TaskRepository for TestTaskRepository {
            async fn create(&self, task: Task) -> Result<Task, TaskError>;
            async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskError>;
            async fn list_all(&self) -> Result<Vec<Task>, TaskError>;
            async fn update(&self, task: Task) -> Result<Task, TaskError>;
            async fn delete(&self, id: &TaskId) -> Result<(), TaskError>;
        }
    }

    fn sample_task(id: TaskId) -> Task {
        Task {
            id,
            title: Title::new("Write report".to_string()).unwrap(),
            description: Some("Quarterly summary".to_string()),
            status: TaskStatus::Todo,
        }
    }

    #[tokio::test]
    async fn test_create_task_generates_id() {
        let mut repository = MockTestTaskRepository::new();
        repository
            .expect_create()
            .withf(|task| task.title.as_str() == "Write report" && task.status == TaskStatus::Todo)
            .times(1)
            .returning(Ok);

        let service = TaskService::new(Arc::new(repository));
        let command = CreateTaskCommand::new(
            Title::new("Write report".to_string()).unwrap(),
            Some("Quarterly summary".to_string()),
            TaskStatus::Todo,
        );

        let task = service.create_task(command).await.unwrap();
        assert_eq!(task.title.as_str(), "Write report");
    }

    #[tokio::test]
    async fn test_get_task_not_found() {
        let id = TaskId::new();
        let mut repository = MockTestTaskRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(None));

        let service = TaskService::new(Arc::new(repository));
        let result = service.get_task(&id).await;

        assert!(matches!(result, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_task_replaces_fields_keeps_id() {
        let id = TaskId::new();
        let mut repository = MockTestTaskRepository::new();
        repository
            .expect_update()
            .withf(move |task| {
                task.id == id
                    && task.title.as_str() == "New title"
                    && task.description.is_none()
                    && task.status == TaskStatus::Done
            })
            .times(1)
            .returning(Ok);

        let service = TaskService::new(Arc::new(repository));
        let command = UpdateTaskCommand::new(
            Title::new("New title".to_string()).unwrap(),
            None,
            TaskStatus::Done,
        );

        let task = service.update_task(&id, command).await.unwrap();
        assert_eq!(task.id, id);
        assert_eq!(task.status, TaskStatus::Done);
    }

    #[tokio::test]
    async fn test_update_task_not_found() {
        let id = TaskId::new();
        let mut repository = MockTestTaskRepository::new();
        repository
            .expect_update()
            .times(1)
            .returning(|task| Err(TaskError::NotFound(task.id.to_string())));

        let service = TaskService::new(Arc::new(repository));
        let command = UpdateTaskCommand::new(
            Title::new("New title".to_string()).unwrap(),
            None,
            TaskStatus::Done,
        );

        let result = service.update_task(&id, command).await;
        assert!(matches!(result, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_task_not_found() {
        let id = TaskId::new();
        let mut repository = MockTestTaskRepository::new();
        repository
            .expect_delete()
            .with(eq(id))
            .times(1)
            .returning(|id| Err(TaskError::NotFound(id.to_string())));

        let service = TaskService::new(Arc::new(repository));
        let result = service.delete_task(&id).await;

        assert!(matches!(result, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_tasks() {
        let mut repository = MockTestTaskRepository::new();
        repository
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![sample_task(TaskId::new()), sample_task(TaskId::new())]));

        let service = TaskService::new(Arc::new(repository));
        let tasks = service.list_tasks().await.unwrap();

        assert_eq!(tasks.len(), 2);
    }
}
