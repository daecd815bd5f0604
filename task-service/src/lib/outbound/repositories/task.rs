use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::ports::TaskRepository;

/// In-memory task store.
///
/// The production adapter for this service; all state is process-local and
/// lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    tasks: RwLock<HashMap<Uuid, Task>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, TaskError> {
        self.tasks.write().await.insert(task.id.0, task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskError> {
        Ok(self.tasks.read().await.get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Task>, TaskError> {
        Ok(self.tasks.read().await.values().cloned().collect())
    }

    async fn update(&self, task: Task) -> Result<Task, TaskError> {
        let mut tasks = self.tasks.write().await;
        if !tasks.contains_key(&task.id.0) {
            return Err(TaskError::NotFound(task.id.to_string()));
        }
        tasks.insert(task.id.0, task.clone());
        Ok(task)
    }

    async fn delete(&self, id: &TaskId) -> Result<(), TaskError> {
        self.tasks
            .write()
            .await
            .remove(&id.0)
            .map(|_| ())
            .ok_or(TaskError::NotFound(id.to_string()))
    }
}
