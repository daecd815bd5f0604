use async_trait::async_trait;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTaskCommand;

/// Port for task domain service operations.
#[async_trait]
pub trait TaskServicePort: Send + Sync + 'static {
    /// Create a new task.
    ///
    /// # Arguments
    /// * `command` - Validated command containing title, description, status
    ///
    /// # Returns
    /// Created task entity with a fresh identifier
    async fn create_task(&self, command: CreateTaskCommand) -> Result<Task, TaskError>;

    /// Retrieve task by unique identifier.
    ///
    /// # Arguments
    /// * `id` - Task ID
    ///
    /// # Returns
    /// Task entity
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    async fn get_task(&self, id: &TaskId) -> Result<Task, TaskError>;

    /// Retrieve all tasks.
    ///
    /// # Returns
    /// Vector of all tasks
    async fn list_tasks(&self) -> Result<Vec<Task>, TaskError>;

    /// Replace an existing task's fields.
    ///
    /// # Arguments
    /// * `id` - Task ID to update
    /// * `command` - Replacement title, description, and status
    ///
    /// # Returns
    /// Updated task entity
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    async fn update_task(&self, id: &TaskId, command: UpdateTaskCommand)
        -> Result<Task, TaskError>;

    /// Delete an existing task.
    ///
    /// # Arguments
    /// * `id` - Task ID to delete
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    async fn delete_task(&self, id: &TaskId) -> Result<(), TaskError>;
}

/// Persistence operations for the task aggregate.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    /// Persist new task to storage.
    async fn create(&self, task: Task) -> Result<Task, TaskError>;

    /// Retrieve task by identifier.
    ///
    /// # Returns
    /// Optional task entity (None if not found)
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskError>;

    /// Retrieve all tasks from storage.
    async fn list_all(&self) -> Result<Vec<Task>, TaskError>;

    /// Replace an existing task in storage.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    async fn update(&self, task: Task) -> Result<Task, TaskError>;

    /// Remove task from storage.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    async fn delete(&self, id: &TaskId) -> Result<(), TaskError>;
}
