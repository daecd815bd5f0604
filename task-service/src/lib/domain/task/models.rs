use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::domain::task::errors::TaskIdError;
use crate::domain::task::errors::TaskStatusError;
use crate::domain::task::errors::TitleError;

/// Task aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: Title,
    pub description: Option<String>,
    pub status: TaskStatus,
}

/// Task unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub Uuid);

impl TaskId {
    /// Generate a new random task ID.
    ///
    /// # Returns
    /// TaskId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a task ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Returns
    /// Parsed TaskId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TaskIdError> {
        Uuid::parse_str(s)
            .map(TaskId)
            .map_err(|e| TaskIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Task title value type
///
/// Required, non-empty, at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    const MAX_LENGTH: usize = 200;

    /// Create a new valid title.
    ///
    /// # Arguments
    /// * `title` - Raw title string
    ///
    /// # Returns
    /// Validated Title value object
    ///
    /// # Errors
    /// * `Empty` - Title is empty
    /// * `TooLong` - Title longer than 200 characters
    pub fn new(title: String) -> Result<Self, TitleError> {
        if title.is_empty() {
            return Err(TitleError::Empty);
        }
        let length = title.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(TitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(title))
    }

    /// Get title as string slice.
    ///
    /// # Returns
    /// Title string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Task progress status, a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Get status as its wire string.
    ///
    /// # Returns
    /// Status string slice ("TODO", "IN_PROGRESS", or "DONE")
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Done => "DONE",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = TaskStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TODO" => Ok(TaskStatus::Todo),
            "IN_PROGRESS" => Ok(TaskStatus::InProgress),
            "DONE" => Ok(TaskStatus::Done),
            other => Err(TaskStatusError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to create a new task with domain types
#[derive(Debug)]
pub struct CreateTaskCommand {
    pub title: Title,
    pub description: Option<String>,
    pub status: TaskStatus,
}

impl CreateTaskCommand {
    pub fn new(title: Title, description: Option<String>, status: TaskStatus) -> Self {
        Self {
            title,
            description,
            status,
        }
    }
}

/// Command to replace an existing task's fields.
///
/// The id is immutable; everything else is replaced wholesale.
#[derive(Debug)]
pub struct UpdateTaskCommand {
    pub title: Title,
    pub description: Option<String>,
    pub status: TaskStatus,
}

impl UpdateTaskCommand {
    pub fn new(title: Title, description: Option<String>, status: TaskStatus) -> Self {
        Self {
            title,
            description,
            status,
        }
    }
}
