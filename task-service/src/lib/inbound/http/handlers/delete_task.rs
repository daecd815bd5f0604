use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use crate::domain::task::models::TaskId;
use crate::domain::task::ports::TaskServicePort;
use crate::inbound::http::router::AppState;

pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let task_id = TaskId::from_string(&task_id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid task ID: {}", e)))?;

    state.task_service.delete_task(&task_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
