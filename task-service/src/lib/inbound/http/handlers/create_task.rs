use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::TaskData;
use super::TaskRequestBody;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::ports::TaskServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_task(
    State(state): State<AppState>,
    Json(body): Json<TaskRequestBody>,
) -> Result<ApiSuccess<TaskData>, ApiError> {
    let (title, description, status) = body.try_into_fields()?;

    state
        .task_service
        .create_task(CreateTaskCommand::new(title, description, status))
        .await
        .map_err(ApiError::from)
        .map(|ref task| ApiSuccess::new(StatusCode::CREATED, task.into()))
}
