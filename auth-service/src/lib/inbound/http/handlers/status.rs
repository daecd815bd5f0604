use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

pub async fn status() -> ApiSuccess<StatusResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        StatusResponseData {
            service: "auth-service".to_string(),
            status: "running".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponseData {
    pub service: String,
    pub status: String,
    pub version: String,
}
