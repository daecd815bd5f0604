use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Explicit token check for other services.
///
/// The middleware has already validated the bearer token and re-fetched the
/// user; reaching this handler means the token is good.
pub async fn validate_token(
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<ValidateTokenResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        ValidateTokenResponseData {
            valid: true,
            user: (&user).into(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateTokenResponseData {
    pub valid: bool,
    pub user: UserData,
}
