use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::auth::models::User;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated user through the request.
///
/// Holds the freshly re-fetched record, not the token snapshot, so handlers
/// always see the current role and email.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

/// Middleware that validates bearer tokens through the credential service.
///
/// Every failure mode (missing header, bad format, any token or lookup
/// problem) answers with the same generic 401 body.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let user = state.auth_service.validate_token(token).await.map_err(|e| {
        tracing::warn!(error = %e, "Bearer token rejected");
        unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedUser(user));

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            unauthorized()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid UTF-8");
        unauthorized()
    })?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header is not a bearer token");
        unauthorized()
    })
}

fn unauthorized() -> Response {
    ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
}
