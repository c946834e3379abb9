use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

const BEARER_SCHEME: &str = "bearer";

/// Extension type to store the resolved identity in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
}

/// Middleware that resolves the bearer token into an [`AuthenticatedUser`].
///
/// Every rejection is the same 401; the reason is only logged.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req).ok_or_else(|| {
        tracing::warn!(uri = %req.uri(), "Missing or malformed Authorization header");
        ApiError::Unauthorized.into_response()
    })?;

    let identity = state.identity_resolver.resolve(token).map_err(|e| {
        tracing::warn!(uri = %req.uri(), reason = %e, "Bearer token rejected");
        ApiError::Unauthorized.into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: UserId(identity.id),
        username: identity.username,
    });

    Ok(next.run(req).await)
}

/// Token of an `Authorization: Bearer <token>` header; the scheme is case-insensitive.
fn extract_bearer_token(req: &Request) -> Option<&str> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) || token.is_empty() {
        return None;
    }

    Some(token)
}
