use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::inbound::http::extract::ApiForm;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// `POST /auth/token`: OAuth2 password-grant style login.
///
/// The body is `application/x-www-form-urlencoded`; the response is the bare
/// token object, not the envelope, so standard OAuth2 clients can read it.
pub async fn login(
    State(state): State<AppState>,
    ApiForm(body): ApiForm<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    let result = state
        .user_service
        .authenticate(&body.username, &body.password)
        .await?;

    Ok(Json(TokenResponse {
        access_token: result.access_token,
        token_type: result.token_type.to_string(),
    }))
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}
