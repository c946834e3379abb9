use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// `GET /auth/me`: the identity resolved from the bearer token.
pub async fn me(Extension(user): Extension<AuthenticatedUser>) -> ApiSuccess<MeResponseData> {
    ApiSuccess::new(StatusCode::OK, (&user).into())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeResponseData {
    pub id: i64,
    pub username: String,
}

impl From<&AuthenticatedUser> for MeResponseData {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.user_id.0,
            username: user.username.clone(),
        }
    }
}
