use std::sync::Arc;

use thiserror::Error;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Caller identity carried by a verified access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub id: i64,
}

impl Identity {
    pub fn new(username: impl ToString, id: i64) -> Self {
        Self {
            username: username.to_string(),
            id,
        }
    }
}

/// Reasons a bearer token does not yield an identity.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Token rejected: {0}")]
    Token(#[from] JwtError),

    #[error("Token has no subject")]
    MissingSubject,

    #[error("Token has no user id")]
    MissingUserId,
}

impl TryFrom<Claims> for Identity {
    type Error = IdentityError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let username = claims.sub.ok_or(IdentityError::MissingSubject)?;
        let id = claims.id.ok_or(IdentityError::MissingUserId)?;
        Ok(Self { username, id })
    }
}

/// Turns a bearer token into an [`Identity`].
///
/// Stateless and side-effect free: the same token resolves to the same
/// identity until it expires.
#[derive(Clone)]
pub struct IdentityResolver {
    jwt_handler: Arc<JwtHandler>,
}

impl IdentityResolver {
    pub fn new(jwt_handler: Arc<JwtHandler>) -> Self {
        Self { jwt_handler }
    }

    /// Verify `token` and extract the subject and user id.
    ///
    /// # Errors
    /// * `Token` - Signature, format or expiry check failed
    /// * `MissingSubject` / `MissingUserId` - Signed token lacks a required claim
    pub fn resolve(&self, token: &str) -> Result<Identity, IdentityError> {
        let claims = self.jwt_handler.decode(token)?;
        Identity::try_from(claims)
    }
}
