use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Access token payload.
///
/// Every field is optional so that a token missing a claim still decodes and
/// can be rejected by the caller with a precise reason.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Numeric user identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the claims issued at login.
    ///
    /// # Arguments
    /// * `username` - Subject of the token
    /// * `user_id` - Numeric user identifier
    /// * `issued_at` - Issuance instant (from the handler's clock)
    /// * `ttl` - Lifetime of the token
    ///
    /// # Returns
    /// Claims with sub, id, iat and exp = iat + ttl
    ///
    /// # Errors
    /// * `EncodingFailed` - iat + ttl falls outside the representable time range
    pub fn for_user(
        username: impl ToString,
        user_id: i64,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        let expires_at = issued_at.checked_add_signed(ttl).ok_or_else(|| {
            JwtError::EncodingFailed(format!("Token lifetime out of range: {}", ttl))
        })?;

        Ok(Self {
            sub: Some(username.to_string()),
            id: Some(user_id),
            exp: Some(expires_at.timestamp()),
            iat: Some(issued_at.timestamp()),
        })
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Set user identifier.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Expiration as a UTC instant, if present and representable.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// Check if the token is expired at `current_timestamp`.
    ///
    /// A token is valid strictly before `exp`; at `exp` it is expired.
    /// Claims without `exp` are never considered expired here.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(false, |exp| current_timestamp >= exp)
    }
}
