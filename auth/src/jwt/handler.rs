use std::sync::Arc;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::clock::Clock;
use super::clock::SystemClock;
use super::errors::JwtError;
use super::settings::TokenSettings;

/// Signs and verifies access tokens.
///
/// Expiry is checked against the injected [`Clock`] rather than the system
/// time used by `jsonwebtoken`, with no leeway.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl JwtHandler {
    /// Create a handler from startup settings, reading time from the system clock.
    pub fn new(settings: &TokenSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.secret_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret_bytes()),
            algorithm: settings.algorithm(),
            ttl: settings.ttl(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Current time according to the handler's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Token lifetime used by [`JwtHandler::claims_for`].
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Claims for a freshly authenticated user, issued now.
    ///
    /// # Errors
    /// * `EncodingFailed` - The configured lifetime overflows the clock's range
    pub fn claims_for(&self, username: &str, user_id: i64) -> Result<Claims, JwtError> {
        Claims::for_user(username, user_id, self.now(), self.ttl)
    }

    /// Encode claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match (tampered or foreign key)
    /// * `Malformed` - Not a well-formed token for this algorithm
    /// * `MissingClaim` - No `exp` claim
    /// * `TokenExpired` - Clock is at or past `exp`
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::Malformed(e.to_string()),
            })?;

        let exp = claims
            .exp
            .ok_or_else(|| JwtError::MissingClaim("exp".to_string()))?;

        if self.now().timestamp() >= exp {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }
}
