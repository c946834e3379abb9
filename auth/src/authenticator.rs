use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;

use crate::identity::Identity;
use crate::identity::IdentityResolver;
use crate::jwt::Clock;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::SystemClock;
use crate::jwt::TokenSettings;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: Arc<JwtHandler>,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: &'static str,
    pub expires_at: DateTime<Utc>,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    pub const TOKEN_TYPE: &'static str = "bearer";

    /// Create an authenticator from startup settings, using the system clock.
    pub fn new(settings: &TokenSettings) -> Self {
        Self::with_clock(settings, Arc::new(SystemClock))
    }

    /// Create an authenticator whose issuance and expiry checks read `clock`.
    pub fn with_clock(settings: &TokenSettings, clock: Arc<dyn Clock>) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: Arc::new(JwtHandler::new(settings).with_clock(clock)),
        }
    }

    /// Replace the password hasher, e.g. to tune the work factor.
    pub fn with_password_hasher(mut self, password_hasher: PasswordHasher) -> Self {
        self.password_hasher = password_hasher;
        self
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash.
    ///
    /// # Errors
    /// * `PasswordError` - Stored hash is unparseable
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue an access token for `identity`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is unparseable
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        identity: &Identity,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.verify_password(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token(identity)?)
    }

    /// Issue an access token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, identity: &Identity) -> Result<AuthenticationResult, JwtError> {
        let claims = self
            .jwt_handler
            .claims_for(&identity.username, identity.id)?;
        let access_token = self.jwt_handler.encode(&claims)?;
        let expires_at = claims
            .expires_at()
            .ok_or_else(|| JwtError::EncodingFailed("expiry out of range".to_string()))?;

        Ok(AuthenticationResult {
            access_token,
            token_type: Self::TOKEN_TYPE,
            expires_at,
        })
    }

    /// Resolver sharing this authenticator's signing key and clock.
    pub fn resolver(&self) -> IdentityResolver {
        IdentityResolver::new(Arc::clone(&self.jwt_handler))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use jsonwebtoken::Algorithm;
    use secrecy::SecretString;

    use super::*;
    use crate::identity::IdentityError;
    use crate::jwt::ManualClock;

    fn authenticator() -> (Authenticator, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let settings = TokenSettings::new(
            SecretString::from("test_secret_key_at_least_32_bytes!".to_string()),
            Algorithm::HS256,
        )
        .unwrap();
        let authenticator = Authenticator::with_clock(&settings, clock.clone())
            .with_password_hasher(PasswordHasher::with_cost(8, 1, 1).unwrap());
        (authenticator, clock)
    }

    #[test]
    fn test_authenticate_success() {
        let (authenticator, _) = authenticator();
        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");
        let identity = Identity::new("alice", 1);

        let result = authenticator
            .authenticate("my_password", &hash, &identity)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());
        assert_eq!(result.token_type, "bearer");
        assert_eq!(
            authenticator.resolver().resolve(&result.access_token),
            Ok(identity)
        );
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let (authenticator, _) = authenticator();
        let hash = authenticator.hash_password("my_password").unwrap();

        let result = authenticator.authenticate("wrong_password", &hash, &Identity::new("alice", 1));
        assert_eq!(result, Err(AuthenticationError::InvalidCredentials));
    }

    #[test]
    fn test_authenticate_corrupted_hash() {
        let (authenticator, _) = authenticator();

        let result = authenticator.authenticate("pw", "not-a-phc-string", &Identity::new("a", 1));
        assert!(matches!(result, Err(AuthenticationError::PasswordError(_))));
    }

    #[test]
    fn test_issued_token_expires_after_twenty_minutes() {
        let (authenticator, clock) = authenticator();
        let issued_at = clock.now();
        let result = authenticator.issue_token(&Identity::new("alice", 1)).unwrap();

        assert_eq!(result.expires_at, issued_at + Duration::minutes(20));

        clock.advance(Duration::minutes(20));
        assert_eq!(
            authenticator.resolver().resolve(&result.access_token),
            Err(IdentityError::Token(JwtError::TokenExpired))
        );
    }

    #[test]
    fn test_issue_token_with_out_of_range_ttl_is_an_error() {
        let settings = TokenSettings::new(
            SecretString::from("test_secret_key_at_least_32_bytes!".to_string()),
            Algorithm::HS256,
        )
        .unwrap()
        .with_ttl(Duration::minutes(1_000_000_000_000));
        let authenticator =
            Authenticator::with_clock(&settings, Arc::new(ManualClock::new(Utc::now())));

        let result = authenticator.issue_token(&Identity::new("alice", 1));
        assert!(matches!(result, Err(JwtError::EncodingFailed(_))));
    }
}
