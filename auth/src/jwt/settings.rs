use std::str::FromStr;

use chrono::Duration;
use jsonwebtoken::Algorithm;
use secrecy::ExposeSecret;
use secrecy::SecretString;

use super::errors::JwtError;

/// Signing configuration established once at startup.
///
/// Only the HMAC family is accepted since tokens are signed with a shared
/// secret.
#[derive(Debug)]
pub struct TokenSettings {
    secret: SecretString,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenSettings {
    /// Lifetime of an access token unless overridden.
    pub const DEFAULT_TTL_MINUTES: i64 = 20;

    /// Build settings from a secret and algorithm.
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty or whitespace
    /// * `UnsupportedAlgorithm` - Algorithm is not HS256, HS384 or HS512
    pub fn new(secret: SecretString, algorithm: Algorithm) -> Result<Self, JwtError> {
        if secret.expose_secret().trim().is_empty() {
            return Err(JwtError::MissingSecret);
        }

        match algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(Self {
                secret,
                algorithm,
                ttl: Duration::minutes(Self::DEFAULT_TTL_MINUTES),
            }),
            other => Err(JwtError::UnsupportedAlgorithm(format!("{:?}", other))),
        }
    }

    /// Build settings from an algorithm name such as `"HS256"`.
    pub fn from_algorithm_name(secret: SecretString, algorithm: &str) -> Result<Self, JwtError> {
        let algorithm = Algorithm::from_str(algorithm.trim())
            .map_err(|_| JwtError::UnsupportedAlgorithm(algorithm.to_string()))?;
        Self::new(secret, algorithm)
    }

    /// Override the token lifetime.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub(crate) fn secret_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_string())
    }

    #[test]
    fn test_defaults_to_twenty_minutes() {
        let settings = TokenSettings::new(secret("k"), Algorithm::HS256).unwrap();
        assert_eq!(settings.ttl(), Duration::minutes(20));
        assert_eq!(settings.algorithm(), Algorithm::HS256);
    }

    #[test]
    fn test_rejects_empty_secret() {
        assert_eq!(
            TokenSettings::new(secret("  "), Algorithm::HS256).unwrap_err(),
            JwtError::MissingSecret
        );
    }

    #[test]
    fn test_rejects_asymmetric_algorithm() {
        assert!(matches!(
            TokenSettings::new(secret("k"), Algorithm::RS256),
            Err(JwtError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_from_algorithm_name() {
        let settings = TokenSettings::from_algorithm_name(secret("k"), "HS512").unwrap();
        assert_eq!(settings.algorithm(), Algorithm::HS512);

        assert!(matches!(
            TokenSettings::from_algorithm_name(secret("k"), "none"),
            Err(JwtError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let settings = TokenSettings::new(secret("super-secret-value"), Algorithm::HS256).unwrap();
        assert!(!format!("{:?}", settings).contains("super-secret-value"));
    }
}
