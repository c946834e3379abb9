use std::env;
use std::fmt;

use auth::TokenSettings;
use chrono::Duration;
use config::builder::DefaultState;
use config::Config as ConfigBuilder;
use config::ConfigBuilder as Builder;
use config::ConfigError;
use config::Environment;
use config::File;
use config::FileFormat;
use secrecy::SecretString;
use serde::Deserialize;

/// Application configuration for workout-service.
///
/// Loaded once at startup and treated as immutable afterwards.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

/// PostgreSQL database configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Token signing configuration.
#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default = "default_expiration_minutes")]
    pub expiration_minutes: i64,
}

/// One year; longer lifetimes are a misconfiguration.
const MAX_EXPIRATION_MINUTES: i64 = 60 * 24 * 365;

fn default_max_connections() -> u32 {
    5
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

fn default_expiration_minutes() -> i64 {
    TokenSettings::DEFAULT_TTL_MINUTES
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("algorithm", &self.algorithm)
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}

impl JwtConfig {
    /// Build the token signing settings.
    ///
    /// # Errors
    /// Returns error if the secret is absent or empty, the algorithm is not an
    /// HMAC algorithm, or the expiration is not between one minute and one year
    pub fn token_settings(&self) -> Result<TokenSettings, ConfigError> {
        let secret = self
            .secret
            .clone()
            .ok_or_else(|| ConfigError::NotFound("jwt.secret".to_string()))?;

        if !(1..=MAX_EXPIRATION_MINUTES).contains(&self.expiration_minutes) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_minutes must be between 1 and {}, got {}",
                MAX_EXPIRATION_MINUTES, self.expiration_minutes
            )));
        }

        TokenSettings::from_algorithm_name(SecretString::from(secret), &self.algorithm)
            .map(|settings| settings.with_ttl(Duration::minutes(self.expiration_minutes)))
            .map_err(|e| ConfigError::Message(format!("jwt: {}", e)))
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides.
    ///
    /// # Configuration Priority (highest to lowest)
    /// 1. `AUTH_SECRET_KEY` / `AUTH_ALGORITHM` (jwt.secret / jwt.algorithm)
    /// 2. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 3. Environment-specific config file (config/{environment}.toml)
    /// 4. Default config file (config/default.toml)
    ///
    /// # Errors
    /// Returns error if required configuration values are missing or invalid,
    /// including a missing signing secret
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__"))
            .set_override_option("jwt.secret", env::var("AUTH_SECRET_KEY").ok())?
            .set_override_option("jwt.algorithm", env::var("AUTH_ALGORITHM").ok())?;

        Self::build(configuration)
    }

    /// Load configuration from a TOML document only.
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        Self::build(ConfigBuilder::builder().add_source(File::from_str(document, FileFormat::Toml)))
    }

    fn build(builder: Builder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Config = builder.build()?.try_deserialize()?;

        // Fail at startup rather than on the first login
        config.jwt.token_settings()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
        [server]
        http_port = 8000
        cors_origins = ["http://localhost:3000"]

        [database]
        url = "postgresql://localhost/workouts"

        [jwt]
        secret = "test-secret"
    "#;

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_toml(VALID).expect("valid configuration");

        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.jwt.algorithm, "HS256");
        assert_eq!(config.jwt.expiration_minutes, 20);
        assert_eq!(config.server.cors_origins, vec!["http://localhost:3000"]);

        let settings = config.jwt.token_settings().unwrap();
        assert_eq!(settings.ttl(), Duration::minutes(20));
    }

    #[test]
    fn test_missing_secret_fails_fast() {
        let document = VALID.replace(r#"secret = "test-secret""#, "");
        assert!(Config::from_toml(&document).is_err());
    }

    #[test]
    fn test_empty_secret_fails_fast() {
        let document = VALID.replace(r#"secret = "test-secret""#, r#"secret = """#);
        assert!(Config::from_toml(&document).is_err());
    }

    #[test]
    fn test_unsupported_algorithm_fails_fast() {
        let document = format!("{}\nalgorithm = \"RS256\"", VALID);
        assert!(Config::from_toml(&document).is_err());
    }

    #[test]
    fn test_expiration_outside_bounds_fails_fast() {
        for minutes in ["0", "-5", "525601", "1000000000000"] {
            let document = format!("{}\nexpiration_minutes = {}", VALID, minutes);
            assert!(
                Config::from_toml(&document).is_err(),
                "expiration_minutes = {} was accepted",
                minutes
            );
        }

        let document = format!("{}\nexpiration_minutes = 525600", VALID);
        let config = Config::from_toml(&document).unwrap();
        assert_eq!(
            config.jwt.token_settings().unwrap().ttl(),
            Duration::minutes(525_600)
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = Config::from_toml(VALID).unwrap();
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("test-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
