//! Authentication utilities library
//!
//! Provides the stateless authentication building blocks used by the workout service:
//! - Password hashing (Argon2id)
//! - Signed, time-limited access tokens (HMAC JWT) with an injectable clock
//! - Bearer token to identity resolution
//! - Authentication coordination
//!
//! No token is ever stored server-side; a token is valid until its expiry.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Identity, TokenSettings};
//! use jsonwebtoken::Algorithm;
//! use secrecy::SecretString;
//!
//! let settings = TokenSettings::new(
//!     SecretString::from("secret_key_at_least_32_bytes_long!".to_string()),
//!     Algorithm::HS256,
//! )
//! .unwrap();
//! let auth = Authenticator::new(&settings);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let identity = Identity::new("alice", 1);
//! let result = auth.authenticate("password123", &hash, &identity).unwrap();
//!
//! // Later requests: resolve the bearer token
//! let resolved = auth.resolver().resolve(&result.access_token).unwrap();
//! assert_eq!(resolved, identity);
//! ```

pub mod authenticator;
pub mod identity;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use identity::Identity;
pub use identity::IdentityError;
pub use identity::IdentityResolver;
pub use jwt::Claims;
pub use jwt::Clock;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::ManualClock;
pub use jwt::SystemClock;
pub use jwt::TokenSettings;
pub use password::PasswordError;
pub use password::PasswordHasher;
