use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::AuthenticationResult;
use auth::Authenticator;
use auth::Identity;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Well-formed Argon2id hash that matches no password. Verified against when
/// the username is unknown so both login failures cost the same.
const UNKNOWN_USER_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Domain service implementation for registration and login.
///
/// Password hashing and verification run on the blocking thread pool.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let CreateUserCommand { username, password } = command;

        if self.repository.find_by_username(&username).await?.is_some() {
            return Err(UserError::UsernameAlreadyExists(username.to_string()));
        }

        let authenticator = Arc::clone(&self.authenticator);
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose()))
                .await?
                .map_err(|e| UserError::Password(e.to_string()))?;

        let user = self
            .repository
            .create(NewUser {
                username,
                password_hash,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticationResult, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = password.to_string();

        let user = match Username::new(username.to_string()) {
            Ok(username) => self.repository.find_by_username(&username).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            tokio::task::spawn_blocking(move || {
                let _ = authenticator.verify_password(&password, UNKNOWN_USER_HASH);
            })
            .await?;
            tracing::debug!("Login rejected: unknown username");
            return Err(UserError::InvalidCredentials);
        };

        let identity = Identity::new(user.username.as_str(), user.id.0);
        let stored_hash = user.password_hash;
        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &identity)
        })
        .await?;

        match result {
            Ok(token) => {
                tracing::info!(user_id = %user.id, expires_at = %token.expires_at, "Access token issued");
                Ok(token)
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::debug!(user_id = %user.id, "Login rejected: password mismatch");
                Err(UserError::InvalidCredentials)
            }
            Err(AuthenticationError::PasswordError(e)) => {
                tracing::error!(user_id = %user.id, error = %e, "Stored password hash is unreadable");
                Err(UserError::Password(e.to_string()))
            }
            Err(AuthenticationError::JwtError(e)) => Err(UserError::Token(e.to_string())),
        }
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}
