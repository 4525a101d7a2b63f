//! User account operations — registration, login, profile lookup.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use markethub_auth::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use markethub_auth::password::PasswordHasher;
use markethub_core::config::AuthConfig;
use markethub_core::error::AppError;
use markethub_core::result::AppResult;
use markethub_database::repositories::user::UserRepository;
use markethub_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Data for a registration request, already validated at the DTO layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Display name (optional).
    pub display_name: Option<String>,
    /// Requested role; defaults to agent.
    pub role: Option<UserRole>,
}

/// Result of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// Fresh token pair.
    pub tokens: TokenPair,
}

/// Handles user account operations.
#[derive(Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: PasswordHasher,
    /// JWT encoder for login tokens.
    encoder: JwtEncoder,
    /// JWT decoder for refresh tokens.
    decoder: JwtDecoder,
    /// Minimum accepted password length.
    min_password_length: usize,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>, auth_config: &AuthConfig) -> Self {
        Self {
            user_repo,
            hasher: PasswordHasher::new(),
            encoder: JwtEncoder::new(auth_config),
            decoder: JwtDecoder::new(auth_config),
            min_password_length: auth_config.min_password_length,
        }
    }

    /// Registers a new user account.
    pub async fn register(&self, req: RegisterRequest) -> AppResult<User> {
        let username = req.username.trim();
        if username.is_empty() {
            return Err(AppError::validation("Username cannot be empty"));
        }
        if req.password.len() < self.min_password_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.min_password_length
            )));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                email: req.email,
                password_hash,
                display_name: req.display_name,
                role: req.role.unwrap_or(UserRole::Agent),
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Authenticates a user and issues a token pair.
    ///
    /// Unknown usernames and wrong passwords produce the same error so
    /// login failures leak nothing about existing accounts.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        if !user.can_login() {
            return Err(AppError::forbidden("Account is suspended"));
        }

        let tokens = self
            .encoder
            .generate_token_pair(user.id, user.role, &user.username)?;

        self.user_repo.touch_last_login(user.id, Utc::now()).await?;
        info!(user_id = %user.id, "User logged in");

        Ok(LoginOutcome { user, tokens })
    }

    /// Exchanges a refresh token for a fresh token pair.
    ///
    /// The user record is re-read so role changes and suspensions take
    /// effect on the next refresh rather than at the old token's expiry.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<LoginOutcome> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;

        let user = self
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid refresh token"))?;

        if !user.can_login() {
            return Err(AppError::forbidden("Account is suspended"));
        }

        let tokens = self
            .encoder
            .generate_token_pair(user.id, user.role, &user.username)?;

        info!(user_id = %user.id, "Token pair refreshed");
        Ok(LoginOutcome { user, tokens })
    }

    /// Gets the current user's full profile.
    pub async fn me(&self, ctx: &RequestContext) -> AppResult<User> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
