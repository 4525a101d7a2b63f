//! WebSocket authentication — validates the JWT passed as a query parameter.

use std::sync::Arc;

use uuid::Uuid;

use markethub_auth::jwt::JwtDecoder;
use markethub_core::error::AppError;
use markethub_entity::user::UserRole;

/// Authenticated connection info extracted from JWT claims.
#[derive(Debug, Clone)]
pub struct AuthenticatedConnection {
    /// User ID.
    pub user_id: Uuid,
    /// User role.
    pub role: UserRole,
    /// Username.
    pub username: String,
}

/// Authenticates WebSocket connections using JWT access tokens.
#[derive(Clone)]
pub struct WsAuthenticator {
    /// JWT decoder.
    decoder: Arc<JwtDecoder>,
}

impl std::fmt::Debug for WsAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WsAuthenticator").finish()
    }
}

impl WsAuthenticator {
    /// Creates a new WebSocket authenticator.
    pub fn new(decoder: Arc<JwtDecoder>) -> Self {
        Self { decoder }
    }

    /// Authenticates a connection from the `token` query parameter.
    pub fn authenticate(&self, token: &str) -> Result<AuthenticatedConnection, AppError> {
        let claims = self.decoder.decode_access_token(token)?;

        Ok(AuthenticatedConnection {
            user_id: claims.user_id(),
            role: claims.role,
            username: claims.username,
        })
    }
}
