use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    HashError, PasswordHasher, TokenError, TokenProvider, UserQuery, UserQueryError,
};

// ========================= Login Request =========================
/// Credentials exactly as typed into the login form.
///
/// No trimming or case folding: the username must match the stored one
/// byte for byte.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    username: String,
    password: String,
}

impl LoginRequest {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(#[from] HashError),

    #[error("Session token generation failed: {0}")]
    TokenGenerationFailed(#[from] TokenError),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: UserId,
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct LoginUserResponse {
    pub session_token: String,
    /// Seconds until `session_token` expires
    pub expires_in: i64,
    pub user: UserInfo,
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let user = self
            .query
            .find_by_username(request.username())
            .await?
            .ok_or(LoginError::InvalidCredentials)?;

        // A hash that fails to parse is a server-side problem, not a bad login
        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let session_token = self.token_provider.generate_session_token(user.id)?;

        Ok(LoginUserResponse {
            session_token,
            expires_in: self.token_provider.session_expiry(),
            user: UserInfo {
                id: user.id,
                username: user.username,
            },
        })
    }
}
