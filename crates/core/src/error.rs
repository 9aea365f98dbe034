//! Authentication error model.

use thiserror::Error;

/// Result type used across the validation pipeline.
pub type AuthResult<T> = Result<T, AuthError>;

/// Failure raised by a credential store collaborator.
///
/// The pipeline never interprets these; they are carried through unchanged
/// inside [`AuthError::Store`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not be reached (timeout, connection loss, ...).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Any other backend failure.
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Request authentication error.
///
/// Every kind is distinguishable; mapping to a transport response is left to
/// the caller. The token-lifecycle kinds are never raised by the account
/// pipeline itself but are part of the same taxonomy so collaborators can
/// surface them through it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("client credentials are required")]
    ClientCredentialsRequired,

    /// Unknown client and wrong secret are deliberately the same kind.
    #[error("invalid client credentials")]
    InvalidClientCredentials,

    #[error("username is required")]
    UsernameRequired,

    #[error("password is required")]
    PasswordRequired,

    #[error("invalid user credentials")]
    InvalidUserCredentials,

    #[error("a user with this username already exists")]
    DuplicateUser,

    #[error("grant type is required")]
    GrantTypeRequired,

    #[error("invalid grant type")]
    InvalidGrantType,

    #[error("authorization code is required")]
    CodeRequired,

    #[error("refresh token is required")]
    RefreshTokenRequired,

    #[error("access token is required")]
    AccessTokenRequired,

    #[error("invalid access token")]
    InvalidAccessToken,

    #[error("access token has expired")]
    ExpiredAccessToken,

    #[error("insufficient scope")]
    InsufficientScope,

    #[error("user account is locked")]
    UserAccountLocked,

    #[error("authorization code not found")]
    AuthorizationCodeNotFound,

    #[error("refresh token not found")]
    RefreshTokenNotFound,

    /// A credential store call failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Stable snake_case identifier for this kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::ClientCredentialsRequired => "client_credentials_required",
            AuthError::InvalidClientCredentials => "invalid_client_credentials",
            AuthError::UsernameRequired => "username_required",
            AuthError::PasswordRequired => "password_required",
            AuthError::InvalidUserCredentials => "invalid_user_credentials",
            AuthError::DuplicateUser => "duplicate_user",
            AuthError::GrantTypeRequired => "grant_type_required",
            AuthError::InvalidGrantType => "invalid_grant_type",
            AuthError::CodeRequired => "code_required",
            AuthError::RefreshTokenRequired => "refresh_token_required",
            AuthError::AccessTokenRequired => "access_token_required",
            AuthError::InvalidAccessToken => "invalid_access_token",
            AuthError::ExpiredAccessToken => "expired_access_token",
            AuthError::InsufficientScope => "insufficient_scope",
            AuthError::UserAccountLocked => "user_account_locked",
            AuthError::AuthorizationCodeNotFound => "authorization_code_not_found",
            AuthError::RefreshTokenNotFound => "refresh_token_not_found",
            AuthError::Store(_) => "store_error",
        }
    }
}
