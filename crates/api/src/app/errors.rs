use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use oauthgate_core::AuthError;

/// HTTP status for each validation failure kind.
pub fn status_for(err: &AuthError) -> StatusCode {
    match err {
        AuthError::ClientCredentialsRequired
        | AuthError::InvalidClientCredentials
        | AuthError::AccessTokenRequired
        | AuthError::InvalidAccessToken
        | AuthError::ExpiredAccessToken => StatusCode::UNAUTHORIZED,
        AuthError::UsernameRequired
        | AuthError::PasswordRequired
        | AuthError::InvalidUserCredentials
        | AuthError::GrantTypeRequired
        | AuthError::InvalidGrantType
        | AuthError::CodeRequired
        | AuthError::RefreshTokenRequired => StatusCode::BAD_REQUEST,
        AuthError::InsufficientScope | AuthError::UserAccountLocked => StatusCode::FORBIDDEN,
        AuthError::AuthorizationCodeNotFound | AuthError::RefreshTokenNotFound => {
            StatusCode::NOT_FOUND
        }
        AuthError::DuplicateUser => StatusCode::CONFLICT,
        AuthError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn auth_error_to_response(err: &AuthError) -> Response {
    match err {
        AuthError::Store(e) => {
            tracing::error!(error = %e, "credential store failure");
            internal_error()
        }
        other => json_error(status_for(other), other.kind(), other.to_string()),
    }
}

pub fn internal_error() -> Response {
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "server_error",
        "internal server error",
    )
}

pub fn json_error(status: StatusCode, code: &'static str, description: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "error_description": description.into(),
        })),
    )
        .into_response()
}
