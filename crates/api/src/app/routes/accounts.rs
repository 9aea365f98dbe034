use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use oauthgate_auth::AuthContext;

use crate::app::{dto::AccountCreatedResponse, errors, services::AppServices};

/// Persist the user candidate of an already validated request.
///
/// The store re-checks uniqueness, so a concurrent registration of the same
/// username still ends in `409`.
pub async fn create_account(
    State(services): State<AppServices>,
    Extension(ctx): Extension<AuthContext>,
) -> Response {
    let store = services.store.clone();
    let created = tokio::task::spawn_blocking(move || {
        store.create_user(ctx.user()).map(|record| (record, ctx))
    })
    .await;

    match created {
        Ok(Ok((record, ctx))) => (
            StatusCode::CREATED,
            Json(AccountCreatedResponse::new(&record, &ctx)),
        )
            .into_response(),
        Ok(Err(err)) => errors::auth_error_to_response(&err),
        Err(err) => {
            tracing::error!(error = %err, "account creation task failed");
            errors::internal_error()
        }
    }
}
