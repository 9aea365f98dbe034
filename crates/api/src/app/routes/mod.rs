use axum::{Router, routing::post};

use crate::app::services::AppServices;

pub mod accounts;
pub mod system;

/// Router for the endpoints guarded by the validation pipeline.
pub fn router() -> Router<AppServices> {
    Router::new().route("/v1/accounts", post(accounts::create_account))
}
