use serde::Serialize;

use oauthgate_auth::AuthContext;
use oauthgate_infra::UserRecord;

// -------------------------
// Response DTOs
// -------------------------

/// Body of a successful `POST /v1/accounts`.
#[derive(Debug, Serialize)]
pub struct AccountCreatedResponse {
    pub user_id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub account_verified: bool,
    pub client_id: String,
    /// `None` when scope resolution did not run for this request.
    pub scopes: Option<Vec<String>>,
}

impl AccountCreatedResponse {
    pub fn new(record: &UserRecord, ctx: &AuthContext) -> Self {
        Self {
            user_id: record.id.to_string(),
            username: record.username.as_str().to_string(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            account_verified: record.account_verified,
            client_id: ctx.client().id.to_string(),
            scopes: ctx
                .scopes()
                .map(|scopes| scopes.iter().map(|s| s.as_str().to_string()).collect()),
        }
    }
}
