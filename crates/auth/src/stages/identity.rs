use std::sync::Arc;

use tracing::{debug, info, warn};

use oauthgate_core::{AuthError, AuthResult, EmailAddress, Secret, UserCandidate};

use crate::context::{ClientContext, PendingContext};
use crate::request::RawRequest;
use crate::stages::field;
use crate::store::UserStore;

/// Resolves the target user's username and password and checks that the
/// username is a well-formed, unused email address.
pub struct UserIdentityExtractor {
    users: Arc<dyn UserStore>,
}

impl UserIdentityExtractor {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub fn extract(&self, request: &RawRequest, ctx: ClientContext) -> AuthResult<PendingContext> {
        let fields = request.fields();

        let raw_username = fields.require(field::USERNAME, AuthError::UsernameRequired)?;
        let username = EmailAddress::parse(raw_username).map_err(|_| {
            warn!("username failed email validation");
            AuthError::InvalidUserCredentials
        })?;

        let password = fields.require(field::PASSWORD, AuthError::PasswordRequired)?;
        let candidate = UserCandidate::new(username, Secret::new(password));
        debug!(username = %candidate.username, "checking username is unique");

        // Check only; persisting later may still race another request.
        if self.users.username_exists(&candidate.username)? {
            warn!(username = %candidate.username, "username already registered");
            return Err(AuthError::DuplicateUser);
        }

        info!(username = %candidate.username, "user candidate accepted");
        Ok(ctx.attach_user(candidate))
    }
}
