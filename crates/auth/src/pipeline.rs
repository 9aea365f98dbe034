//! Request validation pipeline (orchestration).
//!
//! Runs the stages in a fixed order and stops at the first failure:
//!
//! ```text
//! RawRequest
//!   ↓
//! 1. Client authenticator        (required)
//!   ↓
//! 2. User identity extractor     (required)
//!   ↓
//! 3. Account status extractor    (optional)
//!   ↓
//! 4. Profile: first name         (optional)
//!   ↓
//! 5. Profile: last name          (optional)
//!   ↓
//! 6. Grant type + scope resolver (optional, when `resolve_scopes` is on)
//!   ↓
//! AuthContext → protected handler
//! ```
//!
//! Later stages rely on the user candidate produced by stage 2, so the order
//! is not configurable. No partially built context escapes a rejected run.

use std::sync::Arc;

use tracing::{info, info_span, warn};

use oauthgate_core::AuthResult;

use crate::config::PipelineConfig;
use crate::context::AuthContext;
use crate::request::RawRequest;
use crate::stages::{
    AccountStatusExtractor, ClientAuthenticator, GrantTypeExtractor, ProfileAttributeExtractor,
    ScopeResolver, UserIdentityExtractor,
};
use crate::store::{ClientStore, ScopeStore, UserStore};

pub struct ValidationPipeline {
    client: ClientAuthenticator,
    identity: UserIdentityExtractor,
    status: AccountStatusExtractor,
    first_name: ProfileAttributeExtractor,
    last_name: ProfileAttributeExtractor,
    grant_type: GrantTypeExtractor,
    scopes: ScopeResolver,
    config: PipelineConfig,
}

impl ValidationPipeline {
    pub fn new(
        clients: Arc<dyn ClientStore>,
        users: Arc<dyn UserStore>,
        scopes: Arc<dyn ScopeStore>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            client: ClientAuthenticator::new(clients),
            identity: UserIdentityExtractor::new(users),
            status: AccountStatusExtractor,
            first_name: ProfileAttributeExtractor::first_name(),
            last_name: ProfileAttributeExtractor::last_name(),
            grant_type: GrantTypeExtractor,
            scopes: ScopeResolver::new(scopes, config.ignore_client_requested_scope),
            config,
        }
    }

    /// Build from one store implementing all three contracts.
    pub fn from_store<S>(store: Arc<S>, config: PipelineConfig) -> Self
    where
        S: ClientStore + UserStore + ScopeStore + 'static,
    {
        Self::new(store.clone(), store.clone(), store, config)
    }

    /// Validate `request`, returning the context or the first stage error.
    pub fn run(&self, request: &RawRequest) -> AuthResult<AuthContext> {
        let span = info_span!("validate_request");
        let _guard = span.enter();

        let result = self.run_stages(request);
        match &result {
            Ok(ctx) => info!(
                client_id = %ctx.client().id,
                username = %ctx.user().username,
                "request validated"
            ),
            Err(e) => warn!(error = e.kind(), "request rejected"),
        }
        result
    }

    fn run_stages(&self, request: &RawRequest) -> AuthResult<AuthContext> {
        let ctx = self.client.authenticate(request)?;
        let ctx = self.identity.extract(request, ctx)?;
        let ctx = self.status.apply(request, ctx);
        let ctx = self.first_name.apply(request, ctx);
        let ctx = self.last_name.apply(request, ctx);

        let ctx = if self.config.resolve_scopes {
            let ctx = self.grant_type.apply(request, ctx);
            self.scopes.apply(request, ctx)?
        } else {
            ctx
        };

        Ok(ctx.seal())
    }

    /// Invoke `handler` only if `request` validates.
    ///
    /// Errors from the handler are returned unchanged.
    pub fn guard<T, F>(&self, request: &RawRequest, handler: F) -> AuthResult<T>
    where
        F: FnOnce(AuthContext) -> AuthResult<T>,
    {
        let ctx = self.run(request)?;
        handler(ctx)
    }
}
