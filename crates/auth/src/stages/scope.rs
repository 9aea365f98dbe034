use std::sync::Arc;

use tracing::{debug, info};

use oauthgate_core::{AuthResult, Scope};

use crate::context::PendingContext;
use crate::request::RawRequest;
use crate::stages::field;
use crate::store::ScopeStore;

/// Resolves the scopes granted to a request.
///
/// Only `password` and `client_credentials` requests are resolved; any other
/// (or no) grant type leaves the scopes unset. Resolution itself never fails:
/// an empty or entirely unknown selection falls back to the default set.
pub struct ScopeResolver {
    scopes: Arc<dyn ScopeStore>,
    ignore_client_requested_scope: bool,
}

impl ScopeResolver {
    pub fn new(scopes: Arc<dyn ScopeStore>, ignore_client_requested_scope: bool) -> Self {
        Self {
            scopes,
            ignore_client_requested_scope,
        }
    }

    pub fn apply(&self, request: &RawRequest, ctx: PendingContext) -> AuthResult<PendingContext> {
        let Some(grant_type) = ctx.grant_type().filter(|g| g.requests_scope()) else {
            debug!(grant_type = ?ctx.grant_type(), "scope resolution not applicable");
            return Ok(ctx);
        };

        let resolved = self.resolve(request)?;
        info!(
            %grant_type,
            scopes = ?resolved.iter().map(Scope::as_str).collect::<Vec<_>>(),
            "scopes resolved"
        );
        Ok(ctx.with_scopes(resolved))
    }

    fn resolve(&self, request: &RawRequest) -> AuthResult<Vec<Scope>> {
        if self.ignore_client_requested_scope {
            debug!("client-requested scope ignored by configuration");
            return Ok(self.scopes.default_scopes()?);
        }

        let requested = requested_scope_names(request);
        let found = if requested.is_empty() {
            Vec::new()
        } else {
            self.scopes.find_scopes(&requested)?
        };

        if found.is_empty() {
            debug!(requested = requested.len(), "no known scopes requested; using defaults");
            return Ok(self.scopes.default_scopes()?);
        }
        Ok(found)
    }
}

/// Whitespace-separated `scope` field, deduplicated in request order.
pub fn requested_scope_names(request: &RawRequest) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for name in request
        .fields()
        .optional(field::SCOPE)
        .unwrap_or_default()
        .split_whitespace()
    {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
