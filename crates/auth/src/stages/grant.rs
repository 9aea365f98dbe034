use tracing::{debug, warn};

use oauthgate_core::{AuthError, AuthResult, GrantType};

use crate::context::PendingContext;
use crate::request::RawRequest;
use crate::stages::field;

/// Reads `grant_type` into the context ahead of scope resolution.
///
/// Never rejects: an absent or unrecognised value leaves the grant type
/// unset, which makes the scope resolver a no-op.
#[derive(Debug, Copy, Clone, Default)]
pub struct GrantTypeExtractor;

impl GrantTypeExtractor {
    pub fn apply(&self, request: &RawRequest, ctx: PendingContext) -> PendingContext {
        let grant_type = request
            .fields()
            .optional(field::GRANT_TYPE)
            .and_then(|raw| parse_grant_type(raw).ok());
        debug!(grant_type = ?grant_type, "grant type");

        ctx.with_grant_type(grant_type)
    }
}

/// Grant type for flows where it is mandatory (e.g. a token endpoint).
pub fn require_grant_type(request: &RawRequest) -> AuthResult<GrantType> {
    let raw = request
        .fields()
        .require(field::GRANT_TYPE, AuthError::GrantTypeRequired)?;
    parse_grant_type(raw)
}

fn parse_grant_type(raw: &str) -> AuthResult<GrantType> {
    raw.parse().inspect_err(|_| warn!("unrecognised grant type"))
}
