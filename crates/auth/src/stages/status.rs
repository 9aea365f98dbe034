use tracing::debug;

use crate::context::PendingContext;
use crate::request::RawRequest;
use crate::stages::field;

/// Optional verified/active flag; never fails. Absent means unverified.
#[derive(Debug, Copy, Clone, Default)]
pub struct AccountStatusExtractor;

impl AccountStatusExtractor {
    pub fn apply(&self, request: &RawRequest, ctx: PendingContext) -> PendingContext {
        let verified = request
            .fields()
            .optional(field::ACCOUNT_VERIFIED)
            .is_some_and(parse_flag);
        debug!(account_verified = verified, "account status");

        ctx.map_user(|user| user.with_account_verified(verified))
    }
}

/// Only an explicit truthy value marks the account verified.
pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use oauthgate_core::{Client, EmailAddress, Secret, UserCandidate};

    use crate::context::ClientContext;

    fn pending() -> PendingContext {
        let user = UserCandidate::new(EmailAddress::parse("a@example.com").unwrap(), Secret::new("pw"));
        ClientContext::new(Client::new("c1", "test")).attach_user(user)
    }

    #[test]
    fn absent_flag_means_unverified() {
        let ctx = AccountStatusExtractor.apply(&RawRequest::new(), pending());
        assert!(!ctx.user().account_verified);
    }

    #[test]
    fn truthy_values_verify() {
        for raw in ["true", "True", "1", "yes", "ON"] {
            let req = RawRequest::new().with_query("account_verified", raw);
            assert!(AccountStatusExtractor.apply(&req, pending()).user().account_verified, "{raw}");
        }
    }

    #[test]
    fn other_values_do_not_verify() {
        for raw in ["false", "0", "no", "", "maybe"] {
            let req = RawRequest::new().with_form("account_verified", raw);
            assert!(!AccountStatusExtractor.apply(&req, pending()).user().account_verified, "{raw}");
        }
    }

    #[test]
    fn form_shadows_query() {
        let req = RawRequest::new()
            .with_form("account_verified", "false")
            .with_query("account_verified", "true");
        assert!(!AccountStatusExtractor.apply(&req, pending()).user().account_verified);
    }
}
