use std::sync::Arc;

use tracing::{debug, info, warn};

use oauthgate_core::{AuthError, AuthResult, ClientId, Secret};

use crate::basic::{BasicCredentials, parse_basic_authorization};
use crate::context::ClientContext;
use crate::request::RawRequest;
use crate::stages::field;
use crate::store::ClientStore;

/// Resolves and verifies the calling client application.
///
/// Sources, first match wins: Basic header, form fields, query fields.
pub struct ClientAuthenticator {
    clients: Arc<dyn ClientStore>,
}

impl ClientAuthenticator {
    pub fn new(clients: Arc<dyn ClientStore>) -> Self {
        Self { clients }
    }

    pub fn authenticate(&self, request: &RawRequest) -> AuthResult<ClientContext> {
        let creds = extract_credentials(request)?;
        debug!(client_id = %creds.client_id, "client credentials extracted");

        // Unknown id and bad secret collapse into the same kind.
        let Some(client) = self.clients.find_client(&creds.client_id)? else {
            warn!(client_id = %creds.client_id, "unknown client");
            return Err(AuthError::InvalidClientCredentials);
        };

        if !self.clients.verify_secret(&client, &creds.client_secret)? {
            warn!(client_id = %client.id, "client secret rejected");
            return Err(AuthError::InvalidClientCredentials);
        }

        info!(client_id = %client.id, "client authenticated");
        Ok(ClientContext::new(client))
    }
}

/// Pick the credential source without touching the store.
pub fn extract_credentials(request: &RawRequest) -> AuthResult<BasicCredentials> {
    if let Some(header) = request.authorization() {
        match parse_basic_authorization(header) {
            Ok(Some(creds))
                if !creds.client_id.as_str().is_empty() && !creds.client_secret.expose().is_empty() =>
            {
                return Ok(creds);
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "malformed basic authorization header");
                return Err(AuthError::ClientCredentialsRequired);
            }
        }
    }

    match request.fields().pair(field::CLIENT_ID, field::CLIENT_SECRET) {
        Some((id, secret, source)) => {
            debug!(?source, "client credentials taken from request fields");
            Ok(BasicCredentials {
                client_id: ClientId::new(id),
                client_secret: Secret::new(secret),
            })
        }
        None => {
            warn!("client id and secret missing from header, form and query");
            Err(AuthError::ClientCredentialsRequired)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeStore, basic};

    fn authenticator() -> ClientAuthenticator {
        ClientAuthenticator::new(Arc::new(FakeStore::standard()))
    }

    #[test]
    fn header_credentials_authenticate() {
        let req = RawRequest::new().with_authorization(basic("c1", "s1"));
        let ctx = authenticator().authenticate(&req).unwrap();
        assert_eq!(ctx.client().id.as_str(), "c1");
    }

    #[test]
    fn form_and_query_credentials_authenticate() {
        let form = RawRequest::new()
            .with_form("client_id", "c1")
            .with_form("client_secret", "s1");
        assert!(authenticator().authenticate(&form).is_ok());

        let query = RawRequest::new()
            .with_query("client_id", "c1")
            .with_query("client_secret", "s1");
        assert!(authenticator().authenticate(&query).is_ok());
    }

    #[test]
    fn header_wins_over_form_without_merging() {
        // Header carries a wrong secret; the correct form values must not rescue it.
        let req = RawRequest::new()
            .with_authorization(basic("c1", "wrongsecret"))
            .with_form("client_id", "c1")
            .with_form("client_secret", "s1");
        assert_eq!(
            authenticator().authenticate(&req),
            Err(AuthError::InvalidClientCredentials)
        );
    }

    #[test]
    fn missing_credentials_are_required() {
        assert_eq!(
            authenticator().authenticate(&RawRequest::new()),
            Err(AuthError::ClientCredentialsRequired)
        );
    }

    #[test]
    fn wrong_secret_and_unknown_client_are_indistinguishable() {
        let wrong = RawRequest::new().with_authorization(basic("c1", "wrongsecret"));
        let unknown = RawRequest::new().with_authorization(basic("nope", "anything"));

        assert_eq!(
            authenticator().authenticate(&wrong),
            Err(AuthError::InvalidClientCredentials)
        );
        assert_eq!(
            authenticator().authenticate(&unknown),
            Err(AuthError::InvalidClientCredentials)
        );
    }

    #[test]
    fn malformed_header_does_not_fall_through() {
        let req = RawRequest::new()
            .with_authorization("Basic %%%")
            .with_form("client_id", "c1")
            .with_form("client_secret", "s1");
        assert_eq!(
            authenticator().authenticate(&req),
            Err(AuthError::ClientCredentialsRequired)
        );
    }

    #[test]
    fn non_basic_header_is_skipped() {
        let req = RawRequest::new()
            .with_authorization("Bearer token")
            .with_form("client_id", "c1")
            .with_form("client_secret", "s1");
        assert!(authenticator().authenticate(&req).is_ok());
    }

    #[test]
    fn header_with_empty_secret_falls_back_to_fields() {
        let req = RawRequest::new()
            .with_authorization(basic("c1", ""))
            .with_query("client_id", "c1")
            .with_query("client_secret", "s1");
        assert!(authenticator().authenticate(&req).is_ok());
    }

    #[test]
    fn empty_form_client_id_counts_as_missing() {
        let req = RawRequest::new()
            .with_form("client_id", "")
            .with_form("client_secret", "x");
        assert_eq!(
            authenticator().authenticate(&req),
            Err(AuthError::ClientCredentialsRequired)
        );
    }

    #[test]
    fn store_failures_propagate() {
        let mut store = FakeStore::standard();
        store.fail_lookups = true;
        let auth = ClientAuthenticator::new(Arc::new(store));

        let req = RawRequest::new().with_authorization(basic("c1", "s1"));
        assert!(matches!(auth.authenticate(&req), Err(AuthError::Store(_))));
    }
}
