//! Per-request authentication context.
//!
//! The context is threaded through the stages by value. Each stage consumes
//! the previous context and returns a new one, and only a fully validated
//! [`AuthContext`] ever reaches the protected handler.

use oauthgate_core::{Client, GrantType, Scope, UserCandidate};

/// Context after the client has been authenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientContext {
    client: Client,
}

impl ClientContext {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn attach_user(self, user: UserCandidate) -> PendingContext {
        PendingContext {
            client: self.client,
            user,
            grant_type: None,
            scopes: None,
        }
    }
}

/// Context after the required stages; optional stages refine it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingContext {
    client: Client,
    user: UserCandidate,
    grant_type: Option<GrantType>,
    scopes: Option<Vec<Scope>>,
}

impl PendingContext {
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn user(&self) -> &UserCandidate {
        &self.user
    }

    pub fn grant_type(&self) -> Option<GrantType> {
        self.grant_type
    }

    pub fn scopes(&self) -> Option<&[Scope]> {
        self.scopes.as_deref()
    }

    pub(crate) fn map_user(self, f: impl FnOnce(UserCandidate) -> UserCandidate) -> Self {
        Self {
            user: f(self.user),
            ..self
        }
    }

    pub(crate) fn with_grant_type(self, grant_type: Option<GrantType>) -> Self {
        Self { grant_type, ..self }
    }

    pub(crate) fn with_scopes(self, scopes: Vec<Scope>) -> Self {
        Self {
            scopes: Some(scopes),
            ..self
        }
    }

    pub(crate) fn seal(self) -> AuthContext {
        AuthContext {
            client: self.client,
            user: self.user,
            grant_type: self.grant_type,
            scopes: self.scopes,
        }
    }
}

/// Validated, read-only result of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    client: Client,
    user: UserCandidate,
    grant_type: Option<GrantType>,
    scopes: Option<Vec<Scope>>,
}

impl AuthContext {
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn user(&self) -> &UserCandidate {
        &self.user
    }

    pub fn account_verified(&self) -> bool {
        self.user.account_verified
    }

    pub fn grant_type(&self) -> Option<GrantType> {
        self.grant_type
    }

    /// `None` when scope resolution did not apply to this request.
    pub fn scopes(&self) -> Option<&[Scope]> {
        self.scopes.as_deref()
    }

    pub fn scope_names(&self) -> Vec<&str> {
        self.scopes
            .iter()
            .flatten()
            .map(Scope::as_str)
            .collect()
    }

    pub fn into_user(self) -> UserCandidate {
        self.user
    }
}
