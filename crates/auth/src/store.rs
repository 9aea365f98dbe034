//! Credential store contracts.
//!
//! The pipeline only consumes these traits; persistence, secret hashing and
//! consistency guarantees belong to the implementor.

use std::sync::Arc;

use oauthgate_core::{Client, ClientId, EmailAddress, Scope, Secret, StoreError};

/// Registered client applications.
pub trait ClientStore: Send + Sync {
    fn find_client(&self, id: &ClientId) -> Result<Option<Client>, StoreError>;

    /// Check `secret` against the stored one.
    ///
    /// Implementations must compare in constant time (or through a hash
    /// verifier that does).
    fn verify_secret(&self, client: &Client, secret: &Secret) -> Result<bool, StoreError>;
}

/// Existing user accounts.
pub trait UserStore: Send + Sync {
    fn username_exists(&self, username: &EmailAddress) -> Result<bool, StoreError>;
}

/// Known permission scopes.
pub trait ScopeStore: Send + Sync {
    /// Known scopes whose names appear in `names`. Unknown names are skipped.
    fn find_scopes(&self, names: &[&str]) -> Result<Vec<Scope>, StoreError>;

    /// Scopes flagged as default.
    fn default_scopes(&self) -> Result<Vec<Scope>, StoreError>;
}

impl<S> ClientStore for Arc<S>
where
    S: ClientStore + ?Sized,
{
    fn find_client(&self, id: &ClientId) -> Result<Option<Client>, StoreError> {
        (**self).find_client(id)
    }

    fn verify_secret(&self, client: &Client, secret: &Secret) -> Result<bool, StoreError> {
        (**self).verify_secret(client, secret)
    }
}

impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    fn username_exists(&self, username: &EmailAddress) -> Result<bool, StoreError> {
        (**self).username_exists(username)
    }
}

impl<S> ScopeStore for Arc<S>
where
    S: ScopeStore + ?Sized,
{
    fn find_scopes(&self, names: &[&str]) -> Result<Vec<Scope>, StoreError> {
        (**self).find_scopes(names)
    }

    fn default_scopes(&self) -> Result<Vec<Scope>, StoreError> {
        (**self).default_scopes()
    }
}
