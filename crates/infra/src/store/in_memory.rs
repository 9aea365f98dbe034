use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use chrono::Utc;
use tracing::{debug, info, warn};

use oauthgate_auth::{ClientStore, ScopeStore, UserStore};
use oauthgate_core::{
    AuthError, AuthResult, Client, ClientId, EmailAddress, Entity, Scope, Secret, StoreError,
    UserCandidate,
};

use super::records::{ClientRecord, UserRecord};
use crate::secrets::{hash_secret, verify_secret};

/// In-memory credential store for tests/dev.
///
/// Secrets are held as Argon2 hashes. Scopes are kept sorted by name, which
/// is also the order lookups return them in.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    clients: RwLock<HashMap<ClientId, ClientRecord>>,
    users: RwLock<HashMap<EmailAddress, UserRecord>>,
    scopes: RwLock<BTreeMap<String, Scope>>,
}

fn poisoned() -> StoreError {
    StoreError::backend("lock poisoned")
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a client, hashing its secret.
    pub fn register_client(
        &self,
        id: impl Into<ClientId>,
        name: impl Into<String>,
        secret: &Secret,
    ) -> Result<Client, StoreError> {
        let client = Client::new(id, name);
        let secret_hash = hash_secret(secret)?;

        let mut clients = self.clients.write().map_err(|_| poisoned())?;
        clients.insert(
            client.id().clone(),
            ClientRecord {
                client: client.clone(),
                secret_hash,
            },
        );
        info!(client_id = %client.id, "client registered");
        Ok(client)
    }

    /// Add (or replace) a scope definition.
    pub fn add_scope(&self, scope: Scope) -> Result<(), StoreError> {
        let mut scopes = self.scopes.write().map_err(|_| poisoned())?;
        scopes.insert(scope.as_str().to_string(), scope);
        Ok(())
    }

    /// Persist a validated candidate.
    ///
    /// Uniqueness is re-checked under the write lock: a concurrent request
    /// may have registered the same username after the pipeline's check.
    pub fn create_user(&self, candidate: &UserCandidate) -> AuthResult<UserRecord> {
        let password_hash = hash_secret(&candidate.password)?;

        let mut users = self.users.write().map_err(|_| poisoned())?;
        if users.contains_key(&candidate.username) {
            warn!(username = %candidate.username, "username registered concurrently");
            return Err(AuthError::DuplicateUser);
        }

        let record = UserRecord::from_candidate(candidate, password_hash, Utc::now());
        users.insert(record.username.clone(), record.clone());
        info!(user_id = %record.id(), username = %record.username, "user created");
        Ok(record)
    }

    pub fn find_user(&self, username: &EmailAddress) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.get(username).cloned())
    }

    pub fn user_count(&self) -> Result<usize, StoreError> {
        Ok(self.users.read().map_err(|_| poisoned())?.len())
    }
}

impl ClientStore for InMemoryCredentialStore {
    fn find_client(&self, id: &ClientId) -> Result<Option<Client>, StoreError> {
        let clients = self.clients.read().map_err(|_| poisoned())?;
        Ok(clients.get(id).map(|record| record.client.clone()))
    }

    fn verify_secret(&self, client: &Client, secret: &Secret) -> Result<bool, StoreError> {
        let secret_hash = {
            let clients = self.clients.read().map_err(|_| poisoned())?;
            match clients.get(&client.id) {
                Some(record) => record.secret_hash.clone(),
                None => return Ok(false),
            }
        };
        verify_secret(&secret_hash, secret)
    }
}

impl UserStore for InMemoryCredentialStore {
    fn username_exists(&self, username: &EmailAddress) -> Result<bool, StoreError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.contains_key(username))
    }
}

impl ScopeStore for InMemoryCredentialStore {
    fn find_scopes(&self, names: &[&str]) -> Result<Vec<Scope>, StoreError> {
        let scopes = self.scopes.read().map_err(|_| poisoned())?;
        let found: Vec<Scope> = scopes
            .values()
            .filter(|scope| names.contains(&scope.as_str()))
            .cloned()
            .collect();
        debug!(requested = names.len(), found = found.len(), "scope lookup");
        Ok(found)
    }

    fn default_scopes(&self) -> Result<Vec<Scope>, StoreError> {
        let scopes = self.scopes.read().map_err(|_| poisoned())?;
        Ok(scopes
            .values()
            .filter(|scope| scope.is_default)
            .cloned()
            .collect())
    }
}
