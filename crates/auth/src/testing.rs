//! Test fixtures shared by the stage and pipeline tests.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

use oauthgate_core::{Client, ClientId, EmailAddress, Scope, Secret, StoreError};

use crate::basic::encode_basic_authorization;
use crate::store::{ClientStore, ScopeStore, UserStore};

/// Plain-text fake; good enough for tests, never for real secrets.
#[derive(Debug, Default)]
pub struct FakeStore {
    clients: HashMap<ClientId, (Client, String)>,
    users: Mutex<HashSet<String>>,
    scopes: BTreeMap<String, Scope>,
    pub fail_lookups: bool,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(mut self, id: &str, secret: &str) -> Self {
        let client = Client::new(id, format!("{id} app"));
        self.clients
            .insert(client.id.clone(), (client, secret.to_string()));
        self
    }

    pub fn with_user(self, username: &str) -> Self {
        self.users
            .lock()
            .unwrap()
            .insert(username.to_string());
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scopes.insert(scope.as_str().to_string(), scope);
        self
    }

    /// Registers client `c1`/`s1`, user `taken@example.com`, default scope
    /// `basic` and non-default scopes `read`/`write`.
    pub fn standard() -> Self {
        Self::new()
            .with_client("c1", "s1")
            .with_user("taken@example.com")
            .with_scope(Scope::default_scope("basic"))
            .with_scope(Scope::new("read"))
            .with_scope(Scope::new("write"))
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail_lookups {
            Err(StoreError::unavailable("fake store offline"))
        } else {
            Ok(())
        }
    }
}

impl ClientStore for FakeStore {
    fn find_client(&self, id: &ClientId) -> Result<Option<Client>, StoreError> {
        self.check()?;
        Ok(self.clients.get(id).map(|(client, _)| client.clone()))
    }

    fn verify_secret(&self, client: &Client, secret: &Secret) -> Result<bool, StoreError> {
        self.check()?;
        Ok(self
            .clients
            .get(&client.id)
            .is_some_and(|(_, stored)| stored == secret.expose()))
    }
}

impl UserStore for FakeStore {
    fn username_exists(&self, username: &EmailAddress) -> Result<bool, StoreError> {
        self.check()?;
        Ok(self.users.lock().unwrap().contains(username.as_str()))
    }
}

impl ScopeStore for FakeStore {
    fn find_scopes(&self, names: &[&str]) -> Result<Vec<Scope>, StoreError> {
        self.check()?;
        Ok(self
            .scopes
            .values()
            .filter(|scope| names.contains(&scope.as_str()))
            .cloned()
            .collect())
    }

    fn default_scopes(&self) -> Result<Vec<Scope>, StoreError> {
        self.check()?;
        Ok(self
            .scopes
            .values()
            .filter(|scope| scope.is_default)
            .cloned()
            .collect())
    }
}

pub fn basic(id: &str, secret: &str) -> String {
    encode_basic_authorization(id, secret)
}

pub fn names(scopes: Option<&[Scope]>) -> Option<Vec<String>> {
    scopes.map(|s| {
        let mut names: Vec<String> = s.iter().map(|scope| scope.as_str().to_string()).collect();
        names.sort();
        names
    })
}
