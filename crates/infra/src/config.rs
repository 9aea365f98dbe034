//! Configuration loading and representation.
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `OAUTHGATE_BIND_ADDR` | HTTP listen address | `0.0.0.0:8080` |
//! | `OAUTHGATE_IGNORE_CLIENT_REQUESTED_SCOPE` | Always grant the default scopes | `false` |
//! | `OAUTHGATE_RESOLVE_SCOPES` | Run grant-type/scope resolution | `true` |
//! | `OAUTHGATE_DEFAULT_SCOPES` | Space-separated default scope names | `basic` |
//! | `OAUTHGATE_EXTRA_SCOPES` | Space-separated non-default scope names | empty |
//! | `OAUTHGATE_BOOTSTRAP_CLIENT` | `client_id:client_secret` registered at startup | unset |

use serde::Deserialize;
use thiserror::Error;

use oauthgate_auth::PipelineConfig;
use oauthgate_core::{Scope, Secret, StoreError};

use crate::store::InMemoryCredentialStore;

pub const BIND_ADDR_ENV: &str = "OAUTHGATE_BIND_ADDR";
pub const IGNORE_CLIENT_REQUESTED_SCOPE_ENV: &str = "OAUTHGATE_IGNORE_CLIENT_REQUESTED_SCOPE";
pub const RESOLVE_SCOPES_ENV: &str = "OAUTHGATE_RESOLVE_SCOPES";
pub const DEFAULT_SCOPES_ENV: &str = "OAUTHGATE_DEFAULT_SCOPES";
pub const EXTRA_SCOPES_ENV: &str = "OAUTHGATE_EXTRA_SCOPES";
pub const BOOTSTRAP_CLIENT_ENV: &str = "OAUTHGATE_BOOTSTRAP_CLIENT";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected a boolean, got {value:?}")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var}: expected client_id:client_secret")]
    InvalidClient { var: &'static str },
}

/// A client registered at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BootstrapClient {
    pub client_id: String,
    pub client_secret: String,
}

/// Process configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub bind_addr: String,
    pub pipeline: PipelineConfig,
    pub default_scopes: Vec<String>,
    pub extra_scopes: Vec<String>,
    pub bootstrap_client: Option<BootstrapClient>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            pipeline: PipelineConfig::default(),
            default_scopes: vec!["basic".to_string()],
            extra_scopes: Vec::new(),
            bootstrap_client: None,
        }
    }
}

impl GateConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source; unset variables keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup(BIND_ADDR_ENV) {
            config.bind_addr = addr;
        }
        if let Some(raw) = lookup(IGNORE_CLIENT_REQUESTED_SCOPE_ENV) {
            config.pipeline.ignore_client_requested_scope =
                parse_bool(IGNORE_CLIENT_REQUESTED_SCOPE_ENV, &raw)?;
        }
        if let Some(raw) = lookup(RESOLVE_SCOPES_ENV) {
            config.pipeline.resolve_scopes = parse_bool(RESOLVE_SCOPES_ENV, &raw)?;
        }
        if let Some(raw) = lookup(DEFAULT_SCOPES_ENV) {
            config.default_scopes = split_names(&raw);
        }
        if let Some(raw) = lookup(EXTRA_SCOPES_ENV) {
            config.extra_scopes = split_names(&raw);
        }
        if let Some(raw) = lookup(BOOTSTRAP_CLIENT_ENV) {
            let (id, secret) = raw
                .split_once(':')
                .filter(|(id, secret)| !id.is_empty() && !secret.is_empty())
                .ok_or(ConfigError::InvalidClient {
                    var: BOOTSTRAP_CLIENT_ENV,
                })?;
            config.bootstrap_client = Some(BootstrapClient {
                client_id: id.to_string(),
                client_secret: secret.to_string(),
            });
        }

        Ok(config)
    }

    /// All configured scopes, defaults first.
    pub fn scopes(&self) -> Vec<Scope> {
        self.default_scopes
            .iter()
            .map(|name| Scope::default_scope(name.clone()))
            .chain(self.extra_scopes.iter().map(|name| Scope::new(name.clone())))
            .collect()
    }

    /// Seed `store` with the configured scopes and bootstrap client.
    pub fn seed(&self, store: &InMemoryCredentialStore) -> Result<(), StoreError> {
        for scope in self.scopes() {
            store.add_scope(scope)?;
        }
        if let Some(client) = &self.bootstrap_client {
            store.register_client(
                client.client_id.as_str(),
                "bootstrap",
                &Secret::new(client.client_secret.as_str()),
            )?;
        }
        Ok(())
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: raw.to_string(),
        }),
    }
}

fn split_names(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use oauthgate_auth::ScopeStore;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = GateConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GateConfig::default());
        assert!(config.pipeline.resolve_scopes);
        assert!(!config.pipeline.ignore_client_requested_scope);
    }

    #[test]
    fn reads_every_variable() {
        let config = GateConfig::from_lookup(lookup(&[
            (BIND_ADDR_ENV, "127.0.0.1:9000"),
            (IGNORE_CLIENT_REQUESTED_SCOPE_ENV, "TRUE"),
            (RESOLVE_SCOPES_ENV, "0"),
            (DEFAULT_SCOPES_ENV, "basic profile"),
            (EXTRA_SCOPES_ENV, "read  write"),
            (BOOTSTRAP_CLIENT_ENV, "console:s3:cret"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert!(config.pipeline.ignore_client_requested_scope);
        assert!(!config.pipeline.resolve_scopes);
        assert_eq!(config.default_scopes, vec!["basic", "profile"]);
        assert_eq!(config.extra_scopes, vec!["read", "write"]);
        assert_eq!(
            config.bootstrap_client,
            Some(BootstrapClient {
                client_id: "console".to_string(),
                client_secret: "s3:cret".to_string(),
            })
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            GateConfig::from_lookup(lookup(&[(RESOLVE_SCOPES_ENV, "sometimes")])),
            Err(ConfigError::InvalidBool {
                var: RESOLVE_SCOPES_ENV,
                value: "sometimes".to_string(),
            })
        );
        assert_eq!(
            GateConfig::from_lookup(lookup(&[(BOOTSTRAP_CLIENT_ENV, "no-secret:")])),
            Err(ConfigError::InvalidClient {
                var: BOOTSTRAP_CLIENT_ENV
            })
        );
    }

    #[test]
    fn seed_installs_scopes() {
        let config = GateConfig {
            extra_scopes: vec!["read".to_string()],
            ..GateConfig::default()
        };
        let store = InMemoryCredentialStore::new();
        config.seed(&store).unwrap();

        assert_eq!(
            store.default_scopes().unwrap(),
            vec![Scope::default_scope("basic")]
        );
        assert_eq!(store.find_scopes(&["read"]).unwrap(), vec![Scope::new("read")]);
    }
}
