//! Infrastructure layer: credential store adapters, secret hashing, config.

pub mod config;
pub mod secrets;
pub mod store;

pub use config::{ConfigError, GateConfig};
pub use store::{InMemoryCredentialStore, UserRecord};
