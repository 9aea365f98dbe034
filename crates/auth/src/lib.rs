//! `oauthgate-auth`: inbound request validation for protected account operations.
//!
//! This crate is intentionally decoupled from HTTP and storage: transports
//! build a [`RawRequest`], stores implement the traits in [`store`].

pub mod basic;
pub mod config;
pub mod context;
pub mod pipeline;
pub mod request;
pub mod stages;
pub mod store;

#[cfg(test)]
mod testing;

pub use basic::{BasicAuthError, BasicCredentials, encode_basic_authorization, parse_basic_authorization};
pub use config::PipelineConfig;
pub use context::{AuthContext, ClientContext, PendingContext};
pub use pipeline::ValidationPipeline;
pub use request::{Field, FieldSource, RawRequest, RequestFields};
pub use stages::require_grant_type;
pub use store::{ClientStore, ScopeStore, UserStore};
