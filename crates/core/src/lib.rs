//! `oauthgate-core`: domain primitives for request authentication.
//!
//! This crate contains **pure domain** types (no storage, no transport).

pub mod client;
pub mod email;
pub mod entity;
pub mod error;
pub mod grant;
pub mod id;
pub mod scope;
pub mod secret;
pub mod user;
pub mod value_object;

pub use client::Client;
pub use email::{EmailAddress, InvalidEmail};
pub use entity::Entity;
pub use error::{AuthError, AuthResult, StoreError};
pub use grant::GrantType;
pub use id::{ClientId, UserId};
pub use scope::Scope;
pub use secret::Secret;
pub use user::{NO_NAME_GIVEN, UserCandidate};
pub use value_object::ValueObject;
