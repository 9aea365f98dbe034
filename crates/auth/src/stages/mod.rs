//! Pipeline stages.
//!
//! Required stages return `AuthResult`; optional ones only ever refine the
//! context with a value or a default.

pub mod client;
pub mod grant;
pub mod identity;
pub mod profile;
pub mod scope;
pub mod status;

pub use client::ClientAuthenticator;
pub use grant::{GrantTypeExtractor, require_grant_type};
pub use identity::UserIdentityExtractor;
pub use profile::{ProfileAttribute, ProfileAttributeExtractor};
pub use scope::ScopeResolver;
pub use status::AccountStatusExtractor;

/// Inbound field names.
pub mod field {
    pub const CLIENT_ID: &str = "client_id";
    pub const CLIENT_SECRET: &str = "client_secret";
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const ACCOUNT_VERIFIED: &str = "account_verified";
    pub const GRANT_TYPE: &str = "grant_type";
    pub const SCOPE: &str = "scope";
}
