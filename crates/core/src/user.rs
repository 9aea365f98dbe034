use crate::{EmailAddress, Secret};

/// Placeholder used for first/last names that the request did not supply.
pub const NO_NAME_GIVEN: &str = "No name given";

/// A user account that has passed validation but is not persisted yet.
///
/// The pipeline builds one per request; persisting it is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCandidate {
    pub username: EmailAddress,
    pub password: Secret,
    pub first_name: String,
    pub last_name: String,
    pub account_verified: bool,
}

impl UserCandidate {
    /// New unverified candidate with placeholder names.
    pub fn new(username: EmailAddress, password: Secret) -> Self {
        Self {
            username,
            password,
            first_name: NO_NAME_GIVEN.to_string(),
            last_name: NO_NAME_GIVEN.to_string(),
            account_verified: false,
        }
    }

    pub fn with_first_name(self, first_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            ..self
        }
    }

    pub fn with_last_name(self, last_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            ..self
        }
    }

    pub fn with_account_verified(self, account_verified: bool) -> Self {
        Self {
            account_verified,
            ..self
        }
    }
}
