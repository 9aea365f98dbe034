use chrono::{DateTime, Utc};
use serde::Serialize;

use oauthgate_core::{Client, EmailAddress, Entity, UserCandidate, UserId};

/// Stored client: the public record plus its secret hash.
#[derive(Debug, Clone)]
pub(crate) struct ClientRecord {
    pub client: Client,
    pub secret_hash: String,
}

/// A persisted user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: UserId,
    pub username: EmailAddress,
    #[serde(skip)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub account_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub(crate) fn from_candidate(candidate: &UserCandidate, password_hash: String, now: DateTime<Utc>) -> Self {
        Self {
            id: UserId::new(),
            username: candidate.username.clone(),
            password_hash,
            first_name: candidate.first_name.clone(),
            last_name: candidate.last_name.clone(),
            account_verified: candidate.account_verified,
            created_at: now,
        }
    }
}

impl Entity for UserRecord {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
