use serde::{Deserialize, Serialize};

use crate::{ClientId, Entity};

/// A registered client application.
///
/// Holds no secret material: secret verification belongs to the credential
/// store, which owns however the secret is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
}

impl Client {
    pub fn new(id: impl Into<ClientId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_the_client_id() {
        let a = Client::new("console", "Console");
        let renamed = Client::new("console", "Admin console");
        let other = Client::new("mobile", "Console");

        assert!(a.is_same_entity(&renamed));
        assert!(!a.is_same_entity(&other));
        assert_eq!(a.id().as_str(), "console");
    }
}
