use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AuthError;

/// OAuth2 grant types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    Password,
    ClientCredentials,
    AuthorizationCode,
    RefreshToken,
}

impl GrantType {
    /// Wire name as sent in the `grant_type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantType::Password => "password",
            GrantType::ClientCredentials => "client_credentials",
            GrantType::AuthorizationCode => "authorization_code",
            GrantType::RefreshToken => "refresh_token",
        }
    }

    /// Whether requests with this grant carry a scope selection.
    pub fn requests_scope(&self) -> bool {
        matches!(self, GrantType::Password | GrantType::ClientCredentials)
    }
}

impl core::fmt::Display for GrantType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrantType {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "password" => Ok(GrantType::Password),
            "client_credentials" => Ok(GrantType::ClientCredentials),
            "authorization_code" => Ok(GrantType::AuthorizationCode),
            "refresh_token" => Ok(GrantType::RefreshToken),
            _ => Err(AuthError::InvalidGrantType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names() {
        assert_eq!("password".parse::<GrantType>(), Ok(GrantType::Password));
        assert_eq!(
            "client_credentials".parse::<GrantType>(),
            Ok(GrantType::ClientCredentials)
        );
        assert_eq!(
            "implicit".parse::<GrantType>(),
            Err(AuthError::InvalidGrantType)
        );
        assert_eq!(
            "Password".parse::<GrantType>(),
            Err(AuthError::InvalidGrantType)
        );
    }

    #[test]
    fn only_password_and_client_credentials_request_scope() {
        assert!(GrantType::Password.requests_scope());
        assert!(GrantType::ClientCredentials.requests_scope());
        assert!(!GrantType::AuthorizationCode.requests_scope());
        assert!(!GrantType::RefreshToken.requests_scope());
    }
}
