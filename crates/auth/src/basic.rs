//! `Authorization: Basic` header parsing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

use oauthgate_core::{ClientId, Secret};

/// Client credentials carried by a Basic header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub client_id: ClientId,
    pub client_secret: Secret,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BasicAuthError {
    #[error("basic credentials payload is missing")]
    MissingPayload,

    #[error("basic credentials are not valid base64")]
    InvalidBase64,

    #[error("basic credentials are not valid utf-8")]
    InvalidUtf8,

    #[error("basic credentials lack an id:secret separator")]
    MissingSeparator,
}

/// Parse an `Authorization` header value.
///
/// - `Ok(None)`: not the Basic scheme; the header is not a client-credential source.
/// - `Ok(Some(_))`: decoded `id:secret` (split on the first colon; either part may be empty).
/// - `Err(_)`: Basic scheme with an undecodable payload.
pub fn parse_basic_authorization(header: &str) -> Result<Option<BasicCredentials>, BasicAuthError> {
    let header = header.trim();
    let (scheme, payload) = match header.split_once(char::is_whitespace) {
        Some((scheme, payload)) => (scheme, payload.trim()),
        None => (header, ""),
    };

    if !scheme.eq_ignore_ascii_case("basic") {
        return Ok(None);
    }
    if payload.is_empty() {
        return Err(BasicAuthError::MissingPayload);
    }

    let decoded = STANDARD
        .decode(payload)
        .map_err(|_| BasicAuthError::InvalidBase64)?;
    let decoded = String::from_utf8(decoded).map_err(|_| BasicAuthError::InvalidUtf8)?;

    let (id, secret) = decoded
        .split_once(':')
        .ok_or(BasicAuthError::MissingSeparator)?;

    Ok(Some(BasicCredentials {
        client_id: ClientId::new(id),
        client_secret: Secret::new(secret),
    }))
}

/// Build a Basic header value (`Basic base64(id:secret)`).
pub fn encode_basic_authorization(client_id: &str, client_secret: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{client_id}:{client_secret}")))
}
