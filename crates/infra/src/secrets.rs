//! Secret hashing (Argon2id, PHC strings).

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use password_hash::rand_core::OsRng;
use password_hash::{PasswordHash, SaltString};

use oauthgate_core::{Secret, StoreError};

/// Hash a secret into a PHC string with a fresh random salt.
pub fn hash_secret(secret: &Secret) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(secret.expose().as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| StoreError::backend(format!("secret hashing failed: {e}")))
}

/// Verify a secret against a stored PHC string.
///
/// The Argon2 verifier compares digests in constant time.
pub fn verify_secret(stored_hash: &str, secret: &Secret) -> Result<bool, StoreError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| StoreError::backend(format!("stored hash unreadable: {e}")))?;
    Ok(Argon2::default()
        .verify_password(secret.expose().as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_only_the_original_secret() {
        let hash = hash_secret(&Secret::new("s3cret")).unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_secret(&hash, &Secret::new("s3cret")).unwrap());
        assert!(!verify_secret(&hash, &Secret::new("wrong")).unwrap());
    }

    #[test]
    fn salts_differ_between_hashes() {
        let a = hash_secret(&Secret::new("same")).unwrap();
        let b = hash_secret(&Secret::new("same")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn corrupt_hash_is_a_backend_error() {
        let err = verify_secret("not-a-phc-string", &Secret::new("x")).unwrap_err();
        assert!(matches!(err, StoreError::Backend(_)));
    }
}
