//! Credential records and the store boundary.

use anyhow::Result;
use argon2::{password_hash::PasswordHash, Argon2, PasswordVerifier};
use std::future::Future;

/// One stored credential for an organization.
///
/// Owned by the external store; the authenticator only ever reads it. The
/// same organization id may own several records (rotated or shared
/// credentials), so lookups return a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    /// Canonical RUT the credential belongs to.
    pub organization_id: String,
    /// PHC-formatted argon2 hash; never a raw secret.
    pub secret_hash: String,
    pub display_name: String,
    pub privilege_level: Option<i32>,
}

/// Read-only lookup boundary for stored credentials.
///
/// Implementations must return an empty list, never an error, for an
/// unknown id; infrastructure failures are the only legitimate `Err`.
pub trait CredentialStore {
    fn lookup_by_normalized_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Vec<CredentialRecord>>> + Send;
}

/// Verify a secret against a stored PHC hash.
///
/// An unparseable hash verifies as false rather than erroring; a corrupt
/// row must look exactly like a wrong password.
#[must_use]
pub fn verify_secret(secret: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok()
    })
}

#[cfg(test)]
pub(crate) fn hash_secret(secret: &str) -> String {
    use argon2::password_hash::{PasswordHasher, SaltString};

    let salt = SaltString::encode_b64(&[0x42; 16]).expect("static salt");
    Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .expect("hashing never fails with a valid salt")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_secret_accepts_matching_password() {
        let hash = hash_secret("hunter2");
        assert!(verify_secret("hunter2", &hash));
    }

    #[test]
    fn verify_secret_rejects_wrong_password() {
        let hash = hash_secret("hunter2");
        assert!(!verify_secret("hunter3", &hash));
        assert!(!verify_secret("", &hash));
    }

    #[test]
    fn verify_secret_rejects_malformed_hash() {
        assert!(!verify_secret("hunter2", ""));
        assert!(!verify_secret("hunter2", "plaintext-password"));
        assert!(!verify_secret("hunter2", "$argon2id$not-a-real-hash"));
    }
}
