//! Login flow: normalize, look up, verify, degrade uniformly.

use crate::auth::claims::SessionClaims;
use crate::auth::credentials::{verify_secret, CredentialStore};
use crate::rut;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::time::Duration;
use tracing::error;

/// The single failure kind login ever reports.
///
/// Which factor failed (malformed RUT, unknown RUT, wrong password, even a
/// broken store) is never surfaced separately, in content or in timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCredentials => f.write_str("invalid credentials"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Verifies credentials against a store and issues claims.
#[derive(Debug, Clone)]
pub struct Authenticator {
    failure_delay: Duration,
}

impl Authenticator {
    #[must_use]
    pub fn new(failure_delay: Duration) -> Self {
        Self { failure_delay }
    }

    /// Authenticate a free-form RUT and secret.
    ///
    /// A RUT that fails normalization is not short-circuited: it proceeds
    /// with an empty candidate set so the failure path stays identical to
    /// a valid-but-unregistered id. Every failure waits out the uniform
    /// delay before returning.
    ///
    /// # Errors
    /// Always `AuthError::InvalidCredentials`; no other failure kind exists.
    pub async fn login<S: CredentialStore>(
        &self,
        store: &S,
        raw_id: &str,
        secret: &SecretString,
    ) -> Result<SessionClaims, AuthError> {
        let candidates = match rut::normalize(raw_id) {
            Some(id) => store.lookup_by_normalized_id(&id).await.unwrap_or_else(|err| {
                // Infrastructure failures must look like a wrong password.
                error!("Credential lookup failed: {err:#}");
                Vec::new()
            }),
            None => Vec::new(),
        };

        let matched = candidates.iter().find(|record| {
            !record.secret_hash.trim().is_empty()
                && verify_secret(secret.expose_secret(), &record.secret_hash)
        });

        match matched {
            Some(record) => Ok(SessionClaims::from_credential(record)),
            None => {
                tokio::time::sleep(self.failure_delay).await;
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}
