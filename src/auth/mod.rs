//! Credential authentication and privilege-tier policy.
//!
//! The authenticator is deliberately opaque about why a login failed:
//! invalid RUT, unknown RUT, and wrong password all produce the same
//! failure kind on the same response timing. That uniformity is a security
//! control against credential enumeration, not an oversight.

pub mod authenticator;
pub mod claims;
pub mod config;
pub mod credentials;
pub mod policy;

pub use authenticator::{AuthError, Authenticator};
pub use claims::SessionClaims;
pub use config::{AuthConfig, AuthState};
pub use credentials::{CredentialRecord, CredentialStore};
