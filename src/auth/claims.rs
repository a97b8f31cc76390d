//! Identity claims issued on successful authentication.

use crate::auth::credentials::CredentialRecord;

/// Default privilege tier for records that carry none.
const DEFAULT_PRIVILEGE_LEVEL: i32 = 1;

/// Claims describing an authenticated organization.
///
/// Built once per successful login and passed explicitly wherever an
/// identity is needed; nothing in the service relies on ambient
/// per-request identity state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub display_name: String,
    /// Canonical RUT, as produced by [`crate::rut::normalize`].
    pub organization_id: String,
    pub privilege_level: i32,
}

impl SessionClaims {
    /// Build claims from a matched credential record.
    ///
    /// A blank display name falls back to the organization id, and a
    /// missing privilege level defaults to the lowest tier.
    #[must_use]
    pub fn from_credential(record: &CredentialRecord) -> Self {
        let display_name = if record.display_name.trim().is_empty() {
            record.organization_id.clone()
        } else {
            record.display_name.clone()
        };

        Self {
            display_name,
            organization_id: record.organization_id.clone(),
            privilege_level: record.privilege_level.unwrap_or(DEFAULT_PRIVILEGE_LEVEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(display_name: &str, privilege_level: Option<i32>) -> CredentialRecord {
        CredentialRecord {
            organization_id: "73743648".to_string(),
            secret_hash: "$argon2id$...".to_string(),
            display_name: display_name.to_string(),
            privilege_level,
        }
    }

    #[test]
    fn blank_display_name_falls_back_to_organization_id() {
        let claims = SessionClaims::from_credential(&record("   ", Some(2)));
        assert_eq!(claims.display_name, "73743648");
        assert_eq!(claims.privilege_level, 2);
    }

    #[test]
    fn missing_privilege_level_defaults_to_one() {
        let claims = SessionClaims::from_credential(&record("Municipalidad", None));
        assert_eq!(claims.display_name, "Municipalidad");
        assert_eq!(claims.privilege_level, 1);
    }
}
