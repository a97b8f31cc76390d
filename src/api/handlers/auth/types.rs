//! Request/response types for auth endpoints.

use crate::auth::{policy, SessionClaims};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    /// Free-form RUT; normalized server side.
    pub rut: String,
    pub password: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct SessionResponse {
    pub display_name: String,
    pub organization_id: String,
    pub privilege_level: i32,
    /// Whether this tier may create, edit, or delete requirements.
    pub can_mutate: bool,
    pub is_admin: bool,
}

impl SessionResponse {
    pub(crate) fn from_claims(claims: &SessionClaims) -> Self {
        Self {
            display_name: claims.display_name.clone(),
            organization_id: claims.organization_id.clone(),
            privilege_level: claims.privilege_level,
            can_mutate: policy::can_mutate(claims.privilege_level),
            is_admin: policy::is_admin_only(claims.privilege_level),
        }
    }
}
