//! Requirement CRUD endpoints, privilege-gated.
//!
//! The screens behind these routes are not built yet; every mutating
//! endpoint authorizes, then answers `501`. Insufficiently privileged
//! sessions get `404` rather than `403` so lower tiers cannot enumerate
//! the mutating surface.

use axum::{
    extract::{Extension, Path},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use sqlx::PgPool;

use super::auth::authenticate_session;
use crate::auth::{policy, SessionClaims};

#[utoipa::path(
    get,
    path = "/v1/requirements",
    responses(
        (status = 200, description = "Requirements visible to the session"),
        (status = 401, description = "No active session")
    ),
    tag = "requirements"
)]
pub async fn list(headers: HeaderMap, pool: Extension<PgPool>) -> impl IntoResponse {
    match require_session(&headers, &pool).await {
        // TODO: back this with the requirements table once the schema lands.
        Ok(_claims) => Json(Vec::<Value>::new()).into_response(),
        Err(response) => response,
    }
}

#[utoipa::path(
    post,
    path = "/v1/requirements",
    responses(
        (status = 501, description = "Requirement creation is not implemented"),
        (status = 401, description = "No active session"),
        (status = 404, description = "Session lacks the mutating tier")
    ),
    tag = "requirements"
)]
pub async fn create(
    headers: HeaderMap,
    pool: Extension<PgPool>,
    _payload: Option<Json<Value>>,
) -> impl IntoResponse {
    match require_mutate(&headers, &pool).await {
        Ok(_claims) => not_implemented("Requirement creation"),
        Err(response) => response,
    }
}

#[utoipa::path(
    delete,
    path = "/v1/requirements/{id}",
    params(
        ("id" = i64, Path, description = "Requirement id")
    ),
    responses(
        (status = 501, description = "Requirement deletion is not implemented"),
        (status = 401, description = "No active session"),
        (status = 404, description = "Session lacks the mutating tier")
    ),
    tag = "requirements"
)]
pub async fn remove(
    headers: HeaderMap,
    pool: Extension<PgPool>,
    Path(_id): Path<i64>,
) -> impl IntoResponse {
    match require_mutate(&headers, &pool).await {
        Ok(_claims) => not_implemented("Requirement deletion"),
        Err(response) => response,
    }
}

#[utoipa::path(
    post,
    path = "/v1/requirements/import",
    responses(
        (status = 501, description = "BCN import is not implemented"),
        (status = 401, description = "No active session"),
        (status = 404, description = "Session lacks the mutating tier")
    ),
    tag = "requirements"
)]
pub async fn import(
    headers: HeaderMap,
    pool: Extension<PgPool>,
    _payload: Option<Json<Value>>,
) -> impl IntoResponse {
    match require_mutate(&headers, &pool).await {
        Ok(_claims) => not_implemented("BCN import"),
        Err(response) => response,
    }
}

fn not_implemented(surface: &str) -> Response {
    (
        StatusCode::NOT_IMPLEMENTED,
        format!("{surface} is not implemented yet"),
    )
        .into_response()
}

async fn require_session(
    headers: &HeaderMap,
    pool: &PgPool,
) -> Result<SessionClaims, Response> {
    match authenticate_session(headers, pool).await {
        Ok(Some(claims)) => Ok(claims),
        Ok(None) => Err(StatusCode::UNAUTHORIZED.into_response()),
        Err(status) => Err(status.into_response()),
    }
}

async fn require_mutate(
    headers: &HeaderMap,
    pool: &PgPool,
) -> Result<SessionClaims, Response> {
    let claims = require_session(headers, pool).await?;
    if policy::can_mutate(claims.privilege_level) {
        Ok(claims)
    } else {
        // Hide the mutating surface from read-only tiers.
        Err(StatusCode::NOT_FOUND.into_response())
    }
}
