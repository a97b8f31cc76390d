//! Login endpoint.

use axum::{
    extract::Extension,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use secrecy::SecretString;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, error};

use super::{
    session::session_cookie,
    storage::insert_session,
    types::{LoginRequest, SessionResponse},
    utils::{generate_session_token, hash_session_token},
};
use crate::auth::{AuthState, SessionClaims};

#[utoipa::path(
    post,
    path = "/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = SessionResponse),
        (status = 400, description = "Missing payload", body = String),
        (status = 401, description = "Invalid credentials", body = String)
    ),
    tag = "auth"
)]
pub async fn login(
    pool: Extension<PgPool>,
    auth_state: Extension<Arc<AuthState>>,
    payload: Option<Json<LoginRequest>>,
) -> impl IntoResponse {
    let request: LoginRequest = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response(),
    };

    let secret = SecretString::from(request.password);

    // One generic message for every failure cause; the authenticator has
    // already equalized the timing.
    match auth_state
        .authenticator()
        .login(&pool.0, &request.rut, &secret)
        .await
    {
        Ok(claims) => issue_session(&pool, &auth_state, &claims).await,
        Err(err) => {
            debug!("Login rejected: {err}");
            (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string()).into_response()
        }
    }
}

async fn issue_session(
    pool: &PgPool,
    auth_state: &AuthState,
    claims: &SessionClaims,
) -> axum::response::Response {
    let token = match generate_session_token() {
        Ok(token) => token,
        Err(err) => {
            error!("Failed to generate session token: {err:#}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let token_hash = hash_session_token(&token);
    let ttl_seconds = auth_state.config().session_ttl_seconds();
    if let Err(err) = insert_session(pool, &token_hash, claims, ttl_seconds).await {
        error!("Failed to persist session: {err:#}");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let mut headers = HeaderMap::new();
    match session_cookie(auth_state.config(), &token) {
        Ok(cookie) => {
            headers.insert(SET_COOKIE, cookie);
        }
        Err(err) => {
            error!("Failed to build session cookie: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    }

    (
        StatusCode::OK,
        headers,
        Json(SessionResponse::from_claims(claims)),
    )
        .into_response()
}
