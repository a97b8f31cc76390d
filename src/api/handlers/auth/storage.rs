//! Database helpers for credentials and sessions.

use crate::auth::{CredentialRecord, CredentialStore, SessionClaims};
use anyhow::{Context, Result};
use sqlx::{PgPool, Row};
use tracing::Instrument;

/// Fetch every credential stored for a normalized organization id.
///
/// An unknown id is an empty list, never an error.
pub(crate) async fn lookup_credentials(
    pool: &PgPool,
    organization_id: &str,
) -> Result<Vec<CredentialRecord>> {
    let query = "
        SELECT organization_id, secret_hash, display_name, privilege_level
        FROM credentials
        WHERE organization_id = $1
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let rows = sqlx::query(query)
        .bind(organization_id)
        .fetch_all(pool)
        .instrument(span)
        .await
        .context("failed to lookup credentials")?;

    Ok(rows
        .into_iter()
        .map(|row| CredentialRecord {
            organization_id: row.get("organization_id"),
            secret_hash: row.get("secret_hash"),
            display_name: row
                .get::<Option<String>, _>("display_name")
                .unwrap_or_default(),
            privilege_level: row.get("privilege_level"),
        })
        .collect())
}

impl CredentialStore for PgPool {
    async fn lookup_by_normalized_id(&self, id: &str) -> Result<Vec<CredentialRecord>> {
        lookup_credentials(self, id).await
    }
}

/// Persist a session keyed by its token hash.
///
/// `expires_at` is fixed at creation; sessions never slide.
pub(crate) async fn insert_session(
    pool: &PgPool,
    token_hash: &[u8],
    claims: &SessionClaims,
    ttl_seconds: i64,
) -> Result<()> {
    let query = "
        INSERT INTO sessions
            (token_hash, organization_id, display_name, privilege_level, expires_at)
        VALUES ($1, $2, $3, $4, NOW() + ($5 * INTERVAL '1 second'))
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );
    sqlx::query(query)
        .bind(token_hash)
        .bind(&claims.organization_id)
        .bind(&claims.display_name)
        .bind(claims.privilege_level)
        .bind(ttl_seconds)
        .execute(pool)
        .instrument(span)
        .await
        .context("failed to insert session")?;

    Ok(())
}

/// Resolve a token hash into claims; expired rows are invisible.
pub(crate) async fn lookup_session(
    pool: &PgPool,
    token_hash: &[u8],
) -> Result<Option<SessionClaims>> {
    let query = "
        SELECT organization_id, display_name, privilege_level
        FROM sessions
        WHERE token_hash = $1 AND expires_at > NOW()
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(token_hash)
        .fetch_optional(pool)
        .instrument(span)
        .await
        .context("failed to lookup session")?;

    Ok(row.map(|row| SessionClaims {
        organization_id: row.get("organization_id"),
        display_name: row.get("display_name"),
        privilege_level: row.get("privilege_level"),
    }))
}

pub(crate) async fn delete_session(pool: &PgPool, token_hash: &[u8]) -> Result<()> {
    let query = "DELETE FROM sessions WHERE token_hash = $1";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "DELETE",
        db.statement = query
    );
    sqlx::query(query)
        .bind(token_hash)
        .execute(pool)
        .instrument(span)
        .await
        .context("failed to delete session")?;

    Ok(())
}
