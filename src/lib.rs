//! # Reqgate (Requirements-tracking login gateway)
//!
//! `reqgate` is the multi-tenant login gateway for a requirements-tracking
//! service. Organizations authenticate with their RUT (Chilean national
//! identifier) and a password; successful logins receive short-lived,
//! non-sliding session cookies carrying a privilege tier that gates the
//! mutating endpoints.
//!
//! ## Identity (RUT)
//!
//! The RUT arrives in free form (`12.345.678-k`) and is normalized to a
//! canonical `<digits><check>` shape with a weighted modulo-11 checksum
//! before any lookup. An id that fails the checksum is never told apart
//! from a wrong password: login returns one opaque failure, on one uniform
//! response timing, for every cause.
//!
//! ## Privilege tiers
//!
//! Levels 1 (read-only), 2 (editor), and 3 (administrator) are carried as a
//! session claim; only tiers 2 and 3 may reach the mutating requirement
//! endpoints.
//!
//! ## Holiday feed
//!
//! The `/v1/holidays` endpoint proxies an external feed whose schema drifts
//! between deployments. The feed normalizer coerces whatever shows up into
//! canonical `{date, name, mandatory}` records and serves an empty list on
//! any failure.

pub mod api;
pub mod auth;
pub mod cli;
pub mod feed;
pub mod rut;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        // Should be a hex string (full SHA-1 is 40 chars, but could be short)
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
