//! Auth configuration and shared state.

use crate::auth::authenticator::Authenticator;
use std::time::Duration;

/// 15 minutes, non-sliding; short on purpose so stale sessions expire.
const DEFAULT_SESSION_TTL_SECONDS: i64 = 15 * 60;
/// Uniform delay imposed on every failed login.
const DEFAULT_LOGIN_DELAY_MS: u64 = 250;

#[derive(Clone, Debug)]
pub struct AuthConfig {
    session_ttl_seconds: i64,
    login_delay_ms: u64,
    session_cookie_secure: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session_ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
            session_cookie_secure: false,
        }
    }

    #[must_use]
    pub fn with_session_ttl_seconds(mut self, seconds: i64) -> Self {
        self.session_ttl_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_login_delay_ms(mut self, millis: u64) -> Self {
        self.login_delay_ms = millis;
        self
    }

    #[must_use]
    pub fn with_session_cookie_secure(mut self, secure: bool) -> Self {
        self.session_cookie_secure = secure;
        self
    }

    #[must_use]
    pub fn session_ttl_seconds(&self) -> i64 {
        self.session_ttl_seconds
    }

    #[must_use]
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    #[must_use]
    pub fn session_cookie_secure(&self) -> bool {
        self.session_cookie_secure
    }
}

/// Auth state shared across handlers.
#[derive(Debug)]
pub struct AuthState {
    config: AuthConfig,
    authenticator: Authenticator,
}

impl AuthState {
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        let authenticator = Authenticator::new(config.login_delay());
        Self {
            config,
            authenticator,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    #[must_use]
    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_observed_policy() {
        let config = AuthConfig::new();
        assert_eq!(config.session_ttl_seconds(), 900);
        assert_eq!(config.login_delay(), Duration::from_millis(250));
        assert!(!config.session_cookie_secure());
    }

    #[test]
    fn builders_override_defaults() {
        let config = AuthConfig::new()
            .with_session_ttl_seconds(3600)
            .with_login_delay_ms(100)
            .with_session_cookie_secure(true);
        assert_eq!(config.session_ttl_seconds(), 3600);
        assert_eq!(config.login_delay(), Duration::from_millis(100));
        assert!(config.session_cookie_secure());
    }
}
