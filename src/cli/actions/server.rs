use crate::{api, auth::AuthConfig};
use anyhow::Result;

/// Fully parsed server configuration.
#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dsn: String,
    pub session_ttl_seconds: i64,
    pub login_delay_ms: u64,
    pub session_cookie_secure: bool,
    pub holiday_feed_url: String,
    pub holiday_feed_timeout_seconds: u64,
}

/// Execute the server action.
///
/// # Errors
/// Returns an error if the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let auth_config = AuthConfig::new()
        .with_session_ttl_seconds(args.session_ttl_seconds)
        .with_login_delay_ms(args.login_delay_ms)
        .with_session_cookie_secure(args.session_cookie_secure);

    api::new(
        args.port,
        args.dsn,
        auth_config,
        args.holiday_feed_url,
        args.holiday_feed_timeout_seconds,
    )
    .await
}
