use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};

pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("session-ttl-seconds")
                .long("session-ttl-seconds")
                .help("Session cookie TTL in seconds (fixed expiry, no sliding)")
                .env("REQGATE_SESSION_TTL_SECONDS")
                .default_value("900")
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("login-delay-ms")
                .long("login-delay-ms")
                .help("Uniform delay imposed on failed logins, in milliseconds")
                .env("REQGATE_LOGIN_DELAY_MS")
                .default_value("250")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("session-cookie-secure")
                .long("session-cookie-secure")
                .help("Mark the session cookie Secure (set when serving over HTTPS)")
                .env("REQGATE_SESSION_COOKIE_SECURE")
                .action(ArgAction::SetTrue),
        )
}

pub struct Options {
    pub session_ttl_seconds: i64,
    pub login_delay_ms: u64,
    pub session_cookie_secure: bool,
}

impl Options {
    /// Read auth options out of validated matches.
    ///
    /// # Errors
    /// Returns an error if a defaulted argument is somehow missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        Ok(Self {
            session_ttl_seconds: matches
                .get_one::<i64>("session-ttl-seconds")
                .copied()
                .context("missing argument: --session-ttl-seconds")?,
            login_delay_ms: matches
                .get_one::<u64>("login-delay-ms")
                .copied()
                .context("missing argument: --login-delay-ms")?,
            session_cookie_secure: matches.get_flag("session-cookie-secure"),
        })
    }
}
