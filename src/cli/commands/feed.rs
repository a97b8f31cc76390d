use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};

pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("holiday-feed-url")
                .long("holiday-feed-url")
                .help("External holiday feed endpoint")
                .env("REQGATE_HOLIDAY_FEED_URL")
                .default_value("https://api.boostr.cl/holidays.json"),
        )
        .arg(
            Arg::new("holiday-feed-timeout-seconds")
                .long("holiday-feed-timeout-seconds")
                .help("Holiday feed request timeout in seconds")
                .env("REQGATE_HOLIDAY_FEED_TIMEOUT_SECONDS")
                .default_value("10")
                .value_parser(clap::value_parser!(u64)),
        )
}

pub struct Options {
    pub url: String,
    pub timeout_seconds: u64,
}

impl Options {
    /// Read feed options out of validated matches.
    ///
    /// # Errors
    /// Returns an error if a defaulted argument is somehow missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        Ok(Self {
            url: matches
                .get_one::<String>("holiday-feed-url")
                .cloned()
                .context("missing argument: --holiday-feed-url")?,
            timeout_seconds: matches
                .get_one::<u64>("holiday-feed-timeout-seconds")
                .copied()
                .context("missing argument: --holiday-feed-timeout-seconds")?,
        })
    }
}
