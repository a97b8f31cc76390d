//! HTTP client for the external holiday feed.

use crate::feed::{normalize, Holiday};
use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::warn;

/// Consumer-side contract for the holiday feed endpoint.
///
/// The feed is untrusted and unstable: any fetch or parse failure collapses
/// to an empty list, never an error. Retry/backoff intentionally does not
/// live here.
#[derive(Debug)]
pub struct HolidayFeed {
    client: Client,
    url: String,
}

impl HolidayFeed {
    /// Build a feed client for the given endpoint.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(url: String, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to build holiday feed client")?;

        Ok(Self { client, url })
    }

    /// Fetch and normalize the feed.
    pub async fn fetch(&self) -> Vec<Holiday> {
        let document = match self.fetch_document().await {
            Ok(document) => document,
            Err(err) => {
                warn!("Holiday feed unavailable, serving empty list: {err:#}");
                return Vec::new();
            }
        };

        normalize(&document)
    }

    async fn fetch_document(&self) -> Result<Value> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("holiday feed request failed")?
            .error_for_status()
            .context("holiday feed returned an error status")?;

        response
            .json::<Value>()
            .await
            .context("holiday feed returned unparseable JSON")
    }
}
