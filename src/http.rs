//! `reqwest`-backed slot source.

use std::time::Duration;

use slots::{SlotError, SlotSource, SlotsResponse};

use crate::config::SlotsConfig;
use crate::error::HarnessError;

/// Fetches slots from an absolute base URL.
pub struct ReqwestSlotSource {
    http: reqwest::Client,
    config: SlotsConfig,
}

impl ReqwestSlotSource {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: SlotsConfig) -> Result<Self, HarnessError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| HarnessError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }
}

#[async_trait::async_trait(?Send)]
impl SlotSource for ReqwestSlotSource {
    async fn fetch(&self, date: &str) -> Result<SlotsResponse, SlotError> {
        let url = self.config.request_url(date);
        tracing::debug!(%url, "requesting slots");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SlotError::Request(e.to_string()))?;
        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| SlotError::Request(e.to_string()))?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "slots response received");

        SlotsResponse::from_json(&body)
    }
}
