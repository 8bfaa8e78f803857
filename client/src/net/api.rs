//! REST helpers for communicating with the slots endpoint.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: `fetch` fails with a request error, since the endpoint is
//! relative to the page origin and only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport and body-read failures map to `SlotError::Request`, decode
//! failures to `SlotError::Decode`. The HTTP status is never checked, so an
//! error page with a valid slots body still renders.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use slots::{DEFAULT_SLOTS_ENDPOINT, SlotError, SlotSource, SlotsResponse, slots_request_path};

#[cfg(any(test, not(feature = "csr")))]
fn unavailable_message() -> String {
    "slot fetch not available outside the browser".to_owned()
}

/// Slot source that issues same-origin requests from the browser.
#[derive(Clone, Debug)]
pub struct GlooSlotSource {
    endpoint: String,
}

impl Default for GlooSlotSource {
    fn default() -> Self {
        Self::new(DEFAULT_SLOTS_ENDPOINT)
    }
}

impl GlooSlotSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    /// Relative request path for `date`.
    pub fn request_path(&self, date: &str) -> String {
        slots_request_path(&self.endpoint, date)
    }
}

#[async_trait::async_trait(?Send)]
impl SlotSource for GlooSlotSource {
    async fn fetch(&self, date: &str) -> Result<SlotsResponse, SlotError> {
        #[cfg(feature = "csr")]
        {
            let url = self.request_path(date);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| SlotError::Request(e.to_string()))?;
            let body = resp.binary().await.map_err(|e| SlotError::Request(e.to_string()))?;
            SlotsResponse::from_json(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = date;
            Err(SlotError::Request(unavailable_message()))
        }
    }
}
