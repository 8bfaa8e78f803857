//! Slot loader: one date change in, one rendered option list out.
//!
//! DESIGN
//! ======
//! `fetch_slots` renders `Loading` before awaiting the source, then renders
//! exactly one terminal view. Every failure (transport, decode, render)
//! collapses to `SlotView::Error`; the typed cause only goes to the log.
//!
//! Futures are `?Send`: in the browser everything runs on the UI thread, and
//! the native harness drives loads with `join!` on a single task.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use crate::controls::{DateInput, TimeSelect};
use crate::error::SlotError;
use crate::sequence::{RequestSequence, StalePolicy};
use crate::types::SlotsResponse;
use crate::view::SlotView;

/// Fetches the slots document for a date. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait SlotSource {
    /// Issue `GET <endpoint>?date=<date>` and decode the body.
    ///
    /// HTTP status is not inspected: any body that decodes is a success.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::Request`] on transport failure and
    /// [`SlotError::Decode`] when the body is not a slots document.
    async fn fetch(&self, date: &str) -> Result<SlotsResponse, SlotError>;
}

/// Drives the time-select control from date changes.
pub struct SlotLoader<S> {
    source: S,
    sequence: RequestSequence,
    policy: StalePolicy,
}

impl<S: SlotSource> SlotLoader<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source, sequence: RequestSequence::new(), policy: StalePolicy::default() }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: StalePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn policy(&self) -> StalePolicy {
        self.policy
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Handle one change of the date input.
    ///
    /// A missing date input is a silent no-op. Otherwise the control shows
    /// "Loading..." until the response arrives, then the slots, "No slots
    /// available", or "Error loading".
    pub async fn fetch_slots<I, T>(&self, date_input: Option<&I>, time_select: &T)
    where
        I: DateInput + ?Sized,
        T: TimeSelect + ?Sized,
    {
        let Some(date_input) = date_input else {
            tracing::debug!("date input absent; skipping slot fetch");
            return;
        };

        let date = date_input.value();
        let ticket = self.sequence.begin();

        if let Err(err) = time_select.replace_options(&SlotView::Loading.options()) {
            tracing::warn!(error = %err, %date, "failed to render loading placeholder");
        }

        let result = self.source.fetch(&date).await;

        if self.policy == StalePolicy::DiscardStale && !self.sequence.is_latest(ticket) {
            tracing::debug!(seq = ticket.seq(), %date, "discarding stale slot response");
            return;
        }

        let view = match result {
            Ok(resp) => SlotView::from_response(resp),
            Err(err) => {
                tracing::warn!(error = %err, %date, "slot fetch failed");
                SlotView::Error
            }
        };
        render(time_select, &view, &date);
    }
}

fn render<T: TimeSelect + ?Sized>(time_select: &T, view: &SlotView, date: &str) {
    match time_select.replace_options(&view.options()) {
        Ok(()) => tracing::debug!(%date, state = view.as_str(), "rendered slot options"),
        Err(err) => {
            tracing::warn!(error = %err, %date, state = view.as_str(), "failed to render slot options");
            if *view != SlotView::Error {
                if let Err(err) = time_select.replace_options(&SlotView::Error.options()) {
                    tracing::warn!(error = %err, %date, "failed to render error placeholder");
                }
            }
        }
    }
}
