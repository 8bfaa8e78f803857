//! Request tickets for discarding stale slot responses.
//!
//! TRADE-OFFS
//! ==========
//! Nothing is cancelled: an older request still runs to completion. Its
//! response is just dropped before it reaches the control, which is enough
//! because fetching slots has no side effects.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

use std::sync::atomic::{AtomicU64, Ordering};

/// What to do with a response that is no longer the latest dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Drop it; the control reflects the most recently dispatched date.
    #[default]
    DiscardStale,
    /// Render it anyway; whichever response resolves last wins.
    LastResponseWins,
}

impl StalePolicy {
    /// Parse `discard` or `last_wins`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "discard" => Some(Self::DiscardStale),
            "last_wins" => Some(Self::LastResponseWins),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DiscardStale => "discard",
            Self::LastResponseWins => "last_wins",
        }
    }
}

/// Identifies one dispatched request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    #[must_use]
    pub fn seq(self) -> u64 {
        self.0
    }
}

/// Monotonic ticket counter. Only the most recently issued ticket is current.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket, superseding every earlier one.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// `true` if no ticket has been issued after `ticket`.
    #[must_use]
    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}
