//! Renderable states of the time-select control.
//!
//! DESIGN
//! ======
//! The control only ever shows one of four things. Keeping them as an enum
//! means every binding (DOM, signal, memory) renders the same placeholder
//! text and the loader never builds option lists by hand.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::types::{SelectOption, SlotsResponse};

pub const LOADING_LABEL: &str = "Loading...";
pub const EMPTY_LABEL: &str = "No slots available";
pub const ERROR_LABEL: &str = "Error loading";

/// What the time-select control currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlotView {
    /// Request in flight.
    Loading,
    /// Server returned at least one slot.
    Available(Vec<String>),
    /// Server returned no slots, or omitted the field.
    Empty,
    /// Request, decode, or render failed.
    Error,
}

impl SlotView {
    /// Map a decoded response to `Available` or `Empty`.
    #[must_use]
    pub fn from_response(resp: SlotsResponse) -> Self {
        let slots = resp.into_slots();
        if slots.is_empty() { Self::Empty } else { Self::Available(slots) }
    }

    /// Options to place in the control, in display order.
    #[must_use]
    pub fn options(&self) -> Vec<SelectOption> {
        match self {
            Self::Loading => vec![SelectOption::placeholder(LOADING_LABEL)],
            Self::Available(slots) => slots.iter().map(|s| SelectOption::slot(s)).collect(),
            Self::Empty => vec![SelectOption::placeholder(EMPTY_LABEL)],
            Self::Error => vec![SelectOption::placeholder(ERROR_LABEL)],
        }
    }

    /// Short name used in log fields.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Available(_) => "available",
            Self::Empty => "empty",
            Self::Error => "error",
        }
    }
}
