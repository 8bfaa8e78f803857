//! Shared slot-loading core for the browser client and the native harness.
//!
//! This crate owns the wire schema (`{"slots": [...]}`), the four renderable
//! states of the time-select control, and [`SlotLoader`], which drives one
//! date change from "Loading..." to the final option list. Transport and DOM
//! access stay behind the [`SlotSource`], [`DateInput`] and [`TimeSelect`]
//! traits so the same loader runs against `web-sys`, Leptos signals, or
//! in-memory controls.

pub mod controls;
pub mod endpoint;
pub mod error;
pub mod loader;
pub mod sequence;
pub mod types;
pub mod view;

pub use controls::{DateInput, MemoryDateInput, MemorySelect, TimeSelect};
pub use endpoint::{DATE_QUERY_PARAM, DEFAULT_SLOTS_ENDPOINT, slots_request_path};
pub use error::SlotError;
pub use loader::{SlotLoader, SlotSource};
pub use sequence::{RequestSequence, RequestTicket, StalePolicy};
pub use types::{SelectOption, SlotsResponse};
pub use view::SlotView;
