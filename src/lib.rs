//! Native harness for the slot loader.
//!
//! Replays date changes against a live slots endpoint with the same
//! `slots::SlotLoader` the browser client uses, swapping `gloo-net` for
//! `reqwest` and the DOM for in-memory controls.

pub mod config;
pub mod error;
pub mod harness;
pub mod http;

pub use config::SlotsConfig;
pub use error::{ConfigError, HarnessError};
pub use http::ReqwestSlotSource;
