//! Networking for the slot picker.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements `slots::SlotSource` over `gloo-net`; the wire schema
//! itself lives in the shared `slots` crate.

pub mod api;
