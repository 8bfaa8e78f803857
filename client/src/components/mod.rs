//! UI components.

pub mod slot_picker;
