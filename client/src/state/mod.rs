//! Reactive state shared between the slot picker and its bindings.

pub mod picker;
