//! Abstractions over the two form controls the loader touches.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser crate implements these for `web-sys` elements and Leptos
//! signals. The in-memory versions here back the native harness and tests;
//! `MemorySelect` keeps every render so callers can see the loading
//! placeholder that preceded the final state.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use std::cell::RefCell;

use crate::error::SlotError;
use crate::types::SelectOption;

/// Source of the date value (`#date-input`).
pub trait DateInput {
    /// Current raw value, unparsed.
    fn value(&self) -> String;
}

/// Destination for slot options (`#time-select`).
pub trait TimeSelect {
    /// Remove every existing option and append `options` in order.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::Render`] if the underlying control rejects the
    /// update.
    fn replace_options(&self, options: &[SelectOption]) -> Result<(), SlotError>;
}

impl DateInput for str {
    fn value(&self) -> String {
        self.to_owned()
    }
}

impl DateInput for String {
    fn value(&self) -> String {
        self.clone()
    }
}

/// Date input holding a settable value.
#[derive(Debug, Default)]
pub struct MemoryDateInput {
    value: RefCell<String>,
}

impl MemoryDateInput {
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self { value: RefCell::new(value.to_owned()) }
    }

    pub fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_owned();
    }
}

impl DateInput for MemoryDateInput {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }
}

/// Time select that records each render.
#[derive(Debug, Default)]
pub struct MemorySelect {
    renders: RefCell<Vec<Vec<SelectOption>>>,
}

impl MemorySelect {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options currently shown; empty before the first render.
    #[must_use]
    pub fn options(&self) -> Vec<SelectOption> {
        self.renders.borrow().last().cloned().unwrap_or_default()
    }

    /// Labels currently shown.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.options().into_iter().map(|o| o.label).collect()
    }

    /// Every render so far, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<Vec<SelectOption>> {
        self.renders.borrow().clone()
    }

    /// Number of times the options were replaced.
    #[must_use]
    pub fn mutation_count(&self) -> usize {
        self.renders.borrow().len()
    }
}

impl TimeSelect for MemorySelect {
    fn replace_options(&self, options: &[SelectOption]) -> Result<(), SlotError> {
        self.renders.borrow_mut().push(options.to_vec());
        Ok(())
    }
}
