//! Signal-backed time select for the Leptos slot picker.
//!
//! DESIGN
//! ======
//! The loader writes options through `TimeSelect`; the component reads the
//! same signal to render `<option>` children. A disposed signal (component
//! unmounted mid-request) reports a render error instead of panicking.

#[cfg(test)]
#[path = "picker_test.rs"]
mod picker_test;

use leptos::prelude::*;
use slots::{SelectOption, SlotError, TimeSelect};

/// Time-select options held in a signal.
#[derive(Clone, Copy, Debug)]
pub struct SignalSelect {
    options: RwSignal<Vec<SelectOption>>,
}

impl Default for SignalSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalSelect {
    pub fn new() -> Self {
        Self { options: RwSignal::new(Vec::new()) }
    }

    /// Signal the component renders from.
    pub fn options(self) -> RwSignal<Vec<SelectOption>> {
        self.options
    }
}

impl TimeSelect for SignalSelect {
    fn replace_options(&self, options: &[SelectOption]) -> Result<(), SlotError> {
        match self.options.try_set(options.to_vec()) {
            None => Ok(()),
            Some(_) => Err(SlotError::Render("time select signal disposed".to_owned())),
        }
    }
}
