//! Replays date changes through the loader and formats the result.
//!
//! DESIGN
//! ======
//! All dates are dispatched before any response is awaited, in argument
//! order, against one shared select. That reproduces a user changing the
//! date faster than the server answers, so the stale policy decides which
//! response ends up on screen.

#[cfg(test)]
#[path = "harness_test.rs"]
mod harness_test;

use futures::future::join_all;
use slots::{MemorySelect, SelectOption, SlotLoader, SlotSource};

use crate::error::HarnessError;

/// Dispatch one change per date and wait for all of them.
///
/// # Errors
///
/// Returns [`HarnessError::NoDates`] if `dates` is empty.
pub async fn replay_changes<S: SlotSource>(
    loader: &SlotLoader<S>,
    dates: &[String],
) -> Result<MemorySelect, HarnessError> {
    if dates.is_empty() {
        return Err(HarnessError::NoDates);
    }

    let select = MemorySelect::new();
    join_all(dates.iter().map(|date| loader.fetch_slots(Some(date.as_str()), &select))).await;

    tracing::info!(
        dispatched = dates.len(),
        renders = select.mutation_count(),
        policy = loader.policy().as_str(),
        "date changes settled"
    );
    Ok(select)
}

/// One label per line.
#[must_use]
pub fn render_plain(options: &[SelectOption]) -> String {
    options.iter().map(|o| o.label.as_str()).collect::<Vec<_>>().join("\n")
}

/// Pretty JSON array of `{value, label}`.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(options: &[SelectOption]) -> Result<String, HarnessError> {
    Ok(serde_json::to_string_pretty(options)?)
}
