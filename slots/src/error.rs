//! Error type shared by slot sources and controls.
//!
//! Every variant collapses to the same "Error loading" entry in the UI; the
//! variants only exist so logs can tell a dead network from a bad body.

/// Errors produced while fetching or rendering slots.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("slot request failed: {0}")]
    Request(String),

    /// The response body was not a valid slots document.
    #[error("slot response parse failed: {0}")]
    Decode(String),

    /// Updating the time-select control failed.
    #[error("time select update failed: {0}")]
    Render(String),
}

impl From<serde_json::Error> for SlotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
