//! Harness error types.

/// A configuration value could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(String),
}

/// Errors that stop the harness before or after the loads run.
///
/// Load failures themselves never appear here; they render as
/// "Error loading" like in the browser.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    #[error("no dates given")]
    NoDates,

    #[error("output encoding failed: {0}")]
    Output(#[from] serde_json::Error),
}
