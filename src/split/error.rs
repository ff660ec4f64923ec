//! Error types for the line splitter.

use thiserror::Error;

/// Errors that can occur while splitting highlighted markup into lines.
#[derive(Debug, Error)]
pub enum SplitError {
    /// Markup parsing support is not available in this build.
    #[error("markup parsing is unavailable: {0}")]
    Environment(String),

    /// The input could not be parsed as HTML.
    #[error("the given HTML could not be parsed: {0}")]
    Parse(String),
}

impl SplitError {
    /// Create an environment error.
    pub fn environment(message: impl Into<String>) -> Self {
        Self::Environment(message.into())
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
