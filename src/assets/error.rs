//! Error types for asset resolution.

use thiserror::Error;

/// Errors that can occur while resolving bundled highlighter assets.
#[derive(Debug, Error)]
pub enum AssetError {
    /// No stylesheet with the requested name exists.
    #[error("there is no stylesheet by the name of '{0}'")]
    StylesheetNotFound(String),

    /// No language definition with the requested name exists.
    #[error("there is no language definition for '{0}'")]
    LanguageNotFound(String),

    /// The stylesheet declares no usable background color.
    #[error("stylesheet '{0}' does not declare a background color")]
    NoBackgroundColor(String),

    /// IO error during read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
