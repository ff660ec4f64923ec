//! Bundled stylesheet and language definition catalog.
//!
//! The crate ships a set of highlighter themes (`assets/styles/*.css`) and
//! language definitions (`assets/languages/*.json`). [`AssetCatalog`] resolves
//! names to filesystem paths under an asset root: the bundled one by default,
//! or any directory with the same `styles/` + `languages/` layout via
//! [`AssetCatalog::with_root`].
//!
//! The module-level functions below operate on the bundled catalog and cover
//! the common case of a single asset source.

use std::path::PathBuf;

mod catalog;
mod error;
mod theme;

pub use catalog::AssetCatalog;
pub use error::AssetError;

/// List the stylesheets bundled with this crate.
///
/// See [`AssetCatalog::available_stylesheets`].
pub fn available_stylesheets(file_paths: bool) -> Vec<String> {
    AssetCatalog::bundled().available_stylesheets(file_paths)
}

/// Absolute path to a bundled stylesheet.
///
/// See [`AssetCatalog::stylesheet_path`].
pub fn stylesheet_path(name: &str) -> Result<PathBuf, AssetError> {
    AssetCatalog::bundled().stylesheet_path(name)
}

/// Contents of a bundled stylesheet.
///
/// See [`AssetCatalog::stylesheet`].
pub fn stylesheet(name: &str) -> Result<String, AssetError> {
    AssetCatalog::bundled().stylesheet(name)
}

/// Absolute path to a bundled language definition.
///
/// See [`AssetCatalog::language_definition_path`].
pub fn language_definition_path(name: &str) -> Result<PathBuf, AssetError> {
    AssetCatalog::bundled().language_definition_path(name)
}

/// RGB background color of a bundled theme.
///
/// See [`AssetCatalog::theme_background_color`].
pub fn theme_background_color(name: &str) -> Result<[u8; 3], AssetError> {
    AssetCatalog::bundled().theme_background_color(name)
}
