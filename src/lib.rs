//! # linelight
//!
//! Auxiliary operations around a syntax-highlighting pipeline: discovery of
//! the stylesheets and language definitions bundled with this crate, and
//! post-processing of highlighter HTML output.
//!
//! ## Module Structure
//!
//! ```text
//! split    → line splitting for highlighted HTML fragments
//! assets   → bundled stylesheet and language definition catalog
//! ```
//!
//! The line splitter is the algorithmic core: it takes a highlighted HTML
//! fragment and produces one self-contained fragment per visual line, closing
//! every open `<span>` at the end of a line and reopening it on the next.
//! Markup parsing is provided by the default-on `dom` feature.

/// Bundled stylesheet and language definition catalog
pub mod assets;

/// Line splitting for highlighted HTML fragments
pub mod split;

// Re-export commonly needed items
pub use assets::{AssetCatalog, AssetError};
pub use split::{SplitError, split_code_into_array};
