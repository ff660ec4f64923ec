//! Filesystem catalog of highlighter assets.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use super::error::AssetError;
use super::theme;

/// Directory containing the assets bundled with this crate.
const BUNDLED_ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

/// Subdirectory holding `*.css` stylesheets.
const STYLES_DIR: &str = "styles";
/// Subdirectory holding `*.json` language definitions.
const LANGUAGES_DIR: &str = "languages";

/// Resolves stylesheets and language definitions under an asset root.
///
/// The root is expected to contain a `styles/` folder of `*.css` themes and
/// a `languages/` folder of `*.json` definitions. [`AssetCatalog::bundled`]
/// points at the assets shipped with this crate; [`AssetCatalog::with_root`]
/// is the seam for pointing at a different asset tree.
pub struct AssetCatalog {
    root: PathBuf,
}

impl AssetCatalog {
    /// Catalog over the assets bundled with this crate.
    pub fn bundled() -> Self {
        Self {
            root: PathBuf::from(BUNDLED_ASSETS_DIR),
        }
    }

    /// Catalog over an explicit asset root.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute path of the folder containing the stylesheets.
    pub fn stylesheet_folder(&self) -> PathBuf {
        self.root.join(STYLES_DIR)
    }

    /// Absolute path of the folder containing the language definitions.
    pub fn languages_folder(&self) -> PathBuf {
        self.root.join(LANGUAGES_DIR)
    }

    /// List the available stylesheets, sorted by name.
    ///
    /// By default returns theme names without the `.css` extension; with
    /// `file_paths` set, returns absolute paths instead. A missing or
    /// unreadable styles folder lists as empty rather than failing.
    pub fn available_stylesheets(&self, file_paths: bool) -> Vec<String> {
        let folder = self.stylesheet_folder();
        let Ok(entries) = fs::read_dir(&folder) else {
            debug!("stylesheet folder {} is not readable", folder.display());
            return Vec::new();
        };

        let mut results = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("css") {
                continue;
            }
            if file_paths {
                results.push(path.to_string_lossy().into_owned());
            } else if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                results.push(stem.to_string());
            }
        }

        results.sort();
        results
    }

    /// Absolute path to the named stylesheet.
    ///
    /// The name is accepted with or without the `.css` extension.
    pub fn stylesheet_path(&self, name: &str) -> Result<PathBuf, AssetError> {
        let name = strip_css_extension(name);
        let path = self.stylesheet_folder().join(format!("{name}.css"));

        if !path.is_file() {
            return Err(AssetError::StylesheetNotFound(name.to_string()));
        }

        Ok(path)
    }

    /// Contents of the named stylesheet.
    pub fn stylesheet(&self, name: &str) -> Result<String, AssetError> {
        let path = self.stylesheet_path(name)?;
        Ok(fs::read_to_string(path)?)
    }

    /// Absolute path to the definition of the named language.
    pub fn language_definition_path(&self, name: &str) -> Result<PathBuf, AssetError> {
        let path = self.languages_folder().join(format!("{name}.json"));

        if !path.is_file() {
            return Err(AssetError::LanguageNotFound(name.to_string()));
        }

        Ok(path)
    }

    /// RGB background color of the named theme.
    ///
    /// The value is read from the `background`/`background-color`
    /// declaration of the stylesheet's `.hljs` rule.
    pub fn theme_background_color(&self, name: &str) -> Result<[u8; 3], AssetError> {
        let css = self.stylesheet(name)?;
        theme::background_color(&css)
            .ok_or_else(|| AssetError::NoBackgroundColor(strip_css_extension(name).to_string()))
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Remove a trailing `.css` from a stylesheet name if present.
fn strip_css_extension(name: &str) -> &str {
    name.strip_suffix(".css").unwrap_or(name)
}
