//! Asset Catalog Tests
//!
//! Resolution of bundled stylesheets and language definitions, catalogs over
//! custom roots, and theme background extraction.

use std::fs;

use linelight::assets::{self, AssetCatalog, AssetError};
use rstest::rstest;
use tempfile::TempDir;
use walkdir::WalkDir;

// ============================================================================
// Bundled stylesheets
// ============================================================================

#[test]
fn test_bundled_stylesheets_are_listed_by_name() {
    let names = assets::available_stylesheets(false);
    for expected in ["atom-one-dark", "default", "github", "monokai"] {
        assert!(names.contains(&expected.to_string()), "missing {expected}");
    }
    assert!(names.iter().all(|n| !n.ends_with(".css")));
}

#[test]
fn test_bundled_stylesheet_listing_is_sorted() {
    let names = assets::available_stylesheets(false);
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn test_stylesheet_listing_as_paths() {
    let paths = assets::available_stylesheets(true);
    assert!(!paths.is_empty());
    for path in paths {
        assert!(path.ends_with(".css"), "not a css path: {path}");
        assert!(std::path::Path::new(&path).is_file());
    }
}

#[rstest]
#[case("github")]
#[case("github.css")]
fn test_stylesheet_path_accepts_name_with_or_without_extension(#[case] name: &str) {
    let path = assets::stylesheet_path(name).expect("bundled stylesheet should resolve");
    assert!(path.ends_with("github.css"));
    assert!(path.is_file());
}

#[test]
fn test_unknown_stylesheet_is_not_found() {
    let err = assets::stylesheet_path("no-such-theme").unwrap_err();
    assert!(matches!(err, AssetError::StylesheetNotFound(name) if name == "no-such-theme"));
}

#[test]
fn test_stylesheet_contents_style_the_code_block() {
    let css = assets::stylesheet("default").expect("bundled stylesheet should load");
    assert!(css.contains(".hljs"));
}

// ============================================================================
// Bundled language definitions
// ============================================================================

#[rstest]
#[case("json")]
#[case("rust")]
#[case("plaintext")]
fn test_bundled_language_definitions_resolve(#[case] name: &str) {
    let path = assets::language_definition_path(name).expect("bundled language should resolve");
    assert!(path.ends_with(format!("{name}.json")));
    assert!(path.is_file());
}

#[test]
fn test_unknown_language_is_not_found() {
    let err = assets::language_definition_path("klingon").unwrap_err();
    assert!(matches!(err, AssetError::LanguageNotFound(name) if name == "klingon"));
}

// ============================================================================
// Theme background colors
// ============================================================================

#[rstest]
#[case("default", [0xf0, 0xf0, 0xf0])]
#[case("github", [0xf8, 0xf8, 0xf8])]
#[case("monokai", [0x27, 0x28, 0x22])]
#[case("atom-one-dark", [0x28, 0x2c, 0x34])]
fn test_theme_background_colors(#[case] name: &str, #[case] rgb: [u8; 3]) {
    assert_eq!(assets::theme_background_color(name).unwrap(), rgb);
}

#[test]
fn test_every_bundled_theme_declares_a_background() {
    for name in assets::available_stylesheets(false) {
        assert!(
            assets::theme_background_color(&name).is_ok(),
            "theme {name} has no background"
        );
    }
}

#[test]
fn test_background_of_unknown_theme_is_not_found() {
    let err = assets::theme_background_color("no-such-theme").unwrap_err();
    assert!(matches!(err, AssetError::StylesheetNotFound(_)));
}

// ============================================================================
// Bundled asset tree
// ============================================================================

#[test]
fn test_bundled_tree_contains_only_known_asset_kinds() {
    let catalog = AssetCatalog::bundled();

    for entry in WalkDir::new(catalog.stylesheet_folder()) {
        let entry = entry.expect("styles folder should be walkable");
        if entry.file_type().is_file() {
            assert_eq!(entry.path().extension().and_then(|e| e.to_str()), Some("css"));
        }
    }

    for entry in WalkDir::new(catalog.languages_folder()) {
        let entry = entry.expect("languages folder should be walkable");
        if entry.file_type().is_file() {
            assert_eq!(entry.path().extension().and_then(|e| e.to_str()), Some("json"));
        }
    }
}

// ============================================================================
// Catalogs over custom roots
// ============================================================================

#[test]
fn test_catalog_over_a_custom_root() {
    let root = TempDir::new().expect("Failed to create temp directory");
    let styles = root.path().join("styles");
    fs::create_dir_all(&styles).expect("Failed to create styles folder");
    fs::write(
        styles.join("custom.css"),
        ".hljs { background: rgb(1, 2, 3); }\n",
    )
    .expect("Failed to write stylesheet");

    let catalog = AssetCatalog::with_root(root.path());
    assert_eq!(catalog.available_stylesheets(false), ["custom"]);
    assert_eq!(catalog.theme_background_color("custom").unwrap(), [1, 2, 3]);
    assert!(matches!(
        catalog.language_definition_path("json"),
        Err(AssetError::LanguageNotFound(_))
    ));
}

#[test]
fn test_missing_styles_folder_lists_as_empty() {
    let root = TempDir::new().expect("Failed to create temp directory");
    let catalog = AssetCatalog::with_root(root.path());
    assert_eq!(catalog.available_stylesheets(false), Vec::<String>::new());
}

#[test]
fn test_non_css_entries_are_ignored() {
    let root = TempDir::new().expect("Failed to create temp directory");
    let styles = root.path().join("styles");
    fs::create_dir_all(&styles).expect("Failed to create styles folder");
    fs::write(styles.join("theme.css"), ".hljs { background: #fff; }").unwrap();
    fs::write(styles.join("README.md"), "not a theme").unwrap();

    let catalog = AssetCatalog::with_root(root.path());
    assert_eq!(catalog.available_stylesheets(false), ["theme"]);
}

#[test]
fn test_theme_without_background_reports_no_background_color() {
    let root = TempDir::new().expect("Failed to create temp directory");
    let styles = root.path().join("styles");
    fs::create_dir_all(&styles).expect("Failed to create styles folder");
    fs::write(styles.join("bare.css"), ".hljs { color: #333; }").unwrap();

    let catalog = AssetCatalog::with_root(root.path());
    let err = catalog.theme_background_color("bare").unwrap_err();
    assert!(matches!(err, AssetError::NoBackgroundColor(name) if name == "bare"));
}
