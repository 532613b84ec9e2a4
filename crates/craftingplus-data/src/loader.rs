//! Format detection and parsing of recipe documents into a structured tree.
//!
//! Documents are JSON by default; RON and TOML are accepted when the file
//! extension says so. Every format is parsed into the same
//! [`serde_json::Value`] tree before the recipe loader looks at it.

use craftingplus_core::id::ItemKey;
use craftingplus_core::item::ItemError;
use craftingplus_core::recipe::RecipeError;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::schema::RecipeCategory;

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that abort loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The document is not well-formed, or its root is not a map of
    /// recipe categories.
    #[error("parse error in {origin}: {detail}")]
    Parse { origin: String, detail: String },

    /// A recipe entry is invalid. Entries before it stay registered.
    #[error("invalid {category} recipe #{index} in {origin}: {reason}")]
    Validation {
        origin: String,
        category: RecipeCategory,
        index: usize,
        #[source]
        reason: ValidationError,
    },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// A resource name that is not a plain file name.
    #[error("invalid resource name '{name}'")]
    InvalidResource { name: String },

    /// The loader configuration could not be read.
    #[error("invalid config in {file}: {detail}")]
    Config { file: PathBuf, detail: String },

    /// Recipes are registered once per process.
    #[error("recipes have already been loaded")]
    AlreadyEnabled,

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why a single recipe entry was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("recipe outputs must not have wildcard meta values (got {0})")]
    WildcardOutput(ItemKey),

    /// A required field is missing or has the wrong shape.
    #[error("malformed entry: {0}")]
    Malformed(String),

    #[error(transparent)]
    Item(#[from] ItemError),

    #[error(transparent)]
    Recipe(#[from] RecipeError),
}

impl From<serde_json::Error> for ValidationError {
    fn from(e: serde_json::Error) -> Self {
        ValidationError::Malformed(e.to_string())
    }
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Ron,
    Toml,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, LoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        _ => Err(LoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// Parsing
// ===========================================================================

/// Parse document bytes into a structured tree. `origin` names the document
/// in error messages.
pub fn parse_tree(document: &[u8], format: Format, origin: &str) -> Result<Value, LoadError> {
    let parse_err = |detail: String| LoadError::Parse {
        origin: origin.to_string(),
        detail,
    };

    match format {
        Format::Json => serde_json::from_slice(document).map_err(|e| parse_err(e.to_string())),
        Format::Ron => {
            let content = std::str::from_utf8(document).map_err(|e| parse_err(e.to_string()))?;
            ron::from_str(content).map_err(|e| parse_err(e.to_string()))
        }
        Format::Toml => {
            let content = std::str::from_utf8(document).map_err(|e| parse_err(e.to_string()))?;
            toml::from_str(content).map_err(|e| parse_err(e.to_string()))
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use craftingplus_core::id::ItemId;

    // -----------------------------------------------------------------------
    // detect_format
    // -----------------------------------------------------------------------

    #[test]
    fn detect_format_known() {
        assert_eq!(detect_format(Path::new("recipes.json")).unwrap(), Format::Json);
        assert_eq!(detect_format(Path::new("recipes.ron")).unwrap(), Format::Ron);
        assert_eq!(detect_format(Path::new("recipes.toml")).unwrap(), Format::Toml);
    }

    #[test]
    fn detect_format_unsupported() {
        assert!(matches!(
            detect_format(Path::new("recipes.yaml")),
            Err(LoadError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            detect_format(Path::new("recipes")),
            Err(LoadError::UnsupportedFormat { .. })
        ));
    }

    // -----------------------------------------------------------------------
    // parse_tree
    // -----------------------------------------------------------------------

    #[test]
    fn parse_json() {
        let tree = parse_tree(br#"{"smelting": []}"#, Format::Json, "mem").unwrap();
        assert!(tree["smelting"].is_array());
    }

    #[test]
    fn parse_ron_map() {
        let tree = parse_tree(br#"{"shapeless": [], "shaped": []}"#, Format::Ron, "mem").unwrap();
        assert!(tree.is_object());
        assert!(tree["shaped"].is_array());
    }

    #[test]
    fn parse_toml_tables() {
        let doc = br#"
[[smelting]]
block = "furnace"
input = { id = "sand" }
output = { id = "glass" }
"#;
        let tree = parse_tree(doc, Format::Toml, "mem").unwrap();
        assert_eq!(tree["smelting"][0]["block"], "furnace");
        assert_eq!(tree["smelting"][0]["output"]["id"], "glass");
    }

    #[test]
    fn parse_error_names_origin() {
        let err = parse_tree(b"{not json", Format::Json, "broken.json").unwrap_err();
        match err {
            LoadError::Parse { origin, .. } => assert_eq!(origin, "broken.json"),
            other => panic!("expected Parse, got: {other:?}"),
        }
    }

    #[test]
    fn parse_invalid_utf8() {
        let err = parse_tree(&[0xff, 0xfe], Format::Toml, "bad.toml").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    // -----------------------------------------------------------------------
    // Error display messages
    // -----------------------------------------------------------------------

    #[test]
    fn error_display_messages() {
        let e = LoadError::Parse {
            origin: "recipes.json".into(),
            detail: "root must be a map of recipe categories".into(),
        };
        assert!(format!("{e}").contains("recipes.json"));
        assert!(format!("{e}").contains("root must be a map"));

        let e = LoadError::Validation {
            origin: "recipes.json".into(),
            category: RecipeCategory::Shaped,
            index: 3,
            reason: ValidationError::WildcardOutput(ItemKey {
                id: ItemId::new("wool"),
                meta: -1,
            }),
        };
        let msg = format!("{e}");
        assert!(msg.contains("shaped recipe #3"), "got: {msg}");
        assert!(msg.contains("wool:*"), "got: {msg}");

        let e = LoadError::UnsupportedFormat {
            file: PathBuf::from("recipes.yaml"),
        };
        assert!(format!("{e}").contains("recipes.yaml"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LoadError = io_err.into();
        assert!(matches!(err, LoadError::Io(_)));
        assert!(format!("{err}").contains("file not found"));
    }
}
