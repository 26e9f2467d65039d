//! Colour-scheme document loader.
//!
//! The document is YAML (JSON also works, being a YAML subset):
//!
//! ```yaml
//! vogel5000:
//!   red: "#ff0000"
//!   grey10: "#1a1a1a"
//!   grey0: "#f5f5f5"
//! ```
//!
//! Merge keys are resolved, so a shared block can be pulled into every
//! scheme:
//!
//! ```yaml
//! greys: &greys
//!   grey10: "#1a1a1a"
//!   grey0: "#f5f5f5"
//! vogel5000:
//!   <<: *greys
//!   red: "#ff0000"
//! ```

use std::fs;
use std::path::Path;

use serde_yml::Value;
use tracing::debug;

use crate::error::{Result, SwatchError};
use crate::models::{ColorScheme, LabelNames, SchemeDocument};

/// Parses a colour-scheme document from a string.
///
/// `path` is only used in error messages.
pub fn parse_scheme_document(content: &str, path: &Path) -> Result<SchemeDocument> {
    // An empty file has no YAML document at all
    if content.trim().is_empty() {
        return Ok(SchemeDocument::default());
    }
    let to_parse_error = |e: serde_yml::Error| SwatchError::parse(path, e.to_string());

    let mut value: Value = serde_yml::from_str(content).map_err(to_parse_error)?;
    value.apply_merge().map_err(to_parse_error)?;
    // `~` on its own is a valid but empty document
    if value.is_null() {
        return Ok(SchemeDocument::default());
    }
    serde_yml::from_value(value).map_err(to_parse_error)
}

/// Reads `path` and selects scheme `scheme_name` from it.
///
/// # Errors
///
/// - [`SwatchError::Io`] if the file cannot be read
/// - [`SwatchError::Parse`] if it is not a mapping, or the selected scheme
///   is not a mapping of names to strings
/// - [`SwatchError::Lookup`] if the scheme or a label entry is missing
/// - [`SwatchError::Value`] if a label entry is not valid hex
pub fn load_color_scheme(path: &Path, scheme_name: &str, labels: &LabelNames) -> Result<ColorScheme> {
    let content = fs::read_to_string(path).map_err(|e| SwatchError::io("read", path, e))?;
    let document = parse_scheme_document(&content, path)?;
    debug!(
        "Colour document {} has {} top-level entries",
        path.display(),
        document.schemes.len()
    );

    let scheme = ColorScheme::select(document, scheme_name, labels, path)?;
    debug!("Selected scheme '{}' with {} colours", scheme.name(), scheme.len());
    Ok(scheme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn labels() -> LabelNames {
        LabelNames {
            dark_swatch: "grey10".to_string(),
            light_swatch: "grey0".to_string(),
        }
    }

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_yaml_scheme() {
        let file = write_temp(
            "vogel5000:\n  red: \"#ff0000\"\n  grey10: \"#1a1a1a\"\n  grey0: \"#f5f5f5\"\n",
        );
        let scheme = load_color_scheme(file.path(), "vogel5000", &labels()).unwrap();
        assert_eq!(scheme.len(), 3);
        assert_eq!(scheme.color("red").unwrap().hex, "#ff0000");
    }

    #[test]
    fn test_merge_keys_share_label_colours() {
        let file = write_temp(
            "greys: &greys\n  grey10: \"#1a1a1a\"\n  grey0: \"#f5f5f5\"\n\
             vogel5000:\n  <<: *greys\n  red: \"#ff0000\"\n\
             pastel:\n  <<: *greys\n  grey0: \"#fafafa\"\n",
        );

        let scheme = load_color_scheme(file.path(), "vogel5000", &labels()).unwrap();
        assert_eq!(scheme.len(), 3);
        assert_eq!(scheme.color("grey10").unwrap().hex, "#1a1a1a");

        // Keys written in the scheme win over merged ones
        let scheme = load_color_scheme(file.path(), "pastel", &labels()).unwrap();
        assert_eq!(scheme.color("grey0").unwrap().hex, "#fafafa");
    }

    #[test]
    fn test_unrelated_top_level_keys_are_tolerated() {
        let file = write_temp(
            "version: 2\nvogel5000:\n  red: \"#ff0000\"\n  grey10: \"#1a1a1a\"\n  grey0: \"#f5f5f5\"\n",
        );
        let scheme = load_color_scheme(file.path(), "vogel5000", &labels()).unwrap();
        assert_eq!(scheme.len(), 3);
    }

    #[test]
    fn test_null_document_has_no_schemes() {
        let file = write_temp("~\n");
        let err = load_color_scheme(file.path(), "vogel5000", &labels()).unwrap_err();
        assert!(err.to_string().contains("document defines no schemes"));
    }

    #[test]
    fn test_load_json_scheme() {
        let file = write_temp(
            r##"{"vogel5000": {"red":"#ff0000","grey10":"#1a1a1a","grey0":"#f5f5f5"}}"##,
        );
        let scheme = load_color_scheme(file.path(), "vogel5000", &labels()).unwrap();
        assert_eq!(scheme.len(), 3);
    }

    #[test]
    fn test_malformed_document() {
        let file = write_temp("vogel5000: [unclosed\n");
        let err = load_color_scheme(file.path(), "vogel5000", &labels()).unwrap_err();
        assert!(matches!(err, SwatchError::Parse { .. }));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let file = write_temp("- red\n- blue\n");
        let err = load_color_scheme(file.path(), "vogel5000", &labels()).unwrap_err();
        assert!(matches!(err, SwatchError::Parse { .. }));
    }

    #[test]
    fn test_empty_document_has_no_schemes() {
        let file = write_temp("{}\n");
        let err = load_color_scheme(file.path(), "vogel5000", &labels()).unwrap_err();
        assert!(err.to_string().contains("document defines no schemes"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_color_scheme(Path::new("/nonexistent/colours.yaml"), "x", &labels())
            .unwrap_err();
        assert!(matches!(err, SwatchError::Io { action: "read", .. }));
    }
}
