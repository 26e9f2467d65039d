//! Colour scheme data structures.
//!
//! A scheme document holds one or more named schemes; one of them is
//! selected per run and becomes the active [`ColorScheme`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yml::Value;

use super::rgb::{hex_digits, RgbColor};
use crate::error::{Result, SwatchError};

/// All top-level entries of a colour-scheme document, keyed by name.
///
/// Entries stay untyped until one is selected, so anchors, shared blocks or
/// unrelated keys elsewhere in the document do not affect the run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SchemeDocument {
    /// Scheme name to its (not yet validated) colour table.
    pub schemes: BTreeMap<String, Value>,
}

/// A colour resolved from the scheme: its name, the hex text to emit and the
/// parsed RGB value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedColor {
    /// Colour name as written in the scheme
    pub name: String,
    /// Canonical `#RRGGBB` text, case preserved from the scheme
    pub hex: String,
    /// Parsed value
    pub rgb: RgbColor,
}

impl NamedColor {
    /// Validates `value` as a hex colour belonging to `name`.
    pub fn parse(name: &str, value: &str) -> Result<Self> {
        let rgb = RgbColor::from_hex(value).map_err(|_| SwatchError::Value {
            name: name.to_string(),
            value: value.to_string(),
        })?;
        Ok(Self {
            name: name.to_string(),
            hex: format!("#{}", hex_digits(value)),
            rgb,
        })
    }
}

/// Names of the scheme entries used for swatch label text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelNames {
    /// Entry used for labels drawn on dark swatches
    pub dark_swatch: String,
    /// Entry used for labels drawn on light swatches
    pub light_swatch: String,
}

/// The active colour scheme for one run.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    name: String,
    source: PathBuf,
    colors: BTreeMap<String, String>,
    dark_swatch_label: NamedColor,
    light_swatch_label: NamedColor,
}

impl ColorScheme {
    /// Selects scheme `name` out of `document` and resolves the label colours.
    ///
    /// `source` is only used in error messages.
    ///
    /// # Errors
    ///
    /// - [`SwatchError::Lookup`] if the scheme or either label entry is missing
    /// - [`SwatchError::Parse`] if the scheme is not a mapping of names to strings
    /// - [`SwatchError::Value`] if a label entry is not a valid hex colour
    pub fn select(
        mut document: SchemeDocument,
        name: &str,
        labels: &LabelNames,
        source: &Path,
    ) -> Result<Self> {
        let Some(table) = document.schemes.remove(name) else {
            let available: Vec<&str> = document.schemes.keys().map(String::as_str).collect();
            let hint = if available.is_empty() {
                "document defines no schemes".to_string()
            } else {
                format!("available: {}", available.join(", "))
            };
            return Err(SwatchError::Lookup {
                what: "Colour scheme",
                key: name.to_string(),
                path: source.to_path_buf(),
                hint: Some(hint),
            });
        };
        let colors: BTreeMap<String, String> = if table.is_null() {
            BTreeMap::new()
        } else {
            serde_yml::from_value(table)
                .map_err(|e| SwatchError::parse(source, format!("scheme '{name}': {e}")))?
        };

        let label = |entry: &str| -> Result<NamedColor> {
            let value = colors.get(entry).ok_or_else(|| SwatchError::Lookup {
                what: "Label colour",
                key: entry.to_string(),
                path: source.to_path_buf(),
                hint: Some(format!("required by scheme '{name}'")),
            })?;
            NamedColor::parse(entry, value)
        };
        let dark_swatch_label = label(&labels.dark_swatch)?;
        let light_swatch_label = label(&labels.light_swatch)?;

        Ok(Self {
            name: name.to_string(),
            source: source.to_path_buf(),
            colors,
            dark_swatch_label,
            light_swatch_label,
        })
    }

    /// Name of the selected scheme.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn len(&self) -> usize {
        self.colors.len()
    }

    /// Looks up and validates colour `name`.
    ///
    /// # Errors
    ///
    /// [`SwatchError::Lookup`] if absent, [`SwatchError::Value`] if not valid hex.
    pub fn color(&self, name: &str) -> Result<NamedColor> {
        let value = self.colors.get(name).ok_or_else(|| SwatchError::Lookup {
            what: "Colour",
            key: name.to_string(),
            path: self.source.clone(),
            hint: Some(format!("scheme '{}'", self.name)),
        })?;
        NamedColor::parse(name, value)
    }

    /// Label colour for text drawn on top of `swatch`.
    #[must_use]
    pub fn label_color_for(&self, swatch: RgbColor) -> &NamedColor {
        if swatch.to_lab().is_dark() {
            &self.dark_swatch_label
        } else {
            &self.light_swatch_label
        }
    }
}
