//! Render configuration.
//!
//! Values come from three layers, highest priority first: command-line flags,
//! an optional TOML file, and the built-in defaults in [`crate::constants`].
//!
//! ```toml
//! scheme = "vogel5000"
//!
//! [swatch]
//! width = 120
//! height = 100
//!
//! [labels]
//! dark_swatch = "grey10"
//! light_swatch = "grey0"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DARK_SWATCH_LABEL, DEFAULT_LIGHT_SWATCH_LABEL, DEFAULT_SCHEME, DEFAULT_SWATCH_HEIGHT,
    DEFAULT_SWATCH_WIDTH,
};
use crate::error::{Result, SwatchError};
use crate::models::LabelNames;

/// Swatch dimensions in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwatchConfig {
    /// Width of one swatch
    pub width: f64,
    /// Height of one swatch
    pub height: f64,
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SWATCH_WIDTH,
            height: DEFAULT_SWATCH_HEIGHT,
        }
    }
}

/// Scheme entries used for label text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Entry used on dark swatches (Lab lightness below 50)
    pub dark_swatch: String,
    /// Entry used on light swatches
    pub light_swatch: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            dark_swatch: DEFAULT_DARK_SWATCH_LABEL.to_string(),
            light_swatch: DEFAULT_LIGHT_SWATCH_LABEL.to_string(),
        }
    }
}

impl LabelConfig {
    /// Label names in the form the colour scheme expects.
    #[must_use]
    pub fn names(&self) -> LabelNames {
        LabelNames {
            dark_swatch: self.dark_swatch.clone(),
            light_swatch: self.light_swatch.clone(),
        }
    }
}

/// Complete render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Scheme key selected from the colour document
    pub scheme: String,
    /// Swatch dimensions
    pub swatch: SwatchConfig,
    /// Label colour entries
    pub labels: LabelConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            swatch: SwatchConfig::default(),
            labels: LabelConfig::default(),
        }
    }
}

/// Optional values supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    /// `--scheme`
    pub scheme: Option<String>,
    /// `--swatch-width`
    pub swatch_width: Option<f64>,
    /// `--swatch-height`
    pub swatch_height: Option<f64>,
    /// `--dark-label`
    pub dark_label: Option<String>,
    /// `--light-label`
    pub light_label: Option<String>,
}

impl Config {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// [`SwatchError::Io`] if unreadable, [`SwatchError::Parse`] if invalid TOML
    /// or containing unknown keys.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SwatchError::io("read", path, e))?;
        toml::from_str(&content).map_err(|e| SwatchError::parse(path, e.to_string()))
    }

    /// Builds the effective configuration: file (if any), then overrides.
    pub fn resolve(file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let mut config = match file {
            Some(path) => Self::load_from(path)?,
            None => Self::default(),
        };
        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(scheme) = overrides.scheme {
            self.scheme = scheme;
        }
        if let Some(width) = overrides.swatch_width {
            self.swatch.width = width;
        }
        if let Some(height) = overrides.swatch_height {
            self.swatch.height = height;
        }
        if let Some(name) = overrides.dark_label {
            self.labels.dark_swatch = name;
        }
        if let Some(name) = overrides.light_label {
            self.labels.light_swatch = name;
        }
    }

    /// Checks values that would produce a broken chart.
    ///
    /// # Errors
    ///
    /// [`SwatchError::Usage`] for non-positive or non-finite swatch sizes and
    /// empty names.
    pub fn validate(&self) -> Result<()> {
        for (what, value) in [("width", self.swatch.width), ("height", self.swatch.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SwatchError::usage(format!(
                    "Swatch {what} must be a positive number, got {value}"
                )));
            }
        }
        for (what, value) in [
            ("Scheme name", &self.scheme),
            ("Dark swatch label name", &self.labels.dark_swatch),
            ("Light swatch label name", &self.labels.light_swatch),
        ] {
            if value.trim().is_empty() {
                return Err(SwatchError::usage(format!("{what} must not be empty")));
            }
        }
        Ok(())
    }
}
