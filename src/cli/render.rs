//! Render command: colour scheme + layout → SVG swatch chart.

use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info};

use crate::config::{Config, ConfigOverrides};
use crate::error::Result;
use crate::export;
use crate::models::{ChartGeometry, Swatch};
use crate::parser;

/// Render a swatch chart
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// YAML file containing the swatch layout (rows of colour names)
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// YAML file with the colour scheme(s)
    #[arg(short, long, visible_alias = "colors", value_name = "FILE")]
    pub colours: PathBuf,

    /// SVG file to create or replace
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// TOML file with render settings (flags below take precedence)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Colour scheme to use from the colour file [default: vogel5000]
    #[arg(long, value_name = "NAME")]
    pub scheme: Option<String>,

    /// Swatch width [default: 120]
    #[arg(long, value_name = "PX")]
    pub swatch_width: Option<f64>,

    /// Swatch height [default: 100]
    #[arg(long, value_name = "PX")]
    pub swatch_height: Option<f64>,

    /// Scheme entry used for labels on dark swatches [default: grey10]
    #[arg(long, value_name = "NAME")]
    pub dark_label: Option<String>,

    /// Scheme entry used for labels on light swatches [default: grey0]
    #[arg(long, value_name = "NAME")]
    pub light_label: Option<String>,
}

/// What a successful render produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    /// File written
    pub output: PathBuf,
    /// Number of swatch groups emitted
    pub swatch_count: usize,
    /// Geometry used
    pub geometry: ChartGeometry,
}

impl RenderArgs {
    /// Creates arguments for the three required paths, everything else default.
    pub fn new(
        layout: impl Into<PathBuf>,
        colours: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            layout: layout.into(),
            colours: colours.into(),
            output: output.into(),
            config: None,
            scheme: None,
            swatch_width: None,
            swatch_height: None,
            dark_label: None,
            light_label: None,
        }
    }

    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            scheme: self.scheme.clone(),
            swatch_width: self.swatch_width,
            swatch_height: self.swatch_height,
            dark_label: self.dark_label.clone(),
            light_label: self.light_label.clone(),
        }
    }

    /// Execute the render command.
    ///
    /// Every colour is resolved before the output file is opened, so lookup
    /// and hex errors leave an existing output untouched.
    pub fn execute(&self) -> Result<RenderSummary> {
        let config = Config::resolve(self.config.as_deref(), self.overrides())?;
        debug!("Effective config: {:?}", config);

        let scheme =
            parser::load_color_scheme(&self.colours, &config.scheme, &config.labels.names())?;
        let layout = parser::load_layout(&self.layout)?;

        let geometry = ChartGeometry::compute(
            layout.row_count(),
            layout.col_count(),
            config.swatch.width,
            config.swatch.height,
        );
        let swatches = Swatch::resolve_all(&layout, &scheme)?;

        export::write_chart_file(&self.output, &geometry, &swatches)?;
        info!(
            "Rendered {} swatch(es) from scheme '{}' to {}",
            swatches.len(),
            scheme.name(),
            self.output.display()
        );

        Ok(RenderSummary {
            output: self.output.clone(),
            swatch_count: swatches.len(),
            geometry,
        })
    }
}
