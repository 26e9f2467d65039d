//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Colour scheme with the default scheme key and both label entries.
pub const VOGEL_COLOURS: &str = r##"vogel5000:
  red: "#ff0000"
  orange: "#ff8800"
  navy: "#000080"
  paleyellow: "#ffffe0"
  midgrey: "#777777"
  grey10: "#1a1a1a"
  grey0: "#f5f5f5"
  broken: "#12g456"
pastel:
  mint: "#aaf0d1"
  lavender: "#e6e6fa"
  ink: "#222222"
  paper: "#fafafa"
"##;

/// Path to the swatchmaker binary
pub fn swatchmaker_bin() -> &'static str {
    env!("CARGO_BIN_EXE_swatchmaker")
}

/// Temporary directory holding the input documents for one test.
pub struct Workspace {
    /// Keeps the directory alive for the duration of the test
    pub dir: TempDir,
    /// Layout document
    pub layout: PathBuf,
    /// Colour scheme document
    pub colours: PathBuf,
    /// Output SVG (not created)
    pub output: PathBuf,
}

impl Workspace {
    /// Writes `colours` and `layout` into a fresh temp dir.
    pub fn new(colours: &str, layout: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let layout_path = dir.path().join("layout.yaml");
        let colours_path = dir.path().join("colours.yaml");
        fs::write(&layout_path, layout).expect("Failed to write layout");
        fs::write(&colours_path, colours).expect("Failed to write colours");
        let output = dir.path().join("swatches.svg");

        Self {
            dir,
            layout: layout_path,
            colours: colours_path,
            output,
        }
    }

    /// Workspace using [`VOGEL_COLOURS`].
    pub fn with_layout(layout: &str) -> Self {
        Self::new(VOGEL_COLOURS, layout)
    }

    /// Writes an extra file into the workspace and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Runs the binary with the three required flags plus `extra`.
    pub fn run(&self, extra: &[&str]) -> Output {
        run_render(&self.layout, &self.colours, &self.output, extra)
    }

    /// Reads the generated SVG.
    pub fn read_output(&self) -> String {
        fs::read_to_string(&self.output).expect("Failed to read output SVG")
    }
}

/// Runs the binary with explicit paths.
pub fn run_render(layout: &Path, colours: &Path, output: &Path, extra: &[&str]) -> Output {
    Command::new(swatchmaker_bin())
        .arg("--layout")
        .arg(layout)
        .arg("--colours")
        .arg(colours)
        .arg("--output")
        .arg(output)
        .args(extra)
        .output()
        .expect("Failed to execute command")
}

/// Number of swatch groups in an SVG document.
pub fn group_count(svg: &str) -> usize {
    svg.matches("<g>").count()
}
