//! SVG swatch chart renderer.
//!
//! Writes the chart as a sequence of fragments: header, style block,
//! background, one group per swatch, footer. Fragments go to the sink in
//! that order and nothing is buffered between them apart from the sink's own
//! buffering, so a failure part-way leaves a truncated document behind.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SwatchError};
use crate::models::{ChartGeometry, Swatch};

/// Font size of the name and hex labels, relative to swatch height.
const LARGE_TEXT_RATIO: f64 = 0.2;
/// Font size of the Lab label, relative to swatch height.
const SMALL_TEXT_RATIO: f64 = 0.1;

/// Vertical offsets of the three labels inside a swatch, relative to its height.
const NAME_OFFSET: f64 = 0.33;
const HEX_OFFSET: f64 = 0.66;
const LAB_OFFSET: f64 = 0.84;

/// Writes a complete chart to `out`.
///
/// # Errors
///
/// Returns any error from the sink.
pub fn write_chart<W: Write>(
    out: &mut W,
    geometry: &ChartGeometry,
    swatches: &[Swatch],
) -> io::Result<()> {
    write_header(out, geometry)?;
    write_style(out, geometry)?;
    write_background(out, geometry)?;
    for swatch in swatches {
        write_swatch(out, geometry, swatch)?;
    }
    write_footer(out)
}

/// Creates (or truncates) `path` and writes the chart to it.
///
/// # Errors
///
/// [`SwatchError::Io`] if the file cannot be created or written.
pub fn write_chart_file(path: &Path, geometry: &ChartGeometry, swatches: &[Swatch]) -> Result<()> {
    let file = File::create(path).map_err(|e| SwatchError::io("create", path, e))?;
    let mut out = BufWriter::new(file);

    write_chart(&mut out, geometry, swatches)
        .and_then(|()| out.flush())
        .map_err(|e| SwatchError::io("write", path, e))?;

    debug!(
        "Wrote {} swatch(es) on a {}x{} canvas to {}",
        swatches.len(),
        geometry.canvas_width,
        geometry.canvas_height,
        path.display()
    );
    Ok(())
}

fn write_header<W: Write>(out: &mut W, geo: &ChartGeometry) -> io::Result<()> {
    writeln!(out, r#"<?xml version="1.0" encoding="utf-8" ?>"#)?;
    writeln!(
        out,
        r#"<svg id="drawing" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" version="1.1" width="{}" height="{}">"#,
        geo.canvas_width, geo.canvas_height
    )
}

fn write_style<W: Write>(out: &mut W, geo: &ChartGeometry) -> io::Result<()> {
    let large = geo.swatch_height * LARGE_TEXT_RATIO;
    let small = geo.swatch_height * SMALL_TEXT_RATIO;

    writeln!(out)?;
    writeln!(out, "  <style>")?;
    for (class, size) in [("hash", large), ("name", large), ("lab", small)] {
        writeln!(out, "    .{class} {{")?;
        writeln!(out, "      text-anchor: middle;")?;
        writeln!(out, "      font-family: sans-serif;")?;
        writeln!(out, "      font-size: {size}px;")?;
        writeln!(out, "    }}")?;
    }
    writeln!(out, "  </style>")
}

fn write_background<W: Write>(out: &mut W, geo: &ChartGeometry) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        r#"  <rect width="{}" height="{}" fill="black"></rect>"#,
        geo.canvas_width, geo.canvas_height
    )
}

fn write_swatch<W: Write>(out: &mut W, geo: &ChartGeometry, swatch: &Swatch) -> io::Result<()> {
    let (x, y) = geo.swatch_origin(swatch.row, swatch.col);
    let (w, h) = (geo.swatch_width, geo.swatch_height);
    let fill = escape_xml(&swatch.color.hex);
    let text_fill = escape_xml(&swatch.label_hex);

    writeln!(out)?;
    writeln!(out, "  <g>")?;
    writeln!(
        out,
        r#"    <rect width="{w}" height="{h}" fill="{fill}" x="{x}" y="{y}"></rect>"#
    )?;

    let labels = [
        ("name", NAME_OFFSET, escape_xml(&swatch.color.name)),
        ("hash", HEX_OFFSET, fill.clone()),
        ("lab", LAB_OFFSET, Cow::Owned(swatch.lab.to_string())),
    ];
    for (class, offset, text) in labels {
        writeln!(
            out,
            r#"    <text class="{class}" fill="{text_fill}" x="{x}" y="{y}">"#
        )?;
        writeln!(
            out,
            r#"      <tspan dx="{}" dy="{}">{text}</tspan>"#,
            w / 2.0,
            h * offset
        )?;
        writeln!(out, "    </text>")?;
    }

    writeln!(out, "  </g>")
}

fn write_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "</svg>")
}

/// Escapes the five XML special characters.
fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
