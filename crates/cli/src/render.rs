//! Renderer capability handed to each command.
//!
//! Commands build a `Plot` (summary numbers plus coordinate traces) and pass it to
//! whichever `Renderer` `main` selected. Nothing in here is reachable from the core.

use agrocalc::geom::{Polygon2, Segment2};
use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::provenance::{write_sidecar, Payload};

/// One named polyline, columns ready for a plotting library.
#[derive(Clone, Debug, Serialize)]
pub struct Trace {
    pub name: String,
    /// Filled ring (`true`) or open line (`false`).
    pub closed: bool,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Trace {
    pub fn ring(name: impl Into<String>, ring: &Polygon2) -> Self {
        Self {
            name: name.into(),
            closed: true,
            x: ring.xs(),
            y: ring.ys(),
        }
    }

    pub fn segment(name: impl Into<String>, seg: &Segment2) -> Self {
        Self {
            name: name.into(),
            closed: false,
            x: vec![seg.start.x, seg.end.x],
            y: vec![seg.start.y, seg.end.y],
        }
    }
}

/// Everything a command wants shown.
#[derive(Clone, Debug, Serialize)]
pub struct Plot {
    pub command: &'static str,
    pub summary: Value,
    pub traces: Vec<Trace>,
}

pub trait Renderer {
    fn render(&mut self, plot: &Plot) -> Result<()>;
}

/// Pretty JSON on stdout.
pub struct JsonStdout;

impl Renderer for JsonStdout {
    fn render(&mut self, plot: &Plot) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(plot)?);
        Ok(())
    }
}

/// Long-format point table (`trace, closed, point, x, y`) as CSV or Parquet, with a
/// provenance sidecar. The summary still goes to stdout.
pub struct TableFile {
    pub path: PathBuf,
    pub params: Value,
}

impl Renderer for TableFile {
    fn render(&mut self, plot: &Plot) -> Result<()> {
        let mut df = points_frame(&plot.traces)?;
        write_frame(&mut df, &self.path)?;
        tracing::info!(
            out = %self.path.display(),
            rows = df.height(),
            traces = plot.traces.len(),
            "wrote point table"
        );
        let sidecar = write_sidecar(&self.path, Payload::new(plot.command, self.params.clone()))?;
        tracing::debug!(sidecar = %sidecar.display(), "wrote provenance");
        println!("{}", serde_json::to_string_pretty(&plot.summary)?);
        Ok(())
    }
}

pub fn points_frame(traces: &[Trace]) -> Result<DataFrame> {
    let total: usize = traces.iter().map(|t| t.x.len()).sum();
    let mut names = Vec::with_capacity(total);
    let mut closed = Vec::with_capacity(total);
    let mut idx = Vec::with_capacity(total);
    let mut xs = Vec::with_capacity(total);
    let mut ys = Vec::with_capacity(total);
    for t in traces {
        for (k, (x, y)) in t.x.iter().zip(&t.y).enumerate() {
            names.push(t.name.clone());
            closed.push(t.closed);
            idx.push(k as u32);
            xs.push(*x);
            ys.push(*y);
        }
    }
    let df = df!(
        "trace" => names,
        "closed" => closed,
        "point" => idx,
        "x" => xs,
        "y" => ys
    )?;
    Ok(df)
}

/// Write by extension: `.csv` or `.parquet`.
pub fn write_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let parquet = match ext.as_deref() {
        Some("csv") => false,
        Some("parquet") => true,
        _ => bail!("unsupported output extension for {} (use .csv or .parquet)", path.display()),
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if parquet {
        ParquetWriter::new(&mut file).finish(df)?;
    } else {
        CsvWriter::new(&mut file).include_header(true).finish(df)?;
    }
    Ok(())
}
