use agrocalc::area::{area, plant_count};
use agrocalc::crop::{CropCatalog, CropProfile};
use agrocalc::fertilizer::{complete, per_linear_meter, quantity};
use agrocalc::irrigation::{calculate, FieldDimensions};
use agrocalc::shape::{generate, ShapeKind, ShapeParams};
use agrocalc::CalcError;
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod batch;
mod provenance;
mod render;

use render::{JsonStdout, Plot, Renderer, TableFile, Trace};

#[derive(Parser)]
#[command(name = "agrocalc")]
#[command(about = "Field area, fertilizer and irrigation calculators")]
struct Cmd {
    /// JSON crop catalog; the built-in catalog is used when absent
    #[arg(long, global = true, env = "AGROCALC_CATALOG")]
    catalog: Option<PathBuf>,

    /// Write the coordinate table here (.csv or .parquet) instead of printing it
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Boundary ring and area of one field
    Shape(ShapeArgs),
    /// Area only (m² and ha), optionally with a plant count for a crop
    Area {
        #[command(flatten)]
        shape: ShapeArgs,
        #[arg(long)]
        crop: Option<String>,
    },
    /// Areas for every row of a fields CSV
    Areas {
        #[arg(long)]
        input: PathBuf,
    },
    /// NPK quantities for a crop, over an area or over a rectangular field
    Fertilizer {
        #[arg(long)]
        crop: String,
        #[arg(
            long,
            required_unless_present = "length_m",
            conflicts_with_all = ["length_m", "width_m"]
        )]
        area_hectare: Option<f64>,
        /// Field length; with --width-m the row count comes from the crop spacing
        #[arg(long, requires = "width_m")]
        length_m: Option<f64>,
        #[arg(long, requires = "length_m")]
        width_m: Option<f64>,
        /// Row count and row length to also report kg per linear meter
        #[arg(long, requires = "row_length_m", conflicts_with = "length_m")]
        rows: Option<usize>,
        #[arg(long, requires = "rows")]
        row_length_m: Option<f64>,
    },
    /// Row layout and water volumes for a rectangular field
    Irrigation {
        /// Crop whose between-rows spacing drives the row count
        #[arg(long, required_unless_present = "row_spacing_m", conflicts_with = "row_spacing_m")]
        crop: Option<String>,
        #[arg(long)]
        row_spacing_m: Option<f64>,
        #[arg(long)]
        length_m: f64,
        #[arg(long)]
        width_m: f64,
        /// Water per meter of row
        #[arg(long)]
        volume_rate_per_m: f64,
    },
    /// List crops in the catalog
    Crops,
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug)]
struct ShapeArgs {
    #[arg(long)]
    kind: ShapeKind,
    #[arg(long)]
    length_m: Option<f64>,
    #[arg(long)]
    width_m: Option<f64>,
    #[arg(long)]
    base_m: Option<f64>,
    #[arg(long)]
    height_m: Option<f64>,
    #[arg(long)]
    radius_m: Option<f64>,
    #[arg(long)]
    longer_base_m: Option<f64>,
    #[arg(long)]
    shorter_base_m: Option<f64>,
}

impl ShapeArgs {
    fn field(&self, name: &str) -> Option<f64> {
        match name {
            "length_m" => self.length_m,
            "width_m" => self.width_m,
            "base_m" => self.base_m,
            "height_m" => self.height_m,
            "radius_m" => self.radius_m,
            "longer_base_m" => self.longer_base_m,
            "shorter_base_m" => self.shorter_base_m,
            _ => None,
        }
    }

    fn params(&self) -> agrocalc::Result<ShapeParams> {
        ShapeParams::from_fields(self.kind, |name| self.field(name))
    }
}

fn main() -> ExitCode {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    match run(cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<CalcError>() {
            // Operator input problems get a plain message, nothing else.
            Some(calc) => {
                tracing::debug!(error = ?calc, "calculation rejected");
                eprintln!("error: {calc}");
                ExitCode::from(2)
            }
            None => {
                eprintln!("error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cmd: Cmd) -> Result<()> {
    // Only commands that look crops up read the catalog.
    let catalog_path = cmd.catalog.as_deref();
    let plot = match cmd.action {
        Action::Shape(args) => shape(&args)?,
        Action::Area { shape, crop } => match crop.as_deref() {
            Some(name) => {
                let catalog = load_catalog(catalog_path)?;
                field_area(&shape, Some(catalog.find(name)?))?
            }
            None => field_area(&shape, None)?,
        },
        Action::Areas { input } => return areas(input, cmd.out),
        Action::Fertilizer {
            crop,
            area_hectare,
            length_m,
            width_m,
            rows,
            row_length_m,
        } => {
            let catalog = load_catalog(catalog_path)?;
            let profile = catalog.find(&crop)?;
            match (area_hectare, length_m, width_m) {
                (_, Some(length), Some(width)) => {
                    fertilizer_field(profile, FieldDimensions::new(length, width))?
                }
                (Some(ha), _, _) => fertilizer(profile, ha, rows, row_length_m)?,
                _ => bail!("either --area-hectare or --length-m with --width-m is required"),
            }
        }
        Action::Irrigation {
            crop,
            row_spacing_m,
            length_m,
            width_m,
            volume_rate_per_m,
        } => {
            let spacing = match (row_spacing_m, crop.as_deref()) {
                (Some(s), _) => s,
                (None, Some(name)) => load_catalog(catalog_path)?.row_spacing_m(name)?,
                (None, None) => bail!("either --crop or --row-spacing-m is required"),
            };
            irrigation(
                FieldDimensions::new(length_m, width_m),
                spacing,
                volume_rate_per_m,
                crop,
            )?
        }
        Action::Crops => crops(&load_catalog(catalog_path)?),
        Action::Report => report(),
    };
    // Rendering starts only after the calculation fully succeeded.
    let mut renderer: Box<dyn Renderer> = match cmd.out {
        Some(path) => Box::new(TableFile {
            path,
            params: plot.summary["params"].clone(),
        }),
        None => Box::new(JsonStdout),
    };
    renderer.render(&plot)
}

fn load_catalog(path: Option<&Path>) -> Result<CropCatalog> {
    let Some(path) = path else {
        return Ok(CropCatalog::builtin());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading crop catalog {}", path.display()))?;
    let catalog = CropCatalog::from_json(&text)
        .with_context(|| format!("parsing crop catalog {}", path.display()))?;
    tracing::debug!(path = %path.display(), crops = catalog.crops.len(), "catalog loaded");
    Ok(catalog)
}

fn shape(args: &ShapeArgs) -> Result<Plot> {
    let params = args.params()?;
    let ring = generate(&params)?;
    let a = area(&params)?;
    tracing::info!(kind = %params.kind(), points = ring.len(), area_m2 = a.area_m2, "shape");
    Ok(Plot {
        command: "shape",
        summary: json!({ "params": params, "area": a }),
        traces: vec![Trace::ring(params.kind().as_str(), &ring)],
    })
}

fn field_area(args: &ShapeArgs, crop: Option<&CropProfile>) -> Result<Plot> {
    let params = args.params()?;
    let a = area(&params)?;
    let plants = match crop {
        Some(profile) => Some(plant_count(
            a.area_hectare,
            profile.agronomy.planting_density.plants_per_hectare,
        )?),
        None => None,
    };
    let crop = crop.map(|p| p.name.as_str());
    tracing::info!(kind = %params.kind(), area_m2 = a.area_m2, plants = ?plants, "area");
    Ok(Plot {
        command: "area",
        summary: json!({ "params": params, "area": a, "crop": crop, "plants": plants }),
        traces: Vec::new(),
    })
}

fn areas(input: PathBuf, out: Option<PathBuf>) -> Result<()> {
    let fields = batch::read_fields(&input)
        .with_context(|| format!("reading fields table {}", input.display()))?;
    let mut table = batch::areas_frame(&fields)?;
    tracing::info!(input = %input.display(), rows = table.height(), "areas");
    match out {
        Some(path) => {
            render::write_frame(&mut table, &path)?;
            provenance::write_sidecar(
                &path,
                provenance::Payload::new("areas", json!({ "input": input })),
            )?;
        }
        None => println!("{table}"),
    }
    Ok(())
}

fn fertilizer(
    profile: &CropProfile,
    area_hectare: f64,
    rows: Option<usize>,
    row_length_m: Option<f64>,
) -> Result<Plot> {
    let q = quantity(area_hectare, &profile.npk_rate())?;
    let per_meter = match (rows, row_length_m) {
        (Some(n), Some(len)) => Some(per_linear_meter(q.total_kg, n, len)?),
        _ => None,
    };
    tracing::info!(crop = %profile.name, area_hectare, total_kg = q.total_kg, "fertilizer");
    Ok(Plot {
        command: "fertilizer",
        summary: json!({
            "params": { "crop": profile.name, "area_hectare": area_hectare },
            "quantities_kg": q,
            "kg_per_linear_meter": per_meter,
        }),
        traces: Vec::new(),
    })
}

fn fertilizer_field(profile: &CropProfile, field: FieldDimensions) -> Result<Plot> {
    let plan = complete(&field, profile)?;
    tracing::info!(
        crop = %profile.name,
        rows = plan.row_count,
        total_kg = plan.quantities_kg.total_kg,
        kg_per_linear_meter = plan.kg_per_linear_meter,
        "fertilizer"
    );
    Ok(Plot {
        command: "fertilizer",
        summary: json!({
            "params": { "crop": profile.name, "field": field },
            "area": plan.area,
            "quantities_kg": plan.quantities_kg,
            "row_count": plan.row_count,
            "row_length_m": plan.row_length_m,
            "kg_per_linear_meter": plan.kg_per_linear_meter,
        }),
        traces: Vec::new(),
    })
}

fn irrigation(
    field: FieldDimensions,
    row_spacing_m: f64,
    volume_rate_per_m: f64,
    crop: Option<String>,
) -> Result<Plot> {
    let res = calculate(&field, row_spacing_m, volume_rate_per_m)?;
    tracing::info!(
        rows = res.layout.row_count,
        row_spacing_m,
        placement_spacing_m = res.layout.placement_spacing_m,
        total_volume_m3 = res.volumes.total_volume_m3,
        "irrigation"
    );
    let mut traces: Vec<Trace> = res
        .layout
        .rows
        .iter()
        .enumerate()
        .map(|(i, seg)| Trace::segment(format!("row {}", i + 1), seg))
        .collect();
    traces.push(Trace::ring("field", &res.layout.field_boundary));
    Ok(Plot {
        command: "irrigation",
        summary: json!({
            "params": {
                "crop": crop,
                "field": field,
                "row_spacing_m": row_spacing_m,
                "volume_rate_per_m": volume_rate_per_m,
            },
            "row_count": res.layout.row_count,
            "placement_spacing_m": res.layout.placement_spacing_m,
            "volumes": res.volumes,
        }),
        traces,
    })
}

fn crops(catalog: &CropCatalog) -> Plot {
    let rows: Vec<_> = catalog
        .crops
        .iter()
        .map(|c| {
            json!({
                "name": c.name,
                "scientific_name": c.scientific_name,
                "row_spacing_m": c.row_spacing_m(),
                "npk_per_hectare_kg": c.npk_rate(),
            })
        })
        .collect();
    Plot {
        command: "crops",
        summary: json!({ "params": {}, "crops": rows }),
        traces: Vec::new(),
    }
}

fn report() -> Plot {
    Plot {
        command: "report",
        summary: json!({
            "params": {},
            "code_rev": provenance::code_rev(),
            "agrocalc_version": agrocalc::VERSION,
            "shapes": ShapeKind::ALL.map(ShapeKind::as_str),
        }),
        traces: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cmd {
        Cmd::try_parse_from(std::iter::once("agrocalc").chain(args.iter().copied())).unwrap()
    }

    fn cassava() -> CropProfile {
        CropCatalog::builtin().find("cassava").unwrap().clone()
    }

    #[test]
    fn shape_flags_map_to_params() {
        let cmd = parse(&[
            "shape",
            "--kind",
            "trapezoidal",
            "--longer-base-m",
            "10",
            "--shorter-base-m",
            "6",
            "--height-m",
            "2",
        ]);
        let Action::Shape(args) = cmd.action else {
            panic!("expected shape");
        };
        let plot = shape(&args).unwrap();
        assert_eq!(plot.traces[0].x, vec![0.0, 10.0, 8.0, 2.0, 0.0]);
        assert_eq!(plot.summary["area"]["area_m2"], 16.0);
    }

    #[test]
    fn missing_measurement_is_calc_error() {
        let cmd = parse(&["shape", "--kind", "circular"]);
        let err = run(cmd).unwrap_err();
        assert!(err.downcast_ref::<CalcError>().unwrap().is_invalid_parameter());
    }

    #[test]
    fn shape_ignores_unreadable_catalog() {
        let cmd = parse(&[
            "--catalog",
            "/nonexistent/crops.json",
            "shape",
            "--kind",
            "circular",
            "--radius-m",
            "3",
        ]);
        run(cmd).unwrap();
        let cmd = parse(&["--catalog", "/nonexistent/crops.json", "report"]);
        run(cmd).unwrap();
    }

    #[test]
    fn crop_commands_report_unreadable_catalog() {
        let cmd = parse(&["--catalog", "/nonexistent/crops.json", "crops"]);
        let err = run(cmd).unwrap_err();
        assert!(err.downcast_ref::<CalcError>().is_none());
        assert!(format!("{err:#}").contains("reading crop catalog"));
    }

    #[test]
    fn unknown_crop_is_not_found() {
        let cmd = parse(&[
            "irrigation",
            "--crop",
            "Sorghum",
            "--length-m",
            "50",
            "--width-m",
            "10",
            "--volume-rate-per-m",
            "3",
        ]);
        let err = run(cmd).unwrap_err();
        assert!(matches!(err.downcast_ref::<CalcError>(), Some(CalcError::NotFound { .. })));
    }

    #[test]
    fn irrigation_traces_rows_then_field() {
        let plot = irrigation(FieldDimensions::new(50.0, 10.0), 2.0, 3.0, None).unwrap();
        assert_eq!(plot.traces.len(), 6);
        assert!(!plot.traces[0].closed);
        assert!(plot.traces[5].closed);
        assert_eq!(plot.summary["volumes"]["total_volume_m3"], 750.0);
    }

    #[test]
    fn fertilizer_uses_catalog_rate() {
        let plot = fertilizer(&cassava(), 2.0, Some(4), Some(50.0)).unwrap();
        assert_eq!(plot.summary["quantities_kg"]["total_kg"], 300.0);
        assert_eq!(plot.summary["kg_per_linear_meter"], 1.5);
    }

    #[test]
    fn fertilizer_over_field_derives_rows() {
        let cmd = parse(&[
            "fertilizer",
            "--crop",
            "Cassava",
            "--length-m",
            "100",
            "--width-m",
            "50",
        ]);
        let Action::Fertilizer {
            length_m: Some(length),
            width_m: Some(width),
            ..
        } = cmd.action
        else {
            panic!("expected fertilizer over a field");
        };
        let plot = fertilizer_field(&cassava(), FieldDimensions::new(length, width)).unwrap();
        assert_eq!(plot.summary["row_count"], 50);
        assert_eq!(plot.summary["quantities_kg"]["total_kg"], 75.0);
        assert_eq!(plot.summary["row_length_m"], 100.0);
    }

    #[test]
    fn fertilizer_flag_pairs_enforced() {
        fn with(extra: &[&str]) -> bool {
            let base = ["agrocalc", "fertilizer", "--crop", "Cassava"];
            Cmd::try_parse_from(base.iter().chain(extra).copied()).is_ok()
        }
        assert!(with(&["--area-hectare", "1"]));
        assert!(with(&["--area-hectare", "1", "--rows", "4", "--row-length-m", "10"]));
        assert!(!with(&["--area-hectare", "1", "--row-length-m", "10"]));
        assert!(!with(&["--area-hectare", "1", "--rows", "4"]));
        assert!(!with(&["--length-m", "10"]));
        assert!(!with(&["--area-hectare", "1", "--length-m", "10", "--width-m", "5"]));
        assert!(!with(&[]));
    }

    #[test]
    fn area_with_crop_counts_plants() {
        let cmd = parse(&[
            "area",
            "--kind",
            "rectangular",
            "--length-m",
            "100",
            "--width-m",
            "100",
            "--crop",
            "cowpea",
        ]);
        let Action::Area { shape, crop } = cmd.action else {
            panic!("expected area");
        };
        let catalog = CropCatalog::builtin();
        let profile = catalog.find(crop.as_deref().unwrap()).unwrap();
        let plot = field_area(&shape, Some(profile)).unwrap();
        assert_eq!(plot.summary["plants"], 50_000);
        assert_eq!(plot.summary["crop"], "Cowpea");
    }

    #[test]
    fn crop_and_spacing_conflict() {
        let res = Cmd::try_parse_from([
            "agrocalc",
            "irrigation",
            "--crop",
            "Cassava",
            "--row-spacing-m",
            "1",
            "--length-m",
            "5",
            "--width-m",
            "5",
            "--volume-rate-per-m",
            "1",
        ]);
        assert!(res.is_err());
    }
}
