use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use mosaic_core::geometry::AspectRatio;
use mosaic_core::selector::parse_or_default;
use mosaic_export::{ExportSink, Exporter};
use mosaic_layout::LayoutMode;
use mosaic_runtime::{InteractionMode, PointerKind, RenderSink, Selections, Studio, VisualState};
use mosaic_style::{PaletteName, Theme, Tool};

use crate::error::{CliError, Result};
use crate::preview::TextSink;

#[derive(Debug, Parser)]
#[command(
    name = "mosaic",
    about = "Generate, animate, and export proportional grid art",
    version
)]
pub struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a grid and write SVG, PNG, or JSON snapshots.
    Render(RenderArgs),

    /// Print a character preview of a generated grid.
    Preview(PreviewArgs),

    /// List built-in palettes.
    Palettes,
}

/// Selections and session script shared by every command that builds a
/// grid. Unknown names fall back to defaults.
#[derive(Debug, Clone, Args)]
pub struct SessionArgs {
    /// Layout mode: chaos, chess, mondrian, cubism, concentric, glyph.
    #[arg(long, default_value = "chaos")]
    pub mode: String,

    /// Palette: modern, vivid, bauhaus, cubist.
    #[arg(long, default_value = "modern")]
    pub palette: String,

    /// Restyle tool: chaos, solid, gradient, shape, pattern, glyph.
    #[arg(long, default_value = "chaos")]
    pub tool: String,

    /// Pointer interaction: click or hover.
    #[arg(long, default_value = "click")]
    pub interaction: String,

    /// Random seed; a fresh one is drawn when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Primary action on the region covering ROW,COL (repeatable).
    #[arg(long = "click", value_name = "ROW,COL", value_parser = parse_cell)]
    pub clicks: Vec<(usize, usize)>,

    /// Pointer enters the region covering ROW,COL after the clicks.
    #[arg(long, value_name = "ROW,COL", value_parser = parse_cell)]
    pub hover: Option<(usize, usize)>,

    /// Animation frames to run before output. When omitted, frames run
    /// until the tracks settle on their layout weights.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Simulated frame duration in milliseconds.
    #[arg(long, default_value_t = 16)]
    pub frame_ms: u64,

    /// Run the grid-reshape timer during the frames.
    #[arg(long)]
    pub grid_anim: bool,

    /// Run the cell-reroll timer during the frames.
    #[arg(long)]
    pub shape_anim: bool,
}

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Aspect ratio: 1:1, 16:9, 4:5.
    #[arg(long, default_value = "1:1")]
    pub ratio: String,

    /// Export theme: light or dark.
    #[arg(long, default_value = "light")]
    pub theme: String,

    /// Canvas width in output units.
    #[arg(long, default_value_t = 800.0)]
    pub width: f64,

    /// Raster pixels per output unit.
    #[arg(long, default_value_t = 2.0)]
    pub scale: f64,

    /// Write an SVG document here.
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// Write a PNG image here.
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// Write a JSON snapshot here.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Preview width in characters.
    #[arg(long, default_value_t = 48)]
    pub columns: usize,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    crate::logging::init(cli.log_json);
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render(args) => run_render(&args),
        Commands::Preview(args) => {
            print!("{}", run_preview(&args)?);
            Ok(())
        }
        Commands::Palettes => {
            print!("{}", palette_listing());
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

fn parse_cell(s: &str) -> std::result::Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<usize>()
            .map_err(|e| format!("{v:?}: {e}"))
    };
    Ok((parse(row)?, parse(col)?))
}

/// Frame budget for settling when `--frames` is omitted.
const SETTLE_FRAMES: u32 = 2_000;

/// Build a studio, apply the scripted interactions, and run the frames.
fn run_session<R: RenderSink>(sink: R, args: &SessionArgs) -> Result<Studio<R>> {
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, mode = %args.mode, "starting session");

    let mut studio = Studio::with_seed(sink, seed);
    studio.configure(Selections {
        mode: LayoutMode::from_name_or_default(&args.mode),
        palette: PaletteName::from_name_or_default(&args.palette),
        tool: Tool::from_name_or_default(&args.tool),
        interaction: InteractionMode::from_name_or_default(&args.interaction),
        ..Selections::default()
    });
    studio.start();

    for &(row, col) in &args.clicks {
        point(&mut studio, row, col, PointerKind::Primary)?;
    }
    if let Some((row, col)) = args.hover {
        point(&mut studio, row, col, PointerKind::Enter)?;
    }

    studio.set_grid_animation(args.grid_anim);
    studio.set_shape_animation(args.shape_anim);
    let dt = Duration::from_millis(args.frame_ms);
    match args.frames {
        Some(frames) => {
            for _ in 0..frames {
                studio.advance(dt);
            }
        }
        None => {
            let frames = studio.settle(dt, SETTLE_FRAMES);
            tracing::debug!(frames, "tracks settled");
        }
    }
    Ok(studio)
}

fn point<R: RenderSink>(studio: &mut Studio<R>, row: usize, col: usize, kind: PointerKind) -> Result<()> {
    let id = studio
        .store()
        .iter()
        .find(|(_, r)| r.region.contains(row, col))
        .map(|(id, _)| id)
        .ok_or_else(|| CliError::CellOutOfRange {
            row,
            col,
            grid: studio.grid().to_string(),
        })?;
    studio.pointer(id, kind);
    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

pub fn run_render(args: &RenderArgs) -> Result<()> {
    let mut studio = run_session(mosaic_runtime::RecordingSink::new(), &args.session)?;
    studio.set_ratio(parse_or_default::<AspectRatio>(&args.ratio));
    studio.set_theme(parse_or_default::<Theme>(&args.theme));
    let state = studio.snapshot();
    let exporter = Exporter::new(args.width).with_scale(args.scale);

    if args.svg.is_none() && args.png.is_none() && args.json.is_none() {
        print!("{}", exporter.vectorize(&state)?);
        return Ok(());
    }
    if let Some(path) = &args.svg {
        write_file(path, exporter.vectorize(&state)?.as_bytes())?;
    }
    if let Some(path) = &args.png {
        write_file(path, &exporter.rasterize(&state)?)?;
    }
    if let Some(path) = &args.json {
        write_file(path, snapshot_json(&state)?.as_bytes())?;
    }
    Ok(())
}

pub fn run_preview(args: &PreviewArgs) -> Result<String> {
    if args.columns == 0 {
        return Err(CliError::invalid("--columns must be at least 1"));
    }
    let studio = run_session(TextSink::new(), &args.session)?;
    Ok(studio.sink().render(args.columns))
}

fn snapshot_json(state: &VisualState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}

pub fn palette_listing() -> String {
    let mut out = String::new();
    for name in PaletteName::ALL {
        let palette = name.palette();
        out.push_str(name.as_str());
        out.push('\n');
        let solids: Vec<String> = palette.solids.iter().map(ToString::to_string).collect();
        out.push_str("  solids:    ");
        out.push_str(&solids.join(" "));
        out.push('\n');
        for gradient in palette.gradients {
            out.push_str("  gradient:  ");
            out.push_str(gradient.id);
            out.push_str("  ");
            out.push_str(&gradient.css());
            out.push('\n');
        }
    }
    out
}
