use anyhow::{Context, Result};
use chartdef::render::plotly::to_plotly;
use chartdef::render::{PlottersRenderer, Renderer};
use chartdef::{ChartConfigBuilder, ChartDefinition, Mode, demo, storage};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "chartdef",
    version,
    about = "Validate, export & render declarative chart definitions"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a definition and check every invariant.
    Validate {
        /// Definition file (JSON).
        input: PathBuf,
    },
    /// Print (or save) the Plotly data/layout/config JSON for a definition.
    Export(ExportArgs),
    /// Draw a definition to an SVG or PNG file.
    Render(RenderArgs),
    /// Build a one-series definition from CSV (header: x,y[,size][,color][,text]).
    FromCsv(FromCsvArgs),
    /// Emit one of the built-in reference charts.
    Demo(DemoArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Markers,
    Bar,
    Line,
}

impl From<ModeArg> for Mode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Markers => Mode::Markers,
            ModeArg::Bar => Mode::Bar,
            ModeArg::Line => Mode::Line,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DemoKind {
    Bubble,
    Bar,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Definition file (JSON).
    input: PathBuf,
    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Definition file (JSON).
    input: PathBuf,
    /// Output image (.svg or .png).
    #[arg(long)]
    out: PathBuf,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
}

#[derive(Args, Debug)]
struct FromCsvArgs {
    /// CSV file with the series data.
    input: PathBuf,
    /// How the series is drawn.
    #[arg(long, value_enum, default_value_t = ModeArg::Markers)]
    mode: ModeArg,
    /// Series name (legend label).
    #[arg(long)]
    name: Option<String>,
    /// Chart title.
    #[arg(long)]
    title: Option<String>,
    /// Hide the legend.
    #[arg(long, default_value_t = false)]
    no_legend: bool,
    /// Keep only the first and last `text` label.
    #[arg(long, default_value_t = false)]
    endpoint_labels: bool,
    /// Save the definition here instead of printing it.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DemoArgs {
    #[arg(value_enum)]
    kind: DemoKind,
    /// Save the definition (JSON) here instead of printing it.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Also draw the chart to this file (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate { input } => cmd_validate(input),
        Command::Export(args) => cmd_export(args),
        Command::Render(args) => cmd_render(args),
        Command::FromCsv(args) => cmd_from_csv(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

fn load(input: &Path) -> Result<ChartDefinition> {
    storage::load_json(input).with_context(|| format!("loading {}", input.display()))
}

fn emit_definition(chart: &ChartDefinition, out: Option<&PathBuf>) -> Result<()> {
    match out {
        Some(path) => {
            storage::save_json(chart, path)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Saved definition to {}", path.display());
        }
        None => println!("{}", chart.to_json_pretty()?),
    }
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let chart = load(&input)?;
    let modes: Vec<&str> = chart.series().iter().map(|s| s.mode().as_str()).collect();
    println!(
        "ok: {} series ({}), {} points",
        chart.series().len(),
        modes.join(", "),
        chart.point_count()
    );
    Ok(())
}

fn cmd_export(args: ExportArgs) -> Result<()> {
    let chart = load(&args.input)?;
    match args.out.as_ref() {
        Some(path) => {
            storage::save_plotly_json(&chart, path)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote Plotly JSON to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&to_plotly(&chart))?),
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let chart = load(&args.input)?;
    let path = PlottersRenderer::new(&args.out)
        .size(args.width, args.height)
        .render(chart)
        .with_context(|| format!("rendering {}", args.out.display()))?;
    eprintln!("Wrote plot to {}", path.display());
    Ok(())
}

fn cmd_from_csv(args: FromCsvArgs) -> Result<()> {
    let mut series =
        storage::load_series_csv(&args.input, args.mode.into(), args.name.as_deref())
            .with_context(|| format!("reading {}", args.input.display()))?;
    if args.endpoint_labels {
        series = series.with_endpoint_labels();
    }
    let mut builder = ChartConfigBuilder::new();
    builder.add(series)?;
    builder.set_layout(args.title.as_deref(), Some(!args.no_legend), None)?;
    emit_definition(&builder.build()?, args.out.as_ref())
}

fn cmd_demo(args: DemoArgs) -> Result<()> {
    let chart = match args.kind {
        DemoKind::Bubble => demo::bubble_chart()?,
        DemoKind::Bar => demo::bar_chart()?,
    };
    emit_definition(&chart, args.out.as_ref())?;
    if let Some(plot_path) = args.plot.as_ref() {
        PlottersRenderer::new(plot_path).render(chart)?;
        eprintln!("Wrote plot to {}", plot_path.display());
    }
    Ok(())
}
