use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scrollphase::{ChannelTable, MotionPreference, PhaseMapper, ThemeContext};

#[derive(Parser, Debug)]
#[command(name = "scrollphase", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and validate a channel table.
    Validate(ValidateArgs),
    /// Evaluate a channel table at one progress value.
    Eval(EvalArgs),
    /// Evaluate evenly spaced samples over [0, 1], one JSON line each.
    Sweep(SweepArgs),
    /// Print the theme classes for a color-scheme preference and hour.
    Theme(ThemeArgs),
    /// Print seeded decorative layout points as JSON.
    Points(PointsArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Channel table JSON.
    #[arg(long)]
    table: PathBuf,
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Channel table JSON (defaults to the built-in landing table).
    #[arg(long)]
    table: Option<PathBuf>,

    /// Scroll progress; values outside [0, 1] are clamped.
    #[arg(long, allow_hyphen_values = true)]
    progress: f64,

    /// Hold motion channels at rest.
    #[arg(long)]
    reduced_motion: bool,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Channel table JSON (defaults to the built-in landing table).
    #[arg(long)]
    table: Option<PathBuf>,

    /// Number of intervals; emits steps + 1 samples.
    #[arg(long, default_value_t = 10)]
    steps: u32,

    /// Hold motion channels at rest.
    #[arg(long)]
    reduced_motion: bool,
}

#[derive(Parser, Debug)]
struct ThemeArgs {
    /// Local hour (0-23). Defaults to the current wall clock.
    #[arg(long)]
    hour: Option<u32>,

    /// Prefer the light color scheme.
    #[arg(long)]
    light: bool,
}

#[derive(Parser, Debug)]
struct PointsArgs {
    /// Number of points.
    #[arg(long)]
    count: usize,

    /// Generator seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Width and height of the square the points are spread over.
    #[arg(long, default_value_t = 15.0)]
    extent: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Eval(args) => cmd_eval(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Theme(args) => cmd_theme(args),
        Command::Points(args) => cmd_points(args),
    }
}

fn read_table_json(path: &Path) -> anyhow::Result<ChannelTable> {
    let f = File::open(path).with_context(|| format!("open channel table '{}'", path.display()))?;
    let table = ChannelTable::from_reader(BufReader::new(f))
        .with_context(|| format!("load channel table '{}'", path.display()))?;
    Ok(table)
}

fn load_table(path: Option<&Path>) -> anyhow::Result<ChannelTable> {
    match path {
        Some(path) => read_table_json(path),
        None => scrollphase::presets::landing_table().context("load built-in landing table"),
    }
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let table = read_table_json(&args.table)?;
    println!(
        "ok: {} channels, {} sections, active threshold {}",
        table.len(),
        table.sections().len(),
        table.active_threshold()
    );
    Ok(())
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let mapper = PhaseMapper::new(load_table(args.table.as_deref())?);
    let motion = MotionPreference::from_reduced_flag(args.reduced_motion);
    let set = mapper.evaluate(args.progress, motion);
    println!("{}", serde_json::to_string_pretty(&set)?);
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let mapper = PhaseMapper::new(load_table(args.table.as_deref())?);
    let motion = MotionPreference::from_reduced_flag(args.reduced_motion);
    let sets = mapper.sweep(args.steps, motion)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for set in &sets {
        serde_json::to_writer(&mut out, set)?;
        writeln!(out)?;
    }
    Ok(())
}

fn cmd_theme(args: ThemeArgs) -> anyhow::Result<()> {
    let ctx = match args.hour {
        Some(hour) => ThemeContext::resolve(args.light, hour)?,
        None => ThemeContext::now(args.light),
    };
    println!("{}", ctx.css_classes().join(" "));
    Ok(())
}

fn cmd_points(args: PointsArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.extent.is_finite() && args.extent >= 0.0,
        "extent must be a non-negative number"
    );
    let points = scrollphase::produce_layout_points(args.count, args.seed, args.extent);
    println!("{}", serde_json::to_string(&points)?);
    Ok(())
}
