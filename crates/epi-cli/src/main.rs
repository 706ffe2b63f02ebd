use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use epi_core::{AnimationConfig, Epicycles, decompose, shapes};
use epi_render::{SvgStyle, write_frames, write_jsonl};

#[derive(Parser)]
#[command(name = "epi", about = "Fourier epicycle decomposition of closed 2D paths")]
struct Cli {
    /// Load animation parameters from a TOML file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ordered mode table for a path
    Spectrum {
        #[command(flatten)]
        path: PathArgs,

        #[command(flatten)]
        overrides: ConfigOverrides,
    },

    /// Export per-frame geometry as JSON Lines
    Frames {
        #[command(flatten)]
        path: PathArgs,

        #[command(flatten)]
        overrides: ConfigOverrides,

        /// Output file (one JSON frame per line)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Write the animation as a numbered SVG frame sequence
    Render {
        #[command(flatten)]
        path: PathArgs,

        #[command(flatten)]
        overrides: ConfigOverrides,

        /// Output directory for frame_NNNNN.svg files
        #[arg(short, long)]
        out_dir: PathBuf,
    },
}

/// Where the input path comes from.
#[derive(Args)]
struct PathArgs {
    /// Built-in demo path
    #[arg(long, value_enum, default_value = "heart")]
    shape: Shape,

    /// JSON file with [[x, y], ...] points, overriding --shape
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shape {
    Heart,
    Square,
    Circle,
}

/// Flag-level overrides applied on top of defaults or --config.
#[derive(Args)]
struct ConfigOverrides {
    /// Playback frame rate
    #[arg(long)]
    fps: Option<u32>,

    /// Frames per period (also the DFT length)
    #[arg(long)]
    frames_per_cycle: Option<usize>,

    /// Number of periods to animate
    #[arg(long)]
    periods: Option<usize>,

    /// Number of modes to animate (default: all)
    #[arg(long)]
    modes: Option<usize>,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Spectrum { path, overrides } => cmd_spectrum(&cli, path, overrides),
        Commands::Frames {
            path,
            overrides,
            output,
        } => cmd_frames(&cli, path, overrides, output),
        Commands::Render {
            path,
            overrides,
            out_dir,
        } => cmd_render(&cli, path, overrides, out_dir),
    }
}

fn load_config(cli: &Cli, overrides: &ConfigOverrides) -> Result<AnimationConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("failed to parse config file {}", path.display()))?
        }
        None => AnimationConfig::default(),
    };

    if let Some(fps) = overrides.fps {
        config.fps = fps;
    }
    if let Some(fpc) = overrides.frames_per_cycle {
        config.frames_per_cycle = fpc;
    }
    if let Some(periods) = overrides.periods {
        config.periods = periods;
    }
    if let Some(modes) = overrides.modes {
        config.modes = Some(modes);
    }

    config.validate()?;
    Ok(config)
}

fn load_path(args: &PathArgs) -> Result<(Vec<f64>, Vec<f64>)> {
    if let Some(input) = &args.input {
        let text = fs::read_to_string(input)
            .with_context(|| format!("failed to read path file {}", input.display()))?;
        let points: Vec<[f64; 2]> = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse points in {}", input.display()))?;
        if points.len() < 2 {
            bail!("path file {} has fewer than 2 points", input.display());
        }
        return Ok(points.iter().map(|p| (p[0], p[1])).unzip());
    }

    Ok(match args.shape {
        Shape::Heart => shapes::heart(100),
        Shape::Square => shapes::square(10.0),
        Shape::Circle => shapes::circle(10.0, 100),
    })
}

fn run_pipeline(cli: &Cli, path: &PathArgs, overrides: &ConfigOverrides) -> Result<Epicycles> {
    let config = load_config(cli, overrides)?;
    let (x, y) = load_path(path)?;
    let result = decompose(&x, &y, &config).context("decomposition failed")?;
    for warning in &result.warnings {
        tracing::warn!("{warning}");
    }
    Ok(result)
}

fn cmd_spectrum(cli: &Cli, path: &PathArgs, overrides: &ConfigOverrides) -> Result<()> {
    let result = run_pipeline(cli, path, overrides)?;

    println!("{:>8}  {:>8}  {:>14}  {:>10}", "position", "mode", "radius", "phase");
    for (m, coefficient) in result.modes.coefficients.iter().enumerate() {
        println!(
            "{:>8}  {:>8}  {:>14.6e}  {:>10.4}",
            m,
            result.modes.original_indices[m],
            result.modes.radii[m],
            coefficient.arg(),
        );
    }
    println!(
        "\n{} modes kept of {} coefficients, {} frames over {} periods ({:.2}s)",
        result.modes.len(),
        result.coefficients.len(),
        result.timeline.frame_count(),
        result.timeline.periods(),
        result.timeline.duration_seconds(),
    );
    Ok(())
}

fn cmd_frames(
    cli: &Cli,
    path: &PathArgs,
    overrides: &ConfigOverrides,
    output: &Path,
) -> Result<()> {
    let result = run_pipeline(cli, path, overrides)?;

    let file = fs::File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let written = write_jsonl(BufWriter::new(file), &result.series)
        .context("failed to serialize frames")?;

    println!("wrote {written} frames to {}", output.display());
    Ok(())
}

fn cmd_render(
    cli: &Cli,
    path: &PathArgs,
    overrides: &ConfigOverrides,
    out_dir: &Path,
) -> Result<()> {
    let result = run_pipeline(cli, path, overrides)?;

    let written = write_frames(out_dir, &result.series, &SvgStyle::default())
        .context("failed to render SVG frames")?;

    println!(
        "wrote {written} SVG frames to {} ({:.1} ms/frame for playback)",
        out_dir.display(),
        result.timeline.frame_interval_ms(),
    );
    Ok(())
}
