use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use stroke2bez::{ErrorConfig, ErrorMode, FitStrategy};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stroke2bez", about = "Freehand stroke to compact quadratic path data")]
struct Cli {
    /// Input file of x, y coordinates (whitespace or comma separated).
    /// Reads stdin if omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Error test for point simplification: angle, distance or both
    #[arg(short, long, default_value = "angle")]
    mode: ErrorMode,

    /// Maximum distance error in input units
    #[arg(long, default_value_t = stroke2bez::DEFAULT_MAX_DISTANCE_ERROR)]
    max_distance: f64,

    /// Maximum angle error in degrees
    #[arg(long, default_value_t = stroke2bez::DEFAULT_MAX_ANGLE_ERROR)]
    max_angle: f64,

    /// Magnitudes at or below this are treated as zero
    #[arg(long, default_value_t = stroke2bez::DEFAULT_EPSILON)]
    epsilon: f64,

    /// Curve fitting strategy: sequential or adaptive
    #[arg(short, long, default_value = "sequential")]
    strategy: FitStrategy,

    /// Fit the raw points without simplifying first
    #[arg(long, conflicts_with = "polyline")]
    no_simplify: bool,

    /// Emit straight lines through the simplified points instead of curves
    #[arg(long)]
    polyline: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = ErrorConfig {
        mode: cli.mode,
        max_distance_error: cli.max_distance,
        max_angle_error: cli.max_angle,
        epsilon: cli.epsilon,
        strategy: cli.strategy,
    };
    config.validate()?;

    let text = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(stroke2bez::StrokeError::from)?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(stroke2bez::StrokeError::from)?;
            buf
        }
    };
    let points = stroke2bez::parse_points(&text)?;

    let (kept, path) = if cli.no_simplify {
        (points.len(), stroke2bez::fit::fit(&points, &config))
    } else if cli.polyline {
        let reduced = stroke2bez::simplify::simplify(&points, &config);
        (reduced.len(), stroke2bez::path_data::polyline(&reduced))
    } else {
        let result = stroke2bez::trace_stroke(&points, &config)?;
        (result.points.len(), result.path)
    };

    println!("{}", stroke2bez::to_path_data(&path));

    eprintln!(
        "  stroke2bez \u{00b7} {} points \u{2192} {} kept \u{2192} {} commands",
        points.len(),
        kept,
        path.elements().len(),
    );

    Ok(())
}
