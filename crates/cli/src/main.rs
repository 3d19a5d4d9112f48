//! agroheat CLI - heat maps from sparse agronomic sensor readings

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use agroheat_algorithms::interpolation::{filter_valid, heatmap, latest_per_device, resolve};
use agroheat_algorithms::statistics::{metric_summary, salinity_breakdown, view_extent};
use agroheat_core::io::{read_records, write_samples, write_samples_to_string};
use agroheat_core::{InterpolationConfig, Metric, Observation, Tier};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "agroheat")]
#[command(author, version, about = "Heat maps from sparse agronomic sensor readings", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Interpolation settings shared by `heatmap` and `params`.
#[derive(clap::Args)]
struct ConfigArgs {
    /// Metric: temperature, airHumidity, light, soilMoisture, salinity, battery
    #[arg(short, long, default_value = "temperature")]
    metric: Metric,
    /// Grid resolution tier: low, medium, high
    #[arg(short, long)]
    resolution: Option<Tier>,
    /// Intensity tier (decay sharpness): low, medium, high
    #[arg(short, long)]
    intensity: Option<Tier>,
    /// Disable exponential distance damping
    #[arg(long)]
    no_smoothing: bool,
    /// JSON interpolation config; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpolate sensor readings into heat-map samples
    Heatmap {
        /// Sensor records (JSON array or {"data": [...]})
        input: PathBuf,
        /// Output file for [lat, lng, value] triples (stdout if omitted)
        output: Option<PathBuf>,
        #[command(flatten)]
        config: ConfigArgs,
        /// Keep only the most recent reading of each device
        #[arg(long)]
        latest_only: bool,
    },
    /// Show the parameters resolved for a given observation count
    Params {
        /// Number of valid observations
        count: usize,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Per-metric statistics of a sensor file
    Summary {
        /// Sensor records (JSON array or {"data": [...]})
        input: PathBuf,
        /// Keep only the most recent reading of each device
        #[arg(long)]
        latest_only: bool,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")?;
    Ok(())
}

fn spinner(msg: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Invalid spinner template")?,
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Ok(pb)
}

fn read_observations(path: &Path, latest_only: bool) -> Result<Vec<Observation>> {
    let pb = spinner("Reading sensor records...")?;
    let records = read_records(path)
        .with_context(|| format!("Failed to read sensor records from {}", path.display()))?;
    pb.finish_and_clear();

    let mut observations = filter_valid(&records);
    info!(
        "Input: {} records, {} with valid coordinates",
        records.len(),
        observations.len()
    );

    if latest_only {
        observations = latest_per_device(&observations);
        info!("Latest reading per device: {} observations", observations.len());
    }
    Ok(observations)
}

impl ConfigArgs {
    /// Defaults, then the config file, then explicit flags.
    fn resolve(&self) -> Result<InterpolationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Invalid config {}", path.display()))?
            }
            None => InterpolationConfig::default(),
        };

        if let Some(resolution) = self.resolution {
            config.resolution = resolution;
        }
        if let Some(intensity) = self.intensity {
            config.intensity = intensity;
        }
        if self.no_smoothing {
            config.smoothing = false;
        }
        debug!(?config, "interpolation config");
        Ok(config)
    }
}

fn done(what: &str, output: Option<&PathBuf>, elapsed: std::time::Duration) {
    match output {
        Some(path) => eprintln!("{} saved to: {}", what, path.display()),
        None => eprintln!("{} written to stdout", what),
    }
    eprintln!("  Processing time: {:.2?}", elapsed);
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        // ── Heatmap ──────────────────────────────────────────────────
        Commands::Heatmap {
            input,
            output,
            config,
            latest_only,
        } => {
            let metric = config.metric;
            let interpolation = config.resolve()?;
            let observations = read_observations(&input, latest_only)?;

            let pb = spinner(&format!("Interpolating {}...", metric))?;
            let start = Instant::now();
            let result = heatmap(&observations, metric, &interpolation)
                .context("Heat-map interpolation failed")?;
            let elapsed = start.elapsed();
            pb.finish_and_clear();

            info!(
                "Grid {}x{}, exponent {:.1}, influence radius {:.4}°",
                result.params.grid_size,
                result.params.grid_size,
                result.params.decay_exponent,
                result.influence_radius
            );
            info!(
                "Samples: {} grid + {} reinforcement{}",
                result.grid().len(),
                result.reinforcement().len(),
                if result.passthrough { " (single-point passthrough)" } else { "" }
            );

            match &output {
                Some(path) => write_samples(&result.samples, path)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => println!("{}", write_samples_to_string(&result.samples)?),
            }
            done("Heat map", output.as_ref(), elapsed);
        }

        // ── Params ───────────────────────────────────────────────────
        Commands::Params { count, config } => {
            let metric = config.metric;
            let interpolation = config.resolve()?;
            let params = resolve(&interpolation, metric, count)?;
            let side = params.grid_size + 1;

            println!("Metric: {} ({})", metric, metric.spec().unit);
            println!(
                "Config: resolution {}, intensity {}, smoothing {}",
                interpolation.resolution.as_str(),
                interpolation.intensity.as_str(),
                if interpolation.smoothing { "on" } else { "off" }
            );
            println!("Density band: {:?} ({} observations)", params.density, count);
            println!("Grid size: {} ({} nodes)", params.grid_size, side * side);
            println!("Decay exponent: {}", params.decay_exponent);
        }

        // ── Summary ──────────────────────────────────────────────────
        Commands::Summary { input, latest_only } => {
            let observations = read_observations(&input, latest_only)?;

            println!("File: {}", input.display());
            println!("Observations: {}", observations.len());

            for &metric in Metric::ALL {
                let unit = metric.spec().unit;
                match metric_summary(&observations, metric) {
                    Some(s) => println!(
                        "  {:<13} n={:<4} min={:.2} max={:.2} mean={:.2} std={:.2} {}",
                        metric.name(),
                        s.measured,
                        s.min,
                        s.max,
                        s.mean,
                        s.std_dev,
                        unit
                    ),
                    None => println!("  {:<13} no readings", metric.name()),
                }
            }

            println!("Salinity classes (dS/m):");
            for (class, count) in salinity_breakdown(&observations) {
                println!("  {:<18} {}", class.label(), count);
            }

            if let Some(view) = view_extent(&observations) {
                println!(
                    "View extent: ({:.6}, {:.6}) - ({:.6}, {:.6})",
                    view.min_lat, view.min_lng, view.max_lat, view.max_lng
                );
            }
        }
    }

    Ok(())
}
