use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};
use serde::Serialize;

use kikuchi_sim::config::ExecutionConfig;
use kikuchi_sim::crystal::{OrientationBatch, ReflectorSet};
use kikuchi_sim::detector::DetectorGeometry;
use kikuchi_sim::interfaces::{Hemisphere, PlotMode, Projection, Scaling};
use kikuchi_sim::simulations::{RecordingCanvas, ReflectorTable};
use kikuchi_sim::KikuchiPatternSimulator;

#[derive(Parser)]
#[command(name = "kikuchi-sim")]
#[command(about = "Kinematical Kikuchi pattern geometry: master patterns and detector projections")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Master pattern rows evaluated per work chunk (default: half size)
    #[arg(long)]
    chunk_rows: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a kinematical master pattern in the stereographic projection
    MasterPattern {
        /// Reflector table (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Half size h of the (2h + 1) x (2h + 1) grid
        #[arg(long, default_value = "500")]
        half_size: usize,

        /// north, south or both
        #[arg(long, default_value = "north")]
        hemisphere: Hemisphere,

        /// linear, square or none
        #[arg(long, default_value = "linear")]
        scaling: Scaling,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Project Kikuchi lines and zone axes onto a detector
    Project {
        /// Reflector table (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Detector geometry (JSON); defaults to a 70° sample tilt
        #[arg(short, long)]
        detector: Option<PathBuf>,

        /// Bunge Euler angles "phi1,Phi,phi2" in degrees, repeat for several orientations
        #[arg(short, long, required = true)]
        euler: Vec<String>,

        /// Navigation grid "rows,columns"; a single orientation is tiled over it
        #[arg(short, long)]
        grid: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Draw reflectors as lines or bands and dump the polylines
    Plot {
        /// Reflector table (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// stereographic or spherical
        #[arg(long, default_value = "stereographic")]
        projection: Projection,

        /// lines or bands
        #[arg(long, default_value = "lines")]
        mode: PlotMode,

        /// north, south or both
        #[arg(long, default_value = "north")]
        hemisphere: Hemisphere,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Summarize a reflector table
    Records {
        /// Reflector table (JSON)
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!("Thread count {} specified but parallel feature not enabled. Ignoring.", threads);
        }
    }

    info!("Starting kikuchi-sim v{}", kikuchi_sim::VERSION);

    let config = ExecutionConfig {
        chunk_rows: cli.chunk_rows,
    };

    match cli.command {
        Commands::MasterPattern {
            input,
            half_size,
            hemisphere,
            scaling,
            output,
        } => {
            let simulator = load_simulator(&input)?.with_config(config);
            info!(
                "Computing {} master pattern of half size {} with {} scaling",
                hemisphere, half_size, scaling
            );
            let pattern = simulator.calculate_master_pattern(half_size, hemisphere, scaling)?;
            info!("Maximum intensity {:.4}", pattern.max_intensity());
            write_json(&pattern, output.as_deref())
        }
        Commands::Project {
            input,
            detector,
            euler,
            grid,
            output,
        } => {
            let simulator = load_simulator(&input)?;
            let detector = match detector {
                Some(path) => read_json::<DetectorGeometry>(&path)?,
                None => DetectorGeometry::default(),
            };
            let orientations = orientations(&euler, grid.as_deref())?;
            info!(
                "Projecting {} reflectors for {} orientation(s)",
                simulator.reflectors().len(),
                orientations.len()
            );
            let geometry = simulator.on_detector(&detector, &orientations);
            info!(
                "{} Kikuchi lines and {} zone axes visible",
                geometry.lines.len(),
                geometry.zone_axes.len()
            );
            write_json(&geometry, output.as_deref())
        }
        Commands::Plot {
            input,
            projection,
            mode,
            hemisphere,
            output,
        } => {
            let simulator = load_simulator(&input)?;
            let mut canvas = RecordingCanvas::new();
            simulator.plot(projection, mode, hemisphere, &mut canvas)?;
            info!("Drew {} polylines", canvas.len());
            write_json(&canvas, output.as_deref())
        }
        Commands::Records { input } => {
            let simulator = load_simulator(&input)?;
            let reflectors = simulator.reflectors();
            println!("{}", simulator);
            println!(
                "structure factors: {}, Bragg angles: {}",
                reflectors.has_structure_factors(),
                reflectors.has_bragg_angles()
            );
            Ok(())
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn load_simulator(path: &Path) -> Result<KikuchiPatternSimulator> {
    let table: ReflectorTable = read_json(path)?;
    let reflectors: ReflectorSet = table
        .into_set()
        .with_context(|| format!("Invalid reflector table {}", path.display()))?;
    if reflectors.is_empty() {
        warn!("{} contains no reflectors", path.display());
    }
    Ok(KikuchiPatternSimulator::new(reflectors))
}

fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string(value).context("Failed to serialize result")?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn parse_list<T: std::str::FromStr>(text: &str, expected: usize, what: &str) -> Result<Vec<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let values = text
        .split(',')
        .map(|part| part.trim().parse::<T>())
        .collect::<std::result::Result<Vec<T>, _>>()
        .with_context(|| format!("Invalid {} '{}'", what, text))?;
    if values.len() != expected {
        bail!("Expected {} comma separated values for {}, got '{}'", expected, what, text);
    }
    Ok(values)
}

fn orientations(euler: &[String], grid: Option<&str>) -> Result<OrientationBatch> {
    let angles = euler
        .iter()
        .map(|text| -> Result<[f64; 3]> {
            let v = parse_list::<f64>(text, 3, "Euler angles")?;
            Ok([v[0], v[1], v[2]])
        })
        .collect::<Result<Vec<[f64; 3]>>>()?;

    let batch = match grid {
        Some(text) => {
            let shape = parse_list::<usize>(text, 2, "grid")?;
            if let [[phi1, big_phi, phi2]] = angles.as_slice() {
                let matrix = OrientationBatch::euler_bunge_matrix(*phi1, *big_phi, *phi2);
                OrientationBatch::repeat(matrix, &shape)?
            } else {
                OrientationBatch::from_euler_bunge(&shape, &angles)?
            }
        }
        None if angles.len() == 1 => {
            let [phi1, big_phi, phi2] = angles[0];
            OrientationBatch::single(OrientationBatch::euler_bunge_matrix(phi1, big_phi, phi2))
        }
        None => OrientationBatch::from_euler_bunge(&[angles.len()], &angles)?,
    };
    Ok(batch)
}
