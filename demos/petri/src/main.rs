//! petri — headless run of the slime-mold trail simulation.
//!
//! Loads a scenario file (a `[simulation]` table plus an optional `[run]`
//! table), runs it, and writes into the output directory:
//!
//! - `agent_snapshots.csv`, `tick_summaries.csv`
//! - `frames/frame_NNNNNN.ppm` every `output_interval_ticks` ticks
//!
//! ```text
//! RUST_LOG=info cargo run -p petri --release -- --config demos/petri/petri.toml
//! ```

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use sm_core::ScenarioFile;
use sm_output::{CsvWriter, FrameObserver, FrameStyle, SimOutputObserver};
use sm_sim::{SimBuilder, SimObserver, TickStats};

#[derive(Parser)]
#[command(name = "petri")]
#[command(version, about = "Headless slime-mold trail simulation", long_about = None)]
struct Cli {
    /// Scenario TOML file (built-in defaults if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of ticks to run
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Override the RNG seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override the snapshot interval in ticks (0 disables snapshots)
    #[arg(long)]
    every: Option<u64>,

    /// Output directory
    #[arg(short, long, default_value = "output/petri")]
    out: PathBuf,

    /// Trail density drawn at full brightness
    #[arg(long, default_value_t = 5.0)]
    trail_scale: f32,

    /// Don't write PPM frames
    #[arg(long)]
    no_frames: bool,

    /// Stop cleanly after this many wall-clock seconds
    #[arg(long)]
    max_seconds: Option<f64>,
}

// ── Progress reporting ────────────────────────────────────────────────────────

struct Progress {
    every:   u64,
    summary: usize,
    last:    Option<TickStats>,
}

impl Progress {
    fn new(total_ticks: u64) -> Self {
        Self { every: (total_ticks / 10).max(1), summary: 0, last: None }
    }
}

impl SimObserver for Progress {
    fn on_tick_end(&mut self, stats: &TickStats) {
        self.summary += 1;
        if stats.tick.0 % self.every == 0 {
            info!(
                tick          = stats.tick.0,
                total_density = stats.total_density,
                max_density   = stats.max_density,
                "progress"
            );
        }
        self.last = Some(*stats);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // 1. Scenario.
    let ScenarioFile { simulation, mut run } = match &cli.config {
        Some(path) => ScenarioFile::load(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => ScenarioFile { simulation: Default::default(), run: Default::default() },
    };
    if let Some(ticks) = cli.ticks {
        run.total_ticks = ticks;
    }
    if let Some(seed) = cli.seed {
        run.seed = seed;
    }
    if let Some(every) = cli.every {
        run.output_interval_ticks = every;
    }
    run.validate()?;

    if let Some(n) = run.num_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .context("configuring the Rayon thread pool")?;
    }

    println!("=== petri — slime-mold trail simulation ===");
    println!(
        "Grid: {}×{}  |  Agents: {}  |  Ticks: {}  |  dt: {}  |  Seed: {}",
        simulation.width, simulation.height, simulation.agent_count, run.total_ticks, run.dt, run.seed
    );
    println!();

    // 2. Build sim.
    let mut sim = SimBuilder::new(simulation, run.seed).build()?;

    if let Some(secs) = cli.max_seconds {
        let budget = Duration::try_from_secs_f64(secs).context("--max-seconds")?;
        let handle = sim.stop_handle();
        thread::spawn(move || {
            thread::sleep(budget);
            handle.request_stop();
        });
    }

    // 3. Output.
    std::fs::create_dir_all(&cli.out)
        .with_context(|| format!("creating {}", cli.out.display()))?;
    let mut csv = SimOutputObserver::new(CsvWriter::new(&cli.out)?);
    let mut progress = Progress::new(run.total_ticks);
    let mut frames = if cli.no_frames {
        None
    } else {
        let dir = cli.out.join("frames");
        std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
        let style = FrameStyle { trail_scale: cli.trail_scale, ..FrameStyle::default() };
        Some(FrameObserver::new(dir, style))
    };

    // 4. Run.
    let t0 = Instant::now();
    let outcome = match frames.as_mut() {
        Some(frames) => sim.run(&run, &mut ((&mut csv, &mut progress), frames))?,
        None => sim.run(&run, &mut (&mut csv, &mut progress))?,
    };
    let elapsed = t0.elapsed();

    if let Some(e) = csv.take_error() {
        return Err(e).context("writing CSV output");
    }
    if let Some(e) = frames.as_mut().and_then(FrameObserver::take_error) {
        return Err(e).context("writing frames");
    }

    // 5. Summary.
    println!(
        "Simulation {} after {} ticks in {:.3} s",
        if outcome.stopped { "stopped" } else { "complete" },
        outcome.ticks_run,
        elapsed.as_secs_f64()
    );
    println!("  tick_summaries.csv  : {} rows", progress.summary);
    if let Some(frames) = &frames {
        println!("  frames              : {}", frames.frames_written());
    }
    if let Some(last) = progress.last {
        println!(
            "  final field         : total {:.3}, peak {:.3}",
            last.total_density, last.max_density
        );
    }

    sim.shutdown();
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
