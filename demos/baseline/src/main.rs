//! baseline — run one action sequence through the simulation cache and
//! report minority employment.
//!
//! ```text
//! baseline                                  # seed 1, actions [init]
//! baseline --seed 4 init discriminate-high  # custom sequence
//! baseline --json                           # full result as JSON on stdout
//! baseline --out ./output                   # also write CSV files
//! ```
//!
//! Set `RUST_LOG=debug` to watch cache hits and interventions.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use em_cache::{CacheConfig, SimulationCache};
use em_output::{CsvWriter, OutputWriter};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "baseline", about = "Employment outcomes for a sequence of policy actions")]
struct Args {
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Action identifiers, applied every `--steps-per-action` steps after warm-up.
    #[arg(default_value = "init")]
    actions: Vec<String>,
    #[arg(long, default_value_t = 100)]
    warmup: u64,
    #[arg(long, default_value_t = 10)]
    steps_per_action: u64,
    /// Print the whole aggregate result as JSON.
    #[arg(long)]
    json: bool,
    /// Directory for `series.csv` and `grid.csv`.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let mut cache = SimulationCache::new(CacheConfig {
        warmup_steps: args.warmup,
        steps_per_action: args.steps_per_action,
        ..CacheConfig::default()
    });

    let actions: Vec<&str> = args.actions.iter().map(String::as_str).collect();
    let t0 = Instant::now();
    let data = cache.run(args.seed, &actions)?;
    info!(
        seed = args.seed,
        ?actions,
        steps = cache.stats().steps_simulated,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "run complete"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&*data)?);
    } else {
        let black = data
            .series("employment_black")
            .context("no employment_black series")?;
        println!("employment_black ({} samples)", black.len());
        for (i, v) in black.iter().enumerate() {
            println!("{i:>4}  {v:6.2}");
        }
    }

    if let Some(dir) = args.out {
        std::fs::create_dir_all(&dir)?;
        let mut writer = CsvWriter::new(&dir)?;
        writer.write_aggregate(&data)?;
        writer.finish()?;
        info!(dir = %dir.display(), "wrote CSV output");
    }

    Ok(())
}
