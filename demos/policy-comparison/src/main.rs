//! policy-comparison — runs one configuration under all five intervention
//! policies and prints the outbreak each one produces.
//!
//! Usage: `policy-comparison [CONFIG.json]`.  Without an argument the
//! built-in 50×50 scenario below is used.  Log level comes from `RUST_LOG`
//! (`error` … `trace`, default `info`).  CSV output for each policy lands in
//! `output/policy-comparison/<policy>/`.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::Config;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;

use epi_core::{EpiConfig, InterventionPolicy, StateCounts};
use epi_output::{CsvWriter, SimOutputObserver};
use epi_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:  &str = "output/policy-comparison";
const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

// 90 days at four ticks per day.
const DEFAULT_CONFIG: &str = r#"{
    "width": 50, "height": 50, "density": 0.8,
    "transmission_rate": 0.3, "latency_period": 8,
    "infection_duration": 40, "recovery_rate": 0.95,
    "num_districts": 5, "initial_infected": 20,
    "total_ticks": 360, "seed": 42
}"#;

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_logging() -> Result<()> {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| LevelFilter::from_str(&s).ok())
        .unwrap_or(LevelFilter::Info);

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .context("building log configuration")?;
    log4rs::init_config(config).context("installing logger")?;
    Ok(())
}

// ── Per-policy run ────────────────────────────────────────────────────────────

struct Summary {
    policy:        InterventionPolicy,
    peak_infected: usize,
    peak_day:      u64,
    final_counts:  StateCounts,
    policy_events: usize,
}

fn run_policy(base: &EpiConfig, policy: InterventionPolicy, out: &Path) -> Result<Summary> {
    let mut config = base.clone();
    config.policy = policy;

    let mut sim = SimBuilder::new(config)
        .build()
        .with_context(|| format!("building {policy} run"))?;

    let dir = out.join(policy.as_str());
    let mut obs = SimOutputObserver::new(CsvWriter::new(&dir)?);
    sim.run(&mut obs);
    if let Some(e) = obs.take_error() {
        log::error!("{policy}: output error: {e}");
    }

    let peak = sim.metrics().peak_infected();
    Ok(Summary {
        policy,
        peak_infected: peak.map_or(0, |p| p.counts.infected),
        peak_day:      peak.map_or(0, |p| p.tick.0 / 4),
        final_counts:  sim.final_counts(),
        policy_events: sim.policy_log().len(),
    })
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging()?;

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => EpiConfig::from_json_file(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EpiConfig::from_json_str(DEFAULT_CONFIG)?,
    };
    config.validate()?;

    println!("=== policy-comparison ===");
    println!(
        "Grid: {}x{}  |  Agents: {}  |  Districts: {}  |  Ticks: {}  |  Seed: {}",
        config.width,
        config.height,
        config.agent_count(),
        config.num_districts,
        config.total_ticks,
        config.seed
    );
    println!();

    let out = Path::new(OUTPUT_DIR);
    let t0 = Instant::now();
    let mut summaries = Vec::with_capacity(InterventionPolicy::ALL.len());
    for policy in InterventionPolicy::ALL {
        summaries.push(run_policy(&config, policy, out)?);
    }

    println!(
        "{:<22} {:>10} {:>9} {:>10} {:>8} {:>8}",
        "Policy", "Peak inf.", "Peak day", "Recovered", "Dead", "Events"
    );
    println!("{}", "-".repeat(72));
    for s in &summaries {
        println!(
            "{:<22} {:>10} {:>9} {:>10} {:>8} {:>8}",
            s.policy.as_str(),
            s.peak_infected,
            s.peak_day,
            s.final_counts.recovered,
            s.final_counts.dead,
            s.policy_events
        );
    }
    println!();
    println!("Completed {} runs in {:.3} s; CSV output in {OUTPUT_DIR}/", summaries.len(), t0.elapsed().as_secs_f64());

    Ok(())
}
