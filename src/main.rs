// Breakout Radar - file-driven analysis runner
// Reads a JSON batch of per-token bundles, runs the scoring and breakout
// engines over each, prints the ranked shortlist.

use anyhow::{Context, Result};
use breakout_radar::analyzer::{analyze, AnalysisInput};
use breakout_radar::config::Config;
use breakout_radar::ranker::{rank_with_config, RankerConfig};
use breakout_radar::report::render_shortlist;
use std::fs;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = Config::load_or_default()?;
    init_logging(&config.monitoring.log_level, config.monitoring.json_logs);

    info!("🎯 Breakout Radar starting");
    info!("⚙️  Input batch: {}", config.input.path);

    let raw = fs::read_to_string(&config.input.path)
        .with_context(|| format!("Failed to read input batch: {}", config.input.path))?;
    let bundles: Vec<AnalysisInput> =
        serde_json::from_str(&raw).context("Failed to parse input batch")?;
    info!("📥 Loaded {} token bundle(s)", bundles.len());

    let mut results = Vec::with_capacity(bundles.len());
    for bundle in bundles {
        let symbol = bundle.token.symbol.clone();
        match analyze(bundle) {
            Ok(result) => results.push(result),
            // Malformed snapshots (zero market cap upstream) are skipped,
            // not fatal for the batch
            Err(e) => warn!("⚠️  Skipping {}: {}", symbol, e),
        }
    }

    let ranker_config = RankerConfig {
        min_probability: config.ranker.min_breakout_probability,
        max_candidates: config.ranker.max_candidates,
    };
    let shortlist = rank_with_config(results, &ranker_config);
    info!(
        "✅ Analysis complete: {} candidate(s) at ≥{}% probability",
        shortlist.len(),
        ranker_config.min_probability
    );

    print!("{}", render_shortlist(&shortlist));

    Ok(())
}

fn init_logging(log_level: &str, json_logs: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false);

    if json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}
