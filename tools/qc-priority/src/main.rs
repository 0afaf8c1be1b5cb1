//! QC-Priority: order a captured mempool snapshot.
//!
//! Loads pool entry summaries from JSON, resolves the ordering strategy once
//! (flag, then `QC_MINING_STRATEGY`), and prints the candidates in the order
//! block template assembly would consider them.
//!
//! ## Usage
//!
//! ```bash
//! # Highest priority first, default strategy
//! qc-priority mempool.json
//!
//! # Ancestor fee ordering, top 10, as JSON
//! qc-priority mempool.json --strategy ancestorfee --limit 10 --format json
//!
//! # Read from stdin in index (ascending) order
//! cat mempool.json | qc-priority - --ascending
//! ```

mod report;
mod snapshot;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use qc_12_tx_priority::{IndexBuilder, MiningConfig, PriorityIndexApi, StrategySelector};
use quantum_telemetry::{init_telemetry, log_event, TelemetryConfig};

use report::{OutputFormat, TraversalOrder};

/// Orders pending transactions by ancestor-package priority
#[derive(Parser, Debug)]
#[command(name = "qc-priority")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON array of pool entry summaries ("-" reads stdin)
    snapshot: PathBuf,

    /// Ordering strategy (ancestorfee, ancestorfeerate); overrides QC_MINING_STRATEGY
    #[arg(long)]
    strategy: Option<String>,

    /// Print in index order (lowest priority first)
    #[arg(long)]
    ascending: bool,

    /// Print at most this many entries
    #[arg(long)]
    limit: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let telemetry = TelemetryConfig::for_subsystem("12", "tx-priority");
    let _telemetry = init_telemetry(&telemetry).context("failed to initialize telemetry")?;

    let mut mining = MiningConfig::from_env();
    if let Some(strategy) = args.strategy {
        mining = mining.with_strategy(strategy);
    }
    let metric = StrategySelector::global().resolve(&mining);

    let pool = snapshot::load_snapshot(&args.snapshot)?;
    log_event!(
        info,
        "qc-12",
        "Loaded pool snapshot",
        entries = pool.len(),
        metric = %metric
    );

    let index = IndexBuilder::new(pool, metric).build_index();

    let order = if args.ascending {
        TraversalOrder::Ascending
    } else {
        TraversalOrder::Priority
    };
    let output = report::render(&index, metric, order, args.limit, args.format)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("failed to write report")?;
    stdout.flush().context("failed to write report")?;

    Ok(())
}
