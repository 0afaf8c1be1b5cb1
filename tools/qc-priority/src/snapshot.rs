//! Snapshot loading.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use qc_12_tx_priority::{InMemorySnapshot, TxEntrySummary};

/// Reads a JSON array of entry summaries from `path`, or stdin for `-`.
pub fn load_snapshot(path: &Path) -> Result<InMemorySnapshot> {
    if path == Path::new("-") {
        return parse_snapshot(io::stdin().lock()).context("failed to parse snapshot from stdin");
    }

    let file = File::open(path)
        .with_context(|| format!("failed to open snapshot {}", path.display()))?;
    parse_snapshot(BufReader::new(file))
        .with_context(|| format!("failed to parse snapshot {}", path.display()))
}

fn parse_snapshot<R: Read>(reader: R) -> Result<InMemorySnapshot> {
    let entries: Vec<TxEntrySummary> = serde_json::from_reader(reader)?;
    Ok(InMemorySnapshot::new(entries))
}
