//! Rendering of an ordered index.

use std::fmt::Write as _;

use anyhow::Result;
use clap::ValueEnum;
use qc_12_tx_priority::{Amount, Metric, OrderedIndex, TxEntrySummary};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text columns
    Table,
    /// JSON array of rows
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Index order, lowest priority first
    Ascending,
    /// Highest priority first, as a greedy assembler reads it
    Priority,
}

#[derive(Debug, Serialize)]
struct ReportRow {
    rank: usize,
    hash: String,
    /// Sort key under the active metric
    priority: Amount,
    fee_with_ancestors: Amount,
    size_with_ancestors: u64,
    ancestor_fee_rate: Amount,
    /// Rate of the transaction alone
    fee_rate: Amount,
}

impl ReportRow {
    fn new(rank: usize, entry: &TxEntrySummary, metric: Metric) -> Self {
        Self {
            rank,
            hash: format!("{:#x}", entry.hash),
            priority: entry.metric_value(metric),
            fee_with_ancestors: entry.fee_with_ancestors,
            size_with_ancestors: entry.size_with_ancestors,
            ancestor_fee_rate: entry.ancestor_fee_rate().satoshis_per_k(),
            fee_rate: entry.fee_rate().satoshis_per_k(),
        }
    }
}

/// Renders `index` in `order`, keeping at most `limit` rows.
pub fn render(
    index: &OrderedIndex,
    metric: Metric,
    order: TraversalOrder,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<String> {
    let entries: Box<dyn Iterator<Item = &TxEntrySummary>> = match order {
        TraversalOrder::Ascending => Box::new(index.iter()),
        TraversalOrder::Priority => Box::new(index.iter_by_priority()),
    };
    let rows: Vec<ReportRow> = entries
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(i, entry)| ReportRow::new(i + 1, entry, metric))
        .collect();

    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&rows)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Table => render_table(&rows, metric, index.len()),
    }
}

fn render_table(rows: &[ReportRow], metric: Metric, total: usize) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "# strategy: {metric}, {} of {total} entries", rows.len())?;
    writeln!(
        out,
        "{:>6}  {:<66}  {:>14}  {:>14}  {:>10}  {:>14}  {:>14}",
        "rank", "hash", "priority", "ancestor_fee", "anc_size", "anc_sat/kB", "own_sat/kB"
    )?;
    for row in rows {
        writeln!(
            out,
            "{:>6}  {:<66}  {:>14}  {:>14}  {:>10}  {:>14}  {:>14}",
            row.rank,
            row.hash,
            row.priority,
            row.fee_with_ancestors,
            row.size_with_ancestors,
            row.ancestor_fee_rate,
            row.fee_rate
        )?;
    }
    Ok(out)
}
