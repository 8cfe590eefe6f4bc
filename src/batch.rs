//! Batch driver: every state and chamber, one combined output table.

use anyhow::{Context, Result};
use polars::frame::DataFrame;
use rayon::prelude::*;
use tracing::{info, info_span, warn};

use crate::{
    chamber::{ChamberSummary, aggregate, load, summaries_to_frame},
    config::Config,
    error::ChamberError,
    io::csv,
    source::{TableSink, TableSource},
    types::{Chamber, STATE_CODES, zid},
};

/// Default location of the combined summary table.
pub const OUTPUT_FILE: &str = "processed_state_data.csv";

/// A (state, chamber) pair that produced no summary.
#[derive(Debug)]
pub struct SkippedChamber {
    pub zid: String,
    pub error: ChamberError,
}

/// Outcome of a batch run; summaries are in iteration order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub summaries: Vec<ChamberSummary>,
    pub skipped: Vec<SkippedChamber>,
}

/// All (state, chamber) pairs: every upper chamber, then every lower chamber.
pub fn chamber_pairs() -> Vec<(&'static str, Chamber)> {
    Chamber::ALL.iter()
        .flat_map(|&chamber| STATE_CODES.iter().map(move |&state| (state, chamber)))
        .collect()
}

/// Load and aggregate a single chamber.
pub fn summarize_chamber(source: &dyn TableSource, state: &str, chamber: Chamber, config: &Config) -> Result<ChamberSummary, ChamberError> {
    let table = load(source, state, chamber)?;
    info!(districts = table.districts.len(), "loaded chamber table");
    aggregate(state, chamber, &table, config)
}

/// Summarize all 100 chambers.
pub fn run_batch(source: &dyn TableSource, config: &Config) -> BatchReport {
    run_pairs(source, &chamber_pairs(), config)
}

/// Summarize the given pairs in parallel. Failures are logged and recorded,
/// never fatal.
pub fn run_pairs(source: &dyn TableSource, pairs: &[(&str, Chamber)], config: &Config) -> BatchReport {
    info!(pairs = pairs.len(), "summarizing chambers");

    let results = pairs.par_iter()
        .map(|&(state, chamber)| {
            let zid = zid(state, chamber);
            let _span = info_span!("chamber", zid = %zid).entered();
            let result = summarize_chamber(source, state, chamber, config);
            if let Err(error) = &result {
                warn!(%error, "skipping chamber");
            }
            (zid, result)
        })
        .collect::<Vec<_>>();

    let mut report = BatchReport::default();
    for (zid, result) in results {
        match result {
            Ok(summary) => report.summaries.push(summary),
            Err(error) => report.skipped.push(SkippedChamber { zid, error }),
        }
    }

    info!(summarized = report.summaries.len(), skipped = report.skipped.len(), "batch complete");
    report
}

/// Write the combined table for `summaries` as CSV to `rel` in `sink`.
pub fn write_summaries(sink: &mut dyn TableSink, rel: &str, summaries: &[ChamberSummary]) -> Result<DataFrame> {
    let df = summaries_to_frame(summaries)
        .context("[batch] Failed to build combined summary table")?;
    let bytes = csv::write_csv_bytes(&df)?;
    sink.put(rel, &bytes)?;
    info!(path = rel, rows = df.height(), "wrote combined summary table");
    Ok(df)
}
