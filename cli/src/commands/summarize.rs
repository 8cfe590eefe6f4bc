use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chamberstats::{Config, DiskTables, OUTPUT_FILE, run_batch, write_summaries};
use tracing::info;

pub fn run(cli: &crate::cli::Cli) -> Result<()> {
    let data_dir = cli.data_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let out_path = cli.output.clone().unwrap_or_else(|| PathBuf::from(OUTPUT_FILE));

    let config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    info!(data_dir = %data_dir.display(), "reading chamber tables");
    let source = DiskTables::new(&data_dir);
    let report = run_batch(&source, &config);

    let out_dir = out_path.parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = out_path.file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("[summarize] Invalid output path: {}", out_path.display()))?;

    let mut sink = DiskTables::new(out_dir);
    let df = write_summaries(&mut sink, file_name, &report.summaries)?;

    println!("{df}");
    info!(
        written = report.summaries.len(),
        skipped = report.skipped.len(),
        output = %out_path.display(),
        "finished"
    );

    Ok(())
}
