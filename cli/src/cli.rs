use std::path::PathBuf;

/// Legislative chamber summary CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "chamberstats", version, about)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory holding the `stateupper/` and `statelower/` tables, defaults to "."
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub data_dir: Option<PathBuf>,

    /// Output summary file, defaults to "./processed_state_data.csv"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// JSON file overriding thresholds and seat defaults
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,
}
