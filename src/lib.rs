#![doc = "Chamberstats public API"]
mod batch;
mod chamber;
mod common;
mod config;
mod error;
mod io;
mod source;
mod types;

#[doc(inline)]
pub use types::{Chamber, DemographicGroup, Party, STATE_CODES, zid};

#[doc(inline)]
pub use chamber::{
    AverageRow, ChamberSummary, ChamberTable, DistrictRow, GroupSeats, GroupShares, REQUIRED_COLUMNS,
    SeatDefaults, aggregate, chamber_dir, load, parse_seat_count, summaries_to_frame,
};

#[doc(inline)]
pub use batch::{BatchReport, OUTPUT_FILE, SkippedChamber, chamber_pairs, run_batch, run_pairs, summarize_chamber, write_summaries};

#[doc(inline)]
pub use config::{Config, ZeroVotePolicy};

#[doc(inline)]
pub use error::ChamberError;

#[doc(inline)]
pub use source::{DiskTables, MemTables, TableSink, TableSource};
