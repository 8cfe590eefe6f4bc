use tracing::debug;

use crate::{
    chamber::ChamberTable,
    error::ChamberError,
    io::csv,
    source::TableSource,
    types::{Chamber, zid},
};

/// Directory holding one chamber's tables, e.g. `"stateupper"`.
pub fn chamber_dir(chamber: Chamber) -> String {
    format!("state{chamber}")
}

/// Locate, read and parse the single source table for (`state`, `chamber`).
///
/// A table matches when its file name starts with `{chamber}_{state}` and ends
/// in `.csv`. Anything other than exactly one readable match is `NotFound`.
pub fn load(source: &dyn TableSource, state: &str, chamber: Chamber) -> Result<ChamberTable, ChamberError> {
    let zid = zid(state, chamber);
    let dir = chamber_dir(chamber);
    let prefix = format!("{chamber}_{state}");

    let names = source.list(&dir)
        .map_err(|e| ChamberError::not_found(&zid, format!("{e:#}")))?;
    let matches = names.iter()
        .filter(|name| name.starts_with(&prefix) && name.ends_with(".csv"))
        .collect::<Vec<_>>();

    let name = match matches.as_slice() {
        [name] => *name,
        [] => return Err(ChamberError::not_found(&zid, format!("no file matches {dir}/{prefix}*.csv"))),
        many => {
            let listed = many.iter().map(|name| name.as_str()).collect::<Vec<_>>().join(", ");
            return Err(ChamberError::not_found(&zid, format!("{} files match {dir}/{prefix}*.csv: {listed}", many.len())));
        }
    };

    let rel = format!("{dir}/{name}");
    debug!(zid = %zid, path = %rel, "resolved source table");

    let bytes = source.get(&rel)
        .map_err(|e| ChamberError::not_found(&zid, format!("{e:#}")))?;
    let df = csv::read_csv_bytes(&bytes)
        .map_err(|e| ChamberError::not_found(&zid, format!("{rel} is unreadable: {e:#}")))?;

    ChamberTable::from_frame(&df)
}
