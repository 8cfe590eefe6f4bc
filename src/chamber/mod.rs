mod aggregate;
mod load;
mod seats;
mod summary;
mod table;

pub use aggregate::aggregate;
pub use load::{chamber_dir, load};
pub use seats::{SeatDefaults, parse_seat_count};
pub use summary::{ChamberSummary, GroupSeats, summaries_to_frame};
pub use table::{AverageRow, ChamberTable, DistrictRow, GroupShares, REQUIRED_COLUMNS};
