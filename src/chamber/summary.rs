use polars::{frame::DataFrame, prelude::{Column, NamedFrom, PolarsResult}, series::Series};

use crate::types::{Chamber, DemographicGroup, Party};

/// Majority-seat statistics for one demographic group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupSeats {
    pub group: DemographicGroup,
    pub seats: u32,
    pub seat_percentage: f64,  // seats / total members, 2 dp
    pub vote_share: f64,       // chamber average share, 4 dp
}

/// Chamber-level representation statistics for one (state, chamber).
#[derive(Debug, Clone, PartialEq)]
pub struct ChamberSummary {
    pub zid: String,
    pub state: String,
    pub chamber: Chamber,
    pub total_members: u32,

    pub safe_dem_seats: u32,
    pub percentage_dem: f64,
    pub safe_rep_seats: u32,
    pub percentage_rep: f64,
    /// Residual: members not safe for either party.
    pub toss_up_seats: u32,

    /// Indexed by `DemographicGroup::index`.
    pub groups: [GroupSeats; 5],
    pub coalition_seats: u32,
    pub coalition_percentage: f64,

    /// Average-row party shares (4 dp).
    pub dem_vap: f64,
    pub rep_vap: f64,

    /// Seats in districts with no two-party votes; included in `toss_up_seats`.
    pub zero_vote_seats: u32,
}

impl ChamberSummary {
    #[inline]
    pub fn group(&self, group: DemographicGroup) -> &GroupSeats { &self.groups[group.index()] }

    #[inline]
    pub fn safe_seats(&self, party: Party) -> u32 {
        match party {
            Party::Democratic => self.safe_dem_seats,
            Party::Republican => self.safe_rep_seats,
        }
    }
}

/// Build the combined output table, one row per summary, `ZID` first.
pub fn summaries_to_frame(summaries: &[ChamberSummary]) -> PolarsResult<DataFrame> {
    let mut columns = vec![column("ZID", summaries, |s| s.zid.clone())];

    for group in DemographicGroup::ALL {
        let label = group.label();
        columns.push(column(&format!("{label} Total Seats"), summaries, |s| s.group(group).seats));
        columns.push(column(&format!("{label} Seat Percentage"), summaries, |s| s.group(group).seat_percentage));
        columns.push(column(&format!("{label} Vote-share Percentage"), summaries, |s| s.group(group).vote_share));
    }

    columns.extend([
        column("State", summaries, |s| s.state.clone()),
        column("Chamber", summaries, |s| s.chamber.to_string()),
        column("Total Coalition Seats", summaries, |s| s.coalition_seats),
        column("Coalition Seats Percentage", summaries, |s| s.coalition_percentage),
        column("Total Members in Chamber", summaries, |s| s.total_members),
        column("Total Safe Seats for Democrats", summaries, |s| s.safe_seats(Party::Democratic)),
        column("Seat Percentage for Democrats", summaries, |s| s.percentage_dem),
        column("Dem VAP Percentage", summaries, |s| s.dem_vap),
        column("Total Safe Seats for Republicans", summaries, |s| s.safe_seats(Party::Republican)),
        column("Seat Percentage for Republicans", summaries, |s| s.percentage_rep),
        column("Rep VAP Percentage", summaries, |s| s.rep_vap),
        column("Total Toss-Up Seats", summaries, |s| s.toss_up_seats),
        column("Seats Without Two-Party Votes", summaries, |s| s.zero_vote_seats),
    ]);

    DataFrame::new(columns)
}

fn column<T>(name: &str, summaries: &[ChamberSummary], value: impl Fn(&ChamberSummary) -> T) -> Column
where
    Series: NamedFrom<Vec<T>, [T]>,
{
    let values = summaries.iter().map(value).collect::<Vec<T>>();
    Series::new(name.into(), values).into()
}
