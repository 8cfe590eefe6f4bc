use tracing::warn;

use crate::{
    chamber::{ChamberSummary, ChamberTable, DistrictRow, GroupSeats, parse_seat_count},
    config::{Config, ZeroVotePolicy},
    error::ChamberError,
    types::{Chamber, DemographicGroup, Party, zid},
};

/// Per-district classification feeding the chamber totals.
#[derive(Debug, Clone, Copy)]
struct DistrictOutcome {
    seats: u32,
    no_votes: bool,
    safe_dem: bool,
    safe_rep: bool,
    majority: [bool; 5],  // Indexed by DemographicGroup::index
}

impl DistrictOutcome {
    fn classify(district: &DistrictRow, default_seats: u32, config: &Config) -> Result<Self, ChamberError> {
        let seats = parse_seat_count(&district.id, default_seats)?;
        let majority = DemographicGroup::ALL.map(|group| config.is_majority(district.shares.get(group)));

        let share = district.dem_votes + district.rep_votes;
        if share == 0.0 {
            if config.zero_votes == ZeroVotePolicy::Reject {
                return Err(ChamberError::DivisionByZero { district: district.id.clone() });
            }
            warn!(district = %district.id, seats, "no two-party votes recorded; counting seats as toss-up");
            return Ok(Self { seats, no_votes: true, safe_dem: false, safe_rep: false, majority });
        }

        // Both tests run independently; a valid threshold keeps them exclusive.
        let safe_dem = district.dem_votes / share > config.safe_threshold;
        let safe_rep = district.rep_votes / share > config.safe_threshold;

        Ok(Self { seats, no_votes: false, safe_dem, safe_rep, majority })
    }

    #[inline]
    fn is_safe(&self, party: Party) -> bool {
        match party {
            Party::Democratic => self.safe_dem,
            Party::Republican => self.safe_rep,
        }
    }

    /// No tracked group holds a majority in this district.
    #[inline]
    fn is_coalition(&self) -> bool { !self.majority.iter().any(|&m| m) }
}

/// Aggregate one chamber's districts into its summary.
///
/// Pure: `table` is only read. Fails on an invalid `config`, an unparseable
/// seat annotation, seat counts that overflow the chamber total, an empty
/// chamber, or (under `ZeroVotePolicy::Reject`) a district without votes.
pub fn aggregate(state: &str, chamber: Chamber, table: &ChamberTable, config: &Config) -> Result<ChamberSummary, ChamberError> {
    config.validate().map_err(|e| ChamberError::malformed(format!("{e:#}")))?;

    let zid = zid(state, chamber);
    let default_seats = config.seat_defaults.default_for(state, chamber);

    let outcomes = table.districts.iter()
        .map(|district| DistrictOutcome::classify(district, default_seats, config))
        .collect::<Result<Vec<_>, _>>()?;

    let total_members = seats_where(&outcomes, |_| true)?;
    if total_members == 0 {
        return Err(ChamberError::malformed(format!("{zid} has no districts")));
    }
    let fraction = |seats: u32| seats as f64 / total_members as f64;

    let safe_dem_seats = seats_where(&outcomes, |o| o.is_safe(Party::Democratic))?;
    let safe_rep_seats = seats_where(&outcomes, |o| o.is_safe(Party::Republican))?;
    let toss_up_seats = safe_dem_seats.checked_add(safe_rep_seats)
        .and_then(|safe| total_members.checked_sub(safe))
        .ok_or_else(|| ChamberError::malformed(format!("{zid} has more safe seats than members")))?;

    let mut groups = DemographicGroup::ALL.map(|group| GroupSeats {
        group,
        seats: 0,
        seat_percentage: 0.0,
        vote_share: round_to(table.average.shares.get(group), 4),
    });
    for entry in &mut groups {
        let index = entry.group.index();
        entry.seats = seats_where(&outcomes, |o| o.majority[index])?;
        entry.seat_percentage = round_to(fraction(entry.seats), 2);
    }

    let coalition_seats = seats_where(&outcomes, DistrictOutcome::is_coalition)?;

    Ok(ChamberSummary {
        zid,
        state: state.to_string(),
        chamber,
        total_members,
        safe_dem_seats,
        percentage_dem: fraction(safe_dem_seats),
        safe_rep_seats,
        percentage_rep: fraction(safe_rep_seats),
        toss_up_seats,
        groups,
        coalition_seats,
        coalition_percentage: fraction(coalition_seats),
        dem_vap: round_to(table.average.party(Party::Democratic), 4),
        rep_vap: round_to(table.average.party(Party::Republican), 4),
        zero_vote_seats: seats_where(&outcomes, |o| o.no_votes)?,
    })
}

/// Total seats over districts satisfying `test`.
fn seats_where(outcomes: &[DistrictOutcome], test: impl Fn(&DistrictOutcome) -> bool) -> Result<u32, ChamberError> {
    outcomes.iter()
        .filter(|o| test(*o))
        .try_fold(0u32, |total, o| total.checked_add(o.seats))
        .ok_or_else(|| ChamberError::malformed("seat counts overflow the chamber total"))
}

/// Round half-to-even at `places` decimal digits.
fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round_ties_even() / scale
}
