use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{error::ChamberError, types::Chamber};

/// First parenthesized run of digits in a district id, e.g. `"District 4 (3)"`.
static SEAT_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\((\d+)\)").expect("seat annotation pattern is valid")
});

/// Seat count assumed for districts whose id carries no `(n)` annotation.
///
/// Chambers elected from uniformly multi-member districts publish their
/// results without annotations, so their default magnitude is listed here
/// per state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatDefaults {
    /// Default for any (state, chamber) not listed below.
    pub fallback: u32,
    pub upper: BTreeMap<String, u32>,
    pub lower: BTreeMap<String, u32>,
}

impl Default for SeatDefaults {
    fn default() -> Self {
        let two_member = ["ID", "ND", "NJ", "WA"];
        Self {
            fallback: 1,
            upper: BTreeMap::new(),
            lower: two_member.into_iter().map(|state| (state.to_string(), 2)).collect(),
        }
    }
}

impl SeatDefaults {
    /// Default seat count for an unannotated district in `state`'s `chamber`.
    pub fn default_for(&self, state: &str, chamber: Chamber) -> u32 {
        let table = match chamber {
            Chamber::Upper => &self.upper,
            Chamber::Lower => &self.lower,
        };
        table.get(state).copied().unwrap_or(self.fallback)
    }

    /// Every entry, including the fallback, must be a positive seat count.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.fallback == 0 {
            return Err("seat_defaults.fallback must be positive".into());
        }
        for (chamber, table) in [(Chamber::Upper, &self.upper), (Chamber::Lower, &self.lower)] {
            if let Some((state, _)) = table.iter().find(|(_, seats)| **seats == 0) {
                return Err(format!("seat_defaults.{chamber}.{state} must be positive"));
            }
        }
        Ok(())
    }
}

/// Number of seats elected by the district named `id`.
///
/// An explicit `(n)` annotation wins; otherwise the per-state default applies.
pub fn parse_seat_count(id: &str, default: u32) -> Result<u32, ChamberError> {
    let Some(caps) = SEAT_ANNOTATION.captures(id) else { return Ok(default) };

    let seats = caps[1].parse::<u32>()
        .map_err(|_| ChamberError::malformed(format!("seat count in district id '{id}' is out of range")))?;
    if seats == 0 {
        return Err(ChamberError::malformed(format!("district id '{id}' declares zero seats")));
    }
    Ok(seats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_sets_seat_count() {
        assert_eq!(parse_seat_count("District X (3)", 1).unwrap(), 3);
        assert_eq!(parse_seat_count("District 12 (11)", 1).unwrap(), 11);
    }

    #[test]
    fn missing_annotation_uses_default() {
        assert_eq!(parse_seat_count("District X", 1).unwrap(), 1);
        assert_eq!(parse_seat_count("District X", 2).unwrap(), 2);
    }

    #[test]
    fn digits_outside_parentheses_are_ignored() {
        assert_eq!(parse_seat_count("District 27", 1).unwrap(), 1);
        assert_eq!(parse_seat_count("District 27 (A)", 1).unwrap(), 1);
    }

    #[test]
    fn first_annotation_wins() {
        assert_eq!(parse_seat_count("District 4 (2) (5)", 1).unwrap(), 2);
    }

    #[test]
    fn zero_seats_is_malformed() {
        let err = parse_seat_count("District X (0)", 1).unwrap_err();
        assert!(matches!(err, ChamberError::MalformedInput { .. }));
    }

    #[test]
    fn overflowing_seat_count_is_malformed() {
        let err = parse_seat_count("District X (99999999999)", 1).unwrap_err();
        assert!(matches!(err, ChamberError::MalformedInput { .. }));
    }

    #[test]
    fn default_table_lists_two_member_lower_chambers() {
        let defaults = SeatDefaults::default();
        for state in ["ID", "ND", "NJ", "WA"] {
            assert_eq!(defaults.default_for(state, Chamber::Lower), 2, "{state} lower");
            assert_eq!(defaults.default_for(state, Chamber::Upper), 1, "{state} upper");
        }
        assert_eq!(defaults.default_for("CA", Chamber::Lower), 1);
        assert_eq!(defaults.default_for("CA", Chamber::Upper), 1);
    }

    #[test]
    fn validate_rejects_zero_entries() {
        let mut defaults = SeatDefaults::default();
        assert!(defaults.validate().is_ok());

        defaults.lower.insert("AZ".into(), 0);
        assert!(defaults.validate().unwrap_err().contains("lower.AZ"));

        let zero_fallback = SeatDefaults { fallback: 0, ..SeatDefaults::default() };
        assert!(zero_fallback.validate().is_err());
    }
}
