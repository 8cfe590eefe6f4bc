use std::fmt;

use serde::{Deserialize, Serialize};

/// Postal codes of the 50 states, in batch iteration order.
pub const STATE_CODES: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA",
    "HI", "ID", "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD",
    "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC",
    "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY",
];

/// A legislative chamber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chamber {
    Upper,  // State senate
    Lower,  // State house / assembly
}

impl Chamber {
    /// Chambers in batch iteration order.
    pub const ALL: [Chamber; 2] = [Chamber::Upper, Chamber::Lower];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Chamber::Upper => "upper",
            Chamber::Lower => "lower",
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two major parties tracked for safe-seat classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Party {
    Democratic,
    Republican,
}

impl Party {
    /// Source column holding this party's votes (or average share on the last row).
    #[inline]
    pub fn column(&self) -> &'static str {
        match self {
            Party::Democratic => "Dem",
            Party::Republican => "Rep",
        }
    }
}

/// Population groups with majority-seat accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemographicGroup {
    Aapi,       // Asian + Pacific Islander
    Black,
    Hispanic,
    White,
    Native,
}

impl DemographicGroup {
    /// Groups in output column order.
    pub const ALL: [DemographicGroup; 5] = [
        DemographicGroup::Aapi,
        DemographicGroup::Black,
        DemographicGroup::Hispanic,
        DemographicGroup::White,
        DemographicGroup::Native,
    ];

    /// Position of this group in `ALL`.
    #[inline]
    pub fn index(&self) -> usize { *self as usize }

    /// Label used in output column names.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            DemographicGroup::Aapi => "AAPI",
            DemographicGroup::Black => "Black",
            DemographicGroup::Hispanic => "Hispanic",
            DemographicGroup::White => "White",
            DemographicGroup::Native => "Native",
        }
    }
}

impl fmt::Display for DemographicGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Composite key for a (state, chamber) pair, e.g. `"NJ_lower"`.
#[inline]
pub fn zid(state: &str, chamber: Chamber) -> String {
    format!("{state}_{chamber}")
}
