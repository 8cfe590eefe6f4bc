use polars::{frame::DataFrame, prelude::DataType};

use crate::{error::ChamberError, types::{DemographicGroup, Party}};

/// Columns every source table must carry (case-sensitive).
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "ID", "Dem", "Rep", "Asian", "Pacific", "Black", "Hispanic", "White", "Native",
];

/// Voting-age population share of each tracked group, as fractions in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupShares {
    pub aapi: f64,  // Asian + Pacific
    pub black: f64,
    pub hispanic: f64,
    pub white: f64,
    pub native: f64,
}

impl GroupShares {
    #[inline]
    pub fn get(&self, group: DemographicGroup) -> f64 {
        match group {
            DemographicGroup::Aapi => self.aapi,
            DemographicGroup::Black => self.black,
            DemographicGroup::Hispanic => self.hispanic,
            DemographicGroup::White => self.white,
            DemographicGroup::Native => self.native,
        }
    }
}

/// One electoral district (or multi-member district group) of a chamber.
#[derive(Debug, Clone, PartialEq)]
pub struct DistrictRow {
    pub id: String,       // May carry a seat annotation, e.g. "District 4 (3)"
    pub dem_votes: f64,   // Absolute vote counts
    pub rep_votes: f64,
    pub shares: GroupShares,
}

/// Chamber-wide averages stored as the last row of a source table.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AverageRow {
    pub dem: f64,
    pub rep: f64,
    pub shares: GroupShares,
}

impl AverageRow {
    #[inline]
    pub fn party(&self, party: Party) -> f64 {
        match party {
            Party::Democratic => self.dem,
            Party::Republican => self.rep,
        }
    }
}

/// Parsed contents of one (state, chamber) source table.
#[derive(Debug, Clone, PartialEq)]
pub struct ChamberTable {
    pub districts: Vec<DistrictRow>,
    pub average: AverageRow,
}

impl ChamberTable {
    /// Interpret a source frame: the first row is a placeholder, the last row
    /// holds chamber averages, and everything in between is a district.
    pub fn from_frame(df: &DataFrame) -> Result<Self, ChamberError> {
        if let Some(missing) = REQUIRED_COLUMNS.into_iter().find(|name| df.column(name).is_err()) {
            return Err(ChamberError::malformed(format!("missing required column '{missing}'")));
        }

        let height = df.height();
        if height < 2 {
            return Err(ChamberError::malformed(format!(
                "table has {height} rows; expected a placeholder row and an average row at least"
            )));
        }

        let body = df.slice(1, height - 2);
        let last = df.slice(height as i64 - 1, 1);

        let ids = text_values(&body, "ID")?;
        let numbers = NumericColumns::read(&body)?;
        let districts = ids.into_iter()
            .enumerate()
            .map(|(row, id)| -> Result<DistrictRow, ChamberError> {
                let id = id.ok_or_else(|| ChamberError::malformed(format!("district row {} has no ID", row + 1)))?;
                let (dem_votes, rep_votes, shares) = numbers.row(row, &format!("district '{id}'"))?;
                Ok(DistrictRow { id, dem_votes, rep_votes, shares })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let (dem, rep, shares) = NumericColumns::read(&last)?.row(0, "average row")?;

        Ok(Self { districts, average: AverageRow { dem, rep, shares } })
    }
}

/// Numeric source columns, cast strictly to `f64`.
struct NumericColumns {
    dem: Vec<Option<f64>>,
    rep: Vec<Option<f64>>,
    asian: Vec<Option<f64>>,
    pacific: Vec<Option<f64>>,
    black: Vec<Option<f64>>,
    hispanic: Vec<Option<f64>>,
    white: Vec<Option<f64>>,
    native: Vec<Option<f64>>,
}

impl NumericColumns {
    fn read(df: &DataFrame) -> Result<Self, ChamberError> {
        Ok(Self {
            dem: float_values(df, Party::Democratic.column())?,
            rep: float_values(df, Party::Republican.column())?,
            asian: float_values(df, "Asian")?,
            pacific: float_values(df, "Pacific")?,
            black: float_values(df, "Black")?,
            hispanic: float_values(df, "Hispanic")?,
            white: float_values(df, "White")?,
            native: float_values(df, "Native")?,
        })
    }

    /// Party values and group shares for `row`; `label` names the row in errors.
    fn row(&self, row: usize, label: &str) -> Result<(f64, f64, GroupShares), ChamberError> {
        let cell = |values: &[Option<f64>], column: &str| {
            values[row].ok_or_else(|| ChamberError::malformed(format!("{label} has no '{column}' value")))
        };

        let shares = GroupShares {
            aapi: cell(&self.asian, "Asian")? + cell(&self.pacific, "Pacific")?,
            black: cell(&self.black, "Black")?,
            hispanic: cell(&self.hispanic, "Hispanic")?,
            white: cell(&self.white, "White")?,
            native: cell(&self.native, "Native")?,
        };
        Ok((cell(&self.dem, Party::Democratic.column())?, cell(&self.rep, Party::Republican.column())?, shares))
    }
}

fn float_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, ChamberError> {
    let series = df.column(name)?
        .as_materialized_series()
        .strict_cast(&DataType::Float64)
        .map_err(|_| ChamberError::malformed(format!("column '{name}' holds non-numeric values")))?;
    Ok(series.f64()?.into_iter().collect())
}

fn text_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, ChamberError> {
    let series = df.column(name)?.as_materialized_series().cast(&DataType::String)?;
    Ok(series.str()?.into_iter().map(|value| value.map(str::to_string)).collect())
}
