//! Batch configuration: classification thresholds and seat defaults.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::chamber::SeatDefaults;

/// Handling of districts with zero combined Democratic and Republican votes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroVotePolicy {
    /// Not safe for either party; seats fall into the toss-up residual.
    #[default]
    TossUp,
    /// Fail the chamber with `ChamberError::DivisionByZero`.
    Reject,
}

/// Parameters for aggregating chamber tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// A party's seat is safe when its two-party share is strictly above this.
    pub safe_threshold: f64,
    /// Closed interval of population share that counts as a group majority.
    pub majority_min: f64,
    pub majority_max: f64,
    pub zero_votes: ZeroVotePolicy,
    pub seat_defaults: SeatDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            safe_threshold: 0.53,
            majority_min: 0.5,
            majority_max: 1.0,
            zero_votes: ZeroVotePolicy::default(),
            seat_defaults: SeatDefaults::default(),
        }
    }
}

impl Config {
    /// Read a JSON config from `path`; missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("[config] Failed to read config file: {}", path.display()))?;
        Self::from_json_slice(&bytes)
            .with_context(|| format!("[config] Invalid config file: {}", path.display()))
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let config: Config = serde_json::from_slice(bytes)
            .context("[config] Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // Below one half both parties could clear the bar in the same district.
        ensure!((0.5..1.0).contains(&self.safe_threshold),
            "[config] safe_threshold must lie in [0.5, 1), got {}", self.safe_threshold);
        ensure!(self.majority_min <= self.majority_max,
            "[config] majority interval [{}, {}] is empty", self.majority_min, self.majority_max);
        self.seat_defaults.validate()
            .map_err(|msg| anyhow::anyhow!("[config] {msg}"))
    }

    /// True if `share` falls inside the closed majority interval.
    #[inline]
    pub fn is_majority(&self, share: f64) -> bool {
        (self.majority_min..=self.majority_max).contains(&share)
    }
}
