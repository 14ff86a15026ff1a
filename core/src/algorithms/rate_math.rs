//! Author: [Seclususs](https://github.com/seclususs)

use crate::config::tunables::{
    BASELINE_RATE_MINIMUM, DEFAULT_PERCENT_50_RATE_MINIMUM, DEFAULT_PERCENT_75_RATE_MINIMUM,
    DEFAULT_PERCENT_90_RATE_MINIMUM, TIER_1_CEIL_PCT, TIER_1_FLOOR_PCT, TIER_2_CEIL_PCT,
};
use crate::daemon::types::TunerError;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RateBand {
    Baseline,
    Tier1,
    Tier2,
    Tier3,
}

impl RateBand {
    pub fn for_ratio(ratio: u64) -> Self {
        if ratio < TIER_1_FLOOR_PCT {
            RateBand::Baseline
        } else if ratio <= TIER_1_CEIL_PCT {
            RateBand::Tier1
        } else if ratio <= TIER_2_CEIL_PCT {
            RateBand::Tier2
        } else {
            RateBand::Tier3
        }
    }
}

impl fmt::Display for RateBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateBand::Baseline => write!(f, "<{TIER_1_FLOOR_PCT}%"),
            RateBand::Tier1 => write!(f, "{TIER_1_FLOOR_PCT}-{TIER_1_CEIL_PCT}%"),
            RateBand::Tier2 => write!(f, "{TIER_1_CEIL_PCT}-{TIER_2_CEIL_PCT}%"),
            RateBand::Tier3 => write!(f, ">{TIER_2_CEIL_PCT}%"),
        }
    }
}

/// Maps a dirty ratio to a `writeback_rate_minimum` value.
///
/// The baseline is fixed; the three tiers come from the command line.
/// Values must be non-decreasing from baseline to tier 3 so that a fuller
/// cache never gets a lower floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateBandTable {
    baseline: u64,
    percent_50: u64,
    percent_75: u64,
    percent_90: u64,
}

impl RateBandTable {
    pub fn new(percent_50: u64, percent_75: u64, percent_90: u64) -> Result<Self, TunerError> {
        let table = Self {
            baseline: BASELINE_RATE_MINIMUM,
            percent_50,
            percent_75,
            percent_90,
        };
        if table.baseline > percent_50 || percent_50 > percent_75 || percent_75 > percent_90 {
            return Err(TunerError::InvalidConfig(format!(
                "Rate minimums must not decrease: baseline {} <= 50% {} <= 75% {} <= 90% {}",
                table.baseline, percent_50, percent_75, percent_90
            )));
        }
        Ok(table)
    }
    #[inline]
    pub fn baseline(&self) -> u64 {
        self.baseline
    }
    #[inline]
    pub fn rate_for_band(&self, band: RateBand) -> u64 {
        match band {
            RateBand::Baseline => self.baseline,
            RateBand::Tier1 => self.percent_50,
            RateBand::Tier2 => self.percent_75,
            RateBand::Tier3 => self.percent_90,
        }
    }
    #[inline]
    pub fn select_rate(&self, ratio: u64) -> u64 {
        self.rate_for_band(RateBand::for_ratio(ratio))
    }
}

impl Default for RateBandTable {
    fn default() -> Self {
        Self {
            baseline: BASELINE_RATE_MINIMUM,
            percent_50: DEFAULT_PERCENT_50_RATE_MINIMUM,
            percent_75: DEFAULT_PERCENT_75_RATE_MINIMUM,
            percent_90: DEFAULT_PERCENT_90_RATE_MINIMUM,
        }
    }
}
