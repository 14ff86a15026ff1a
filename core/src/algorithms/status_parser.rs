//! Author: [Seclususs](https://github.com/seclususs)

use crate::algorithms::sanitize_to_u64;
use crate::config::tunables::{KB_PER_GB, KB_PER_KB, KB_PER_MB};
use crate::daemon::types::TunerError;

use regex::Regex;

const STATUS_PATTERN: &str =
    r"dirty:\s*(\d+(?:\.\d+)?)([kMG])\s*target:\s*(\d+(?:\.\d+)?)([kMG])";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    Kilo,
    Mega,
    Giga,
}

impl SizeUnit {
    pub fn from_suffix(suffix: &str) -> Result<Self, TunerError> {
        match suffix {
            "k" => Ok(SizeUnit::Kilo),
            "M" => Ok(SizeUnit::Mega),
            "G" => Ok(SizeUnit::Giga),
            other => Err(TunerError::MalformedReport(format!(
                "Unknown size suffix '{other}'"
            ))),
        }
    }
    #[inline]
    pub fn kilobytes(self) -> f64 {
        match self {
            SizeUnit::Kilo => KB_PER_KB,
            SizeUnit::Mega => KB_PER_MB,
            SizeUnit::Giga => KB_PER_GB,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ByteQuantity {
    pub magnitude: f64,
    pub unit: SizeUnit,
}

impl ByteQuantity {
    fn parse(magnitude: &str, suffix: &str) -> Result<Self, TunerError> {
        let magnitude = magnitude.parse::<f64>().map_err(|_| {
            TunerError::MalformedReport(format!("Invalid float format: '{magnitude}'"))
        })?;
        if !magnitude.is_finite() || magnitude < 0.0 {
            return Err(TunerError::MalformedReport(format!(
                "Magnitude out of range: {magnitude}"
            )));
        }
        Ok(Self {
            magnitude,
            unit: SizeUnit::from_suffix(suffix)?,
        })
    }
    #[inline]
    pub fn as_kilobytes(&self) -> f64 {
        self.magnitude * self.unit.kilobytes()
    }
}

/// Dirty and target sizes of one cache, both in kilobytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheUsage {
    pub dirty_kb: f64,
    pub target_kb: f64,
}

impl CacheUsage {
    pub fn dirty_ratio(&self) -> Result<u64, TunerError> {
        if self.target_kb <= 0.0 {
            return Err(TunerError::MalformedReport(format!(
                "Target size must be positive, got {}k",
                self.target_kb
            )));
        }
        let ratio = self.dirty_kb / self.target_kb * 100.0;
        if !ratio.is_finite() {
            return Err(TunerError::MalformedReport(format!(
                "Dirty ratio out of range: {}k / {}k",
                self.dirty_kb, self.target_kb
            )));
        }
        Ok(sanitize_to_u64(ratio, u64::MAX))
    }
}

pub struct StatusParser {
    pattern: Regex,
}

impl StatusParser {
    pub fn new() -> Result<Self, TunerError> {
        Ok(Self {
            pattern: Regex::new(STATUS_PATTERN)?,
        })
    }
    pub fn parse(&self, report: &str) -> Result<CacheUsage, TunerError> {
        let Some(caps) = self.pattern.captures(report) else {
            log::debug!("Status parse fail. Raw content: {report:?}");
            return Err(TunerError::MalformedReport(
                "dirty/target fields not found".into(),
            ));
        };
        let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());
        let dirty = ByteQuantity::parse(field(1), field(2))?;
        let target = ByteQuantity::parse(field(3), field(4))?;
        Ok(CacheUsage {
            dirty_kb: dirty.as_kilobytes(),
            target_kb: target.as_kilobytes(),
        })
    }
}
