//! Author: [Seclususs](https://github.com/seclususs)

pub const BASELINE_RATE_MINIMUM: u64 = 2048;
pub const DEFAULT_PERCENT_50_RATE_MINIMUM: u64 = 4096;
pub const DEFAULT_PERCENT_75_RATE_MINIMUM: u64 = 8192;
pub const DEFAULT_PERCENT_90_RATE_MINIMUM: u64 = 16384;

pub const TIER_1_FLOOR_PCT: u64 = 50;
pub const TIER_1_CEIL_PCT: u64 = 75;
pub const TIER_2_CEIL_PCT: u64 = 90;

pub const KB_PER_KB: f64 = 1.0;
pub const KB_PER_MB: f64 = 1024.0;
pub const KB_PER_GB: f64 = 1024.0 * 1024.0;
