//! Author: [Seclususs](https://github.com/seclususs)

use crate::algorithms::rate_math::RateBandTable;
use crate::config::loop_settings::CYCLE_INTERVAL_SEC;
use crate::config::settings::TunerConfig;
use crate::config::tunables::{
    DEFAULT_PERCENT_50_RATE_MINIMUM, DEFAULT_PERCENT_75_RATE_MINIMUM,
    DEFAULT_PERCENT_90_RATE_MINIMUM,
};
use crate::daemon::types::TunerError;
use crate::resources::sys_paths::SYSFS_ROOT;

use clap::Parser;
use std::{path, time};

/// Dynamically resize the bcache writeback rate minimum.
#[derive(Debug, Parser)]
#[command(name = "bcache-rate-tuner", version, about)]
pub struct Cli {
    /// Rate minimum while the dirty ratio is 50% to 75%
    #[arg(long = "percent_50_rate_minimum", default_value_t = DEFAULT_PERCENT_50_RATE_MINIMUM)]
    pub percent_50_rate_minimum: u64,

    /// Rate minimum while the dirty ratio is above 75% up to 90%
    #[arg(long = "percent_75_rate_minimum", default_value_t = DEFAULT_PERCENT_75_RATE_MINIMUM)]
    pub percent_75_rate_minimum: u64,

    /// Rate minimum while the dirty ratio is above 90%
    #[arg(long = "percent_90_rate_minimum", default_value_t = DEFAULT_PERCENT_90_RATE_MINIMUM)]
    pub percent_90_rate_minimum: u64,

    /// Seconds to sleep between passes
    #[arg(long, default_value_t = CYCLE_INTERVAL_SEC)]
    pub interval_secs: u64,

    /// Sysfs mount; devices are looked up under its `block` directory
    #[arg(long, default_value = SYSFS_ROOT)]
    pub sysfs_root: path::PathBuf,

    /// Run a single pass and exit
    #[arg(long)]
    pub once: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn to_config(&self) -> Result<TunerConfig, TunerError> {
        let bands = RateBandTable::new(
            self.percent_50_rate_minimum,
            self.percent_75_rate_minimum,
            self.percent_90_rate_minimum,
        )?;
        TunerConfig::new(
            bands,
            self.sysfs_root.clone(),
            time::Duration::from_secs(self.interval_secs),
        )
    }
}
