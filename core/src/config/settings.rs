//! Author: [Seclususs](https://github.com/seclususs)

use crate::algorithms::rate_math::RateBandTable;
use crate::config::loop_settings::CYCLE_INTERVAL_SEC;
use crate::daemon::types::TunerError;
use crate::resources::sys_paths;

use std::{path, time};

#[derive(Debug, Clone)]
pub struct TunerConfig {
    pub bands: RateBandTable,
    pub sysfs_root: path::PathBuf,
    pub sys_block_root: path::PathBuf,
    pub device_keyword: String,
    pub interval: time::Duration,
}

impl TunerConfig {
    pub fn new(
        bands: RateBandTable,
        sysfs_root: path::PathBuf,
        interval: time::Duration,
    ) -> Result<Self, TunerError> {
        if interval.is_zero() {
            return Err(TunerError::InvalidConfig(
                "Cycle interval must be at least one second".into(),
            ));
        }
        Ok(Self {
            bands,
            sys_block_root: sysfs_root.join(sys_paths::BLOCK_SUBDIR),
            sysfs_root,
            device_keyword: sys_paths::DEVICE_KEYWORD.to_string(),
            interval,
        })
    }
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            bands: RateBandTable::default(),
            sysfs_root: path::PathBuf::from(sys_paths::SYSFS_ROOT),
            sys_block_root: path::Path::new(sys_paths::SYSFS_ROOT).join(sys_paths::BLOCK_SUBDIR),
            device_keyword: sys_paths::DEVICE_KEYWORD.to_string(),
            interval: time::Duration::from_secs(CYCLE_INTERVAL_SEC),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_sysfs_layout() {
        let config = TunerConfig::default();
        assert_eq!(config.sysfs_root, path::Path::new("/sys"));
        assert_eq!(config.sys_block_root, path::Path::new("/sys/block"));
        assert_eq!(config.device_keyword, "bcache");
        assert_eq!(config.interval, time::Duration::from_secs(60));
    }

    #[test]
    fn block_root_follows_sysfs_root() {
        let config = TunerConfig::new(
            RateBandTable::default(),
            path::PathBuf::from("/tmp/fake-sys"),
            time::Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(config.sys_block_root, path::Path::new("/tmp/fake-sys/block"));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let res = TunerConfig::new(
            RateBandTable::default(),
            path::PathBuf::from("/sys"),
            time::Duration::ZERO,
        );
        assert!(matches!(res, Err(TunerError::InvalidConfig(_))));
    }
}
