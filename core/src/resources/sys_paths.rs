//! Author: [Seclususs](https://github.com/seclususs)

pub const SYSFS_ROOT: &str = "/sys";
pub const BLOCK_SUBDIR: &str = "block";
pub const DEVICE_KEYWORD: &str = "bcache";
pub const K_WRITEBACK_RATE_DEBUG: &str = "bcache/writeback_rate_debug";
pub const K_WRITEBACK_RATE_MINIMUM: &str = "writeback_rate_minimum";
