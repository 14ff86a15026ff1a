//! Author: [Seclususs](https://github.com/seclususs)

pub const CYCLE_INTERVAL_SEC: u64 = 60;
pub const MAX_WALK_DEPTH: usize = 20;
pub const MAX_PARAMETER_LEN: usize = 32;
