//! Author: [Seclususs](https://github.com/seclususs)

use crate::daemon::types::TunerError;
use crate::resources::discovery::DeviceHandle;

use std::path::Path;

pub trait DeviceDiscovery {
    fn discover(&self) -> Result<Vec<DeviceHandle>, TunerError>;
}

/// Single-integer parameter files such as `writeback_rate_minimum`.
pub trait ParameterAccess {
    fn read_value(&self, path: &Path) -> Result<u64, TunerError>;
    fn write_value(&mut self, path: &Path, value: u64) -> Result<(), TunerError>;
}
