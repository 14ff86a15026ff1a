//! Author: [Seclususs](https://github.com/seclususs)

use crate::daemon::traits::ParameterAccess;
use crate::daemon::types::TunerError;
use crate::resources::discovery::DeviceHandle;

use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Unchanged,
    Applied { previous: u64 },
}

/// Compare-then-write access to each device's `writeback_rate_minimum`.
///
/// The last value read or written per device is remembered until the next
/// [`begin_cycle`](Self::begin_cycle), so repeated applies of the same value
/// only touch the file once.
pub struct MinimumRateStore<A: ParameterAccess> {
    access: A,
    last_value: HashMap<PathBuf, u64>,
}

impl<A: ParameterAccess> MinimumRateStore<A> {
    pub fn new(access: A) -> Self {
        Self {
            access,
            last_value: HashMap::new(),
        }
    }
    #[cfg(test)]
    pub(crate) fn access(&self) -> &A {
        &self.access
    }
    pub fn begin_cycle(&mut self) {
        self.last_value.clear();
    }
    pub fn read_current(&mut self, device: &DeviceHandle) -> Result<u64, TunerError> {
        let value = self
            .access
            .read_value(&device.rate_minimum_path)
            .map_err(|e| unavailable(device, "read", &e))?;
        self.last_value
            .insert(device.rate_minimum_path.clone(), value);
        Ok(value)
    }
    pub fn apply(
        &mut self,
        device: &DeviceHandle,
        new_value: u64,
    ) -> Result<ApplyOutcome, TunerError> {
        let current = match self.last_value.get(&device.rate_minimum_path) {
            Some(&v) => v,
            None => self.read_current(device)?,
        };
        if current == new_value {
            return Ok(ApplyOutcome::Unchanged);
        }
        self.access
            .write_value(&device.rate_minimum_path, new_value)
            .map_err(|e| unavailable(device, "write", &e))?;
        self.last_value
            .insert(device.rate_minimum_path.clone(), new_value);
        Ok(ApplyOutcome::Applied { previous: current })
    }
}

fn unavailable(device: &DeviceHandle, op: &str, e: &TunerError) -> TunerError {
    TunerError::StoreUnavailable(format!(
        "{} {op} failed on {}: {e}",
        device.name,
        device.rate_minimum_path.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::path::Path;

    #[derive(Default)]
    struct CountingAccess {
        value: u64,
        reads: Cell<usize>,
        writes: usize,
        fail_writes: bool,
    }

    impl ParameterAccess for CountingAccess {
        fn read_value(&self, _path: &Path) -> Result<u64, TunerError> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.value)
        }
        fn write_value(&mut self, _path: &Path, value: u64) -> Result<(), TunerError> {
            if self.fail_writes {
                return Err(TunerError::IoError(std::io::Error::from(
                    std::io::ErrorKind::PermissionDenied,
                )));
            }
            self.writes += 1;
            self.value = value;
            Ok(())
        }
    }

    fn device() -> DeviceHandle {
        DeviceHandle::from_entry(Path::new("/sys/block/bcache0"))
    }

    #[test]
    fn repeated_apply_writes_once() {
        let mut store = MinimumRateStore::new(CountingAccess {
            value: 2048,
            ..Default::default()
        });
        let dev = device();
        assert_eq!(store.read_current(&dev).unwrap(), 2048);
        assert_eq!(
            store.apply(&dev, 4096).unwrap(),
            ApplyOutcome::Applied { previous: 2048 }
        );
        assert_eq!(store.apply(&dev, 4096).unwrap(), ApplyOutcome::Unchanged);
        assert_eq!(store.access().writes, 1);
        assert_eq!(store.access().value, 4096);
    }

    #[test]
    fn unchanged_value_is_not_written() {
        let mut store = MinimumRateStore::new(CountingAccess {
            value: 2048,
            ..Default::default()
        });
        let dev = device();
        store.read_current(&dev).unwrap();
        assert_eq!(store.apply(&dev, 2048).unwrap(), ApplyOutcome::Unchanged);
        assert_eq!(store.access().writes, 0);
    }

    #[test]
    fn apply_without_prior_read_reads_first() {
        let mut store = MinimumRateStore::new(CountingAccess {
            value: 8192,
            ..Default::default()
        });
        assert_eq!(
            store.apply(&device(), 16384).unwrap(),
            ApplyOutcome::Applied { previous: 8192 }
        );
        assert_eq!(store.access().reads.get(), 1);
    }

    #[test]
    fn new_cycle_rereads_the_file() {
        let mut store = MinimumRateStore::new(CountingAccess {
            value: 2048,
            ..Default::default()
        });
        let dev = device();
        store.apply(&dev, 2048).unwrap();
        store.begin_cycle();
        store.apply(&dev, 2048).unwrap();
        assert_eq!(store.access().reads.get(), 2);
    }

    #[test]
    fn failed_write_is_store_unavailable() {
        let mut store = MinimumRateStore::new(CountingAccess {
            value: 2048,
            fail_writes: true,
            ..Default::default()
        });
        let dev = device();
        let err = store.apply(&dev, 4096).unwrap_err();
        assert!(matches!(err, TunerError::StoreUnavailable(ref m) if m.contains("bcache0")));
        assert_eq!(store.apply(&dev, 2048).unwrap(), ApplyOutcome::Unchanged);
    }
}
