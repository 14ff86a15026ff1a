//! Author: [Seclususs](https://github.com/seclususs)

use crate::algorithms::rate_math::{RateBand, RateBandTable};
use crate::algorithms::status_parser::StatusParser;
use crate::controllers::rate_store::{ApplyOutcome, MinimumRateStore};
use crate::daemon::traits::ParameterAccess;
use crate::daemon::types::TunerError;
use crate::hal::filesystem;
use crate::resources::discovery::DeviceHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceOutcome {
    pub ratio: u64,
    pub band: RateBand,
    pub current: u64,
    pub target: u64,
    pub applied: bool,
}

pub struct WritebackController {
    parser: StatusParser,
    bands: RateBandTable,
}

impl WritebackController {
    pub fn new(bands: RateBandTable) -> Result<Self, TunerError> {
        Ok(Self {
            parser: StatusParser::new()?,
            bands,
        })
    }
    pub fn dirty_ratio(&self, device: &DeviceHandle) -> Result<u64, TunerError> {
        let report = filesystem::read_to_string(&device.status_path).map_err(|e| {
            TunerError::MalformedReport(format!(
                "{} status unreadable at {}: {e}",
                device.name,
                device.status_path.display()
            ))
        })?;
        self.parser
            .parse(&report)
            .and_then(|usage| usage.dirty_ratio())
    }
    pub fn tune_device<A: ParameterAccess>(
        &self,
        store: &mut MinimumRateStore<A>,
        device: &DeviceHandle,
    ) -> Result<DeviceOutcome, TunerError> {
        let ratio = self.dirty_ratio(device)?;
        let band = RateBand::for_ratio(ratio);
        let target = self.bands.rate_for_band(band);
        let current = store.read_current(device)?;
        let applied = matches!(
            store.apply(device, target)?,
            ApplyOutcome::Applied { .. }
        );
        log::info!(
            "The bcache disk {} dirty data rate is {}% (band {}), writeback rate minimum {} -> {} ({})",
            device.name,
            ratio,
            band,
            current,
            target,
            if applied { "applied" } else { "unchanged" }
        );
        Ok(DeviceOutcome {
            ratio,
            band,
            current,
            target,
            applied,
        })
    }
}
