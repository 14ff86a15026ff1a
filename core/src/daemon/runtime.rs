//! Author: [Seclususs](https://github.com/seclususs)

use crate::config::settings::TunerConfig;
use crate::controllers::rate_store::MinimumRateStore;
use crate::controllers::writeback_impl::WritebackController;
use crate::daemon::traits::{DeviceDiscovery, ParameterAccess};
use crate::daemon::types::{CycleSummary, TunerError};
use crate::hal::filesystem::SysfsParameter;
use crate::resources::discovery::BcacheDiscovery;

use std::{thread, time};

pub struct ControlLoop<D: DeviceDiscovery, A: ParameterAccess> {
    discovery: D,
    controller: WritebackController,
    store: MinimumRateStore<A>,
    interval: time::Duration,
}

impl ControlLoop<BcacheDiscovery, SysfsParameter> {
    pub fn from_config(config: &TunerConfig) -> Result<Self, TunerError> {
        let discovery = BcacheDiscovery::new(&config.sys_block_root, &*config.device_keyword);
        let access = SysfsParameter::new(&config.sysfs_root)?;
        Self::new(discovery, access, config)
    }
}

impl<D: DeviceDiscovery, A: ParameterAccess> ControlLoop<D, A> {
    pub fn new(discovery: D, access: A, config: &TunerConfig) -> Result<Self, TunerError> {
        Ok(Self {
            discovery,
            controller: WritebackController::new(config.bands)?,
            store: MinimumRateStore::new(access),
            interval: config.interval,
        })
    }
    pub fn run_cycle(&mut self) -> Result<CycleSummary, TunerError> {
        self.store.begin_cycle();
        let devices = self.discovery.discover()?;
        let mut summary = CycleSummary {
            discovered: devices.len(),
            ..CycleSummary::default()
        };
        for device in &devices {
            match self.controller.tune_device(&mut self.store, device) {
                Ok(outcome) if outcome.applied => summary.applied += 1,
                Ok(_) => summary.unchanged += 1,
                Err(e) => {
                    log::error!("The bcache disk {} skipped this cycle: {}", device.name, e);
                    summary.failed += 1;
                }
            }
        }
        log::debug!(
            "Cycle done: {} devices, {} applied, {} unchanged, {} failed",
            summary.discovered,
            summary.applied,
            summary.unchanged,
            summary.failed
        );
        Ok(summary)
    }
    pub fn run_forever(&mut self) -> ! {
        log::info!(
            "Tuning writeback rate minimum every {}s",
            self.interval.as_secs()
        );
        loop {
            if let Err(e) = self.run_cycle() {
                log::error!("Cycle aborted: {}", e);
            }
            thread::sleep(self.interval);
        }
    }
}
