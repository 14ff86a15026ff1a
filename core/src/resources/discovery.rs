//! Author: [Seclususs](https://github.com/seclususs)

use crate::config::loop_settings::MAX_WALK_DEPTH;
use crate::daemon::traits::DeviceDiscovery;
use crate::daemon::types::TunerError;
use crate::hal::traversal::{self, TraversalAction};
use crate::resources::sys_paths::{K_WRITEBACK_RATE_DEBUG, K_WRITEBACK_RATE_MINIMUM};

use std::path;

/// One bcache device found during a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceHandle {
    pub name: String,
    pub status_path: path::PathBuf,
    pub rate_minimum_path: path::PathBuf,
}

impl DeviceHandle {
    pub fn from_entry(entry: &path::Path) -> Self {
        let name = entry
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        let status_path = entry.join(K_WRITEBACK_RATE_DEBUG);
        let rate_minimum_path = status_path
            .parent()
            .unwrap_or(entry)
            .join(K_WRITEBACK_RATE_MINIMUM);
        Self {
            name,
            status_path,
            rate_minimum_path,
        }
    }
}

pub struct BcacheDiscovery {
    root: path::PathBuf,
    keyword: String,
}

impl BcacheDiscovery {
    pub fn new(root: impl Into<path::PathBuf>, keyword: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            keyword: keyword.into(),
        }
    }
}

impl DeviceDiscovery for BcacheDiscovery {
    fn discover(&self) -> Result<Vec<DeviceHandle>, TunerError> {
        let mut found = Vec::new();
        traversal::walk_and_collect(
            &self.root,
            &|entry, ft| {
                if ft.is_dir() {
                    TraversalAction::Descend
                } else if entry.file_name().to_string_lossy().contains(&*self.keyword) {
                    TraversalAction::Collect
                } else {
                    TraversalAction::Skip
                }
            },
            0,
            MAX_WALK_DEPTH,
            &mut found,
        )
        .map_err(|e| {
            TunerError::DiscoveryFailure(format!("Scan of {} failed: {e}", self.root.display()))
        })?;
        Ok(found.iter().map(|p| DeviceHandle::from_entry(p)).collect())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn handle_paths_follow_sysfs_layout() {
        let handle = DeviceHandle::from_entry(path::Path::new("/sys/block/bcache0"));
        assert_eq!(handle.name, "bcache0");
        assert_eq!(
            handle.status_path,
            path::Path::new("/sys/block/bcache0/bcache/writeback_rate_debug")
        );
        assert_eq!(
            handle.rate_minimum_path,
            path::Path::new("/sys/block/bcache0/bcache/writeback_rate_minimum")
        );
    }

    fn link_device(sysfs: &path::Path, name: &str) {
        let real = sysfs.join("devices/virtual/block").join(name);
        fs::create_dir_all(real.join("bcache")).unwrap();
        std::os::unix::fs::symlink(&real, sysfs.join("block").join(name)).unwrap();
    }

    #[test]
    fn finds_keyword_links_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let block = dir.path().join("block");
        fs::create_dir(&block).unwrap();
        for name in ["sda", "bcache1", "nvme0n1", "bcache0"] {
            link_device(dir.path(), name);
        }
        let devices = BcacheDiscovery::new(&block, "bcache").discover().unwrap();
        let names: Vec<_> = devices.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["bcache0", "bcache1"]);
    }

    #[test]
    fn backing_device_bcache_dir_is_not_a_device() {
        let dir = tempfile::tempdir().unwrap();
        let block = dir.path().join("block");
        fs::create_dir_all(block.join("sda/bcache")).unwrap();
        fs::write(block.join("sda/bcache/writeback_rate_minimum"), "2048\n").unwrap();
        link_device(dir.path(), "bcache0");
        let devices = BcacheDiscovery::new(&block, "bcache").discover().unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].name, "bcache0");
    }

    #[test]
    fn symlinked_devices_are_matched_but_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        let block = dir.path().join("block");
        fs::create_dir(&block).unwrap();
        link_device(dir.path(), "bcache0");
        std::os::unix::fs::symlink(dir.path().join("devices"), block.join("sda")).unwrap();
        let devices = BcacheDiscovery::new(&block, "bcache").discover().unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].name, "bcache0");
    }

    #[test]
    fn empty_root_yields_no_devices() {
        let dir = tempfile::tempdir().unwrap();
        let devices = BcacheDiscovery::new(dir.path(), "bcache").discover().unwrap();
        assert!(devices.is_empty());
    }

    #[test]
    fn unreadable_root_is_a_discovery_failure() {
        let dir = tempfile::tempdir().unwrap();
        let res = BcacheDiscovery::new(dir.path().join("missing"), "bcache").discover();
        assert!(matches!(res, Err(TunerError::DiscoveryFailure(_))));
    }
}
