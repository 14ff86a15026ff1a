//! Author: [Seclususs](https://github.com/seclususs)

use crate::config::loop_settings::MAX_PARAMETER_LEN;
use crate::daemon::traits::ParameterAccess;
use crate::daemon::types::TunerError;

use std::{fs, path};

fn validate_path_secure(path: &path::Path, allowed_root: &path::Path) -> Result<(), TunerError> {
    let canonical_path = fs::canonicalize(path).map_err(|e| {
        TunerError::InvalidPath(format!("Path resolution failed for {}: {e}", path.display()))
    })?;
    if canonical_path.starts_with(allowed_root) {
        Ok(())
    } else {
        Err(TunerError::InvalidPath(format!(
            "Access denied: {} is outside {}",
            canonical_path.display(),
            allowed_root.display()
        )))
    }
}

pub fn read_to_string(path: &path::Path) -> Result<String, TunerError> {
    fs::read_to_string(path).map_err(TunerError::IoError)
}

pub fn parse_parameter(content: &str) -> Result<u64, TunerError> {
    let trimmed = content.strip_suffix('\n').unwrap_or(content);
    trimmed.trim().parse::<u64>().map_err(|_| {
        TunerError::StoreUnavailable(format!("Parameter is not an integer: '{trimmed}'"))
    })
}

pub fn write_parameter(path: &path::Path, value: u64) -> Result<(), TunerError> {
    let mut buffer = itoa::Buffer::new();
    let bytes = buffer.format(value).as_bytes();
    let mut write_buf = [0u8; MAX_PARAMETER_LEN];
    let len = bytes.len();
    write_buf[..len].copy_from_slice(bytes);
    write_buf[len] = b'\n';
    let fd = rustix::fs::openat(
        rustix::fs::CWD,
        path,
        rustix::fs::OFlags::WRONLY | rustix::fs::OFlags::TRUNC | rustix::fs::OFlags::CLOEXEC,
        rustix::fs::Mode::empty(),
    )
    .map_err(|e| {
        log::debug!("Openat failed for {}: {e}", path.display());
        TunerError::from(e)
    })?;
    let written = rustix::io::write(&fd, &write_buf[..=len]).map_err(|e| {
        log::debug!("Write raw failed '{value}' -> {}: {e}", path.display());
        TunerError::from(e)
    })?;
    if written != len + 1 {
        return Err(TunerError::StoreUnavailable(format!(
            "Short write to {}: {written}/{} bytes",
            path.display(),
            len + 1
        )));
    }
    Ok(())
}

/// Reads and writes parameter files confined to one sysfs tree.
pub struct SysfsParameter {
    allowed_root: path::PathBuf,
}

impl SysfsParameter {
    pub fn new(root: &path::Path) -> Result<Self, TunerError> {
        let allowed_root = fs::canonicalize(root).map_err(|e| {
            TunerError::InvalidPath(format!("Sysfs root {} unusable: {e}", root.display()))
        })?;
        Ok(Self { allowed_root })
    }
}

impl ParameterAccess for SysfsParameter {
    fn read_value(&self, path: &path::Path) -> Result<u64, TunerError> {
        validate_path_secure(path, &self.allowed_root)?;
        parse_parameter(&read_to_string(path)?)
    }
    fn write_value(&mut self, path: &path::Path, value: u64) -> Result<(), TunerError> {
        validate_path_secure(path, &self.allowed_root)?;
        write_parameter(path, value)
    }
}
