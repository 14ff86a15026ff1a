//! Author: [Seclususs](https://github.com/seclususs)

use std::{fmt, io};

#[derive(Debug)]
pub enum TunerError {
    DiscoveryFailure(String),
    MalformedReport(String),
    StoreUnavailable(String),
    InvalidPath(String),
    InvalidConfig(String),
    IoError(io::Error),
}

impl fmt::Display for TunerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TunerError::DiscoveryFailure(s) => write!(f, "Discovery Failure: {s}"),
            TunerError::MalformedReport(s) => write!(f, "Malformed Report: {s}"),
            TunerError::StoreUnavailable(s) => write!(f, "Store Unavailable: {s}"),
            TunerError::InvalidPath(s) => write!(f, "Invalid Path: {s}"),
            TunerError::InvalidConfig(s) => write!(f, "Invalid Config: {s}"),
            TunerError::IoError(e) => write!(f, "I/O Error: {e}"),
        }
    }
}

impl std::error::Error for TunerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TunerError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TunerError {
    fn from(err: io::Error) -> Self {
        TunerError::IoError(err)
    }
}

impl From<rustix::io::Errno> for TunerError {
    fn from(err: rustix::io::Errno) -> Self {
        TunerError::IoError(err.into())
    }
}

impl From<regex::Error> for TunerError {
    fn from(err: regex::Error) -> Self {
        TunerError::InvalidConfig(format!("Status pattern rejected: {err}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleSummary {
    pub discovered: usize,
    pub applied: usize,
    pub unchanged: usize,
    pub failed: usize,
}
