//! This file is part of bcache-rate-tuner.
//! Licensed under the GNU GPL v3 or later.

#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod cli;
pub mod config;
pub mod controllers;
pub mod daemon;
pub mod hal;
pub mod resources;

pub use daemon::runtime::ControlLoop;
pub use daemon::types::{CycleSummary, TunerError};
