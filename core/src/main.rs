//! Author: [Seclususs](https://github.com/seclususs)

use bcache_rate_tuner::cli::Cli;
use bcache_rate_tuner::daemon::logging;
use bcache_rate_tuner::ControlLoop;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = match cli.to_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if !rustix::process::geteuid().is_root() {
        log::warn!("Not running as root; writes to writeback_rate_minimum will likely fail.");
    }
    let mut control = match ControlLoop::from_config(&config) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Startup failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if cli.once {
        return match control.run_cycle() {
            Ok(summary) => {
                log::info!(
                    "{} devices, {} applied, {} unchanged, {} failed",
                    summary.discovered,
                    summary.applied,
                    summary.unchanged,
                    summary.failed
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("Cycle aborted: {}", e);
                ExitCode::FAILURE
            }
        };
    }
    control.run_forever()
}
