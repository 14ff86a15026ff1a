//! Author: [Seclususs](https://github.com/seclususs)

use log::LevelFilter;

pub fn level_for(verbosity: u8) -> LevelFilter {
    let base = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    match verbosity {
        0 => base,
        1 => base.max(LevelFilter::Debug),
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbosity: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_env("RUST_LOG")
        .format_target(false)
        .try_init();
}
