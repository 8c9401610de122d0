// Logger setup and conditional logging macros - macros are only active in debug builds

use log::LevelFilter;

/// Installs `env_logger`. `RUST_LOG` is respected unless `verbose` forces debug output.
pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    // A logger may already be installed (e.g. by a test harness)
    let _ = builder.try_init();
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}
