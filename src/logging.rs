//! Logger bootstrap for the headless runner and tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// When `verbose` is `true`, debug messages such as per-tick tile contacts are
/// printed. Otherwise only info level and above are shown. `RUST_LOG` takes
/// precedence over both.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None);

    // Repeated calls (one per test binary thread) find a logger already set.
    if builder.try_init().is_err() {
        log::trace!("logger already initialised");
    }
}
