//! Logger setup.
//!
//! Logs go to stderr through `env_logger`. The filter is read from
//! `DAWN_LOG` (same syntax as `RUST_LOG`) and defaults to `warn` so the
//! terminal page stays readable.

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "DAWN_LOG";

/// Filter used when `DAWN_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize the global logger.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let env = env_logger::Env::new().filter_or(LOG_ENV, DEFAULT_FILTER);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_secs()
        .try_init();
}
