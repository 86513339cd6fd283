//! Browser console logging through `console_log`.
//!
//! Installed once by `init()`. Without it (native tests) log macros are no-ops.

use log::{Level, LevelFilter};

/// Install the console logger at `level`; later calls only adjust the level.
pub fn install(level: Level) {
    if console_log::init_with_level(level).is_err() {
        log::set_max_level(level.to_level_filter());
    }
}

/// Map a JS-friendly level name to a filter ("off", "error" ... "trace").
pub fn parse_level(name: &str) -> Result<LevelFilter, String> {
    name.parse::<LevelFilter>()
        .map_err(|_| format!("unknown log level: {}", name))
}
