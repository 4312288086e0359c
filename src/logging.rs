// Logging setup for contribution-stats
//
// Console logging through env_logger. A level given on the command line is
// used as is; otherwise RUST_LOG, when set, takes precedence over the
// configured level.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Environment variable consulted before the configured level
pub const LOG_ENV: &str = "RUST_LOG";

/// Parses a level name, falling back to `Info` for unknown values
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Info)
}

fn builder(level: &str, explicit: bool) -> Builder {
    let filter = parse_level(level);

    let mut builder = if explicit {
        let mut builder = Builder::new();
        builder.filter_level(filter);
        builder
    } else {
        Builder::from_env(Env::default().filter_or(LOG_ENV, filter.to_string().to_lowercase()))
    };

    builder.format_timestamp_secs().format_target(false);
    builder
}

/// Initializes the global logger
///
/// `explicit` marks a level passed on the command line, which overrides
/// `RUST_LOG`. Returns false when a logger was already installed, which
/// happens when tests or an embedding application set one up first.
pub fn init(level: &str, explicit: bool) -> bool {
    builder(level, explicit).try_init().is_ok()
}
