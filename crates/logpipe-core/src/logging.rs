//! Tracing setup for binaries and tests embedding the pipeline
use tracing::Level;

/// Environment variable holding the log level
pub const LOG_ENV: &str = "LOGPIPE_LOG";

/// Parses a level name; unknown names yield `None`.
pub fn parse_level(name: &str) -> Option<Level> {
    match name.trim().to_ascii_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

/// Reads `LOGPIPE_LOG`, defaulting to INFO.
pub fn level_from_env() -> Level {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or(Level::INFO)
}

/// Installs the global fmt subscriber. Later calls are ignored.
pub fn init_tracing(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
