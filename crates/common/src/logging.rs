//! Tracing setup for the affect tools.
//!
//! Reports are printed on stdout, so every diagnostic goes to stderr.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Fallback when the configured directives do not parse.
const FALLBACK_DIRECTIVES: &str = "info";

/// Filter directives to use. A non-blank `RUST_LOG` wins over the
/// configured level.
pub fn filter_directives(config: &LoggingConfig, rust_log: Option<&str>) -> String {
    match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() => directives.to_string(),
        _ => config.level.trim().to_string(),
    }
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let directives = filter_directives(config, std::env::var("RUST_LOG").ok().as_deref());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("Invalid log filter '{directives}' ({e}), using '{FALLBACK_DIRECTIVES}'");
        EnvFilter::new(FALLBACK_DIRECTIVES)
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    installed.is_ok()
}
