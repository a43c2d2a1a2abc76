//! Diagnostic logging via `tracing`.
//!
//! Everything goes to stderr: stdout carries the report the host reads.
//! `LINTGATE_LOG` (or `RUST_LOG`) takes an `EnvFilter` directive and wins
//! over the verbosity flag.

use std::sync::Once;

use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_ENV: &str = "LINTGATE_LOG";

static INIT: Once = Once::new();

/// Map `-v` occurrences to a level. The default is quiet: warnings only.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_filter(verbose: u8) -> EnvFilter {
    for var in [LOG_ENV, "RUST_LOG"] {
        if let Ok(directives) = std::env::var(var)
            && let Ok(filter) = EnvFilter::try_new(&directives)
        {
            return filter;
        }
    }
    EnvFilter::default().add_directive(LevelFilter::from_level(level_for_verbosity(verbose)).into())
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: u8) {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(build_filter(verbose))
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level_stepwise() {
        assert_eq!(level_for_verbosity(0), Level::WARN);
        assert_eq!(level_for_verbosity(1), Level::INFO);
        assert_eq!(level_for_verbosity(2), Level::DEBUG);
        assert_eq!(level_for_verbosity(9), Level::TRACE);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0);
        init(3);
    }
}
