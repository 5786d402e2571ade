//! Diagnostic logging on stderr.
//!
//! Stdout carries the user-facing audit transcript, so log events go to
//! stderr and stay quiet unless `--verbose` or `RUST_LOG` asks for them.

use atty::Stream;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is not set.
    pub level: Level,
    /// Whether to include target (module path).
    pub include_target: bool,
    /// Whether to colour the output with ANSI escapes.
    pub ansi: bool,
}

/// Colour only an interactive stderr, and never when `NO_COLOR` is set.
fn ansi_enabled(is_tty: bool, no_color: bool) -> bool {
    is_tty && !no_color
}

fn stderr_ansi() -> bool {
    ansi_enabled(atty::is(Stream::Stderr), std::env::var_os("NO_COLOR").is_some())
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            include_target: false,
            ansi: stderr_ansi(),
        }
    }
}

impl LoggingConfig {
    /// Configuration for `--verbose` runs.
    pub fn verbose() -> Self {
        Self {
            level: Level::DEBUG,
            include_target: true,
            ansi: stderr_ansi(),
        }
    }

    pub fn from_verbosity(verbose: bool) -> Self {
        if verbose {
            Self::verbose()
        } else {
            Self::default()
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("autonist_audit={}", self.level)))
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.include_target)
        .with_ansi(config.ansi);

    let _ = tracing_subscriber::registry()
        .with(config.filter())
        .with(fmt_layer)
        .try_init();
}
