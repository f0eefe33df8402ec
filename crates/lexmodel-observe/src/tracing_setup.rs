//! Tracing subscriber initialization with human or JSON output.
//!
//! # Usage
//!
//! ```no_run
//! use lexmodel_observe::{TracingOptions, init_tracing};
//!
//! init_tracing(&TracingOptions { verbosity: 1, ..Default::default() }).unwrap();
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// How much to log and in which format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingOptions {
    /// Number of `-v` flags given.
    pub verbosity: u8,
    /// Only errors, regardless of `verbosity`.
    pub quiet: bool,
    /// One JSON object per event instead of the human format.
    pub json: bool,
}

impl TracingOptions {
    /// Filter directive used when `RUST_LOG` is unset.
    pub fn default_directive(&self) -> &'static str {
        match self.verbosity {
            0 if self.quiet => "error",
            0 => "warn",
            1 => "info,lexmodel_core=debug,lexm=debug",
            _ => "trace",
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// - Events go to stderr so command output on stdout stays machine-readable.
/// - `RUST_LOG` takes precedence over the verbosity flags.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init_tracing(
    options: &TracingOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.default_directive()));

    let (human, json) = if options.json {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(std::io::stderr);
        (None, Some(layer))
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr);
        (Some(layer), None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(human)
        .with(json)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_follows_flags() {
        let mut options = TracingOptions::default();
        assert_eq!(options.default_directive(), "warn");

        options.quiet = true;
        assert_eq!(options.default_directive(), "error");

        options.verbosity = 1;
        assert!(options.default_directive().contains("lexmodel_core=debug"));

        options.verbosity = 3;
        assert_eq!(options.default_directive(), "trace");
    }
}
