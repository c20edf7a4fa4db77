use crate::error::Result;
use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparsable
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber: `RUST_LOG` if set, otherwise debug/info by `verbose`
pub fn init(verbose: bool) -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(fmt_layer)
        .try_init()
        .map_err(|e| crate::error::RustDvdError::Generic(anyhow::anyhow!(e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_default_directive_follows_verbose() {
        assert_eq!(default_directive(true), "debug");
        assert_eq!(default_directive(false), "info");
    }

    #[test]
    fn test_filter_without_rust_log() {
        // An explicit RUST_LOG in the test environment takes precedence
        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
            return;
        }
        assert_eq!(build_filter(true).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(build_filter(false).max_level_hint(), Some(LevelFilter::INFO));
    }
}
