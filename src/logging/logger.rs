// file: src/logging/logger.rs
// version: 1.0.0
// guid: e7b3a05d-2c94-4f18-86ea-4d1f0c9b7e62

//! Logger initialization and configuration
//!
//! All output goes to stderr; stdout is reserved for emitted topologies.

use crate::{error::TopologyError, Result};
use tracing::Instrument;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| TopologyError::config(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}

/// Initialize structured JSON logging, filtered by `RUST_LOG`
pub fn init_json_logger() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| {
            TopologyError::config(format!("Failed to initialize JSON logger: {}", e))
        })?;

    Ok(())
}

/// Run `f` inside an `operation` span
pub fn with_operation_span<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let span = tracing::info_span!("operation", name = operation);
    let _enter = span.enter();
    f()
}

/// Run the future produced by `f` inside an `operation` span
pub async fn with_async_operation_span<F, Fut, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = R>,
{
    let span = tracing::info_span!("operation", name = operation);
    async move { f().await }.instrument(span).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_only_once() {
        // The global subscriber can be set once per process; whichever
        // initializer runs second must report an error instead of panicking.
        let first = init_logger(true, false);
        let second = init_json_logger();
        assert!(first.is_err() || second.is_err());
    }

    #[test]
    fn test_with_operation_span() {
        // Arrange
        let mut executed = false;

        // Act
        let result = with_operation_span("build_topology", || {
            executed = true;
            "built"
        });

        // Assert
        assert!(executed);
        assert_eq!(result, "built");
    }

    #[tokio::test]
    async fn test_with_async_operation_span() {
        // Act
        let result = with_async_operation_span("write_output", || async {
            tokio::time::sleep(std::time::Duration::from_millis(1)).await;
            42
        })
        .await;

        // Assert
        assert_eq!(result, 42);
    }
}
