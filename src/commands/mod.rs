//! Command Handlers Module
//!
//! This module contains handlers for all CLI subcommands.

pub mod cypher;
pub mod info;
pub mod raw;
pub mod spin;

use rust_dvd::{Result, RustDvdError};

/// Run a blocking device session off the async runtime
pub(crate) async fn blocking<T, F>(task: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task).await.map_err(|e| {
        RustDvdError::Generic(anyhow::Error::new(e).context("device task did not complete"))
    })?
}
