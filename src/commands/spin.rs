//! Spin Command Handler
//!
//! Handles the `start` and `stop` subcommands.

use super::blocking;
use rust_dvd::{Drive, Result};
use tracing::{debug, info, warn};

pub async fn execute(
    device: String,
    start: bool,
    timeout_seconds: u32,
    trace: bool,
) -> Result<()> {
    let action = if start { "start" } else { "stop" };
    info!("Sending {} to {}", action, device);

    let result = blocking(move || {
        let drive = Drive::open(&device, timeout_seconds)?;
        debug!("Waiting up to {} s for {}", drive.timeout_seconds(), drive.path());
        let result = if start {
            drive.start(trace)
        } else {
            drive.stop(trace)
        };
        drive.finish(result)
    })
    .await?;

    if !result.is_success() {
        warn!("Drive refused {}: {}", action, result.sense.description());
    }
    result.into_result()?;

    println!("✅ Drive {} command accepted", action);
    Ok(())
}
