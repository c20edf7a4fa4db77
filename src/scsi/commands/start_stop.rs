//! START STOP UNIT: spin the disc up or down

use crate::error::Result;
use tracing::debug;

use super::super::constants::START_STOP_RESPONSE_LEN;
use super::super::core::Passthrough;
use super::super::executor::{execute_packet, ExecutionResult};
use super::super::packet::CommandPacket;

/// Start (`true`) or stop (`false`) the spindle.
///
/// Returns the raw execution result; a negative status is not turned into an
/// error here so callers can inspect the sense data.
pub fn drive_spin<P: Passthrough + ?Sized>(
    device: &P,
    start: bool,
    timeout_seconds: u32,
    verbose: bool,
) -> Result<ExecutionResult> {
    debug!("Sending START STOP UNIT (start={})", start);

    let mut buffer = [0u8; START_STOP_RESPONSE_LEN];
    execute_packet(
        device,
        &CommandPacket::start_stop(start),
        &mut buffer,
        timeout_seconds,
        verbose,
    )
}
