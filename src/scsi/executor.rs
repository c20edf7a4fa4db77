//! Command Executor
//!
//! Sends one 12-byte packet through a [`Passthrough`] and reports status and sense.

use crate::error::{Result, RustDvdError};
use serde::Serialize;
use tracing::{info, trace};

use super::core::{PacketRequest, Passthrough};
use super::packet::{CommandPacket, Opcode};
use super::sense::SenseData;
use super::types::DataDirection;

/// Outcome of one packet command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    /// Passthrough return code: `>= 0` accepted by the drive, negative on failure
    pub status: i32,
    /// Sense triple left by the driver. After a failed call this is the last
    /// diagnostic recorded for the handle, which need not belong to this command.
    pub sense: SenseData,
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        self.status >= 0
    }

    /// Turn a negative status into [`RustDvdError::DeviceIo`]
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(RustDvdError::DeviceIo {
                status: self.status,
                sense: self.sense,
            })
        }
    }
}

/// Send a raw command to the drive.
///
/// `command` must be exactly 12 bytes; any other length fails with
/// [`RustDvdError::InvalidCommandLength`] before the drive is touched.
/// `response` is zero-filled and then receives the drive's data; it is only
/// meaningful when the returned status is non-negative. The timeout is given
/// in whole seconds and handed to the OS in milliseconds. Nothing is retried.
pub fn execute<P: Passthrough + ?Sized>(
    device: &P,
    command: &[u8],
    response: &mut [u8],
    timeout_seconds: u32,
    verbose: bool,
) -> Result<ExecutionResult> {
    let packet = CommandPacket::from_slice(command)?;
    execute_packet(device, &packet, response, timeout_seconds, verbose)
}

/// Convert a timeout in seconds to the millisecond count the OS expects.
///
/// The Linux packet interface takes a signed `int`, so anything above
/// `i32::MAX` milliseconds (2_147_483 s) is rejected rather than wrapped.
pub fn timeout_millis(timeout_seconds: u32) -> Result<i32> {
    timeout_seconds
        .checked_mul(1000)
        .and_then(|ms| i32::try_from(ms).ok())
        .ok_or_else(|| {
            RustDvdError::parameter_validation(format!(
                "timeout of {} s does not fit in the driver's millisecond field",
                timeout_seconds
            ))
        })
}

/// [`execute`] for an already validated packet
pub fn execute_packet<P: Passthrough + ?Sized>(
    device: &P,
    packet: &CommandPacket,
    response: &mut [u8],
    timeout_seconds: u32,
    verbose: bool,
) -> Result<ExecutionResult> {
    let timeout_ms = timeout_millis(timeout_seconds)?;
    response.fill(0);

    let name = packet.opcode().map_or("vendor specific", Opcode::name);
    if verbose {
        info!("Executing MMC command: {} ({})", packet, name);
    } else {
        trace!("Executing MMC command: {} ({})", packet, name);
    }

    let mut request = PacketRequest {
        packet: *packet,
        buffer: response,
        direction: DataDirection::Read,
        timeout_ms,
        sense: SenseData::default(),
    };

    let status = device.send_packet(&mut request)?;
    let sense = request.sense;

    if verbose {
        info!("Sense data: {} (status {})", sense, status);
    } else {
        trace!("Sense data: {} (status {})", sense, status);
    }

    Ok(ExecutionResult { status, sense })
}
