//! Raw Command Handler
//!
//! Handles the `command` subcommand: send an arbitrary 12-byte packet and dump the reply.

use super::blocking;
use rust_dvd::utils::{hex_dump, parse_hex_bytes};
use rust_dvd::{Drive, Result, RustDvdError};
use tracing::info;

pub async fn execute(
    device: String,
    cdb: String,
    length: usize,
    timeout_seconds: u32,
    trace: bool,
) -> Result<()> {
    let command = parse_hex_bytes(&cdb)?;
    if command.len() != rust_dvd::scsi::CDB_LEN {
        return Err(RustDvdError::InvalidCommandLength(command.len()));
    }
    info!("Sending raw command to {}: {}", device, hex::encode(&command));

    let (result, response) = blocking(move || {
        let drive = Drive::open(&device, timeout_seconds)?;
        let mut response = vec![0u8; length];
        let result = drive.command(&command, &mut response, trace);
        drive.finish(result).map(|result| (result, response))
    })
    .await?;

    println!("Status: {}", result.status);
    println!("Sense:  {} ({})", result.sense, result.sense.description());

    if result.is_success() {
        print!("{}", hex_dump(&response));
    }

    result.into_result()?;
    Ok(())
}
