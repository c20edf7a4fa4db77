//! SCSI / MMC packet layer
//!
//! Device handles, the 12-byte packet builder, the passthrough boundary and
//! the executor that ties them together.

pub mod constants;
pub mod ffi;
pub mod types;
mod commands;
mod core;
mod device;
mod executor;
mod packet;
mod sense;

#[cfg(test)]
pub(crate) mod mock;

pub use commands::inquiry::{drive_info, DriveInfo};
pub use commands::start_stop::drive_spin;
pub use constants::*;
pub use self::core::{PacketRequest, Passthrough};
pub use device::{close, open, DeviceHandle};
pub use executor::{execute, execute_packet, ExecutionResult};
pub use packet::{build_inquiry, build_read12, build_start_stop, CommandPacket, Opcode};
pub use sense::SenseData;
pub use types::DataDirection;
