//! RustDVD Library
//!
//! Send raw MMC/SCSI packet commands to optical drives through the host's
//! generic CD-ROM/SCSI passthrough, and read back response bytes and sense data.

pub mod cli;
pub mod config;
pub mod cypher;
pub mod drive;
pub mod error;
pub mod logger;
pub mod scsi;
pub mod utils;


// Re-export key types for easier use
pub use drive::Drive;
pub use error::{Result, RustDvdError};
pub use scsi::{
    build_inquiry, build_read12, build_start_stop, close, drive_info, drive_spin, execute, open,
    CommandPacket, DeviceHandle, DriveInfo, ExecutionResult, Opcode, Passthrough, SenseData,
};
