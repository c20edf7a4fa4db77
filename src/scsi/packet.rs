//! Command Packet Builder
//!
//! Fixed 12-byte MMC/SCSI command descriptor blocks for the CD-ROM packet interface.

use crate::error::{Result, RustDvdError};
use std::fmt;

use super::constants::{CDB_LEN, INQUIRY_RESPONSE_LEN};

/// Packet command opcodes issued by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    /// SPC INQUIRY
    Inquiry = 0x12,
    /// SBC START STOP UNIT
    StartStopUnit = 0x1B,
    /// MMC READ (12)
    Read12 = 0xA8,
}

impl Opcode {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x12 => Some(Opcode::Inquiry),
            0x1B => Some(Opcode::StartStopUnit),
            0xA8 => Some(Opcode::Read12),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Opcode::Inquiry => "INQUIRY",
            Opcode::StartStopUnit => "START STOP UNIT",
            Opcode::Read12 => "READ(12)",
        }
    }
}

/// A 12-byte command descriptor block, opcode in byte 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandPacket([u8; CDB_LEN]);

impl CommandPacket {
    /// Wrap raw command bytes; anything but exactly 12 bytes is rejected
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let cdb: [u8; CDB_LEN] = bytes
            .try_into()
            .map_err(|_| RustDvdError::InvalidCommandLength(bytes.len()))?;
        Ok(Self(cdb))
    }

    /// INQUIRY requesting the standard 36-byte response
    pub fn inquiry() -> Self {
        let mut cdb = [0u8; CDB_LEN];
        cdb[0] = Opcode::Inquiry.code();
        cdb[4] = INQUIRY_RESPONSE_LEN as u8; // Allocation length
        Self(cdb)
    }

    /// READ (12): big-endian LBA in bytes 2..6, transfer length in bytes 6..10.
    ///
    /// Builder only; no drive-level operation issues this packet yet.
    pub fn read12(logical_block_address: u32, block_count: u32) -> Self {
        let mut cdb = [0u8; CDB_LEN];
        cdb[0] = Opcode::Read12.code();
        cdb[2..6].copy_from_slice(&logical_block_address.to_be_bytes());
        cdb[6..10].copy_from_slice(&block_count.to_be_bytes());
        Self(cdb)
    }

    /// START STOP UNIT with the START bit set or cleared
    pub fn start_stop(start: bool) -> Self {
        let mut cdb = [0u8; CDB_LEN];
        cdb[0] = Opcode::StartStopUnit.code();
        cdb[4] = start as u8;
        Self(cdb)
    }

    pub fn as_bytes(&self) -> &[u8; CDB_LEN] {
        &self.0
    }

    pub fn opcode(&self) -> Option<Opcode> {
        Opcode::from_code(self.0[0])
    }
}

impl fmt::Display for CommandPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

/// Build the 12-byte SCSI INQUIRY packet
pub fn build_inquiry() -> CommandPacket {
    CommandPacket::inquiry()
}

/// Build the 12-byte MMC READ (12) packet
pub fn build_read12(logical_block_address: u32, block_count: u32) -> CommandPacket {
    CommandPacket::read12(logical_block_address, block_count)
}

/// Build the 12-byte START STOP UNIT packet
pub fn build_start_stop(start: bool) -> CommandPacket {
    CommandPacket::start_stop(start)
}
