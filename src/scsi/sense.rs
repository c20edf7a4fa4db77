//! SCSI Sense Data Parsing
//!
//! This module handles parsing and interpretation of SCSI sense data.

use serde::Serialize;
use std::fmt;

use super::constants::*;

/// Sense key / additional sense code / qualifier reported with a command status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SenseData {
    pub sense_key: u8,
    pub additional_sense_code: u8,
    pub additional_sense_code_qualifier: u8,
}

impl SenseData {
    pub fn new(sense_key: u8, asc: u8, ascq: u8) -> Self {
        Self {
            sense_key,
            additional_sense_code: asc,
            additional_sense_code_qualifier: ascq,
        }
    }

    /// Parse fixed-format sense bytes (`struct request_sense` / SPTD sense area).
    /// Missing bytes read as zero.
    pub fn from_fixed_format(sense_data: &[u8]) -> Self {
        let byte = |offset: usize| sense_data.get(offset).copied().unwrap_or(0);
        Self {
            sense_key: byte(SENSE_KEY_OFFSET) & 0x0F,
            additional_sense_code: byte(SENSE_ASC_OFFSET),
            additional_sense_code_qualifier: byte(SENSE_ASCQ_OFFSET),
        }
    }

    pub fn is_no_sense(&self) -> bool {
        self.sense_key == 0x00
    }

    pub fn sense_key_name(&self) -> &'static str {
        match self.sense_key {
            0x00 => "NO SENSE",
            0x01 => "RECOVERED ERROR",
            0x02 => "NOT READY",
            0x03 => "MEDIUM ERROR",
            0x04 => "HARDWARE ERROR",
            0x05 => "ILLEGAL REQUEST",
            0x06 => "UNIT ATTENTION",
            0x07 => "DATA PROTECT",
            0x08 => "BLANK CHECK",
            0x0B => "ABORTED COMMAND",
            _ => "RESERVED",
        }
    }

    /// Human readable summary for common optical drive conditions
    pub fn description(&self) -> String {
        match (
            self.sense_key,
            self.additional_sense_code,
            self.additional_sense_code_qualifier,
        ) {
            (0x00, _, _) => "No sense".to_string(),
            (0x02, 0x04, 0x01) => "Drive not ready - becoming ready".to_string(),
            (0x02, 0x04, _) => "Drive not ready".to_string(),
            (0x02, 0x3A, _) => "Medium not present".to_string(),
            (0x03, 0x11, _) => "Unrecovered read error".to_string(),
            (0x05, 0x20, 0x00) => "Invalid command operation code".to_string(),
            (0x05, 0x21, 0x00) => "Logical block address out of range".to_string(),
            (0x05, 0x24, 0x00) => "Invalid field in CDB".to_string(),
            (0x05, 0x6F, _) => "Copy protection key exchange failure".to_string(),
            (0x06, 0x28, 0x00) => "Unit attention - medium may have changed".to_string(),
            (0x06, 0x29, _) => "Unit attention - power on or reset".to_string(),
            _ => format!(
                "{} - ASC/ASCQ: 0x{:02X}/0x{:02X}",
                self.sense_key_name(),
                self.additional_sense_code,
                self.additional_sense_code_qualifier
            ),
        }
    }
}

impl fmt::Display for SenseData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}/{:02X}/{:02X}",
            self.sense_key, self.additional_sense_code, self.additional_sense_code_qualifier
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_format_parsing() {
        let mut raw = [0u8; SENSE_INFO_LEN];
        raw[0] = 0x70;
        raw[2] = 0xE2; // filemark/EOM/ILI bits set, key 0x02
        raw[12] = 0x3A;
        raw[13] = 0x01;

        let sense = SenseData::from_fixed_format(&raw);
        assert_eq!(sense, SenseData::new(0x02, 0x3A, 0x01));
        assert_eq!(sense.description(), "Medium not present");
    }

    #[test]
    fn test_short_sense_reads_zero() {
        let sense = SenseData::from_fixed_format(&[0x70, 0x00, 0x05]);
        assert_eq!(sense, SenseData::new(0x05, 0, 0));
        assert!(SenseData::from_fixed_format(&[]).is_no_sense());
    }

    #[test]
    fn test_display_triple() {
        assert_eq!(SenseData::new(0x05, 0x24, 0x00).to_string(), "05/24/00");
    }

    #[test]
    fn test_description_fallback() {
        let sense = SenseData::new(0x04, 0x44, 0x00);
        assert_eq!(sense.description(), "HARDWARE ERROR - ASC/ASCQ: 0x44/0x00");
    }
}
