//! INQUIRY: vendor / product / revision identification

use crate::error::{Result, RustDvdError};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use super::super::constants::*;
use super::super::core::Passthrough;
use super::super::executor::execute_packet;
use super::super::packet::CommandPacket;

/// Identification strings from a standard INQUIRY response.
///
/// Fields are the raw byte ranges decoded lossily, padding included; a device
/// that is not really a drive may return garbage here with a good status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriveInfo {
    pub vendor: String,
    pub product_id: String,
    pub revision: String,
}

impl DriveInfo {
    /// Slice the identification fields out of a 36-byte INQUIRY response
    pub fn from_inquiry(response: &[u8]) -> Result<Self> {
        if response.len() < INQUIRY_RESPONSE_LEN {
            return Err(RustDvdError::parse(format!(
                "INQUIRY response too short: {} bytes",
                response.len()
            )));
        }

        let field = |(offset, len): (usize, usize)| {
            String::from_utf8_lossy(&response[offset..offset + len]).into_owned()
        };

        Ok(Self {
            vendor: field(INQUIRY_VENDOR),
            product_id: field(INQUIRY_PRODUCT_ID),
            revision: field(INQUIRY_REVISION),
        })
    }
}

impl fmt::Display for DriveInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clean = |s: &str| s.trim_end_matches(|c: char| c == ' ' || c == '\0').to_string();
        write!(
            f,
            "{}/{}/{}",
            clean(&self.vendor),
            clean(&self.product_id),
            clean(&self.revision)
        )
    }
}

/// Identify the drive with a 36-byte INQUIRY and a fixed 10 second timeout.
///
/// A negative status yields [`RustDvdError::IdentificationFailure`]; the
/// response buffer is not looked at in that case. No retry is attempted.
pub fn drive_info<P: Passthrough + ?Sized>(device: &P, verbose: bool) -> Result<DriveInfo> {
    debug!("Sending INQUIRY");

    let mut buffer = [0u8; INQUIRY_RESPONSE_LEN];
    let result = execute_packet(
        device,
        &CommandPacket::inquiry(),
        &mut buffer,
        INQUIRY_TIMEOUT_SECS,
        verbose,
    )?;

    if !result.is_success() {
        warn!("Cannot identify DVD drive: sense {}", result.sense);
        return Err(RustDvdError::IdentificationFailure {
            status: result.status,
            sense: result.sense,
        });
    }

    let info = DriveInfo::from_inquiry(&buffer)?;
    debug!("DVD drive is \"{}\"", info);
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scsi::mock::MockDrive;
    use crate::scsi::sense::SenseData;

    fn canned_inquiry() -> Vec<u8> {
        let mut response = vec![0u8; 36];
        response[0] = 0x05; // CD/DVD device
        response[8..16].copy_from_slice(b"HL-DT-ST");
        response[16..32].copy_from_slice(b"DVD-ROM GDR8082N");
        response[32..36].copy_from_slice(b"0K01");
        response
    }

    #[test]
    fn test_fields_sliced_at_fixed_offsets() {
        let drive = MockDrive::new(0, canned_inquiry());
        let info = drive_info(&drive, false).unwrap();

        assert_eq!(info.vendor, "HL-DT-ST");
        assert_eq!(info.product_id, "DVD-ROM GDR8082N");
        assert_eq!(info.revision, "0K01");
        assert_eq!(info.to_string(), "HL-DT-ST/DVD-ROM GDR8082N/0K01");
    }

    #[test]
    fn test_inquiry_uses_fixed_packet_and_timeout() {
        let drive = MockDrive::new(0, canned_inquiry());
        drive_info(&drive, false).unwrap();

        assert_eq!(drive.last_packet(), Some(CommandPacket::inquiry()));
        assert_eq!(drive.last_timeout_ms(), Some(10_000));
    }

    #[test]
    fn test_failed_status_is_identification_failure() {
        let sense = SenseData::new(0x02, 0x04, 0x01);
        let drive = MockDrive::new(-1, canned_inquiry()).with_sense(sense);

        match drive_info(&drive, false) {
            Err(RustDvdError::IdentificationFailure { status, sense: s }) => {
                assert_eq!(status, -1);
                assert_eq!(s, sense);
            }
            other => panic!("expected IdentificationFailure, got {:?}", other),
        }
    }

    #[test]
    fn test_padding_kept_in_fields_but_trimmed_for_display() {
        let mut response = vec![0u8; 36];
        response[8..16].copy_from_slice(b"ACME    ");
        response[16..32].copy_from_slice(b"SuperDrive      ");
        response[32..36].copy_from_slice(b"1.0 ");

        let info = DriveInfo::from_inquiry(&response).unwrap();
        assert_eq!(info.vendor, "ACME    ");
        assert_eq!(info.to_string(), "ACME/SuperDrive/1.0");
    }

    #[test]
    fn test_garbled_bytes_do_not_fail() {
        let drive = MockDrive::new(0, vec![0xFF; 36]);
        let info = drive_info(&drive, false).unwrap();
        assert_eq!(info.vendor.chars().count(), 8);
        assert_eq!(info.revision.chars().count(), 4);
    }

    #[test]
    fn test_short_response_is_parse_error() {
        assert!(matches!(
            DriveInfo::from_inquiry(&[0u8; 20]),
            Err(RustDvdError::Parse(_))
        ));
    }
}
