//! SCSI Core Implementation
//!
//! The OS passthrough boundary: a [`Passthrough`] trait and its binding for
//! [`DeviceHandle`] on each supported platform.

use crate::error::Result;
use tracing::debug;

#[cfg(windows)]
use tracing::warn;

use super::device::DeviceHandle;
use super::packet::CommandPacket;
use super::sense::SenseData;
use super::types::DataDirection;

/// One packet command as handed to the OS: command bytes, data buffer,
/// direction and timeout going in; sense coming back.
#[derive(Debug)]
pub struct PacketRequest<'a> {
    pub packet: CommandPacket,
    pub buffer: &'a mut [u8],
    pub direction: DataDirection,
    /// Never negative; the executor rejects timeouts that overflow `i32`
    pub timeout_ms: i32,
    /// Filled in by the passthrough when the call returns
    pub sense: SenseData,
}

/// Something that can carry a packet command to a drive.
///
/// Implementations return the raw integer status of the passthrough call
/// (negative on failure) and store the sense triple in `request.sense`.
/// `Err` is reserved for the case where no passthrough exists at all.
pub trait Passthrough {
    fn send_packet(&self, request: &mut PacketRequest<'_>) -> Result<i32>;
}

impl<T: Passthrough + ?Sized> Passthrough for &T {
    fn send_packet(&self, request: &mut PacketRequest<'_>) -> Result<i32> {
        (**self).send_packet(request)
    }
}

impl Passthrough for DeviceHandle {
    /// CDROM_SEND_PACKET on Linux, IOCTL_SCSI_PASS_THROUGH_DIRECT on Windows
    fn send_packet(&self, request: &mut PacketRequest<'_>) -> Result<i32> {
        #[cfg(target_os = "linux")]
        {
            use super::constants::CDROM_SEND_PACKET;
            use super::ffi::{CdromGenericCommand, RequestSense};
            use std::os::unix::io::AsRawFd;

            let Some(ref file) = self.file else {
                return Err(crate::error::RustDvdError::Io(std::io::Error::from_raw_os_error(
                    libc::EBADF,
                )));
            };

            let mut sense = RequestSense::default();
            let mut cgc = CdromGenericCommand::zeroed();
            cgc.cmd.copy_from_slice(request.packet.as_bytes());
            cgc.buffer = request.buffer.as_mut_ptr();
            cgc.buflen = request.buffer.len() as libc::c_uint;
            cgc.sense = &mut sense;
            cgc.data_direction = request.direction.cgc_value();
            cgc.timeout = request.timeout_ms;

            let status = unsafe {
                libc::ioctl(
                    file.as_raw_fd(),
                    CDROM_SEND_PACKET as _,
                    &mut cgc as *mut CdromGenericCommand,
                )
            };
            if status < 0 {
                debug!(
                    "CDROM_SEND_PACKET failed on {}: {}",
                    self.device_path,
                    std::io::Error::last_os_error()
                );
            }

            request.sense = SenseData::from_fixed_format(&sense.bytes);
            Ok(status)
        }

        #[cfg(windows)]
        {
            use super::constants::{IOCTL_SCSI_PASS_THROUGH_DIRECT, SENSE_INFO_LEN};
            use super::ffi::ScsiPassThroughDirect;
            use winapi::shared::{
                minwindef::{DWORD, UCHAR, ULONG, USHORT},
                ntdef::PVOID,
            };
            use winapi::um::{errhandlingapi::GetLastError, ioapiset::DeviceIoControl};

            let header_len = std::mem::size_of::<ScsiPassThroughDirect>();
            let cdb = request.packet.as_bytes();

            // Create SCSI Pass Through Direct buffer with the sense area appended
            let mut scsi_buffer = vec![0u8; header_len + SENSE_INFO_LEN];

            unsafe {
                let scsi_direct = scsi_buffer.as_mut_ptr() as *mut ScsiPassThroughDirect;
                std::ptr::write_bytes(scsi_direct, 0, 1);

                (*scsi_direct).length = header_len as USHORT;
                (*scsi_direct).cdb_length = cdb.len() as UCHAR;
                (*scsi_direct).data_buffer = request.buffer.as_mut_ptr() as PVOID;
                (*scsi_direct).sense_info_length = SENSE_INFO_LEN as UCHAR;
                (*scsi_direct).sense_info_offset = header_len as ULONG;
                (*scsi_direct).data_transfer_length = request.buffer.len() as ULONG;
                (*scsi_direct).timeout_value = (request.timeout_ms / 1000).max(1) as ULONG;
                (*scsi_direct).data_in = request.direction.sptd_value();
                (*scsi_direct).cdb[..cdb.len()].copy_from_slice(cdb);

                let mut bytes_returned: DWORD = 0;
                let ok = DeviceIoControl(
                    self.handle,
                    IOCTL_SCSI_PASS_THROUGH_DIRECT,
                    scsi_buffer.as_mut_ptr() as PVOID,
                    scsi_buffer.len() as DWORD,
                    scsi_buffer.as_mut_ptr() as PVOID,
                    scsi_buffer.len() as DWORD,
                    &mut bytes_returned,
                    std::ptr::null_mut(),
                ) != 0;

                request.sense = SenseData::from_fixed_format(&scsi_buffer[header_len..]);

                if !ok {
                    let error_code = GetLastError();
                    warn!(
                        "SCSI command failed: Windows error code 0x{:08X}, CDB: {}",
                        error_code, request.packet
                    );
                    return Ok(-1);
                }

                // CHECK CONDITION and friends are a failed command, as on Linux
                if (*scsi_direct).scsi_status != 0 {
                    debug!("SCSI status 0x{:02X}", (*scsi_direct).scsi_status);
                    return Ok(-1);
                }

                Ok(0)
            }
        }

        #[cfg(not(any(target_os = "linux", windows)))]
        {
            let _ = request;
            Err(crate::error::RustDvdError::unsupported(format!(
                "no packet passthrough binding for {}",
                std::env::consts::OS
            )))
        }
    }
}
