use super::constants::SENSE_INFO_LEN;

/// `struct request_sense` from <linux/cdrom.h>, kept as raw fixed-format bytes.
/// The kernel's bitfields only ever describe these 64 bytes, so byte 2 low
/// nibble is the sense key and bytes 12/13 are ASC/ASCQ on every endianness.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RequestSense {
    pub bytes: [u8; SENSE_INFO_LEN],
}

impl Default for RequestSense {
    fn default() -> Self {
        Self {
            bytes: [0u8; SENSE_INFO_LEN],
        }
    }
}

#[cfg(target_os = "linux")]
pub use linux::CdromGenericCommand;

#[cfg(target_os = "linux")]
mod linux {
    use super::RequestSense;
    use crate::scsi::constants::CDB_LEN;
    use libc::{c_int, c_uchar, c_uint, c_void};

    /// `struct cdrom_generic_command` from <linux/cdrom.h>
    #[repr(C)]
    #[derive(Debug)]
    pub struct CdromGenericCommand {
        pub cmd: [c_uchar; CDB_LEN],
        pub buffer: *mut c_uchar,
        pub buflen: c_uint,
        pub stat: c_int,
        pub sense: *mut RequestSense,
        pub data_direction: c_uchar,
        pub quiet: c_int,
        pub timeout: c_int,
        pub reserved: *mut c_void,
    }

    impl CdromGenericCommand {
        /// All-zero command with null pointers, same as the `memset` the kernel API expects
        pub fn zeroed() -> Self {
            Self {
                cmd: [0; CDB_LEN],
                buffer: std::ptr::null_mut(),
                buflen: 0,
                stat: 0,
                sense: std::ptr::null_mut(),
                data_direction: 0,
                quiet: 0,
                timeout: 0,
                reserved: std::ptr::null_mut(),
            }
        }
    }
}

#[cfg(windows)]
pub use windows::ScsiPassThroughDirect;

#[cfg(windows)]
mod windows {
    use winapi::shared::{
        minwindef::{UCHAR, ULONG, USHORT},
        ntdef::PVOID,
    };

    /// SCSI Pass Through Direct structure (SCSI_PASS_THROUGH_DIRECT in ntddscsi.h)
    #[repr(C)]
    #[derive(Debug)]
    pub struct ScsiPassThroughDirect {
        pub length: USHORT,
        pub scsi_status: UCHAR,
        pub path_id: UCHAR,
        pub target_id: UCHAR,
        pub lun: UCHAR,
        pub cdb_length: UCHAR,
        pub sense_info_length: UCHAR,
        pub data_in: UCHAR,
        pub data_transfer_length: ULONG,
        pub timeout_value: ULONG,
        pub data_buffer: PVOID,
        pub sense_info_offset: ULONG,
        pub cdb: [UCHAR; 16],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_sense_matches_kernel_size() {
        assert_eq!(std::mem::size_of::<RequestSense>(), 64);
    }

    #[cfg(all(target_os = "linux", target_pointer_width = "64"))]
    #[test]
    fn test_cgc_layout_on_64bit_linux() {
        // 12 cmd + 4 pad + 8 buffer + 4 buflen + 4 stat + 8 sense
        // + 1 direction + 3 pad + 4 quiet + 4 timeout + 4 pad + 8 reserved
        assert_eq!(std::mem::size_of::<CdromGenericCommand>(), 64);
    }
}
