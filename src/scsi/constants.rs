// MMC/SCSI constant definitions

/// Every packet sent through the CD-ROM passthrough is a 12-byte CDB
pub const CDB_LEN: usize = 12;

/// Standard INQUIRY allocation length (vendor/product/revision fit in 36 bytes)
pub const INQUIRY_RESPONSE_LEN: usize = 36;
/// Fixed timeout used when identifying the drive
pub const INQUIRY_TIMEOUT_SECS: u32 = 10;

/// START STOP UNIT returns no data but the passthrough still wants a read buffer
pub const START_STOP_RESPONSE_LEN: usize = 8;

/// Size of the kernel's `struct request_sense` and of the Windows sense area
pub const SENSE_INFO_LEN: usize = 64;

// Offsets into a fixed-format sense buffer
pub const SENSE_KEY_OFFSET: usize = 2;
pub const SENSE_ASC_OFFSET: usize = 12;
pub const SENSE_ASCQ_OFFSET: usize = 13;

// Identification fields inside the INQUIRY response: (offset, length)
pub const INQUIRY_VENDOR: (usize, usize) = (8, 8);
pub const INQUIRY_PRODUCT_ID: (usize, usize) = (16, 16);
pub const INQUIRY_REVISION: (usize, usize) = (32, 4);

// Linux <linux/cdrom.h>
#[cfg(target_os = "linux")]
pub const CDROM_SEND_PACKET: u32 = 0x5393;

// Windows SCSI data direction
#[cfg(windows)]
pub const SCSI_IOCTL_DATA_OUT: u8 = 0;
#[cfg(windows)]
pub const SCSI_IOCTL_DATA_IN: u8 = 1;
#[cfg(windows)]
pub const SCSI_IOCTL_DATA_UNSPECIFIED: u8 = 2;

// Define IOCTL_SCSI_PASS_THROUGH_DIRECT constant
#[cfg(windows)]
pub const IOCTL_SCSI_PASS_THROUGH_DIRECT: u32 = 0x0004D014;
