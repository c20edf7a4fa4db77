/// Data transfer direction of a packet command (mirrors `CGC_DATA_*` in <linux/cdrom.h>)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DataDirection {
    Unknown = 0,
    Write = 1,
    Read = 2,
    None = 3,
}

impl DataDirection {
    /// Value for `cdrom_generic_command.data_direction`
    pub fn cgc_value(self) -> u8 {
        self as u8
    }

    /// Value for `SCSI_PASS_THROUGH_DIRECT.DataIn`
    #[cfg(windows)]
    pub fn sptd_value(self) -> u8 {
        use super::constants::*;
        match self {
            DataDirection::Read => SCSI_IOCTL_DATA_IN,
            DataDirection::Write => SCSI_IOCTL_DATA_OUT,
            DataDirection::Unknown | DataDirection::None => SCSI_IOCTL_DATA_UNSPECIFIED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cgc_values_match_kernel_header() {
        assert_eq!(DataDirection::Unknown.cgc_value(), 0);
        assert_eq!(DataDirection::Write.cgc_value(), 1);
        assert_eq!(DataDirection::Read.cgc_value(), 2);
        assert_eq!(DataDirection::None.cgc_value(), 3);
    }
}
