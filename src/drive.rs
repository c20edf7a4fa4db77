use crate::error::Result;
use crate::scsi::{self, DeviceHandle, DriveInfo, ExecutionResult, Passthrough};
use tracing::{debug, info, warn};

/// Default command timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u32 = 1;

/// An optical drive opened at a path, with a default command timeout
pub struct Drive<P: Passthrough = DeviceHandle> {
    device: P,
    path: String,
    timeout_seconds: u32,
}

impl Drive<DeviceHandle> {
    /// Open the drive at `path`
    pub fn open(path: &str, timeout_seconds: u32) -> Result<Self> {
        let device = DeviceHandle::open(path)?;
        info!("Opened drive {} (timeout {} s)", path, timeout_seconds);
        Ok(Self {
            device,
            path: path.to_string(),
            timeout_seconds,
        })
    }

    /// Release the device and return the OS close status
    pub fn close(self) -> Result<i32> {
        debug!("Closing drive {}", self.path);
        self.device.close()
    }

    /// Close the drive and hand back `result` unchanged.
    ///
    /// The command's outcome wins over the close: a failed close is only
    /// logged, since the packet already reached (or failed to reach) the drive.
    pub fn finish<T>(self, result: Result<T>) -> Result<T> {
        let path = self.path.clone();
        if let Err(e) = self.close() {
            warn!("Failed to close {}: {}", path, e);
        }
        result
    }
}

impl<P: Passthrough> Drive<P> {
    /// Wrap an existing passthrough (any [`Passthrough`], e.g. a test double)
    pub fn with_passthrough(device: P, path: &str, timeout_seconds: u32) -> Self {
        Self {
            device,
            path: path.to_string(),
            timeout_seconds,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn timeout_seconds(&self) -> u32 {
        self.timeout_seconds
    }

    pub fn passthrough(&self) -> &P {
        &self.device
    }

    /// Vendor / product / revision
    pub fn model_info(&self, verbose: bool) -> Result<DriveInfo> {
        scsi::drive_info(&self.device, verbose)
    }

    /// Spin the disc up
    pub fn start(&self, verbose: bool) -> Result<ExecutionResult> {
        scsi::drive_spin(&self.device, true, self.timeout_seconds, verbose)
    }

    /// Spin the disc down
    pub fn stop(&self, verbose: bool) -> Result<ExecutionResult> {
        scsi::drive_spin(&self.device, false, self.timeout_seconds, verbose)
    }

    /// Send a raw 12-byte command using the drive's default timeout
    pub fn command(
        &self,
        command: &[u8],
        response: &mut [u8],
        verbose: bool,
    ) -> Result<ExecutionResult> {
        scsi::execute(&self.device, command, response, self.timeout_seconds, verbose)
    }
}
