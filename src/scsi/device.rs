//! SCSI Device Management
//!
//! Opening and closing the device node a packet command is sent through.

use crate::error::{Result, RustDvdError};
use tracing::debug;

#[cfg(target_os = "linux")]
use std::fs::File;

#[cfg(windows)]
use winapi::{
    shared::ntdef::HANDLE,
    um::{
        errhandlingapi::GetLastError,
        fileapi::{CreateFileA, OPEN_EXISTING},
        handleapi::{CloseHandle, INVALID_HANDLE_VALUE},
        winnt::{FILE_SHARE_READ, FILE_SHARE_WRITE, GENERIC_READ, GENERIC_WRITE},
    },
};

/// Owned handle to an open optical drive.
///
/// Closed by [`DeviceHandle::close`] (which reports the OS status) or on drop.
/// Sharing one handle between threads is not synchronised here; callers that
/// need that must serialise access themselves.
pub struct DeviceHandle {
    #[cfg(target_os = "linux")]
    pub(crate) file: Option<File>,
    #[cfg(windows)]
    pub(crate) handle: HANDLE,
    pub(crate) device_path: String,
}

// SAFETY: the raw HANDLE is owned exclusively by this value and only used
// through &self/&mut self, so moving it to another thread is sound.
#[cfg(windows)]
unsafe impl Send for DeviceHandle {}

impl DeviceHandle {
    /// Open the device node read-only and non-blocking
    pub fn open(device_path: &str) -> Result<Self> {
        debug!("Opening optical device: {}", device_path);

        #[cfg(target_os = "linux")]
        {
            use std::fs::OpenOptions;
            use std::os::unix::fs::OpenOptionsExt;

            let file = OpenOptions::new()
                .read(true)
                .custom_flags(libc::O_NONBLOCK)
                .open(device_path)
                .map_err(|e| RustDvdError::open(device_path, e))?;

            debug!("Device opened successfully: {}", device_path);
            Ok(Self {
                file: Some(file),
                device_path: device_path.to_string(),
            })
        }

        #[cfg(windows)]
        {
            use std::ffi::CString;

            let full_path = windows_device_path(device_path);
            debug!("Full device path: {}", full_path);

            let path_cstring = CString::new(full_path.clone()).map_err(|e| {
                RustDvdError::parameter_validation(format!("Device path conversion error: {}", e))
            })?;

            unsafe {
                // Passthrough needs write access on Windows even for data-in commands
                let handle = CreateFileA(
                    path_cstring.as_ptr(),
                    GENERIC_READ | GENERIC_WRITE,
                    FILE_SHARE_READ | FILE_SHARE_WRITE,
                    std::ptr::null_mut(),
                    OPEN_EXISTING,
                    0,
                    std::ptr::null_mut(),
                );

                if handle == INVALID_HANDLE_VALUE {
                    let error_code = GetLastError();
                    return Err(RustDvdError::open(
                        full_path,
                        std::io::Error::from_raw_os_error(error_code as i32),
                    ));
                }

                debug!("Device opened successfully: {}", device_path);
                Ok(Self {
                    handle,
                    device_path: full_path,
                })
            }
        }

        #[cfg(not(any(target_os = "linux", windows)))]
        {
            Err(RustDvdError::unsupported(format!(
                "no packet passthrough binding for {}",
                std::env::consts::OS
            )))
        }
    }

    pub fn path(&self) -> &str {
        &self.device_path
    }

    /// Release the handle and return the OS close status (0 on success)
    pub fn close(mut self) -> Result<i32> {
        debug!("Closing device: {}", self.device_path);

        #[cfg(target_os = "linux")]
        {
            use std::os::unix::io::IntoRawFd;

            let Some(file) = self.file.take() else {
                return Ok(0);
            };
            let fd = file.into_raw_fd();
            let status = unsafe { libc::close(fd) };
            if status < 0 {
                return Err(std::io::Error::last_os_error().into());
            }
            Ok(status)
        }

        #[cfg(windows)]
        {
            let handle = std::mem::replace(&mut self.handle, INVALID_HANDLE_VALUE);
            if handle == INVALID_HANDLE_VALUE {
                return Ok(0);
            }
            let ok = unsafe { CloseHandle(handle) };
            if ok == 0 {
                let error_code = unsafe { GetLastError() };
                return Err(std::io::Error::from_raw_os_error(error_code as i32).into());
            }
            Ok(0)
        }

        #[cfg(not(any(target_os = "linux", windows)))]
        {
            Ok(0)
        }
    }
}

/// Normalise `D:` or `CdRom0` style names to a `\\.\` device path
#[cfg(windows)]
fn windows_device_path(device_path: &str) -> String {
    if device_path.starts_with(r"\\.\") {
        device_path.to_string()
    } else {
        format!(r"\\.\{}", device_path.trim_end_matches('\\'))
    }
}

/// Implement Drop trait to ensure device handle is properly closed
impl Drop for DeviceHandle {
    fn drop(&mut self) {
        #[cfg(target_os = "linux")]
        if self.file.take().is_some() {
            debug!("Device handle closed: {}", self.device_path);
        }

        #[cfg(windows)]
        unsafe {
            if self.handle != INVALID_HANDLE_VALUE {
                CloseHandle(self.handle);
                self.handle = INVALID_HANDLE_VALUE;
                debug!("Device handle closed: {}", self.device_path);
            }
        }
    }
}

/// Open a device node
pub fn open(device_path: &str) -> Result<DeviceHandle> {
    DeviceHandle::open(device_path)
}

/// Close a device handle, returning the OS close status
pub fn close(handle: DeviceHandle) -> Result<i32> {
    handle.close()
}
