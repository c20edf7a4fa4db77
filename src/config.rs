//! Configuration
//!
//! Optional JSON file with the default device, timeout and command tracing.
//! Command-line arguments override file values, which override built-in defaults.

use crate::drive::DEFAULT_TIMEOUT_SECS;
use crate::error::{Result, RustDvdError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(windows)]
pub const DEFAULT_DEVICE: &str = r"\\.\CdRom0";
#[cfg(not(windows))]
pub const DEFAULT_DEVICE: &str = "/dev/sr0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Device path used when a command names none
    pub device: String,
    /// Timeout for commands other than INQUIRY, in seconds
    pub timeout_seconds: u32,
    /// Trace command bytes and sense data for every packet
    pub trace_commands: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device: DEFAULT_DEVICE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            trace_commands: false,
        }
    }
}

impl Config {
    /// `<config dir>/rustdvd/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rustdvd").join("config.json"))
    }

    /// Load an explicit file (must exist) or the default file (may be absent)
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("No configuration file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| {
            RustDvdError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            RustDvdError::config(format!("invalid {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.device.trim().is_empty() {
            return Err(RustDvdError::config("device must not be empty"));
        }
        if self.timeout_seconds == 0 {
            return Err(RustDvdError::config("timeout_seconds must be positive"));
        }
        Ok(())
    }

    /// Device from the command line, else the configured one
    pub fn device_or(&self, device: Option<String>) -> String {
        device.unwrap_or_else(|| self.device.clone())
    }

    /// Timeout from the command line, else the configured one
    pub fn timeout_or(&self, timeout_seconds: Option<u32>) -> Result<u32> {
        match timeout_seconds {
            Some(0) => Err(RustDvdError::parameter_validation(
                "timeout must be a positive number of seconds",
            )),
            Some(t) => Ok(t),
            None => Ok(self.timeout_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.device, DEFAULT_DEVICE);
        assert_eq!(config.timeout_seconds, 1);
        assert!(!config.trace_commands);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "device": "/dev/sr1" }}"#).unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.device, "/dev/sr1");
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "device": "/dev/sr2", "timeout_seconds": 30, "trace_commands": true }}"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(
            config,
            Config {
                device: "/dev/sr2".to_string(),
                timeout_seconds: 30,
                trace_commands: true,
            }
        );
    }

    #[test]
    fn test_invalid_files_are_config_errors() {
        let mut bad_json = tempfile::NamedTempFile::new().unwrap();
        write!(bad_json, "not json").unwrap();
        assert!(matches!(
            Config::from_file(bad_json.path()),
            Err(RustDvdError::Config(_))
        ));

        let mut zero_timeout = tempfile::NamedTempFile::new().unwrap();
        write!(zero_timeout, r#"{{ "timeout_seconds": 0 }}"#).unwrap();
        assert!(matches!(
            Config::from_file(zero_timeout.path()),
            Err(RustDvdError::Config(_))
        ));

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load(Some(dir.path().join("missing.json").as_path())),
            Err(RustDvdError::Config(_))
        ));
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default();
        assert_eq!(config.device_or(Some("/dev/sr3".into())), "/dev/sr3");
        assert_eq!(config.device_or(None), DEFAULT_DEVICE);
        assert_eq!(config.timeout_or(Some(5)).unwrap(), 5);
        assert_eq!(config.timeout_or(None).unwrap(), 1);
        assert!(config.timeout_or(Some(0)).is_err());
    }
}
