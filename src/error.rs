use crate::scsi::SenseData;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RustDvdError>;

#[derive(Error, Debug)]
pub enum RustDvdError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open device {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command length must be 12 bytes, got {0}")]
    InvalidCommandLength(usize),

    #[error("Device I/O error: status {status}, sense {sense}")]
    DeviceIo { status: i32, sense: SenseData },

    #[error("Cannot identify DVD drive: status {status}, sense {sense}")]
    IdentificationFailure { status: i32, sense: SenseData },

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Parameter validation error: {0}")]
    ParameterValidation(String),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl RustDvdError {
    pub fn open<T: Into<String>>(path: T, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn unsupported<T: Into<String>>(msg: T) -> Self {
        Self::UnsupportedPlatform(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }

    pub fn parse<T: Into<String>>(msg: T) -> Self {
        Self::Parse(msg.into())
    }

    pub fn parameter_validation<T: Into<String>>(msg: T) -> Self {
        Self::ParameterValidation(msg.into())
    }

    /// Raw OS error code behind an open or I/O failure, if any.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::Io(e) => e.raw_os_error(),
            Self::Open { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }

    /// Integer status in the `-1 means failure` convention of the passthrough layer.
    pub fn status(&self) -> i32 {
        match self {
            Self::DeviceIo { status, .. } | Self::IdentificationFailure { status, .. } => *status,
            _ => -1,
        }
    }
}
