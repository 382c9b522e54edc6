// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    Probe(ProbeError),
    /// The component was given an unusable image source.
    InvalidSource(String),
    /// The windowing or rendering backend failed.
    Gui(String),
}

/// Reasons a natural-dimension probe can fail.
///
/// Probe failures are never shown to the user (the preview simply does not
/// open), so these only end up in logs.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeError {
    /// The HTTP request could not be sent or the body stream broke.
    Fetch(String),

    /// The server answered with a non-success status code.
    HttpStatus(u16),

    /// The body exceeded the configured byte limit.
    TooLarge { limit: u64 },

    /// The probe did not finish within the configured timeout.
    TimedOut,

    /// The bytes could not be recognized as an image.
    Decode(String),

    /// The image reported a zero or non-finite size.
    InvalidDimensions { width: f32, height: f32 },

    /// The owning component was torn down before the probe resolved.
    Detached,
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Fetch(msg) => write!(f, "Fetch failed: {}", msg),
            ProbeError::HttpStatus(code) => write!(f, "HTTP status: {}", code),
            ProbeError::TooLarge { limit } => {
                write!(f, "Image larger than {} bytes", limit)
            }
            ProbeError::TimedOut => write!(f, "Probe timed out"),
            ProbeError::Decode(msg) => write!(f, "Decode failed: {}", msg),
            ProbeError::InvalidDimensions { width, height } => {
                write!(f, "Invalid dimensions: {}x{}", width, height)
            }
            ProbeError::Detached => write!(f, "Component was unmounted"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Probe(e) => write!(f, "Probe Error: {}", e),
            Error::InvalidSource(e) => write!(f, "Invalid Source: {}", e),
            Error::Gui(e) => write!(f, "GUI Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ProbeError> for Error {
    fn from(err: ProbeError) -> Self {
        Error::Probe(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Gui(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Probe(ProbeError::Decode(err.to_string()))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Probe(ProbeError::TimedOut)
        } else if let Some(status) = err.status() {
            Error::Probe(ProbeError::HttpStatus(status.as_u16()))
        } else {
            Error::Probe(ProbeError::Fetch(err.to_string()))
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
