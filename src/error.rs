// SPDX-License-Identifier: MPL-2.0
//! Application error types.
//!
//! Errors are kept as owned strings rather than source chains because
//! they cross the iced message boundary, which requires `Clone`.

use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// A user-supplied content file failed to parse. Unlike settings,
    /// content errors are surfaced instead of silently defaulted.
    Content(String),
    Media(MediaError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {e}"),
            Error::Config(e) => write!(f, "Config Error: {e}"),
            Error::Content(e) => write!(f, "Content Error: {e}"),
            Error::Media(e) => write!(f, "Media Error: {e}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// What went wrong while loading an image asset. Each variant maps to
/// a Fluent key so the UI can show a localized notice.
#[derive(Debug, Clone)]
pub enum MediaError {
    /// Bytes arrived but no decoder recognized them.
    UnsupportedFormat,
    /// A decoder recognized the format but failed partway.
    DecodeFailed(String),
    /// The remote server answered with a non-success status.
    HttpStatus(u16),
    /// DNS, TLS, or connection failure before any response.
    Network(String),
    /// Local file access failed.
    Io(String),
}

impl MediaError {
    /// Fluent key for the localized user-facing message.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            MediaError::UnsupportedFormat => "error-asset-unsupported-format",
            MediaError::DecodeFailed(_) => "error-asset-decode-failed",
            MediaError::HttpStatus(_) => "error-asset-http-status",
            MediaError::Network(_) => "error-asset-network",
            MediaError::Io(_) => "error-asset-io",
        }
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::UnsupportedFormat => write!(f, "Unsupported image format"),
            MediaError::DecodeFailed(e) => write!(f, "Decoding failed: {e}"),
            MediaError::HttpStatus(status) => write!(f, "Server answered with status {status}"),
            MediaError::Network(e) => write!(f, "Network error: {e}"),
            MediaError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
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

impl From<image_rs::ImageError> for MediaError {
    fn from(err: image_rs::ImageError) -> Self {
        MediaError::DecodeFailed(err.to_string())
    }
}

impl From<std::io::Error> for MediaError {
    fn from(err: std::io::Error) -> Self {
        MediaError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for MediaError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => MediaError::HttpStatus(status.as_u16()),
            None => MediaError::Network(err.to_string()),
        }
    }
}
