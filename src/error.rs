// SPDX-License-Identifier: MPL-2.0
//! Application error type.
//!
//! The comparison widget itself never fails (inputs are clamped); errors only
//! come from the surroundings: reading settings and decoding image files.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Image Error: {0}")]
    Image(String),
    #[error("SVG Error: {0}")]
    Svg(String),
    #[error("Config Error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the i18n message key used when showing this error in the widget.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-load-image-io",
            Error::Image(_) | Error::Svg(_) => "error-load-image-decode",
            Error::Config(_) => "error-config",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => Error::Io(io.to_string()),
            other => Error::Image(other.to_string()),
        }
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

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn image_io_error_maps_to_io_variant() {
        let image_error = image_rs::ImageError::IoError(std::io::Error::other("decode failed"));
        let err: Error = image_error.into();
        assert!(matches!(err, Error::Io(message) if message.contains("decode failed")));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn i18n_keys_group_decode_failures() {
        assert_eq!(Error::Io(String::new()).i18n_key(), "error-load-image-io");
        assert_eq!(
            Error::Image(String::new()).i18n_key(),
            Error::Svg(String::new()).i18n_key()
        );
    }
}
