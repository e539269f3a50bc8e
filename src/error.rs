// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// The resource identifier could not be parsed into a URL.
    Url(String),
    /// Network failure, non-success HTTP status, or undecodable payload.
    Fetch(String),
    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Url(e) => write!(f, "URL Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Fetch(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Fetch(err.to_string())
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
    fn display_formats_url_error() {
        let err = Error::Url("relative URL without a base".to_string());
        assert_eq!(format!("{}", err), "URL Error: relative URL without a base");
    }

    #[test]
    fn display_formats_fetch_error() {
        let err = Error::Fetch("HTTP status: 404 Not Found".to_string());
        assert_eq!(format!("{}", err), "Fetch Error: HTTP status: 404 Not Found");
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
    fn from_image_error_produces_fetch_variant() {
        let io_err = std::io::Error::other("decode failed");
        let image_error = image_rs::ImageError::IoError(io_err);
        let err: Error = image_error.into();
        match err {
            Error::Fetch(message) => assert!(message.contains("decode failed")),
            _ => panic!("expected Fetch variant"),
        }
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let toml_err = toml::from_str::<toml::Value>("not = valid = toml").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
