// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Media(MediaError),
}

/// Specific error types for media pipeline issues.
///
/// Per the degradation policy, none of these is fatal: callers either log a
/// warning and continue as a no-op, or silently fall back to a simpler state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// An expected element (timeline, placeholder, wrapper) is absent.
    /// The affected feature degrades to a no-op.
    MissingElement(&'static str),

    /// The source URL cannot be handled by any available transport.
    UnsupportedSource(String),

    /// The variant manifest could not be fetched or parsed.
    /// Aspect-ratio sizing stays at its default.
    ManifestUnavailable(String),
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::MissingElement(name) => write!(f, "Missing element: {}", name),
            MediaError::UnsupportedSource(src) => write!(f, "Unsupported source: {}", src),
            MediaError::ManifestUnavailable(msg) => write!(f, "Manifest unavailable: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Media(e) => write!(f, "Media Error: {}", e),
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
    fn media_error_converts_into_error() {
        let err: Error = MediaError::MissingElement("timeline").into();
        assert!(matches!(
            err,
            Error::Media(MediaError::MissingElement("timeline"))
        ));
    }

    #[test]
    fn missing_element_names_the_element() {
        let err = MediaError::MissingElement("timeline");
        assert_eq!(format!("{}", err), "Missing element: timeline");
    }

    #[test]
    fn manifest_error_formats_properly() {
        let err = MediaError::ManifestUnavailable("404".into());
        assert!(format!("{}", err).contains("404"));
    }
}
