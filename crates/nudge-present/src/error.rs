use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("Failed to present {surface}: {details}")]
    PresentFailed {
        surface: &'static str,
        details: String,
    },

    #[error("Failed to open {uri}: {details}")]
    OpenFailed { uri: String, details: String },

    #[error("IO error ({kind}): {message}")]
    Io {
        kind: std::io::ErrorKind,
        message: String,
    },
}

impl HostError {
    pub fn present_failed(surface: &'static str, details: impl Into<String>) -> Self {
        Self::PresentFailed {
            surface,
            details: details.into(),
        }
    }

    pub fn open_failed_from<E>(uri: impl Into<String>, error: E) -> Self
    where
        E: std::fmt::Display,
    {
        Self::OpenFailed {
            uri: uri.into(),
            details: error.to_string(),
        }
    }
}

impl From<std::io::Error> for HostError {
    fn from(err: std::io::Error) -> Self {
        HostError::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
